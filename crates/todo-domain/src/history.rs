//! Linear undo/redo log.
//!
//! `SnapshotStore` keeps every snapshot ever appended, oldest first, plus a
//! cursor counting how many steps back from the newest record the user is
//! currently looking at. Nothing is ever removed short of a full reset;
//! a new edit after undoing only makes the old "future" unreachable by redo.

use crate::{Snapshot, TaskList};
use thiserror::Error;
use todo_core::Notice;

/// Why a step through the log was refused.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryBoundary {
    #[error("Nothing to undo")]
    NothingToUndo,
    #[error("Nothing to redo")]
    NothingToRedo,
}

impl From<HistoryBoundary> for Notice {
    fn from(boundary: HistoryBoundary) -> Self {
        match boundary {
            HistoryBoundary::NothingToUndo => Notice::NothingToUndo,
            HistoryBoundary::NothingToRedo => Notice::NothingToRedo,
        }
    }
}

/// Append-only snapshot log with an undo cursor.
///
/// Invariant: `records` is never empty and `steps <= records.len() - 1`.
/// The visible snapshot is `records[records.len() - 1 - steps]`.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    records: Vec<Snapshot>,
    steps: usize,
    has_undone: bool,
}

impl SnapshotStore {
    /// Create a log seeded with one snapshot of `tasks`.
    pub fn new(tasks: &TaskList) -> Self {
        let mut store = Self {
            records: Vec::new(),
            steps: 0,
            has_undone: false,
        };
        store.record_initial(tasks);
        store
    }

    pub fn record_initial(&mut self, tasks: &TaskList) {
        self.records = vec![Snapshot::capture(tasks)];
        self.steps = 0;
        self.has_undone = false;
    }

    pub fn append(&mut self, tasks: &TaskList) {
        self.records.push(Snapshot::capture(tasks));
    }

    /// Drop all history and start over from `tasks`. Used by hard clear.
    pub fn reset(&mut self, tasks: &TaskList) {
        self.record_initial(tasks);
    }

    pub fn step_back(&mut self) -> Result<&Snapshot, HistoryBoundary> {
        if self.steps >= self.records.len() - 1 {
            return Err(HistoryBoundary::NothingToUndo);
        }
        self.steps += 1;
        self.has_undone = true;
        Ok(&self.records[self.current_index()])
    }

    pub fn step_forward(&mut self) -> Result<&Snapshot, HistoryBoundary> {
        if self.steps == 0 {
            self.has_undone = false;
            return Err(HistoryBoundary::NothingToRedo);
        }
        self.steps -= 1;
        Ok(&self.records[self.current_index()])
    }

    /// Return to the newest record without touching the log.
    ///
    /// Called once the diverged view has been appended, which makes it the
    /// new tip.
    pub fn mark_clean(&mut self) {
        self.steps = 0;
        self.has_undone = false;
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn has_undone(&self) -> bool {
        self.has_undone
    }

    pub fn current_index(&self) -> usize {
        self.records.len() - 1 - self.steps
    }

    pub fn latest(&self) -> &Snapshot {
        &self.records[self.records.len() - 1]
    }

    pub fn records(&self) -> &[Snapshot] {
        &self.records
    }

    /// Remember the log length and cursor so a failed save can be undone.
    pub fn mark(&self) -> HistoryMark {
        HistoryMark {
            len: self.records.len(),
            steps: self.steps,
            has_undone: self.has_undone,
        }
    }

    /// Drop records appended since `mark` and put the cursor back.
    pub fn rewind(&mut self, mark: HistoryMark) {
        self.records.truncate(mark.len.max(1));
        self.steps = mark.steps.min(self.records.len() - 1);
        self.has_undone = mark.has_undone;
    }
}

/// Saved position in a [`SnapshotStore`], taken before a change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryMark {
    len: usize,
    steps: usize,
    has_undone: bool,
}
