//! The undo/redo state machine.
//!
//! `HistoryController` owns the live list and its snapshot log. Every
//! content-changing action goes through [`HistoryController::apply`], which
//! records history, saves, and re-renders in that order.
//!
//! # States
//!
//! - **Clean**: the live list is the newest record in the log.
//! - **Diverged**: the user has undone at least once and not edited since.
//!
//! A new edit while diverged first appends the list as the user currently
//! sees it, so the view they undid to becomes the new tip. Records that were
//! ahead of it stay in the log but redo can no longer reach them.
//!
//! # Example
//! ```ignore
//! let mut controller = HistoryController::open(gateway, presenter)?;
//! controller.add_task("buy milk")?;
//! controller.undo()?;
//! ```

use crate::commands::{AddTask, ClearAll, Command, EditTask, MarkAll, RemoveTask, ToggleTask};
use crate::ports::{Confirm, PersistenceGateway, PresentationPort};
use crate::{HistoryMark, SnapshotStore, TaskList};
use todo_core::notice::CONFIRM_CLEAR_PROMPT;
use todo_core::{Notice, TodoResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryState {
    Clean,
    Diverged,
}

/// What happened to a user intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// State changed, was saved, and was rendered.
    Applied,
    /// Refused with a notice; nothing changed.
    Rejected(Notice),
    /// The user backed out (declined the confirmation or cancelled an edit).
    Declined,
}

impl Outcome {
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }

    pub fn notice(self) -> Option<Notice> {
        match self {
            Self::Rejected(notice) => Some(notice),
            _ => None,
        }
    }
}

/// Live list and log position before a change, restored if it cannot be saved.
struct Checkpoint {
    tasks: TaskList,
    history: HistoryMark,
}

pub struct HistoryController<G, P> {
    tasks: TaskList,
    history: SnapshotStore,
    gateway: G,
    presenter: P,
}

impl<G, P> HistoryController<G, P>
where
    G: PersistenceGateway,
    P: PresentationPort,
{
    /// Load the persisted list, seed the log with it, and draw it once.
    pub fn open(gateway: G, mut presenter: P) -> TodoResult<Self> {
        let tasks = gateway.load()?;
        tracing::info!("Opened task list with {} tasks", tasks.len());

        let history = SnapshotStore::new(&tasks);
        presenter.render(&tasks);

        Ok(Self {
            tasks,
            history,
            gateway,
            presenter,
        })
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn history(&self) -> &SnapshotStore {
        &self.history
    }

    pub fn state(&self) -> HistoryState {
        if self.history.has_undone() {
            HistoryState::Diverged
        } else {
            HistoryState::Clean
        }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Apply a content-changing command and record it in history.
    ///
    /// A bad index is reported before the log is touched, so a stale caller
    /// can never leave a half-recorded edit behind. If the save fails, the
    /// list and the log are put back as they were.
    pub fn apply(&mut self, command: Box<dyn Command>) -> TodoResult<Outcome> {
        if command.is_bulk() && self.tasks.is_empty() {
            return Ok(self.reject(Notice::EmptyList));
        }
        command.validate(&self.tasks)?;

        let description = command.description();
        tracing::debug!("Executing: {}", description);

        let checkpoint = self.checkpoint();
        if self.state() == HistoryState::Diverged {
            tracing::debug!(
                "Sealing diverged view at record {} of {}",
                self.history.current_index(),
                self.history.len()
            );
            self.history.append(&self.tasks);
            self.history.mark_clean();
        }

        if let Err(e) = command.execute(&mut self.tasks) {
            self.restore(checkpoint);
            return Err(e);
        }
        self.history.append(&self.tasks);
        self.sync(checkpoint)?;

        Ok(Outcome::Applied)
    }

    /// Blank text is refused with a notice.
    pub fn add_task(&mut self, text: &str) -> TodoResult<Outcome> {
        let description = text.trim();
        if description.is_empty() {
            return Ok(self.reject(Notice::EmptyTask));
        }
        self.apply(Box::new(AddTask {
            description: description.to_string(),
        }))
    }

    /// Blank text counts as a cancelled edit and changes nothing.
    pub fn edit_task(&mut self, index: usize, text: &str) -> TodoResult<Outcome> {
        let description = text.trim();
        if description.is_empty() {
            return Ok(Outcome::Declined);
        }
        self.apply(Box::new(EditTask {
            index,
            description: description.to_string(),
        }))
    }

    pub fn remove_task(&mut self, index: usize) -> TodoResult<Outcome> {
        self.apply(Box::new(RemoveTask { index }))
    }

    pub fn toggle_task(&mut self, index: usize) -> TodoResult<Outcome> {
        self.apply(Box::new(ToggleTask { index }))
    }

    pub fn mark_all(&mut self, completed: bool) -> TodoResult<Outcome> {
        self.apply(Box::new(MarkAll { completed }))
    }

    pub fn check_all(&mut self) -> TodoResult<Outcome> {
        self.mark_all(true)
    }

    pub fn uncheck_all(&mut self) -> TodoResult<Outcome> {
        self.mark_all(false)
    }

    /// Hard clear: empties the list, wipes storage, and restarts history.
    ///
    /// Asks `confirm` only when there is something to clear.
    pub fn clear_all(&mut self, confirm: &mut dyn Confirm) -> TodoResult<Outcome> {
        if self.tasks.is_empty() {
            return Ok(self.reject(Notice::EmptyList));
        }
        if !confirm.confirm(CONFIRM_CLEAR_PROMPT) {
            tracing::debug!("Clear all declined");
            return Ok(Outcome::Declined);
        }

        // Storage goes first so a failed wipe leaves memory untouched
        self.gateway.clear()?;
        ClearAll.execute(&mut self.tasks)?;
        self.history.reset(&self.tasks);
        tracing::info!("Cleared all tasks and reset history");

        self.presenter.render(&self.tasks);
        self.log_state();
        Ok(Outcome::Applied)
    }

    pub fn undo(&mut self) -> TodoResult<Outcome> {
        let checkpoint = self.checkpoint();
        let restored = match self.history.step_back() {
            Ok(snapshot) => snapshot.restore(),
            Err(boundary) => return Ok(self.reject(boundary.into())),
        };
        self.tasks = restored;
        self.sync(checkpoint)?;
        Ok(Outcome::Applied)
    }

    pub fn redo(&mut self) -> TodoResult<Outcome> {
        let checkpoint = self.checkpoint();
        let restored = match self.history.step_forward() {
            Ok(snapshot) => snapshot.restore(),
            Err(boundary) => return Ok(self.reject(boundary.into())),
        };
        self.tasks = restored;
        self.sync(checkpoint)?;
        Ok(Outcome::Applied)
    }

    /// Save, then render. A failed save skips the render and rolls back.
    fn sync(&mut self, checkpoint: Checkpoint) -> TodoResult<()> {
        if let Err(e) = self.gateway.save(&self.tasks) {
            tracing::warn!("Save failed, rolling back: {}", e);
            self.restore(checkpoint);
            return Err(e);
        }
        self.presenter.render(&self.tasks);
        self.log_state();
        Ok(())
    }

    fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            tasks: self.tasks.clone(),
            history: self.history.mark(),
        }
    }

    fn restore(&mut self, checkpoint: Checkpoint) {
        self.tasks = checkpoint.tasks;
        self.history.rewind(checkpoint.history);
    }

    fn reject(&mut self, notice: Notice) -> Outcome {
        tracing::warn!("Rejected: {}", notice);
        self.presenter.notify(notice);
        Outcome::Rejected(notice)
    }

    fn log_state(&self) {
        tracing::debug!(
            "Tasks: {:?} | records: {} | steps: {} | undone: {}",
            self.tasks.as_slice(),
            self.history.len(),
            self.history.steps(),
            self.history.has_undone()
        );
    }
}
