//! Point-in-time capture of the task list.
//!
//! A `Snapshot` owns its own copy of every task. Mutating the live list
//! never shows through to a snapshot taken earlier, and restoring from a
//! snapshot hands out a fresh copy so the log entry itself stays untouched.

use crate::TaskList;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Snapshot {
    tasks: TaskList,
}

impl Snapshot {
    /// Deep-copy the given list.
    pub fn capture(tasks: &TaskList) -> Self {
        Self {
            tasks: tasks.clone(),
        }
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    /// A fresh, independently owned list with this snapshot's contents.
    pub fn restore(&self) -> TaskList {
        self.tasks.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
