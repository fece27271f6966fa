//! Collaborators the history controller talks to.
//!
//! The controller owns the list and the log; everything that touches the
//! outside world (storage, the screen, the user) sits behind these traits.

use crate::TaskList;
use todo_core::{Notice, TodoResult};

#[cfg(test)]
use mockall::automock;

/// Durable storage of the current list. History is never persisted.
#[cfg_attr(test, automock)]
pub trait PersistenceGateway {
    /// Load the stored list. A missing entry is an empty list, not an error.
    fn load(&self) -> TodoResult<TaskList>;

    fn save(&mut self, tasks: &TaskList) -> TodoResult<()>;

    /// Wipe the stored entry.
    fn clear(&mut self) -> TodoResult<()>;
}

/// Where the list is shown and notices are surfaced.
#[cfg_attr(test, automock)]
pub trait PresentationPort {
    /// Redraw after a successful change. Only called once the list is saved.
    fn render(&mut self, tasks: &TaskList);

    /// Show a transient message. The presentation decides when to hide it.
    fn notify(&mut self, notice: Notice);
}

/// Synchronous yes/no question to the user.
#[cfg_attr(test, automock)]
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

/// Answers every question the same way.
#[derive(Debug, Clone, Copy)]
pub struct FixedAnswer(pub bool);

impl Confirm for FixedAnswer {
    fn confirm(&mut self, _prompt: &str) -> bool {
        self.0
    }
}
