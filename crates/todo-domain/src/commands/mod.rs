use crate::TaskList;
use todo_core::TodoResult;

pub mod task_commands;

pub use task_commands::*;

/// A content-changing action on the task list.
///
/// Commands carry their parameters as fields so the history controller can
/// validate, log, and apply any mutation the same way.
pub trait Command: Send + Sync {
    /// Check preconditions against the list without mutating it.
    fn validate(&self, _tasks: &TaskList) -> TodoResult<()> {
        Ok(())
    }

    /// Execute this command, mutating the list.
    fn execute(&self, tasks: &mut TaskList) -> TodoResult<()>;

    /// Human-readable description of what this command does
    fn description(&self) -> String;

    /// Bulk commands act on every task and are refused on an empty list.
    fn is_bulk(&self) -> bool {
        false
    }
}
