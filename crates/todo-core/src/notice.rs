//! Transient user-facing messages.
//!
//! Notices cover the recoverable conditions: rejected input and history
//! boundaries. None of them change state; presentations show them for a
//! short time and then hide them.

use std::fmt;

/// Prompt shown before a hard clear.
pub const CONFIRM_CLEAR_PROMPT: &str = "Are you sure?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// Add was requested with blank text.
    EmptyTask,
    /// A bulk action (check all, uncheck all, clear all) hit an empty list.
    EmptyList,
    NothingToUndo,
    NothingToRedo,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Self::EmptyTask => "Can't create empty task",
            Self::EmptyList => "Can't perform any action on an empty list",
            Self::NothingToUndo => "Nothing to undo",
            Self::NothingToRedo => "Nothing to redo",
        }
    }

    pub fn is_history_boundary(self) -> bool {
        matches!(self, Self::NothingToUndo | Self::NothingToRedo)
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
