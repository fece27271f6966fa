use super::Command;
use crate::TaskList;
use todo_core::TodoResult;

/// Append a new, incomplete task
pub struct AddTask {
    pub description: String,
}

impl Command for AddTask {
    fn execute(&self, tasks: &mut TaskList) -> TodoResult<()> {
        tasks.add(self.description.clone());
        Ok(())
    }

    fn description(&self) -> String {
        format!("Add task: '{}'", self.description)
    }
}

pub struct RemoveTask {
    pub index: usize,
}

impl Command for RemoveTask {
    fn validate(&self, tasks: &TaskList) -> TodoResult<()> {
        tasks.check_index(self.index)
    }

    fn execute(&self, tasks: &mut TaskList) -> TodoResult<()> {
        tasks.remove(self.index)
    }

    fn description(&self) -> String {
        format!("Remove task {}", self.index)
    }
}

/// Replace a task's description
pub struct EditTask {
    pub index: usize,
    pub description: String,
}

impl Command for EditTask {
    fn validate(&self, tasks: &TaskList) -> TodoResult<()> {
        tasks.check_index(self.index)
    }

    fn execute(&self, tasks: &mut TaskList) -> TodoResult<()> {
        tasks.edit(self.index, self.description.clone())
    }

    fn description(&self) -> String {
        format!("Edit task {}: '{}'", self.index, self.description)
    }
}

pub struct ToggleTask {
    pub index: usize,
}

impl Command for ToggleTask {
    fn validate(&self, tasks: &TaskList) -> TodoResult<()> {
        tasks.check_index(self.index)
    }

    fn execute(&self, tasks: &mut TaskList) -> TodoResult<()> {
        tasks.toggle_completed(self.index)
    }

    fn description(&self) -> String {
        format!("Toggle task {}", self.index)
    }
}

/// Set every task's completed flag
pub struct MarkAll {
    pub completed: bool,
}

impl Command for MarkAll {
    fn execute(&self, tasks: &mut TaskList) -> TodoResult<()> {
        tasks.mark_all(self.completed);
        Ok(())
    }

    fn description(&self) -> String {
        if self.completed {
            "Check all tasks".to_string()
        } else {
            "Uncheck all tasks".to_string()
        }
    }

    fn is_bulk(&self) -> bool {
        true
    }
}

pub struct ClearAll;

impl Command for ClearAll {
    fn execute(&self, tasks: &mut TaskList) -> TodoResult<()> {
        tasks.clear_all();
        Ok(())
    }

    fn description(&self) -> String {
        "Clear all tasks".to_string()
    }

    fn is_bulk(&self) -> bool {
        true
    }
}
