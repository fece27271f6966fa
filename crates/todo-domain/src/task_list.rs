use crate::Task;
use serde::{Deserialize, Serialize};
use todo_core::{TodoError, TodoResult};

/// Ordered collection of tasks. Insertion order is display order.
///
/// All single-item operations are index-addressed and reject positions
/// outside `0..len` with [`TodoError::IndexOutOfRange`]. The list knows
/// nothing about history; see [`crate::HistoryController`] for that.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    pub fn check_index(&self, index: usize) -> TodoResult<()> {
        if index < self.tasks.len() {
            Ok(())
        } else {
            Err(TodoError::IndexOutOfRange {
                index,
                len: self.tasks.len(),
            })
        }
    }

    pub fn add(&mut self, description: impl Into<String>) {
        self.tasks.push(Task::new(description));
    }

    pub fn remove(&mut self, index: usize) -> TodoResult<()> {
        self.check_index(index)?;
        self.tasks.remove(index);
        Ok(())
    }

    /// Replace the description, keeping the completed flag.
    pub fn edit(&mut self, index: usize, description: impl Into<String>) -> TodoResult<()> {
        self.check_index(index)?;
        self.tasks[index].set_description(description);
        Ok(())
    }

    pub fn toggle_completed(&mut self, index: usize) -> TodoResult<()> {
        self.check_index(index)?;
        self.tasks[index].toggle();
        Ok(())
    }

    pub fn mark_all(&mut self, completed: bool) {
        for task in &mut self.tasks {
            task.completed = completed;
        }
    }

    pub fn clear_all(&mut self) {
        self.tasks.clear();
    }
}

impl From<Vec<Task>> for TaskList {
    fn from(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}
