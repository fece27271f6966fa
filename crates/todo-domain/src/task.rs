use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stored under `task` by older browser builds.
    #[serde(alias = "task")]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            completed: false,
        }
    }

    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_is_incomplete() {
        let task = Task::new("buy milk");
        assert_eq!(task.description, "buy milk");
        assert!(!task.completed);
    }

    #[test]
    fn test_toggle_flips_twice() {
        let mut task = Task::new("walk dog");
        task.toggle();
        assert!(task.completed);
        task.toggle();
        assert!(!task.completed);
    }

    #[test]
    fn test_serialized_shape() {
        let task = Task::new("buy milk");
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "description": "buy milk", "completed": false })
        );
    }

    #[test]
    fn test_legacy_task_field_accepted() {
        let task: Task = serde_json::from_str(r#"{"task": "old", "completed": true}"#).unwrap();
        assert_eq!(task.description, "old");
        assert!(task.completed);
    }
}
