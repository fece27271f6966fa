use crate::traits::Serializer;
use todo_core::{TodoError, TodoResult};

/// JSON serializer for domain models
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSerializer;

impl<T: serde::Serialize + serde::de::DeserializeOwned> Serializer<T> for JsonSerializer {
    fn serialize(&self, data: &T) -> TodoResult<Vec<u8>> {
        serde_json::to_vec_pretty(data).map_err(|e| TodoError::Serialization(e.to_string()))
    }

    fn deserialize(&self, bytes: &[u8]) -> TodoResult<T> {
        serde_json::from_slice(bytes).map_err(|e| TodoError::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use todo_domain::{Task, TaskList};

    #[test]
    fn test_task_list_is_a_json_array() {
        let mut tasks = TaskList::new();
        tasks.add("buy milk");
        tasks.toggle_completed(0).unwrap();

        let bytes = JsonSerializer.serialize(&tasks).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{ "description": "buy milk", "completed": true }])
        );
    }

    #[test]
    fn test_legacy_browser_shape_loads() {
        let bytes = br#"[{"task":"walk dog","completed":false}]"#;
        let tasks: TaskList = JsonSerializer.deserialize(bytes).unwrap();
        assert_eq!(tasks.as_slice(), &[Task::new("walk dog")]);
    }

    #[test]
    fn test_malformed_bytes_are_serialization_errors() {
        let result: TodoResult<TaskList> = JsonSerializer.deserialize(b"{not json");
        assert!(matches!(result, Err(TodoError::Serialization(_))));
    }
}
