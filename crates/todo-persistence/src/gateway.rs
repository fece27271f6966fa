use crate::serialization::JsonSerializer;
use crate::traits::{KeyValueStore, Serializer};
use todo_core::config::DEFAULT_STORAGE_KEY;
use todo_core::TodoResult;
use todo_domain::{PersistenceGateway, TaskList};

/// Stores the current task list as one JSON array under a fixed key.
#[derive(Debug, Clone)]
pub struct TaskListGateway<S> {
    store: S,
    key: String,
    serializer: JsonSerializer,
}

impl<S: KeyValueStore> TaskListGateway<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            serializer: JsonSerializer,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: KeyValueStore> PersistenceGateway for TaskListGateway<S> {
    fn load(&self) -> TodoResult<TaskList> {
        match self.store.get(&self.key)? {
            Some(bytes) => {
                let tasks: TaskList = self.serializer.deserialize(&bytes)?;
                tracing::info!("Loaded {} tasks from '{}'", tasks.len(), self.key);
                Ok(tasks)
            }
            None => {
                tracing::info!("No stored list under '{}', starting empty", self.key);
                Ok(TaskList::new())
            }
        }
    }

    fn save(&mut self, tasks: &TaskList) -> TodoResult<()> {
        let bytes = self.serializer.serialize(tasks)?;
        self.store.set(&self.key, &bytes)
    }

    fn clear(&mut self) -> TodoResult<()> {
        self.store.remove(&self.key)
    }
}
