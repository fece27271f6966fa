use crate::traits::KeyValueStore;
use std::collections::HashMap;
use todo_core::TodoResult;

/// In-process store. Nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryKeyValueStore {
    entries: HashMap<String, Vec<u8>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> TodoResult<Option<Vec<u8>>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &[u8]) -> TodoResult<()> {
        self.entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> TodoResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let mut store = MemoryKeyValueStore::new();
        assert!(store.get("todos").unwrap().is_none());

        store.set("todos", b"[]").unwrap();
        assert_eq!(store.get("todos").unwrap().as_deref(), Some(&b"[]"[..]));
        assert!(store.contains("todos"));

        store.remove("todos").unwrap();
        assert!(!store.contains("todos"));
        store.remove("todos").unwrap();
    }
}
