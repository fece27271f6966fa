use crate::store::atomic_writer::AtomicWriter;
use crate::traits::KeyValueStore;
use std::fs;
use std::path::{Path, PathBuf};
use todo_core::{TodoError, TodoResult};

/// Directory-backed store: each key is one `<key>.json` file.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    /// The directory is created lazily on first write.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing `key`. Keys are restricted to `[A-Za-z0-9_-]`.
    pub fn path_for(&self, key: &str) -> TodoResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(TodoError::Validation(format!("invalid storage key: {:?}", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> TodoResult<Option<Vec<u8>>> {
        let path = self.path_for(key)?;
        AtomicWriter::read_optional(&path)
    }

    fn set(&mut self, key: &str, value: &[u8]) -> TodoResult<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir)?;
        AtomicWriter::write_atomic(&path, value)?;
        tracing::info!("Saved {} bytes to {}", value.len(), path.display());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> TodoResult<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                tracing::info!("Removed {}", path.display());
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_set_creates_directory_and_file() {
        let dir = tempdir().unwrap();
        let data_dir = dir.path().join("nested").join("todo");
        let mut store = FileKeyValueStore::new(&data_dir);

        store.set("todos", b"[]").unwrap();
        assert!(data_dir.join("todos.json").exists());
        assert_eq!(store.get("todos").unwrap().as_deref(), Some(&b"[]"[..]));
    }

    #[test]
    fn test_missing_key_is_none() {
        let dir = tempdir().unwrap();
        let store = FileKeyValueStore::new(dir.path());
        assert!(store.get("todos").unwrap().is_none());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let dir = tempdir().unwrap();
        let mut store = FileKeyValueStore::new(dir.path());
        store.set("todos", b"[]").unwrap();

        store.remove("todos").unwrap();
        assert!(store.get("todos").unwrap().is_none());
        store.remove("todos").unwrap();
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let dir = tempdir().unwrap();
        let mut store = FileKeyValueStore::new(dir.path());

        for key in ["", "../escape", "a/b", "todos.json"] {
            assert!(matches!(
                store.set(key, b"[]"),
                Err(TodoError::Validation(_))
            ));
        }
    }
}
