use todo_core::TodoResult;

/// Raw blob storage addressed by a short string key.
///
/// This is the primitive the task list gateway sits on: it knows nothing
/// about tasks, only bytes.
pub trait KeyValueStore {
    /// Read the value under `key`. A missing key is `Ok(None)`.
    fn get(&self, key: &str) -> TodoResult<Option<Vec<u8>>>;

    /// Replace the value under `key`.
    fn set(&mut self, key: &str, value: &[u8]) -> TodoResult<()>;

    /// Delete the value under `key`. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> TodoResult<()>;
}

/// Trait for serialization/deserialization strategies
pub trait Serializer<T> {
    /// Serialize data to bytes
    fn serialize(&self, data: &T) -> TodoResult<Vec<u8>>;

    /// Deserialize data from bytes
    fn deserialize(&self, bytes: &[u8]) -> TodoResult<T>;
}
