use std::fs;
use std::io::Write;
use std::path::Path;
use todo_core::TodoResult;

/// Atomic file writer that prevents data corruption
/// Uses write-to-temp-file → atomic-rename pattern for safety
pub struct AtomicWriter;

impl AtomicWriter {
    /// Write data to a file atomically.
    ///
    /// The temp file lives next to the target so the final rename stays on
    /// one filesystem. A crash mid-write leaves the previous contents intact.
    pub fn write_atomic(path: &Path, data: &[u8]) -> TodoResult<()> {
        let parent = path.parent().unwrap_or_else(|| Path::new("."));
        let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;

        temp_file.write_all(data)?;
        temp_file.as_file().sync_all()?;
        temp_file.persist(path).map_err(|e| e.error)?;

        tracing::debug!(
            "Atomically wrote {} bytes to {}",
            data.len(),
            path.display()
        );
        Ok(())
    }

    /// Read a whole file, or `None` when it does not exist.
    pub fn read_optional(path: &Path) -> TodoResult<Option<Vec<u8>>> {
        match fs::read(path) {
            Ok(data) => {
                tracing::debug!("Read {} bytes from {}", data.len(), path.display());
                Ok(Some(data))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_atomic_write() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("test.txt");

        AtomicWriter::write_atomic(&file_path, b"Hello, World!").unwrap();

        let read_data = AtomicWriter::read_optional(&file_path).unwrap();
        assert_eq!(read_data.as_deref(), Some(&b"Hello, World!"[..]));
    }

    #[test]
    fn test_atomic_write_overwrites() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("test.txt");

        AtomicWriter::write_atomic(&file_path, b"First").unwrap();
        AtomicWriter::write_atomic(&file_path, b"Second").unwrap();

        let read_data = AtomicWriter::read_optional(&file_path).unwrap().unwrap();
        assert_eq!(read_data, b"Second");
    }

    #[test]
    fn test_write_leaves_no_temp_files() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("test.txt");

        AtomicWriter::write_atomic(&file_path, b"data").unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_read_missing_is_none() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.txt");
        assert!(AtomicWriter::read_optional(&missing).unwrap().is_none());
    }
}
