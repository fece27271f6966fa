use thiserror::Error;

#[derive(Error, Debug)]
pub enum TodoError {
    /// A single-item operation received a position outside the list.
    ///
    /// Indices come from the rendered view, so this always points at a stale
    /// or buggy caller rather than at user input.
    #[error("Index out of range: {index} (list has {len} tasks)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl TodoError {
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_out_of_range_message() {
        let err = TodoError::IndexOutOfRange { index: 3, len: 2 };
        assert_eq!(err.to_string(), "Index out of range: 3 (list has 2 tasks)");
        assert!(err.is_contract_violation());
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: TodoError = io.into();
        assert!(matches!(err, TodoError::Io(_)));
        assert!(!err.is_contract_violation());
    }
}
