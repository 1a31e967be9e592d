//! Error handling for dfxdelta-store
//!
//! Wraps dfxdelta-core ExError with store-specific helpers

use dfxdelta_core::errors::{DeltaError, ExError, ExErrorKind};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}

/// Create a source-unavailable error for a snapshot that cannot be read
pub fn unavailable(source_id: &str, err: std::io::Error) -> ExError {
    ExError::from(DeltaError::SourceUnavailable {
        source_id: source_id.to_string(),
        reason: err.to_string(),
    })
    .with_op("open_snapshot")
    .with_source(io_error("read", err))
}

/// Create an invalid-document error
pub fn document_error(source_id: &str, reason: &str) -> ExError {
    ExError::from(DeltaError::InvalidDocument {
        source_id: source_id.to_string(),
        reason: reason.to_string(),
    })
    .with_op("parse_document")
}

/// Create a malformed-record error for one fileobject
pub fn malformed(source_id: &str, index: usize, field: &str, reason: String) -> ExError {
    ExError::from(DeltaError::MalformedRecord {
        source_id: source_id.to_string(),
        index,
        field: field.to_string(),
        reason,
    })
    .with_op("parse_fileobject")
}

/// Create a configuration error
pub fn config_error(reason: &str) -> ExError {
    ExError::from(DeltaError::InvalidConfig {
        reason: reason.to_string(),
    })
    .with_op("load_config")
}

/// Create a serialization error
pub fn serialization_error(operation: &str, err: serde_json::Error) -> ExError {
    ExError::new(ExErrorKind::Serialization)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_keeps_io_cause() {
        let err = unavailable(
            "missing.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        );
        assert_eq!(err.kind(), ExErrorKind::SourceUnavailable);
        assert_eq!(err.source_id(), Some("missing.json"));
        assert_eq!(err.source_error().map(|e| e.kind()), Some(ExErrorKind::Io));
    }

    #[test]
    fn test_malformed_carries_position() {
        let err = malformed("a.json", 3, "inode", "expected an integer".to_string());
        assert_eq!(err.kind(), ExErrorKind::MalformedRecord);
        assert_eq!(err.record_index(), Some(3));
        assert_eq!(err.field(), Some("inode"));
        assert_eq!(err.op(), Some("parse_fileobject"));
    }

    #[test]
    fn test_config_error_code() {
        assert_eq!(config_error("bad").code(), "ERR_INVALID_CONFIG");
    }
}
