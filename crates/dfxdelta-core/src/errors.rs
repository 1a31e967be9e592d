use thiserror::Error;

/// Result type alias using the canonical structured error
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that callers (and the CLI exit path)
/// can match on without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Run contract
    /// Not exactly two snapshot sources were supplied
    InputCount,

    // Record ingestion
    /// A record lacks an identity or allocation field, or a field has the wrong type
    MalformedRecord,
    /// A snapshot source could not be opened or read
    SourceUnavailable,
    /// A snapshot document is not a well-formed interchange document
    InvalidDocument,

    // Configuration
    InvalidConfig,

    // Integration/IO
    Io,
    Serialization,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InputCount => "ERR_INPUT_COUNT",
            ExErrorKind::MalformedRecord => "ERR_MALFORMED_RECORD",
            ExErrorKind::SourceUnavailable => "ERR_SOURCE_UNAVAILABLE",
            ExErrorKind::InvalidDocument => "ERR_INVALID_DOCUMENT",
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification for programmatic handling plus the context
/// (operation, snapshot source, record position, field) needed to find the
/// offending input.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    source_id: Option<String>,
    record_index: Option<usize>,
    field: Option<String>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            source_id: None,
            record_index: None,
            field: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add snapshot source context
    pub fn with_source_id(mut self, source_id: impl Into<String>) -> Self {
        self.source_id = Some(source_id.into());
        self
    }

    /// Add the zero-based position of the offending record in its snapshot
    pub fn with_record_index(mut self, index: usize) -> Self {
        self.record_index = Some(index);
        self
    }

    /// Add the name of the offending field
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the snapshot source context, if any
    pub fn source_id(&self) -> Option<&str> {
        self.source_id.as_deref()
    }

    /// Get the record position context, if any
    pub fn record_index(&self) -> Option<usize> {
        self.record_index
    }

    /// Get the field context, if any
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(source_id) = &self.source_id {
            write!(f, " (source: {})", source_id)?;
        }
        if let Some(index) = self.record_index {
            write!(f, " (record: {})", index)?;
        }
        if let Some(field) = &self.field {
            write!(f, " (field: {})", field)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Domain failures raised while reconciling snapshots
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DeltaError {
    /// Wrong number of snapshot sources for one run
    #[error("Exactly two snapshot sources are required, got {supplied}")]
    InputCount { supplied: usize },

    /// Record is unusable for matching
    #[error("Malformed record {index} in {source_id}: {reason}")]
    MalformedRecord {
        source_id: String,
        index: usize,
        field: String,
        reason: String,
    },

    /// Snapshot source cannot be read
    #[error("Snapshot source unavailable: {source_id}: {reason}")]
    SourceUnavailable { source_id: String, reason: String },

    /// Snapshot document structure is invalid
    #[error("Invalid snapshot document {source_id}: {reason}")]
    InvalidDocument { source_id: String, reason: String },

    /// Configuration could not be loaded
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl From<DeltaError> for ExError {
    fn from(err: DeltaError) -> Self {
        match err {
            DeltaError::InputCount { supplied } => ExError::new(ExErrorKind::InputCount)
                .with_op("reconcile")
                .with_message(format!(
                    "exactly two snapshot sources are required, got {}",
                    supplied
                )),

            DeltaError::MalformedRecord {
                source_id,
                index,
                field,
                reason,
            } => ExError::new(ExErrorKind::MalformedRecord)
                .with_source_id(source_id)
                .with_record_index(index)
                .with_field(field)
                .with_message(reason),

            DeltaError::SourceUnavailable { source_id, reason } => {
                ExError::new(ExErrorKind::SourceUnavailable)
                    .with_source_id(source_id)
                    .with_message(reason)
            }

            DeltaError::InvalidDocument { source_id, reason } => {
                ExError::new(ExErrorKind::InvalidDocument)
                    .with_source_id(source_id)
                    .with_message(reason)
            }

            DeltaError::InvalidConfig { reason } => {
                ExError::new(ExErrorKind::InvalidConfig).with_message(reason)
            }
        }
    }
}

impl From<serde_json::Error> for ExError {
    fn from(err: serde_json::Error) -> Self {
        ExError::new(ExErrorKind::Serialization).with_message(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes() {
        let cases = [
            (ExErrorKind::InputCount, "ERR_INPUT_COUNT"),
            (ExErrorKind::MalformedRecord, "ERR_MALFORMED_RECORD"),
            (ExErrorKind::SourceUnavailable, "ERR_SOURCE_UNAVAILABLE"),
            (ExErrorKind::InvalidDocument, "ERR_INVALID_DOCUMENT"),
            (ExErrorKind::InvalidConfig, "ERR_INVALID_CONFIG"),
        ];
        for (kind, expected_code) in cases {
            assert_eq!(kind.code(), expected_code, "Wrong code for {:?}", kind);
        }
    }

    #[test]
    fn test_malformed_record_carries_position() {
        let err: ExError = DeltaError::MalformedRecord {
            source_id: "pre.json".to_string(),
            index: 7,
            field: "inode".to_string(),
            reason: "missing inode".to_string(),
        }
        .into();

        assert_eq!(err.kind(), ExErrorKind::MalformedRecord);
        assert_eq!(err.source_id(), Some("pre.json"));
        assert_eq!(err.record_index(), Some(7));
        assert_eq!(err.field(), Some("inode"));
    }

    #[test]
    fn test_display_includes_code_and_context() {
        let err = ExError::new(ExErrorKind::SourceUnavailable)
            .with_op("open_snapshot")
            .with_source_id("post.json")
            .with_message("no such file");
        let s = err.to_string();
        assert!(s.starts_with("[ERR_SOURCE_UNAVAILABLE]"));
        assert!(s.contains("open_snapshot"));
        assert!(s.contains("post.json"));
        assert!(s.contains("no such file"));
    }

    #[test]
    fn test_source_chain_is_exposed() {
        use std::error::Error as _;

        let inner = ExError::new(ExErrorKind::Io).with_message("denied");
        let outer = ExError::new(ExErrorKind::SourceUnavailable).with_source(inner);
        assert_eq!(outer.source_error().map(|e| e.kind()), Some(ExErrorKind::Io));
        assert!(outer.source().is_some());
    }

    #[test]
    fn test_input_count_display() {
        let err = DeltaError::InputCount { supplied: 3 };
        assert_eq!(
            err.to_string(),
            "Exactly two snapshot sources are required, got 3"
        );
    }
}
