//! Path-backed snapshot source

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use dfxdelta_core::source::{RecordStream, SnapshotSource};
use dfxdelta_core::{log_op_end, log_op_error, log_op_start};

use crate::document::format::{record_from_json, DeltaDocument};
use crate::errors::{document_error, unavailable, Result};

/// Reads one snapshot document from disk.
///
/// The source id is the path exactly as given, so it round-trips into the
/// result's provenance list unchanged.
#[derive(Debug, Clone)]
pub struct JsonDocumentSource {
    path: PathBuf,
    source_id: String,
}

impl JsonDocumentSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let source_id = path.display().to_string();
        Self { path, source_id }
    }

    /// Read and parse the whole document envelope.
    ///
    /// # Errors
    ///
    /// `SourceUnavailable` if the file cannot be read, `InvalidDocument` if
    /// it is not a JSON document with a `fileobjects` list.
    pub fn load_document(&self) -> Result<DeltaDocument> {
        log_op_start!("open_snapshot", source_id = %self.source_id);
        let start = Instant::now();

        let document = self.load_document_impl().map_err(|e| {
            log_op_error!(
                "open_snapshot",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                source_id = %self.source_id
            );
            e
        })?;

        log_op_end!(
            "open_snapshot",
            duration_ms = start.elapsed().as_millis() as u64,
            source_id = %self.source_id,
            fileobjects = document.fileobjects.len()
        );
        Ok(document)
    }

    fn load_document_impl(&self) -> Result<DeltaDocument> {
        let content =
            fs::read_to_string(&self.path).map_err(|e| unavailable(&self.source_id, e))?;
        serde_json::from_str(&content).map_err(|e| document_error(&self.source_id, &e.to_string()))
    }
}

impl SnapshotSource for JsonDocumentSource {
    fn source_id(&self) -> &str {
        &self.source_id
    }

    fn records(&self) -> Result<RecordStream<'_>> {
        let document = self.load_document()?;
        let source_id = self.source_id.as_str();
        Ok(Box::new(
            document
                .fileobjects
                .into_iter()
                .enumerate()
                .map(move |(index, value)| record_from_json(source_id, index, value)),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dfxdelta_core::errors::ExErrorKind;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_streams_records_in_document_order() {
        let file = write_temp(
            r#"{"fileobjects": [
                {"inode": 2, "filename": "b", "alloc": true},
                {"inode": 1, "filename": "a", "alloc": true}
            ]}"#,
        );
        let source = JsonDocumentSource::new(file.path());

        let names: Vec<String> = source
            .records()
            .unwrap()
            .map(|r| r.unwrap().filename.unwrap())
            .collect();
        assert_eq!(names, vec!["b", "a"]);
        assert_eq!(source.source_id(), file.path().display().to_string());
    }

    #[test]
    fn test_missing_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonDocumentSource::new(dir.path().join("absent.json"));

        let err = source.records().err().unwrap();
        assert_eq!(err.kind(), ExErrorKind::SourceUnavailable);
    }

    #[test]
    fn test_garbage_is_invalid_document() {
        let file = write_temp("<dfxml/>");
        let err = JsonDocumentSource::new(file.path()).records().err().unwrap();
        assert_eq!(err.kind(), ExErrorKind::InvalidDocument);
    }

    #[test]
    fn test_missing_fileobjects_is_invalid_document() {
        let file = write_temp(r#"{"version": "1.1.0"}"#);
        let err = JsonDocumentSource::new(file.path()).records().err().unwrap();
        assert_eq!(err.kind(), ExErrorKind::InvalidDocument);
    }

    #[test]
    fn test_bad_record_surfaces_through_stream() {
        let file = write_temp(r#"{"fileobjects": [{"inode": 1, "filename": "a"}, "oops"]}"#);
        let source = JsonDocumentSource::new(file.path());

        let results: Vec<_> = source.records().unwrap().collect();
        assert!(results[0].is_ok());
        let err = results[1].clone().unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::MalformedRecord);
        assert_eq!(err.record_index(), Some(1));
    }
}
