//! Flat concatenation of one snapshot document

use std::collections::BTreeMap;
use std::io::Write;

use dfxdelta_core::result::DOCUMENT_VERSION;
use dfxdelta_core::source::SnapshotSource;

use crate::document::writer::write_document;
use crate::document::{DeltaDocument, JsonDocumentSource};
use crate::errors::Result;

/// Re-emit every file object of `source` under a fresh document header.
///
/// File objects are copied verbatim: nothing is filtered, validated or
/// reordered. The new header lists the input as its only source. Returns
/// the number of file objects written.
///
/// # Errors
///
/// `SourceUnavailable` / `InvalidDocument` when the input cannot be loaded,
/// `Io` or `Serialization` when the output cannot be written.
pub fn cat_fileobjects<W: Write>(source: &JsonDocumentSource, writer: &mut W) -> Result<usize> {
    let input = source.load_document()?;
    let count = input.fileobjects.len();

    let document = DeltaDocument {
        version: DOCUMENT_VERSION.to_string(),
        namespaces: BTreeMap::new(),
        sources: vec![source.source_id().to_string()],
        summary: None,
        fileobjects: input.fileobjects,
    };
    write_document(writer, &document, true)?;

    tracing::info!(source_id = source.source_id(), fileobjects = count, "fileobjects concatenated");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_copies_every_fileobject_unfiltered() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("image.json");
        std::fs::write(
            &path,
            json!({
                "version": "0.9",
                "sources": ["disk.E01"],
                "fileobjects": [
                    {"inode": 1, "filename": ".", "alloc": true},
                    {"inode": 2, "filename": "gone", "alloc": false},
                    {"filename": "no-inode"}
                ]
            })
            .to_string(),
        )
        .unwrap();

        let source = JsonDocumentSource::new(&path);
        let mut out = Vec::new();
        let count = cat_fileobjects(&source, &mut out).unwrap();

        let doc: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(count, 3);
        assert_eq!(doc["version"], json!(DOCUMENT_VERSION));
        assert_eq!(doc["sources"], json!([path.display().to_string()]));
        assert_eq!(doc["fileobjects"][2], json!({"filename": "no-inode"}));
        assert!(doc.get("summary").is_none());
    }
}
