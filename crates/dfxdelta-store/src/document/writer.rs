//! Writer-backed result sink

use std::io::Write;

use dfxdelta_core::source::ResultSink;
use dfxdelta_core::{ClassifiedRecord, Classification, ReconciliationResult};
use serde_json::Value;

use crate::document::format::{record_to_json, DeltaDocument, DIFFS_KEY, ORIGINAL_KEY};
use crate::errors::{io_error, serialization_error, Result};

/// Emits a reconciliation result as a differential document
pub struct JsonDocumentSink<W: Write> {
    writer: W,
    pretty: bool,
}

impl<W: Write> JsonDocumentSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pretty: true,
        }
    }

    /// Emit one compact line instead of indented JSON
    pub fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Build the file object for one classified entry.
///
/// Deleted entries carry no current-side fields; everything except `new`
/// carries the prior record.
pub fn fileobject_for(entry: &ClassifiedRecord) -> Value {
    let mut object = entry.record().map(record_to_json).unwrap_or_default();

    let mut diffs = vec![Value::String(entry.classification().wire_label().to_string())];
    if let Some(set) = entry.diffs() {
        diffs.extend(set.iter().map(|name| Value::String(name.to_string())));
    }
    object.insert(DIFFS_KEY.to_string(), Value::Array(diffs));

    if entry.classification() != Classification::New {
        if let Some(prior) = entry.prior() {
            object.insert(ORIGINAL_KEY.to_string(), Value::Object(record_to_json(prior)));
        }
    }
    Value::Object(object)
}

/// Serialize a document envelope to `writer`, followed by a newline
pub(crate) fn write_document<W: Write>(
    writer: &mut W,
    document: &DeltaDocument,
    pretty: bool,
) -> Result<()> {
    let written = if pretty {
        serde_json::to_writer_pretty(&mut *writer, document)
    } else {
        serde_json::to_writer(&mut *writer, document)
    };
    written.map_err(|e| serialization_error("write_document", e))?;
    writer
        .write_all(b"\n")
        .and_then(|_| writer.flush())
        .map_err(|e| io_error("write_document", e))
}

impl<W: Write> ResultSink for JsonDocumentSink<W> {
    fn write_result(&mut self, result: &ReconciliationResult) -> Result<()> {
        let document = DeltaDocument {
            version: result.version().to_string(),
            namespaces: result.namespaces().clone(),
            sources: result.sources().to_vec(),
            summary: Some(result.summary().clone()),
            fileobjects: result.records().iter().map(fileobject_for).collect(),
        };
        write_document(&mut self.writer, &document, self.pretty)?;

        tracing::debug!(
            fileobjects = document.fileobjects.len(),
            "differential document written"
        );
        Ok(())
    }
}
