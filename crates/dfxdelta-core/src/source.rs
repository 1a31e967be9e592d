//! Seams between the reconciliation core and snapshot storage.
//!
//! The core never parses documents itself. A [`SnapshotSource`] produces an
//! ordered record stream for one snapshot and a [`ResultSink`] receives the
//! finished result.

use crate::errors::Result;
use crate::model::FileRecord;
use crate::result::ReconciliationResult;

/// Ordered, fallible stream of one snapshot's records
pub type RecordStream<'a> = Box<dyn Iterator<Item = Result<FileRecord>> + 'a>;

/// A readable snapshot of file metadata
pub trait SnapshotSource {
    /// Identifier recorded in the result's provenance list
    fn source_id(&self) -> &str;

    /// Open the snapshot and stream its records in document order.
    ///
    /// # Errors
    ///
    /// `SourceUnavailable` or `InvalidDocument` when the snapshot cannot be
    /// opened; per-record problems are reported through the stream.
    fn records(&self) -> Result<RecordStream<'_>>;
}

/// Destination for a finished reconciliation
pub trait ResultSink {
    /// # Errors
    ///
    /// Returns an error if the result cannot be serialized or written.
    fn write_result(&mut self, result: &ReconciliationResult) -> Result<()>;
}

/// In-memory snapshot, mostly for tests and embedding
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    source_id: String,
    records: Vec<FileRecord>,
}

impl MemorySource {
    pub fn new(source_id: impl Into<String>, records: Vec<FileRecord>) -> Self {
        Self {
            source_id: source_id.into(),
            records,
        }
    }
}

impl SnapshotSource for MemorySource {
    fn source_id(&self) -> &str {
        &self.source_id
    }

    fn records(&self) -> Result<RecordStream<'_>> {
        Ok(Box::new(self.records.iter().cloned().map(Ok)))
    }
}

/// Sink that keeps every result it is handed
#[derive(Debug, Default)]
pub struct MemorySink {
    results: Vec<ReconciliationResult>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn results(&self) -> &[ReconciliationResult] {
        &self.results
    }
}

impl ResultSink for MemorySink {
    fn write_result(&mut self, result: &ReconciliationResult) -> Result<()> {
        self.results.push(result.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_source_streams_in_order() {
        let source = MemorySource::new(
            "mem",
            vec![FileRecord::new(None, 2, "b"), FileRecord::new(None, 1, "a")],
        );

        let names: Vec<String> = source
            .records()
            .unwrap()
            .map(|r| r.unwrap().filename.unwrap())
            .collect();
        assert_eq!(source.source_id(), "mem");
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn test_memory_source_can_be_read_twice() {
        let source = MemorySource::new("mem", vec![FileRecord::new(None, 1, "a")]);
        assert_eq!(source.records().unwrap().count(), 1);
        assert_eq!(source.records().unwrap().count(), 1);
    }

    #[test]
    fn test_memory_sink_keeps_results() {
        let pre = MemorySource::new("pre", vec![]);
        let post = MemorySource::new("post", vec![FileRecord::new(None, 1, "a")]);
        let result =
            crate::reconcile(&[&pre, &post], &crate::ReconcileOptions::default()).unwrap();

        let mut sink = MemorySink::new();
        sink.write_result(&result).unwrap();

        assert_eq!(sink.results().len(), 1);
        assert_eq!(sink.results()[0].summary().new, 1);
    }
}
