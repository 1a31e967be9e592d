//! Result assembler.
//!
//! Collects snapshot provenance as sources are opened, then turns a
//! [`MatchOutcome`] into the final ordered [`ReconciliationResult`].

use std::collections::BTreeMap;

use crate::matching::{MatchOutcome, MatchedPair};
use crate::options::ReconcileOptions;
use crate::result::model::{
    ClassifiedRecord, ReconciliationResult, ReconciliationSummary, RecordDelta, DOCUMENT_VERSION,
    XMLNS_DELTA,
};

#[derive(Debug, Clone)]
pub struct ResultAssembler {
    namespaces: BTreeMap<String, String>,
    sources: Vec<String>,
}

impl Default for ResultAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultAssembler {
    /// New assembler with the `delta` namespace already registered
    pub fn new() -> Self {
        let mut namespaces = BTreeMap::new();
        namespaces.insert("delta".to_string(), XMLNS_DELTA.to_string());
        Self {
            namespaces,
            sources: Vec::new(),
        }
    }

    /// Append one snapshot's source identifier to the provenance list
    pub fn record_source(&mut self, source_id: impl Into<String>) {
        self.sources.push(source_id.into());
    }

    /// Classify every outcome and freeze the result.
    ///
    /// Emission order: creations and deletions in key order, then renames,
    /// then exact-pass changes in stream order, then relocations.
    pub fn assemble(self, outcome: MatchOutcome, options: &ReconcileOptions) -> ReconciliationResult {
        let MatchOutcome {
            exact,
            renamed,
            relocated,
            created,
            deleted,
            unchanged,
            duplicate_keys,
        } = outcome;

        let matched = |pair: MatchedPair| RecordDelta::Matched {
            record: pair.current,
            prior: pair.prior,
            diffs: pair.diffs,
            pass: pair.pass,
        };

        let deltas = created
            .into_records()
            .map(|(_, record)| RecordDelta::Created { record })
            .chain(
                deleted
                    .into_records()
                    .map(|(_, prior)| RecordDelta::Deleted { prior }),
            )
            .chain(renamed.into_iter().map(matched))
            .chain(exact.into_iter().map(matched))
            .chain(relocated.into_iter().map(matched));

        let mut summary = ReconciliationSummary {
            unchanged,
            duplicate_keys,
            ..Default::default()
        };
        let records: Vec<ClassifiedRecord> = deltas
            .map(|delta| {
                let record = ClassifiedRecord::new(delta, options);
                summary.tally(record.classification());
                record
            })
            .collect();

        ReconciliationResult {
            version: DOCUMENT_VERSION.to_string(),
            namespaces: self.namespaces,
            sources: self.sources,
            records,
            summary,
        }
    }
}
