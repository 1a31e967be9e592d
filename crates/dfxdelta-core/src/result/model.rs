//! Reconciliation output types.
//!
//! A [`ReconciliationResult`] is built once by the
//! [`ResultAssembler`](super::ResultAssembler) and is read-only afterwards.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::diff::DiffSet;
use crate::model::{Classification, FileRecord, IdentityKey, MatchPass};
use crate::options::ReconcileOptions;

/// Namespace URI under which the diff vocabulary is registered
pub const XMLNS_DELTA: &str = "http://www.forensicswiki.org/wiki/Category:Digital_Forensics_XML#delta";

/// Version stamped on emitted differential documents
pub const DOCUMENT_VERSION: &str = "1.1.0";

/// How a file identity resolved across the two snapshots
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordDelta {
    /// Present only in the newer snapshot
    Created { record: FileRecord },
    /// Present only in the older snapshot; there are no new-side attributes
    Deleted { prior: FileRecord },
    /// Paired with a predecessor by one of the matching passes
    Matched {
        record: FileRecord,
        prior: FileRecord,
        diffs: DiffSet,
        pass: MatchPass,
    },
}

/// A record outcome with its category fixed at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedRecord {
    classification: Classification,
    delta: RecordDelta,
}

impl ClassifiedRecord {
    pub fn new(delta: RecordDelta, options: &ReconcileOptions) -> Self {
        let classification = crate::classify::classify(&delta, options);
        Self {
            classification,
            delta,
        }
    }

    pub fn classification(&self) -> Classification {
        self.classification
    }

    /// New-side record; `None` for deletions
    pub fn record(&self) -> Option<&FileRecord> {
        match &self.delta {
            RecordDelta::Created { record } | RecordDelta::Matched { record, .. } => Some(record),
            RecordDelta::Deleted { .. } => None,
        }
    }

    /// Old-side record; `None` for creations
    pub fn prior(&self) -> Option<&FileRecord> {
        match &self.delta {
            RecordDelta::Deleted { prior } | RecordDelta::Matched { prior, .. } => Some(prior),
            RecordDelta::Created { .. } => None,
        }
    }

    pub fn diffs(&self) -> Option<&DiffSet> {
        match &self.delta {
            RecordDelta::Matched { diffs, .. } => Some(diffs),
            _ => None,
        }
    }

    /// Identity of the entry: the new side when it exists, else the prior
    pub fn identity_key(&self) -> Option<IdentityKey> {
        self.record()
            .or_else(|| self.prior())
            .and_then(|r| r.identity_key().ok())
    }
}

/// Per-category counts for one run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciliationSummary {
    pub new: usize,
    pub deleted: usize,
    pub renamed: usize,
    pub relocated: usize,
    pub modified: usize,
    pub changed: usize,
    /// Exact matches without tracked differences (not emitted)
    pub unchanged: usize,
    /// Records overwritten by a later record with the same identity key
    pub duplicate_keys: usize,
}

impl ReconciliationSummary {
    pub fn count(&self, classification: Classification) -> usize {
        match classification {
            Classification::New => self.new,
            Classification::Deleted => self.deleted,
            Classification::Renamed => self.renamed,
            Classification::Relocated => self.relocated,
            Classification::Modified => self.modified,
            Classification::Changed => self.changed,
        }
    }

    pub(crate) fn tally(&mut self, classification: Classification) {
        let slot = match classification {
            Classification::New => &mut self.new,
            Classification::Deleted => &mut self.deleted,
            Classification::Renamed => &mut self.renamed,
            Classification::Relocated => &mut self.relocated,
            Classification::Modified => &mut self.modified,
            Classification::Changed => &mut self.changed,
        };
        *slot += 1;
    }

    /// Number of emitted entries
    pub fn total(&self) -> usize {
        Classification::ALL.iter().map(|c| self.count(*c)).sum()
    }
}

/// The differential outcome of one reconciliation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconciliationResult {
    pub(crate) version: String,
    pub(crate) namespaces: BTreeMap<String, String>,
    pub(crate) sources: Vec<String>,
    pub(crate) records: Vec<ClassifiedRecord>,
    pub(crate) summary: ReconciliationSummary,
}

impl ReconciliationResult {
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Registered namespace prefixes and their URIs
    pub fn namespaces(&self) -> &BTreeMap<String, String> {
        &self.namespaces
    }

    /// Snapshot source identifiers in input order
    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    /// Classified records in emission order: new, deleted, renamed, then
    /// exact-pass and relocation-pass changes
    pub fn records(&self) -> &[ClassifiedRecord] {
        &self.records
    }

    pub fn summary(&self) -> &ReconciliationSummary {
        &self.summary
    }

    pub fn with_classification(
        &self,
        classification: Classification,
    ) -> impl Iterator<Item = &ClassifiedRecord> {
        self.records
            .iter()
            .filter(move |r| r.classification() == classification)
    }
}
