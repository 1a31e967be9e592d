//! Tunables for one reconciliation run

use std::collections::BTreeSet;

/// Names that never participate in identity matching: directory self/parent
/// entries and FAT allocation-table artifacts.
pub const DEFAULT_IGNORE_NAMES: &[&str] = &[".", "..", "$FAT1", "$FAT2"];

/// Attributes whose change means the file content was modified rather than
/// its metadata merely drifting.
pub const DEFAULT_PROTECTED_ATTRIBUTES: &[&str] = &["md5", "sha1", "ctime", "mtime"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcileOptions {
    pub ignore_names: BTreeSet<String>,
    pub protected_attributes: BTreeSet<String>,
    /// Attributes excluded from diffing altogether
    pub ignored_attributes: BTreeSet<String>,
}

impl Default for ReconcileOptions {
    fn default() -> Self {
        Self {
            ignore_names: DEFAULT_IGNORE_NAMES.iter().map(|s| s.to_string()).collect(),
            protected_attributes: DEFAULT_PROTECTED_ATTRIBUTES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            ignored_attributes: BTreeSet::new(),
        }
    }
}

impl ReconcileOptions {
    pub fn is_ignored_name(&self, name: &str) -> bool {
        self.ignore_names.contains(name)
    }

    pub fn is_protected(&self, attribute: &str) -> bool {
        self.protected_attributes.contains(attribute)
    }

    pub fn is_tracked(&self, attribute: &str) -> bool {
        !self.ignored_attributes.contains(attribute)
    }
}
