use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome category of one file identity across the two snapshots
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    New,
    Deleted,
    Renamed,
    /// Same name, new inode, no protected attribute changed
    Relocated,
    /// A protected attribute (checksum or content timestamp) changed
    Modified,
    /// Only unprotected metadata changed
    Changed,
}

impl Classification {
    pub const ALL: [Classification; 6] = [
        Classification::New,
        Classification::Deleted,
        Classification::Renamed,
        Classification::Relocated,
        Classification::Modified,
        Classification::Changed,
    ];

    /// Category string consumed by downstream differential readers.
    ///
    /// These literals are a compatibility contract. `Relocated` and `Changed`
    /// share `_changed`.
    pub fn wire_label(&self) -> &'static str {
        match self {
            Classification::New => "_new",
            Classification::Deleted => "_deleted",
            Classification::Renamed => "_renamed",
            Classification::Modified => "_modified",
            Classification::Relocated | Classification::Changed => "_changed",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Classification::New => "new",
            Classification::Deleted => "deleted",
            Classification::Renamed => "renamed",
            Classification::Relocated => "relocated",
            Classification::Modified => "modified",
            Classification::Changed => "changed",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which matching pass paired a record with its prior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPass {
    /// Same (partition, inode, filename)
    Exact,
    /// Same (partition, inode), sole filename on both sides
    Rename,
    /// Same (partition, filename), different inode
    Relocation,
}

impl MatchPass {
    pub fn name(&self) -> &'static str {
        match self {
            MatchPass::Exact => "exact",
            MatchPass::Rename => "rename",
            MatchPass::Relocation => "relocation",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_labels_are_stable() {
        assert_eq!(Classification::New.wire_label(), "_new");
        assert_eq!(Classification::Deleted.wire_label(), "_deleted");
        assert_eq!(Classification::Renamed.wire_label(), "_renamed");
        assert_eq!(Classification::Modified.wire_label(), "_modified");
        assert_eq!(Classification::Changed.wire_label(), "_changed");
    }

    #[test]
    fn test_relocated_shares_changed_label() {
        assert_eq!(
            Classification::Relocated.wire_label(),
            Classification::Changed.wire_label()
        );
        assert_ne!(Classification::Relocated, Classification::Changed);
    }
}
