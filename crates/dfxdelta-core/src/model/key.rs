use serde::{Deserialize, Serialize};
use std::fmt;

/// Exact-match identity of a file within one snapshot
///
/// Ordering is (partition, inode, filename), which is also the order in which
/// index remainders are emitted.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct IdentityKey {
    /// Partition number; `None` for single-volume snapshots that do not record one
    pub partition: Option<u32>,
    pub inode: u64,
    pub filename: String,
}

impl IdentityKey {
    pub fn new(partition: Option<u32>, inode: u64, filename: impl Into<String>) -> Self {
        Self {
            partition,
            inode,
            filename: filename.into(),
        }
    }

    /// Grouping key used by rename detection
    pub fn inode_group(&self) -> (Option<u32>, u64) {
        (self.partition, self.inode)
    }

    /// Grouping key used by inode-relocation detection
    pub fn name_group(&self) -> (Option<u32>, &str) {
        (self.partition, self.filename.as_str())
    }
}

impl fmt::Display for IdentityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.partition {
            Some(p) => write!(f, "{}:{}:{}", p, self.inode, self.filename),
            None => write!(f, "-:{}:{}", self.inode, self.filename),
        }
    }
}
