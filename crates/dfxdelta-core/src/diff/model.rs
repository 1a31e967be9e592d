//! Diff output types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Names of the attributes whose values differ between a record and its prior.
///
/// Empty means no observable change. Backed by a `BTreeSet` so serialization
/// is sorted and stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiffSet(BTreeSet<String>);

impl DiffSet {
    pub fn contains(&self, attribute: &str) -> bool {
        self.0.contains(attribute)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// True if any differing attribute is in `set`
    pub fn intersects(&self, set: &BTreeSet<String>) -> bool {
        self.0.iter().any(|a| set.contains(a))
    }
}

impl<S: Into<String>> FromIterator<S> for DiffSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
