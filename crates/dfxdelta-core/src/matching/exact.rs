//! Pass 1: exact identity matching while streaming the newer snapshot.

use crate::diff::compute_diff_set;
use crate::errors::Result;
use crate::index::{key_for, SnapshotIndex};
use crate::matching::MatchedPair;
use crate::model::{FileRecord, MatchPass};
use crate::options::ReconcileOptions;

#[derive(Debug, Clone)]
pub struct ExactOutcome {
    /// Older snapshot's records that found no exact partner
    pub old: SnapshotIndex,
    /// Newer snapshot's records that found no exact partner
    pub new: SnapshotIndex,
    /// Exact matches with at least one differing attribute, in stream order
    pub matched: Vec<MatchedPair>,
    pub unchanged: usize,
}

/// Stream `filtered` against `old`, pairing records with identical keys.
///
/// A hit is moved out of `old`; if the pair shows no tracked difference both
/// records are dropped on the spot. A miss is indexed into the new snapshot's
/// index.
///
/// # Errors
///
/// Propagates stream errors, and `MalformedRecord` for a record that cannot
/// be keyed.
pub fn match_exact<I>(
    mut old: SnapshotIndex,
    source_id: &str,
    filtered: I,
    options: &ReconcileOptions,
) -> Result<ExactOutcome>
where
    I: IntoIterator<Item = Result<(usize, FileRecord)>>,
{
    let mut new = SnapshotIndex::new(source_id);
    let mut matched = Vec::new();
    let mut unchanged = 0;

    for item in filtered {
        let (position, current) = item?;
        let key = key_for(source_id, position, &current)?;
        match old.remove(&key) {
            Some(prior) => {
                let diffs = compute_diff_set(&prior, &current, options);
                if diffs.is_empty() {
                    unchanged += 1;
                } else {
                    matched.push(MatchedPair {
                        prior,
                        current,
                        diffs,
                        pass: MatchPass::Exact,
                    });
                }
            }
            None => new.insert(key, current),
        }
    }

    Ok(ExactOutcome {
        old,
        new,
        matched,
        unchanged,
    })
}
