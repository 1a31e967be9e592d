//! Matching engine
//!
//! Resolves file identity across two snapshots in three passes of
//! decreasing confidence. Each pass takes both indices by value, moves the
//! pairs it resolves out of them, and returns the remainders for the next
//! pass:
//!
//! 1. [`exact::match_exact`]: same (partition, inode, filename)
//! 2. [`rename::match_renames`]: same (partition, inode), one name per side
//! 3. [`relocate::match_relocations`]: same (partition, filename)
//!
//! Whatever is left in the old index was deleted; whatever is left in the
//! new index was created.

pub mod exact;
pub mod relocate;
pub mod rename;

use crate::diff::DiffSet;
use crate::errors::Result;
use crate::index::SnapshotIndex;
use crate::model::{FileRecord, IdentityKey, MatchPass};
use crate::options::ReconcileOptions;

pub use exact::{match_exact, ExactOutcome};
pub use relocate::match_relocations;
pub use rename::match_renames;

/// A record paired with its predecessor from the older snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedPair {
    pub prior: FileRecord,
    pub current: FileRecord,
    pub diffs: DiffSet,
    pub pass: MatchPass,
}

/// Result of one heuristic pass: resolved pairs plus both remainders
#[derive(Debug, Clone)]
pub struct PassOutcome {
    pub old: SnapshotIndex,
    pub new: SnapshotIndex,
    pub matched: Vec<MatchedPair>,
}

/// Everything the three passes produced for one pair of snapshots
#[derive(Debug, Clone)]
pub struct MatchOutcome {
    /// Exact-key matches with a non-empty diff, in stream order
    pub exact: Vec<MatchedPair>,
    pub renamed: Vec<MatchedPair>,
    pub relocated: Vec<MatchedPair>,
    /// Unmatched records of the newer snapshot
    pub created: SnapshotIndex,
    /// Unmatched records of the older snapshot
    pub deleted: SnapshotIndex,
    /// Exact-key matches with an empty diff (dropped)
    pub unchanged: usize,
    /// Records overwritten by a later duplicate key, both snapshots together
    pub duplicate_keys: usize,
}

/// Remove `old_key` and `new_key` from their indices as one pair.
///
/// Leaves both indices untouched unless both keys are present.
pub(crate) fn take_pair(
    old: &mut SnapshotIndex,
    old_key: &IdentityKey,
    new: &mut SnapshotIndex,
    new_key: &IdentityKey,
) -> Option<(FileRecord, FileRecord)> {
    if !old.contains_key(old_key) || !new.contains_key(new_key) {
        return None;
    }
    Some((old.remove(old_key)?, new.remove(new_key)?))
}

fn log_pass(pass: MatchPass, old: &SnapshotIndex, new: &SnapshotIndex, matched: usize) {
    tracing::debug!(
        pass = pass.name(),
        old_remaining = old.len(),
        new_remaining = new.len(),
        matched,
        "matching pass complete"
    );
}

/// Run all three passes of the current snapshot against the previous one.
///
/// `filtered` is the current snapshot's filtered record stream; it is
/// consumed as the exact pass indexes it.
///
/// # Errors
///
/// Propagates stream errors and `MalformedRecord` from the exact pass.
pub fn match_snapshots<I>(
    old: SnapshotIndex,
    source_id: &str,
    filtered: I,
    options: &ReconcileOptions,
) -> Result<MatchOutcome>
where
    I: IntoIterator<Item = Result<(usize, FileRecord)>>,
{
    let exact = match_exact(old, source_id, filtered, options)?;
    log_pass(MatchPass::Exact, &exact.old, &exact.new, exact.matched.len());
    tracing::debug!(unchanged = exact.unchanged, "unchanged records dropped");

    let renamed = match_renames(exact.old, exact.new, options);
    log_pass(MatchPass::Rename, &renamed.old, &renamed.new, renamed.matched.len());

    let relocated = match_relocations(renamed.old, renamed.new, options);
    log_pass(
        MatchPass::Relocation,
        &relocated.old,
        &relocated.new,
        relocated.matched.len(),
    );

    let duplicate_keys = relocated.old.duplicate_keys() + relocated.new.duplicate_keys();
    Ok(MatchOutcome {
        exact: exact.matched,
        renamed: renamed.matched,
        relocated: relocated.matched,
        created: relocated.new,
        deleted: relocated.old,
        unchanged: exact.unchanged,
        duplicate_keys,
    })
}
