//! Pass 2: rename detection.
//!
//! Pairs an old and a new record sharing (partition, inode) when that inode
//! carries exactly one filename on each side. Many-to-many groups are never
//! resolved; their members stay in the remainders.

use std::collections::{BTreeMap, BTreeSet};

use crate::diff::compute_diff_set;
use crate::index::SnapshotIndex;
use crate::matching::{take_pair, MatchedPair, PassOutcome};
use crate::model::{IdentityKey, MatchPass};
use crate::options::ReconcileOptions;

type InodeGroup = (Option<u32>, u64);

/// (partition, inode) -> distinct filenames still unmatched under it
fn names_by_inode(index: &SnapshotIndex) -> BTreeMap<InodeGroup, BTreeSet<String>> {
    let mut groups: BTreeMap<InodeGroup, BTreeSet<String>> = BTreeMap::new();
    for key in index.keys() {
        groups
            .entry(key.inode_group())
            .or_default()
            .insert(key.filename.clone());
    }
    groups
}

/// Sole member of a singleton set
fn sole_name(names: &BTreeSet<String>) -> Option<&String> {
    if names.len() == 1 {
        names.iter().next()
    } else {
        None
    }
}

pub fn match_renames(
    mut old: SnapshotIndex,
    mut new: SnapshotIndex,
    options: &ReconcileOptions,
) -> PassOutcome {
    let old_names = names_by_inode(&old);
    let new_names = names_by_inode(&new);
    let mut matched = Vec::new();

    for (group, names) in &new_names {
        let Some(new_name) = sole_name(names) else {
            continue;
        };
        let Some(old_name) = old_names.get(group).and_then(sole_name) else {
            continue;
        };
        let (partition, inode) = *group;
        let old_key = IdentityKey::new(partition, inode, old_name.as_str());
        let new_key = IdentityKey::new(partition, inode, new_name.as_str());
        if let Some((prior, current)) = take_pair(&mut old, &old_key, &mut new, &new_key) {
            let diffs = compute_diff_set(&prior, &current, options);
            matched.push(MatchedPair {
                prior,
                current,
                diffs,
                pass: MatchPass::Rename,
            });
        }
    }

    PassOutcome { old, new, matched }
}
