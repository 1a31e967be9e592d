//! Pass 3: inode relocation.
//!
//! Pairs an old and a new record sharing (partition, filename) whose inode
//! numbers differ. When one side has several inodes under the same name, the
//! lowest inode wins and the rest fall through to the remainders.

use std::collections::BTreeMap;

use crate::diff::compute_diff_set;
use crate::index::SnapshotIndex;
use crate::matching::{take_pair, MatchedPair, PassOutcome};
use crate::model::{IdentityKey, MatchPass};
use crate::options::ReconcileOptions;

type NameGroup = (Option<u32>, String);

/// (partition, filename) -> first inode in key order
fn inode_by_name(index: &SnapshotIndex) -> BTreeMap<NameGroup, u64> {
    let mut groups = BTreeMap::new();
    for key in index.keys() {
        let (partition, filename) = key.name_group();
        groups
            .entry((partition, filename.to_string()))
            .or_insert(key.inode);
    }
    groups
}

pub fn match_relocations(
    mut old: SnapshotIndex,
    mut new: SnapshotIndex,
    options: &ReconcileOptions,
) -> PassOutcome {
    let old_inodes = inode_by_name(&old);
    let new_inodes = inode_by_name(&new);
    let mut matched = Vec::new();

    for ((partition, filename), new_inode) in &new_inodes {
        let Some(old_inode) = old_inodes.get(&(*partition, filename.clone())) else {
            continue;
        };
        let old_key = IdentityKey::new(*partition, *old_inode, filename.as_str());
        let new_key = IdentityKey::new(*partition, *new_inode, filename.as_str());
        if let Some((prior, current)) = take_pair(&mut old, &old_key, &mut new, &new_key) {
            let diffs = compute_diff_set(&prior, &current, options);
            matched.push(MatchedPair {
                prior,
                current,
                diffs,
                pass: MatchPass::Relocation,
            });
        }
    }

    PassOutcome { old, new, matched }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FileRecord;

    fn index(source_id: &str, records: Vec<FileRecord>) -> SnapshotIndex {
        SnapshotIndex::build(source_id, records.into_iter().enumerate().map(Ok)).unwrap()
    }

    #[test]
    fn test_same_name_new_inode_pairs() {
        let old = index("pre", vec![FileRecord::new(Some(1), 10, "x").with_attr("md5", "aa")]);
        let new = index("post", vec![FileRecord::new(Some(1), 20, "x").with_attr("md5", "bb")]);

        let out = match_relocations(old, new, &ReconcileOptions::default());

        assert_eq!(out.matched.len(), 1);
        let pair = &out.matched[0];
        assert_eq!(pair.pass, MatchPass::Relocation);
        assert_eq!(pair.prior.inode, Some(10));
        assert_eq!(pair.current.inode, Some(20));
        assert!(pair.diffs.contains("md5"));
    }

    #[test]
    fn test_partition_is_part_of_the_name_group() {
        let old = index("pre", vec![FileRecord::new(Some(1), 10, "x")]);
        let new = index("post", vec![FileRecord::new(Some(2), 20, "x")]);

        let out = match_relocations(old, new, &ReconcileOptions::default());

        assert!(out.matched.is_empty());
        assert_eq!(out.old.len(), 1);
        assert_eq!(out.new.len(), 1);
    }

    #[test]
    fn test_lowest_inode_wins_on_shared_name() {
        let old = index("pre", vec![FileRecord::new(Some(1), 10, "x")]);
        let new = index(
            "post",
            vec![
                FileRecord::new(Some(1), 30, "x"),
                FileRecord::new(Some(1), 20, "x"),
            ],
        );

        let out = match_relocations(old, new, &ReconcileOptions::default());

        assert_eq!(out.matched.len(), 1);
        assert_eq!(out.matched[0].current.inode, Some(20));
        assert!(out.new.contains_key(&IdentityKey::new(Some(1), 30, "x")));
    }
}
