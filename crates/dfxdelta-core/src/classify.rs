//! Classifier: maps a resolved record outcome to its category.

use crate::model::{Classification, MatchPass};
use crate::options::ReconcileOptions;
use crate::result::RecordDelta;

/// Assign the category for one outcome.
///
/// Rules, in priority order:
/// 1. unmatched creation → `New`
/// 2. deletion placeholder → `Deleted`
/// 3. rename pass → `Renamed`
/// 4. exact or relocation pass → `Modified` when a protected attribute
///    differs, else `Changed` (exact) or `Relocated` (relocation)
pub fn classify(delta: &RecordDelta, options: &ReconcileOptions) -> Classification {
    match delta {
        RecordDelta::Created { .. } => Classification::New,
        RecordDelta::Deleted { .. } => Classification::Deleted,
        RecordDelta::Matched {
            pass: MatchPass::Rename,
            ..
        } => Classification::Renamed,
        RecordDelta::Matched { diffs, pass, .. } => {
            if diffs.intersects(&options.protected_attributes) {
                Classification::Modified
            } else if *pass == MatchPass::Relocation {
                Classification::Relocated
            } else {
                Classification::Changed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::DiffSet;
    use crate::model::FileRecord;

    fn matched(pass: MatchPass, diffs: &[&str]) -> RecordDelta {
        RecordDelta::Matched {
            record: FileRecord::new(Some(1), 2, "b"),
            prior: FileRecord::new(Some(1), 1, "a"),
            diffs: diffs.iter().copied().collect::<DiffSet>(),
            pass,
        }
    }

    #[test]
    fn test_unmatched_outcomes() {
        let opts = ReconcileOptions::default();
        let created = RecordDelta::Created {
            record: FileRecord::new(Some(1), 1, "n"),
        };
        let deleted = RecordDelta::Deleted {
            prior: FileRecord::new(Some(1), 1, "d"),
        };
        assert_eq!(classify(&created, &opts), Classification::New);
        assert_eq!(classify(&deleted, &opts), Classification::Deleted);
    }

    #[test]
    fn test_rename_wins_over_protected_diff() {
        let opts = ReconcileOptions::default();
        assert_eq!(
            classify(&matched(MatchPass::Rename, &["md5"]), &opts),
            Classification::Renamed
        );
        assert_eq!(
            classify(&matched(MatchPass::Rename, &[]), &opts),
            Classification::Renamed
        );
    }

    #[test]
    fn test_protected_attributes_mean_modified() {
        let opts = ReconcileOptions::default();
        for attr in ["md5", "sha1", "ctime", "mtime"] {
            assert_eq!(
                classify(&matched(MatchPass::Exact, &[attr, "uid"]), &opts),
                Classification::Modified
            );
            assert_eq!(
                classify(&matched(MatchPass::Relocation, &[attr]), &opts),
                Classification::Modified
            );
        }
    }

    #[test]
    fn test_unprotected_diffs_split_by_pass() {
        let opts = ReconcileOptions::default();
        assert_eq!(
            classify(&matched(MatchPass::Exact, &["atime"]), &opts),
            Classification::Changed
        );
        assert_eq!(
            classify(&matched(MatchPass::Relocation, &["atime"]), &opts),
            Classification::Relocated
        );
        assert_eq!(
            classify(&matched(MatchPass::Relocation, &[]), &opts),
            Classification::Relocated
        );
    }
}
