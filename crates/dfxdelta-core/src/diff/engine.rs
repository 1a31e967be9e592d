//! Attribute-by-attribute comparison of a matched record pair.

use std::collections::BTreeSet;

use crate::diff::model::DiffSet;
use crate::model::FileRecord;
use crate::options::ReconcileOptions;

/// Compute the set of tracked attributes that differ between `prior` and `current`.
///
/// Every attribute named on either side is considered unless it is listed in
/// `options.ignored_attributes`. Values compare by [`crate::model::AttrValue`]
/// equality, so digests ignore case and timestamps compare as instants.
pub fn compute_diff_set(
    prior: &FileRecord,
    current: &FileRecord,
    options: &ReconcileOptions,
) -> DiffSet {
    let names: BTreeSet<&str> = prior
        .attributes
        .keys()
        .chain(current.attributes.keys())
        .map(String::as_str)
        .filter(|name| options.is_tracked(name))
        .collect();

    names
        .into_iter()
        .filter(|name| prior.attribute(name) != current.attribute(name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AttrValue;

    fn opts() -> ReconcileOptions {
        ReconcileOptions::default()
    }

    #[test]
    fn test_identical_attributes_yield_empty_set() {
        let a = FileRecord::new(Some(1), 1, "f").with_attr("md5", "aa");
        let b = FileRecord::new(Some(1), 1, "f").with_attr("md5", "AA");
        assert!(compute_diff_set(&a, &b, &opts()).is_empty());
    }

    #[test]
    fn test_changed_value_is_reported() {
        let a = FileRecord::new(Some(1), 1, "f")
            .with_attr("md5", "aa")
            .with_value("filesize", AttrValue::Int(10));
        let b = FileRecord::new(Some(1), 1, "f")
            .with_attr("md5", "bb")
            .with_value("filesize", AttrValue::Int(10));
        let diffs = compute_diff_set(&a, &b, &opts());
        assert_eq!(diffs.iter().collect::<Vec<_>>(), vec!["md5"]);
    }

    #[test]
    fn test_one_sided_attribute_is_reported() {
        let a = FileRecord::new(Some(1), 1, "f");
        let b = FileRecord::new(Some(1), 1, "f").with_attr("sha1", "cc");
        assert!(compute_diff_set(&a, &b, &opts()).contains("sha1"));
        assert!(compute_diff_set(&b, &a, &opts()).contains("sha1"));
    }

    #[test]
    fn test_identity_fields_are_not_tracked() {
        let a = FileRecord::new(Some(1), 1, "old-name");
        let b = FileRecord::new(Some(2), 9, "new-name");
        assert!(compute_diff_set(&a, &b, &opts()).is_empty());
    }

    #[test]
    fn test_ignored_attributes_are_skipped() {
        let mut options = opts();
        options.ignored_attributes.insert("atime".to_string());
        let a = FileRecord::new(Some(1), 1, "f").with_attr("atime", "2020-01-01T00:00:00Z");
        let b = FileRecord::new(Some(1), 1, "f").with_attr("atime", "2021-01-01T00:00:00Z");
        assert!(compute_diff_set(&a, &b, &options).is_empty());
        assert!(compute_diff_set(&a, &b, &opts()).contains("atime"));
    }
}
