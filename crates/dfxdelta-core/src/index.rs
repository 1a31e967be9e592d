//! Snapshot indexer
//!
//! A [`SnapshotIndex`] maps identity keys to the records of one snapshot that
//! are still unmatched. Matching passes take indices by value and hand back
//! what they did not consume.

use std::collections::BTreeMap;

use crate::errors::{DeltaError, Result};
use crate::model::{FileRecord, IdentityKey};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotIndex {
    source_id: String,
    entries: BTreeMap<IdentityKey, FileRecord>,
    duplicate_keys: usize,
}

/// Key a record, reporting the first missing identity field as malformed.
pub fn key_for(source_id: &str, index: usize, record: &FileRecord) -> Result<IdentityKey> {
    record.identity_key().map_err(|field| {
        DeltaError::MalformedRecord {
            source_id: source_id.to_string(),
            index,
            field: field.to_string(),
            reason: format!("record has no {}", field),
        }
        .into()
    })
}

impl SnapshotIndex {
    pub fn new(source_id: impl Into<String>) -> Self {
        Self {
            source_id: source_id.into(),
            entries: BTreeMap::new(),
            duplicate_keys: 0,
        }
    }

    /// Materialize a whole filtered stream.
    ///
    /// # Errors
    ///
    /// Propagates the first stream error, or `MalformedRecord` for a record
    /// without inode or filename.
    pub fn build<I>(source_id: impl Into<String>, filtered: I) -> Result<Self>
    where
        I: IntoIterator<Item = Result<(usize, FileRecord)>>,
    {
        let mut index = Self::new(source_id);
        for item in filtered {
            let (position, record) = item?;
            let key = key_for(&index.source_id, position, &record)?;
            index.insert(key, record);
        }
        Ok(index)
    }

    /// Insert under `key`; a colliding key overwrites the earlier record.
    pub fn insert(&mut self, key: IdentityKey, record: FileRecord) {
        if self.entries.insert(key.clone(), record).is_some() {
            self.duplicate_keys += 1;
            tracing::warn!(
                source_id = %self.source_id,
                key = %key,
                "duplicate identity key in snapshot; later record replaces earlier one"
            );
        }
    }

    pub fn remove(&mut self, key: &IdentityKey) -> Option<FileRecord> {
        self.entries.remove(key)
    }

    pub fn contains_key(&self, key: &IdentityKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &IdentityKey) -> Option<&FileRecord> {
        self.entries.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &IdentityKey> {
        self.entries.keys()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn source_id(&self) -> &str {
        &self.source_id
    }

    /// Number of records overwritten by a later record with the same key
    pub fn duplicate_keys(&self) -> usize {
        self.duplicate_keys
    }

    /// Consume the index, yielding records in key order
    pub fn into_records(self) -> impl Iterator<Item = (IdentityKey, FileRecord)> {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ExErrorKind;

    fn indexed(records: Vec<FileRecord>) -> Vec<Result<(usize, FileRecord)>> {
        records.into_iter().enumerate().map(Ok).collect()
    }

    #[test]
    fn test_build_keys_every_record() {
        let index = SnapshotIndex::build(
            "pre",
            indexed(vec![
                FileRecord::new(Some(1), 1, "a"),
                FileRecord::new(Some(1), 2, "b"),
            ]),
        )
        .unwrap();

        assert_eq!(index.len(), 2);
        assert_eq!(index.source_id(), "pre");
        assert!(index.contains_key(&IdentityKey::new(Some(1), 2, "b")));
    }

    #[test]
    fn test_duplicate_key_last_write_wins() {
        let index = SnapshotIndex::build(
            "pre",
            indexed(vec![
                FileRecord::new(Some(1), 1, "a").with_attr("md5", "11"),
                FileRecord::new(Some(1), 1, "a").with_attr("md5", "22"),
            ]),
        )
        .unwrap();

        assert_eq!(index.len(), 1);
        assert_eq!(index.duplicate_keys(), 1);
        let rec = index.get(&IdentityKey::new(Some(1), 1, "a")).unwrap();
        assert_eq!(rec.attribute("md5").map(|v| v.to_string()), Some("22".into()));
    }

    #[test]
    fn test_record_without_inode_is_malformed() {
        let mut rec = FileRecord::new(Some(1), 1, "a");
        rec.inode = None;
        let err = SnapshotIndex::build("pre", vec![Ok((4, rec))]).unwrap_err();

        assert_eq!(err.kind(), ExErrorKind::MalformedRecord);
        assert_eq!(err.record_index(), Some(4));
        assert_eq!(err.field(), Some("inode"));
        assert_eq!(err.source_id(), Some("pre"));
    }

    #[test]
    fn test_into_records_is_key_ordered() {
        let index = SnapshotIndex::build(
            "pre",
            indexed(vec![
                FileRecord::new(Some(1), 9, "z"),
                FileRecord::new(Some(1), 3, "y"),
            ]),
        )
        .unwrap();

        let inodes: Vec<u64> = index.into_records().map(|(k, _)| k.inode).collect();
        assert_eq!(inodes, vec![3, 9]);
    }
}
