//! Record filter
//!
//! Drops records whose identity is meaningless for matching before they reach
//! an index: reserved directory entries, allocation-table artifacts and
//! unallocated entries.

use crate::errors::{DeltaError, Result};
use crate::model::FileRecord;
use crate::options::ReconcileOptions;

/// Decide whether a single record takes part in matching.
///
/// Ignored names are dropped before anything else is looked at, so a
/// reserved entry with missing fields is not an error. A surviving record
/// with no allocation flag is malformed.
pub fn admit(
    source_id: &str,
    index: usize,
    record: &FileRecord,
    options: &ReconcileOptions,
) -> Result<bool> {
    if let Some(name) = record.filename.as_deref() {
        if options.is_ignored_name(name) {
            return Ok(false);
        }
    }
    match record.alloc {
        Some(alloc) => Ok(alloc),
        None => Err(DeltaError::MalformedRecord {
            source_id: source_id.to_string(),
            index,
            field: "alloc".to_string(),
            reason: "allocation flag is absent".to_string(),
        }
        .into()),
    }
}

/// Lazily filter one snapshot's record stream.
///
/// Yields `(position, record)` pairs where position is the record's index in
/// the unfiltered stream. Source errors are passed through unchanged.
pub fn filter_records<'a, I>(
    source_id: &'a str,
    records: I,
    options: &'a ReconcileOptions,
) -> impl Iterator<Item = Result<(usize, FileRecord)>> + 'a
where
    I: Iterator<Item = Result<FileRecord>> + 'a,
{
    records
        .enumerate()
        .filter_map(move |(index, item)| match item {
            Err(e) => Some(Err(e)),
            Ok(record) => match admit(source_id, index, &record, options) {
                Ok(true) => Some(Ok((index, record))),
                Ok(false) => None,
                Err(e) => Some(Err(e)),
            },
        })
}
