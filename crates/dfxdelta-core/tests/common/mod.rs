use dfxdelta_core::{
    reconcile, Classification, FileRecord, MemorySource, ReconcileOptions, ReconciliationResult,
};

/// Allocated record on partition 1
#[allow(dead_code)]
pub fn rec(inode: u64, filename: &str) -> FileRecord {
    FileRecord::new(Some(1), inode, filename)
}

/// Reconcile two in-memory snapshots with default options
#[allow(dead_code)]
pub fn reconcile_pair(old: Vec<FileRecord>, new: Vec<FileRecord>) -> ReconciliationResult {
    reconcile_pair_with(old, new, &ReconcileOptions::default())
}

#[allow(dead_code)]
pub fn reconcile_pair_with(
    old: Vec<FileRecord>,
    new: Vec<FileRecord>,
    options: &ReconcileOptions,
) -> ReconciliationResult {
    let pre = MemorySource::new("pre", old);
    let post = MemorySource::new("post", new);
    reconcile(&[&pre, &post], options).expect("reconcile should succeed")
}

/// Classification of every emitted entry, in emission order
#[allow(dead_code)]
pub fn classes(result: &ReconciliationResult) -> Vec<Classification> {
    result.records().iter().map(|r| r.classification()).collect()
}

/// Filenames of the entries in one category (new side, else prior)
#[allow(dead_code)]
pub fn names_in(result: &ReconciliationResult, classification: Classification) -> Vec<String> {
    result
        .with_classification(classification)
        .filter_map(|r| r.record().or_else(|| r.prior()))
        .filter_map(|r| r.filename.clone())
        .collect()
}
