//! Run driver: filter, index, match, classify and assemble two snapshots.

use std::time::Instant;

use crate::core_types::RunId;
use crate::errors::{DeltaError, ExError, ExErrorKind, Result};
use crate::filter::filter_records;
use crate::index::SnapshotIndex;
use crate::matching::{match_snapshots, MatchOutcome};
use crate::options::ReconcileOptions;
use crate::result::{ReconciliationResult, ResultAssembler};
use crate::source::SnapshotSource;
use crate::{log_op_end, log_op_error, log_op_start};

/// Reconcile an older and a newer snapshot.
///
/// Sources are read in the order given; the first is the baseline. Each
/// source id is appended to the result's provenance as it is opened.
///
/// # Errors
///
/// - `InputCount` unless exactly two sources are supplied
/// - `SourceUnavailable` / `InvalidDocument` when a source cannot be opened
/// - `MalformedRecord` for a record without an allocation flag, inode or
///   filename
pub fn reconcile(
    sources: &[&dyn SnapshotSource],
    options: &ReconcileOptions,
) -> Result<ReconciliationResult> {
    let run_id = RunId::new();
    log_op_start!("reconcile", run_id = %run_id, sources = sources.len());
    let start = Instant::now();

    let result = reconcile_impl(sources, options).map_err(|e| {
        log_op_error!(
            "reconcile",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64,
            run_id = %run_id
        );
        e
    })?;

    let summary = result.summary();
    log_op_end!(
        "reconcile",
        duration_ms = start.elapsed().as_millis() as u64,
        run_id = %run_id,
        new = summary.new,
        deleted = summary.deleted,
        renamed = summary.renamed,
        relocated = summary.relocated,
        modified = summary.modified,
        changed = summary.changed,
        unchanged = summary.unchanged
    );

    Ok(result)
}

fn reconcile_impl(
    sources: &[&dyn SnapshotSource],
    options: &ReconcileOptions,
) -> Result<ReconciliationResult> {
    if sources.len() != 2 {
        return Err(DeltaError::InputCount {
            supplied: sources.len(),
        }
        .into());
    }

    let mut assembler = ResultAssembler::new();
    let mut previous: Option<SnapshotIndex> = None;
    let mut outcome: Option<MatchOutcome> = None;

    for source in sources {
        let source_id = source.source_id();
        assembler.record_source(source_id);
        tracing::debug!(source_id = source_id, "reading snapshot");

        let filtered = filter_records(source_id, source.records()?, options);
        previous = match previous.take() {
            None => Some(SnapshotIndex::build(source_id, filtered)?),
            Some(old) => {
                outcome = Some(match_snapshots(old, source_id, filtered, options)?);
                None
            }
        };
    }

    let outcome = outcome.ok_or_else(|| {
        ExError::new(ExErrorKind::Internal)
            .with_op("reconcile")
            .with_message("no snapshot pair was matched")
    })?;
    Ok(assembler.assemble(outcome, options))
}
