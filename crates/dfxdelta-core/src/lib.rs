//! dfxdelta core: reconciliation of two file-system metadata snapshots.
//!
//! Given an older and a newer snapshot of the same volume, this crate decides
//! which files are new, deleted, renamed, relocated, modified or merely
//! changed. The pipeline is:
//!
//! - [`filter`]: drop reserved names and unallocated entries
//! - [`index`]: key records by (partition, inode, filename)
//! - [`matching`]: exact, rename and relocation passes
//! - [`diff`]: attribute-level differences between matched pairs
//! - [`classify`]: category assignment
//! - [`result`]: ordered, provenance-stamped output
//!
//! Document formats live in `dfxdelta-store`; this crate only sees
//! [`source::SnapshotSource`] and [`source::ResultSink`].

pub use dfxdelta_core_types as core_types;

pub mod classify;
pub mod diff;
pub mod errors;
pub mod filter;
pub mod index;
pub mod logging_facility;
pub mod matching;
pub mod model;
pub mod options;
pub mod reconcile;
pub mod result;
pub mod source;

// Re-export commonly used types
pub use diff::{compute_diff_set, DiffSet};
pub use errors::{DeltaError, ExError, ExErrorKind, Result};
pub use index::SnapshotIndex;
pub use model::{AttrValue, Classification, FileRecord, IdentityKey, MatchPass};
pub use options::ReconcileOptions;
pub use reconcile::reconcile;
pub use result::{
    render_human_summary, ClassifiedRecord, ReconciliationResult, ReconciliationSummary,
    RecordDelta,
};
pub use source::{MemorySink, MemorySource, RecordStream, ResultSink, SnapshotSource};
