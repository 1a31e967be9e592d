//! Reconciliation result: classified records plus provenance.

pub mod assembler;
pub mod human_summary;
pub mod model;

pub use assembler::ResultAssembler;
pub use human_summary::render_human_summary;
pub use model::{
    ClassifiedRecord, ReconciliationResult, ReconciliationSummary, RecordDelta, DOCUMENT_VERSION,
    XMLNS_DELTA,
};
