//! DFXML-shaped JSON interchange document
//!
//! One document holds the file objects of a single snapshot, or the
//! differential produced by a reconciliation run. Both share the same
//! envelope; differential documents add a `summary` and `delta:`-prefixed
//! annotations on each file object.

pub mod format;
pub mod reader;
pub mod writer;

pub use format::{record_from_json, record_to_json, DeltaDocument};
pub use reader::JsonDocumentSource;
pub use writer::JsonDocumentSink;
