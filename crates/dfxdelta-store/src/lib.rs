//! dfxdelta store: snapshot documents on disk
//!
//! Provides:
//! - The DFXML-shaped JSON interchange document
//! - `JsonDocumentSource`, a path-backed snapshot reader
//! - `JsonDocumentSink`, a writer-backed result emitter
//! - `cat_fileobjects`, flat re-emission of one document
//! - `DeltaConfig`, TOML run configuration

pub mod cat;
pub mod config;
pub mod document;
pub mod errors;

// Re-export key types
pub use cat::cat_fileobjects;
pub use config::DeltaConfig;
pub use document::{DeltaDocument, JsonDocumentSink, JsonDocumentSource};
pub use errors::Result;
