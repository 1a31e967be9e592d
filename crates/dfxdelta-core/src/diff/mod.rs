//! Record diff computation.
//!
//! Compares a matched old/new record pair attribute by attribute and reports
//! the names of the attributes that differ.
//!
//! ## Entry point
//!
//! ```ignore
//! use dfxdelta_core::diff::compute_diff_set;
//!
//! let diffs = compute_diff_set(&prior, &current, &options);
//! ```
//!
//! ## Guarantees
//!
//! - **Identity excluded**: partition, inode, filename and the allocation flag
//!   are never reported; identity changes are expressed by the match pass.
//! - **Presence counts**: an attribute present on only one side is a difference.
//! - **Determinism**: the set iterates in attribute-name order.

pub mod engine;
pub mod model;

pub use engine::compute_diff_set;
pub use model::DiffSet;
