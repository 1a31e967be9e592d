//! Document envelope and file object conversion

use dfxdelta_core::model::{AttrValue, FileRecord};
use dfxdelta_core::errors::ExError;
use dfxdelta_core::ReconciliationSummary;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::errors::{malformed, Result};

/// Prefix of annotation keys written by the differential sink
pub const DELTA_PREFIX: &str = "delta:";
pub const DIFFS_KEY: &str = "delta:diffs";
pub const ORIGINAL_KEY: &str = "delta:original_fileobject";

const PARTITION: &str = "partition";
const INODE: &str = "inode";
const FILENAME: &str = "filename";
const ALLOC: &str = "alloc";

/// Top-level document structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeltaDocument {
    /// Document format version
    #[serde(default)]
    pub version: String,

    /// Namespace prefixes and their URIs
    #[serde(default)]
    pub namespaces: BTreeMap<String, String>,

    /// Images or documents the file objects were taken from
    #[serde(default)]
    pub sources: Vec<String>,

    /// Per-category counts; only present on differential documents
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<ReconciliationSummary>,

    /// File objects, kept as raw JSON until a consumer needs records
    pub fileobjects: Vec<Value>,
}

fn type_error(source_id: &str, index: usize, field: &str, expected: &str, got: &Value) -> ExError {
    malformed(
        source_id,
        index,
        field,
        format!("{} must be {}, got {}", field, expected, got),
    )
}

/// Convert one raw file object into a record.
///
/// Identity fields and `alloc` must carry the right JSON type; `null` reads
/// as absent. `delta:` annotations are skipped. Other scalars become
/// attributes and nested values are kept as their compact JSON text.
///
/// # Errors
///
/// `MalformedRecord` if the value is not an object or an identity field has
/// the wrong type.
pub fn record_from_json(source_id: &str, index: usize, value: Value) -> Result<FileRecord> {
    let object = match value {
        Value::Object(object) => object,
        other => {
            return Err(malformed(
                source_id,
                index,
                "fileobject",
                format!("file object must be a JSON object, got {}", other),
            ))
        }
    };

    let mut record = FileRecord::default();
    for (name, value) in object {
        match name.as_str() {
            PARTITION => {
                record.partition = match &value {
                    Value::Null => None,
                    v => Some(
                        v.as_u64()
                            .and_then(|n| u32::try_from(n).ok())
                            .ok_or_else(|| {
                                type_error(source_id, index, PARTITION, "an unsigned 32-bit integer", v)
                            })?,
                    ),
                }
            }
            INODE => {
                record.inode = match &value {
                    Value::Null => None,
                    v => Some(v.as_u64().ok_or_else(|| {
                        type_error(source_id, index, INODE, "an unsigned integer", v)
                    })?),
                }
            }
            FILENAME => {
                record.filename = match value {
                    Value::Null => None,
                    Value::String(s) => Some(s),
                    v => return Err(type_error(source_id, index, FILENAME, "a string", &v)),
                }
            }
            ALLOC => {
                record.alloc = match &value {
                    Value::Null => None,
                    Value::Bool(b) => Some(*b),
                    // DFXML writes the flag as 1/0
                    Value::Number(n) if n.as_u64() == Some(1) => Some(true),
                    Value::Number(n) if n.as_u64() == Some(0) => Some(false),
                    v => return Err(type_error(source_id, index, ALLOC, "a boolean", v)),
                }
            }
            _ if name.starts_with(DELTA_PREFIX) => {}
            _ => {
                if let Some(attr) = attribute_from_json(&name, value) {
                    record.attributes.insert(name, attr);
                }
            }
        }
    }
    Ok(record)
}

fn attribute_from_json(name: &str, value: Value) -> Option<AttrValue> {
    match value {
        Value::Null => None,
        Value::Bool(b) => Some(AttrValue::Bool(b)),
        Value::Number(n) => Some(match n.as_i64() {
            Some(i) => AttrValue::Int(i),
            None => AttrValue::Text(n.to_string()),
        }),
        Value::String(s) => Some(AttrValue::from_text(name, &s)),
        nested => Some(AttrValue::Text(nested.to_string())),
    }
}

fn attribute_to_json(value: &AttrValue) -> Value {
    match value {
        AttrValue::Bool(b) => Value::Bool(*b),
        AttrValue::Int(i) => Value::from(*i),
        AttrValue::Timestamp(ts) => Value::String(ts.to_rfc3339()),
        AttrValue::Digest(s) | AttrValue::Text(s) => Value::String(s.clone()),
    }
}

/// Convert a record back into a flat file object
pub fn record_to_json(record: &FileRecord) -> Map<String, Value> {
    let mut object = Map::new();
    if let Some(partition) = record.partition {
        object.insert(PARTITION.to_string(), Value::from(partition));
    }
    if let Some(inode) = record.inode {
        object.insert(INODE.to_string(), Value::from(inode));
    }
    if let Some(filename) = &record.filename {
        object.insert(FILENAME.to_string(), Value::String(filename.clone()));
    }
    if let Some(alloc) = record.alloc {
        object.insert(ALLOC.to_string(), Value::Bool(alloc));
    }
    for (name, value) in &record.attributes {
        object.insert(name.clone(), attribute_to_json(value));
    }
    object
}
