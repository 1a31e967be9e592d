use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use super::key::IdentityKey;

/// Attribute names holding content digests (compared case-insensitively)
pub const DIGEST_ATTRIBUTES: &[&str] = &["md5", "sha1", "sha256"];

/// Attribute names holding timestamps (compared as instants)
pub const TIMESTAMP_ATTRIBUTES: &[&str] = &["mtime", "ctime", "atime", "crtime", "dtime", "bkup_time"];

/// Comparable value of one record attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AttrValue {
    Bool(bool),
    Int(i64),
    /// Equality is by instant, so the same moment written with two offsets compares equal
    Timestamp(DateTime<FixedOffset>),
    /// Lower-cased hex digest
    Digest(String),
    Text(String),
}

impl AttrValue {
    /// Interpret textual attribute content according to the attribute's name
    ///
    /// Digest attributes are lower-cased; timestamp attributes are parsed as
    /// RFC 3339 and kept as text when they do not parse.
    pub fn from_text(name: &str, raw: &str) -> Self {
        if DIGEST_ATTRIBUTES.contains(&name) {
            return AttrValue::Digest(raw.trim().to_ascii_lowercase());
        }
        if TIMESTAMP_ATTRIBUTES.contains(&name) {
            if let Ok(ts) = DateTime::parse_from_rfc3339(raw.trim()) {
                return AttrValue::Timestamp(ts);
            }
        }
        AttrValue::Text(raw.to_string())
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Bool(b) => write!(f, "{}", b),
            AttrValue::Int(i) => write!(f, "{}", i),
            AttrValue::Timestamp(ts) => write!(f, "{}", ts.to_rfc3339()),
            AttrValue::Digest(s) | AttrValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<bool> for AttrValue {
    fn from(v: bool) -> Self {
        AttrValue::Bool(v)
    }
}

impl From<i64> for AttrValue {
    fn from(v: i64) -> Self {
        AttrValue::Int(v)
    }
}

/// One file's metadata as reported by a snapshot
///
/// Identity fields are optional here because raw records may lack them;
/// the indexer rejects records it cannot key.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FileRecord {
    pub partition: Option<u32>,
    pub inode: Option<u64>,
    pub filename: Option<String>,
    pub alloc: Option<bool>,
    pub attributes: BTreeMap<String, AttrValue>,
}

impl FileRecord {
    /// An allocated record with the given identity and no attributes
    pub fn new(partition: Option<u32>, inode: u64, filename: impl Into<String>) -> Self {
        Self {
            partition,
            inode: Some(inode),
            filename: Some(filename.into()),
            alloc: Some(true),
            attributes: BTreeMap::new(),
        }
    }

    pub fn with_alloc(mut self, alloc: bool) -> Self {
        self.alloc = Some(alloc);
        self
    }

    /// Set an attribute from its textual form (see [`AttrValue::from_text`])
    pub fn with_attr(mut self, name: &str, raw: &str) -> Self {
        self.attributes
            .insert(name.to_string(), AttrValue::from_text(name, raw));
        self
    }

    pub fn with_value(mut self, name: &str, value: AttrValue) -> Self {
        self.attributes.insert(name.to_string(), value);
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&AttrValue> {
        self.attributes.get(name)
    }

    /// Build the exact-match key, or name the first missing identity field
    pub fn identity_key(&self) -> std::result::Result<IdentityKey, &'static str> {
        let inode = self.inode.ok_or("inode")?;
        let filename = self.filename.clone().ok_or("filename")?;
        Ok(IdentityKey {
            partition: self.partition,
            inode,
            filename,
        })
    }
}
