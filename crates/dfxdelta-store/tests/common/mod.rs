use std::path::{Path, PathBuf};

use serde_json::{json, Value};

/// Write a snapshot document with the given file objects into `dir`
#[allow(dead_code)]
pub fn write_snapshot(dir: &Path, name: &str, fileobjects: Value) -> PathBuf {
    let path = dir.join(name);
    let document = json!({
        "version": "1.1.0",
        "sources": [format!("{}.E01", name)],
        "fileobjects": fileobjects,
    });
    std::fs::write(&path, serde_json::to_string_pretty(&document).unwrap()).unwrap();
    path
}
