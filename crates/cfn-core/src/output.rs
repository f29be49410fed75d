//! Generated output
//!
//! Documents are written as JSON with object keys sorted at every depth, so
//! regenerating from unchanged inputs yields a byte-identical file.

use crate::error::{CoreError, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::info;

const PRETTY_INDENT: &[u8] = b"    ";

/// Rebuild `value` with every object's keys in sorted order.
///
/// `serde_json::Map` is only sorted when the `preserve_order` feature is off
/// in the whole dependency graph; this makes the output independent of that.
pub fn canonicalize(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));

            let mut sorted = Map::new();
            for (key, value) in entries {
                sorted.insert(key, canonicalize(value));
            }
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(canonicalize).collect()),
        other => other,
    }
}

/// Serialize `document` canonically; compact unless `pretty`.
pub fn to_canonical_string(document: &Value, pretty: bool) -> Result<String> {
    let document = canonicalize(document.clone());

    if !pretty {
        return Ok(serde_json::to_string(&document)?);
    }

    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(PRETTY_INDENT));
    document.serialize(&mut serializer)?;

    // serde_json only ever emits UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write `document` to `directory/file_name`, creating the directory.
///
/// An existing file is overwritten. The write is not atomic.
pub fn write_document(
    directory: &Path,
    file_name: &str,
    document: &Value,
    pretty: bool,
) -> Result<PathBuf> {
    if !directory.exists() {
        std::fs::create_dir_all(directory).map_err(|e| CoreError::io(directory, e))?;
    }

    let path = directory.join(file_name);
    let body = to_canonical_string(document, pretty)?;
    std::fs::write(&path, &body).map_err(|e| CoreError::io(&path, e))?;

    info!(file = %path.display(), bytes = body.len(), pretty, "Output written");
    Ok(path)
}
