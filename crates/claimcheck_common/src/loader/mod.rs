//! Record loading for claims and truth sources.
//!
//! Every physical format implements [`RecordLoader`], and
//! [`SourceFormat::from_path`] picks one by file extension.
//!
//! # Supported Sources
//!
//! - `.csv`: header-aliased columns → `TabularLoader`
//! - `.json`: one document, object or array → `JsonLoader`
//! - `.jsonl` / `.ndjson`: one document per line → `JsonLinesLoader`
//!
//! JSON claim documents may also carry a free-text `response`, which is
//! mined with the best-effort [`extract::extract_key_values`] heuristic.

pub mod extract;
pub mod json;
pub mod json_lines;
pub mod tabular;

pub use extract::extract_key_values;
pub use json::JsonLoader;
pub use json_lines::JsonLinesLoader;
pub use tabular::TabularLoader;

use crate::error::{ClaimCheckError, Result};
use crate::types::{Claim, RawValue, TruthTable};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Physical format of a claims or truth file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceFormat {
    Csv,
    Json,
    JsonLines,
}

impl SourceFormat {
    /// Detect the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("csv") => Ok(SourceFormat::Csv),
            Some("json") => Ok(SourceFormat::Json),
            Some("jsonl") | Some("ndjson") => Ok(SourceFormat::JsonLines),
            _ => Err(ClaimCheckError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    pub fn loader(&self) -> &'static dyn RecordLoader {
        match self {
            SourceFormat::Csv => &TabularLoader,
            SourceFormat::Json => &JsonLoader,
            SourceFormat::JsonLines => &JsonLinesLoader,
        }
    }
}

/// Parses one physical format into claims or a truth table.
pub trait RecordLoader {
    fn parse_claims(&self, bytes: &[u8]) -> Result<Vec<Claim>>;

    fn parse_truth(&self, bytes: &[u8]) -> Result<TruthTable>;
}

/// Read and parse a claims file, dispatching on its extension.
pub fn load_claims(path: &Path) -> Result<Vec<Claim>> {
    let format = SourceFormat::from_path(path)?;
    let bytes = fs::read(path)?;
    let claims = format.loader().parse_claims(&bytes)?;
    info!(path = %path.display(), ?format, count = claims.len(), "loaded claims");
    Ok(claims)
}

/// Read and parse a truth file, dispatching on its extension.
pub fn load_truth(path: &Path) -> Result<TruthTable> {
    let format = SourceFormat::from_path(path)?;
    let bytes = fs::read(path)?;
    let truth = format.loader().parse_truth(&bytes)?;
    info!(path = %path.display(), ?format, keys = truth.len(), "loaded truth table");
    if truth.is_empty() {
        warn!(path = %path.display(), "truth table is empty; every claim will be missing");
    }
    Ok(truth)
}

/// Collect claims from one JSON document, recursing through arrays.
///
/// Object shapes, first match wins:
/// 1. `{"example_id", "claims": [{"key", "value"}, ...]}`
/// 2. `{"example_id", "key", "claimed_value" | "value"}`
/// 3. `{"example_id", "response": "free text"}`
pub(crate) fn claims_from_document(doc: Value, out: &mut Vec<Claim>) {
    match doc {
        Value::Array(items) => {
            for item in items {
                claims_from_document(item, out);
            }
        }
        Value::Object(mut obj) => {
            let example_id = obj
                .remove("example_id")
                .map(value_text)
                .unwrap_or_default();

            if let Some(Value::Array(sub_claims)) = obj.remove("claims") {
                for sub in sub_claims {
                    match sub {
                        Value::Object(mut c) if c.contains_key("key") && c.contains_key("value") => {
                            let key = c.remove("key").map(value_text).unwrap_or_default();
                            let value = c.remove("value").map(RawValue::from).unwrap_or_default();
                            out.push(Claim::new(example_id.clone(), key, value));
                        }
                        other => debug!(example_id = %example_id, ?other, "skipping malformed sub-claim"),
                    }
                }
            } else if obj.contains_key("key")
                && (obj.contains_key("claimed_value") || obj.contains_key("value"))
            {
                let key = obj.remove("key").map(value_text).unwrap_or_default();
                let value = obj
                    .remove("claimed_value")
                    .or_else(|| obj.remove("value"))
                    .map(RawValue::from)
                    .unwrap_or_default();
                out.push(Claim::new(example_id, key, value));
            } else if let Some(response) = obj.remove("response") {
                let pairs = extract_key_values(&value_text(response));
                debug!(example_id = %example_id, extracted = pairs.len(), "extracted claims from response");
                for (key, value) in pairs {
                    out.push(Claim::new(example_id.clone(), key, value));
                }
            } else {
                debug!(example_id = %example_id, "document matches no claim shape");
            }
        }
        other => debug!(?other, "ignoring non-object claim document"),
    }
}

/// Insert a `{"key", "truth_value"}` object into the table.
///
/// Returns false when the object has no `key`.
pub(crate) fn insert_truth_record(mut obj: Map<String, Value>, truth: &mut TruthTable) -> bool {
    match obj.remove("key") {
        Some(key) => {
            let value = obj
                .remove("truth_value")
                .map(RawValue::from)
                .unwrap_or_default();
            truth.insert(value_text(key), value);
            true
        }
        None => false,
    }
}

/// Textual form of a JSON value used for ids and keys.
pub(crate) fn value_text(value: Value) -> String {
    RawValue::from(value).to_string()
}
