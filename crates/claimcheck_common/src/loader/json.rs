//! Single-document JSON claims and truth.

use super::{claims_from_document, insert_truth_record, RecordLoader};
use crate::error::{ClaimCheckError, Result};
use crate::types::{Claim, RawValue, TruthTable};
use serde_json::Value;
use tracing::debug;

/// `.json` loader.
pub struct JsonLoader;

impl RecordLoader for JsonLoader {
    fn parse_claims(&self, bytes: &[u8]) -> Result<Vec<Claim>> {
        let doc: Value = serde_json::from_slice(bytes)?;
        let mut claims = Vec::new();
        claims_from_document(doc, &mut claims);
        Ok(claims)
    }

    /// Accepts a flat `{key: value}` object or a list of `{key, truth_value}` objects.
    fn parse_truth(&self, bytes: &[u8]) -> Result<TruthTable> {
        let doc: Value = serde_json::from_slice(bytes)?;
        match doc {
            Value::Object(map) => Ok(map
                .into_iter()
                .map(|(key, value)| (key, RawValue::from(value)))
                .collect()),
            Value::Array(items) => {
                let mut truth = TruthTable::new();
                for item in items {
                    match item {
                        Value::Object(obj) => {
                            if !insert_truth_record(obj, &mut truth) {
                                debug!("skipping truth record without key");
                            }
                        }
                        other => debug!(?other, "skipping non-object truth record"),
                    }
                }
                Ok(truth)
            }
            other => Err(ClaimCheckError::UnsupportedTruthShape(json_type_name(&other).to_string())),
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
