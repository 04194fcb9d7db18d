//! Newline-delimited JSON claims and truth (`.jsonl`, `.ndjson`).
//!
//! Blank lines are skipped. A line that is not valid JSON aborts the load
//! with its 1-based line number.

use super::{claims_from_document, insert_truth_record, RecordLoader};
use crate::error::{ClaimCheckError, Result};
use crate::types::{Claim, TruthTable};
use serde_json::Value;
use tracing::warn;

/// `.jsonl` / `.ndjson` loader.
pub struct JsonLinesLoader;

impl JsonLinesLoader {
    fn documents(bytes: &[u8]) -> Result<Vec<(usize, Value)>> {
        let mut docs = Vec::new();
        for (idx, line) in bytes.split(|b| *b == b'\n').enumerate() {
            if line.iter().all(u8::is_ascii_whitespace) {
                continue;
            }
            let doc = serde_json::from_slice(line).map_err(|source| ClaimCheckError::JsonLine {
                line: idx + 1,
                source,
            })?;
            docs.push((idx + 1, doc));
        }
        Ok(docs)
    }
}

impl RecordLoader for JsonLinesLoader {
    fn parse_claims(&self, bytes: &[u8]) -> Result<Vec<Claim>> {
        let mut claims = Vec::new();
        for (_, doc) in Self::documents(bytes)? {
            claims_from_document(doc, &mut claims);
        }
        Ok(claims)
    }

    fn parse_truth(&self, bytes: &[u8]) -> Result<TruthTable> {
        let mut truth = TruthTable::new();
        for (line, doc) in Self::documents(bytes)? {
            let inserted = match doc {
                Value::Object(obj) => insert_truth_record(obj, &mut truth),
                _ => false,
            };
            if !inserted {
                warn!(line, "skipping truth line without a key");
            }
        }
        Ok(truth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RawValue;

    #[test]
    fn test_claims_per_line() {
        let input = concat!(
            r#"{"example_id": "e1", "key": "a", "value": "1"}"#,
            "\n\n",
            r#"{"example_id": "e2", "claims": [{"key": "b", "value": false}]}"#,
            "\n",
        );
        let claims = JsonLinesLoader.parse_claims(input.as_bytes()).unwrap();
        assert_eq!(
            claims,
            vec![Claim::new("e1", "a", "1"), Claim::new("e2", "b", false)]
        );
    }

    #[test]
    fn test_truth_per_line() {
        let input = "{\"key\": \"a\", \"truth_value\": \"x\"}\r\n[1, 2]\n{\"key\": \"b\", \"truth_value\": 2}\n";
        let truth = JsonLinesLoader.parse_truth(input.as_bytes()).unwrap();
        assert_eq!(truth.len(), 2);
        assert_eq!(truth.get("a"), Some(&RawValue::text("x")));
        assert_eq!(truth.get("b"), Some(&RawValue::from(2i64)));
    }

    #[test]
    fn test_bad_line_reports_line_number() {
        let input = "{\"key\": \"a\", \"truth_value\": 1}\n\n{oops\n";
        let err = JsonLinesLoader.parse_truth(input.as_bytes()).unwrap_err();
        match err {
            ClaimCheckError::JsonLine { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
