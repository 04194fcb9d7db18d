//! CSV claims and truth tables.
//!
//! Columns are located by header name (trimmed, case-insensitive). Every
//! cell is read as text; short rows yield empty cells.

use super::RecordLoader;
use crate::error::{ClaimCheckError, Result};
use crate::types::{Claim, RawValue, TruthTable};
use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

const CLAIM_ID_ALIASES: &[&str] = &["example_id", "id", "prompt_id", "sample_id"];
const CLAIM_KEY_ALIASES: &[&str] = &["key", "field", "metric", "name"];
const CLAIM_VALUE_ALIASES: &[&str] = &["claimed_value", "value", "answer", "prediction"];

const TRUTH_KEY_ALIASES: &[&str] = &["key", "id", "name"];
const TRUTH_VALUE_ALIASES: &[&str] = &["truth_value", "value", "expected"];

/// CSV loader.
pub struct TabularLoader;

impl RecordLoader for TabularLoader {
    fn parse_claims(&self, bytes: &[u8]) -> Result<Vec<Claim>> {
        let mut reader = ReaderBuilder::new().flexible(true).from_reader(bytes);
        let headers = trimmed_headers(reader.headers()?);

        let (key_col, value_col) = match (
            find_column(&headers, CLAIM_KEY_ALIASES),
            find_column(&headers, CLAIM_VALUE_ALIASES),
        ) {
            (Some(k), Some(v)) => (k, v),
            _ => return Err(ClaimCheckError::MissingClaimColumns { found: headers }),
        };
        // Without an id column, claims group by their key
        let id_col = find_column(&headers, CLAIM_ID_ALIASES).unwrap_or(key_col);
        debug!(id_col, key_col, value_col, "claims CSV columns");

        let mut claims = Vec::new();
        for record in reader.records() {
            let record = record?;
            claims.push(Claim::new(
                cell(&record, id_col),
                cell(&record, key_col),
                RawValue::text(cell(&record, value_col)),
            ));
        }
        Ok(claims)
    }

    fn parse_truth(&self, bytes: &[u8]) -> Result<TruthTable> {
        let mut reader = ReaderBuilder::new().flexible(true).from_reader(bytes);
        let headers = trimmed_headers(reader.headers()?);

        let (key_col, value_col) = match (
            find_column(&headers, TRUTH_KEY_ALIASES),
            find_column(&headers, TRUTH_VALUE_ALIASES),
        ) {
            (Some(k), Some(v)) => (k, v),
            // Positional fallback: first two columns
            _ if headers.len() >= 2 => (0, 1),
            _ => {
                return Err(ClaimCheckError::TruthTableTooNarrow {
                    columns: headers.len(),
                })
            }
        };
        debug!(key_col, value_col, "truth CSV columns");

        let mut truth = TruthTable::new();
        for record in reader.records() {
            let record = record?;
            truth.insert(cell(&record, key_col), RawValue::text(cell(&record, value_col)));
        }
        Ok(truth)
    }
}

fn trimmed_headers(record: &StringRecord) -> Vec<String> {
    record.iter().map(|h| h.trim().to_string()).collect()
}

fn find_column(headers: &[String], aliases: &[&str]) -> Option<usize> {
    headers
        .iter()
        .position(|h| aliases.contains(&h.to_lowercase().as_str()))
}

fn cell(record: &StringRecord, idx: usize) -> &str {
    record.get(idx).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_standard_columns() {
        let csv = "example_id,key,claimed_value\ne1,score,95\ne1,pass,yes\n";
        let claims = TabularLoader.parse_claims(csv.as_bytes()).unwrap();
        assert_eq!(
            claims,
            vec![Claim::new("e1", "score", "95"), Claim::new("e1", "pass", "yes")]
        );
    }

    #[test]
    fn test_claims_aliases_and_case() {
        let csv = " Sample_ID ,Metric,Prediction,extra\ns1,acc,0.9,x\n";
        let claims = TabularLoader.parse_claims(csv.as_bytes()).unwrap();
        assert_eq!(claims, vec![Claim::new("s1", "acc", "0.9")]);
    }

    #[test]
    fn test_claims_key_doubles_as_id() {
        let csv = "field,answer\ncolor,blue\n";
        let claims = TabularLoader.parse_claims(csv.as_bytes()).unwrap();
        assert_eq!(claims, vec![Claim::new("color", "color", "blue")]);
    }

    #[test]
    fn test_claims_missing_columns() {
        let csv = "example_id,foo\ne1,bar\n";
        let err = TabularLoader.parse_claims(csv.as_bytes()).unwrap_err();
        match err {
            ClaimCheckError::MissingClaimColumns { found } => {
                assert_eq!(found, vec!["example_id".to_string(), "foo".to_string()])
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_claims_short_row() {
        let csv = "id,key,value\ne1,k\n";
        let claims = TabularLoader.parse_claims(csv.as_bytes()).unwrap();
        assert_eq!(claims, vec![Claim::new("e1", "k", "")]);
    }

    #[test]
    fn test_truth_named_columns() {
        let csv = "notes,Expected,Key\nfoo,42,answer\n";
        let truth = TabularLoader.parse_truth(csv.as_bytes()).unwrap();
        assert_eq!(truth.get("answer"), Some(&RawValue::text("42")));
    }

    #[test]
    fn test_truth_positional_fallback() {
        let csv = "metric,gold\nscore,95.0\n";
        let truth = TabularLoader.parse_truth(csv.as_bytes()).unwrap();
        assert_eq!(truth.get("score"), Some(&RawValue::text("95.0")));
    }

    #[test]
    fn test_truth_too_narrow() {
        let err = TabularLoader.parse_truth("only\nx\n".as_bytes()).unwrap_err();
        assert!(matches!(err, ClaimCheckError::TruthTableTooNarrow { columns: 1 }));

        let err = TabularLoader.parse_truth(b"").unwrap_err();
        assert!(matches!(err, ClaimCheckError::TruthTableTooNarrow { columns: 0 }));
    }
}
