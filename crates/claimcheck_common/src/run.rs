//! Validation run: join claims against truth and accumulate the outcome.
//!
//! Every claim yields exactly one [`ReportRow`], in claim input order. Claims
//! whose key is absent from the truth table are counted under
//! `missing_in_truth` and never reach the comparator or `by_error_type`.

use crate::compare::{compare, ComparisonResult, ErrorKind, Tolerance};
use crate::normalize::interpret;
use crate::types::{Claim, RawValue, TruthTable};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// One line of the row-level report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub example_id: String,
    pub key: String,
    pub claimed_value: RawValue,
    /// `Null` when the key is missing from the truth table
    pub truth_value: RawValue,
    pub matched: bool,
    pub error_kind: ErrorKind,
    pub diagnostic: String,
}

impl ReportRow {
    fn missing(claim: &Claim) -> Self {
        Self {
            example_id: claim.example_id.clone(),
            key: claim.key.clone(),
            claimed_value: claim.claimed_value.clone(),
            truth_value: RawValue::Null,
            matched: false,
            error_kind: ErrorKind::MissingTruthKey,
            diagnostic: String::new(),
        }
    }

    fn compared(claim: &Claim, truth_value: &RawValue, result: ComparisonResult) -> Self {
        Self {
            example_id: claim.example_id.clone(),
            key: claim.key.clone(),
            claimed_value: claim.claimed_value.clone(),
            truth_value: truth_value.clone(),
            matched: result.matched,
            error_kind: result.error_kind,
            diagnostic: result.diagnostic,
        }
    }
}

/// Aggregate counters for a run.
///
/// An accumulator value: feed it one outcome at a time with `record_*`, or
/// combine partial summaries with [`RunSummary::merge`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub total_claims: u64,
    pub matched: u64,
    pub mismatched: u64,
    pub missing_in_truth: u64,
    /// Comparator mismatches per kind; `ok` never appears
    pub by_error_type: BTreeMap<ErrorKind, u64>,
    /// `matched / total_claims`, `None` for an empty run
    pub accuracy: Option<f64>,
}

impl RunSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a claim whose key has no truth value.
    pub fn record_missing(&mut self) {
        self.total_claims += 1;
        self.missing_in_truth += 1;
        self.update_accuracy();
    }

    /// Record a comparator outcome.
    pub fn record_comparison(&mut self, result: &ComparisonResult) {
        self.total_claims += 1;
        if result.matched {
            self.matched += 1;
        } else {
            self.mismatched += 1;
            *self.by_error_type.entry(result.error_kind).or_insert(0) += 1;
        }
        self.update_accuracy();
    }

    /// Fold another partial summary into this one. Order does not matter.
    pub fn merge(&mut self, other: &RunSummary) {
        self.total_claims += other.total_claims;
        self.matched += other.matched;
        self.mismatched += other.mismatched;
        self.missing_in_truth += other.missing_in_truth;
        for (kind, count) in &other.by_error_type {
            *self.by_error_type.entry(*kind).or_insert(0) += count;
        }
        self.update_accuracy();
    }

    fn update_accuracy(&mut self) {
        self.accuracy = if self.total_claims == 0 {
            None
        } else {
            Some(self.matched as f64 / self.total_claims as f64)
        };
    }

    /// Mismatches recorded for one kind.
    pub fn count_for(&self, kind: ErrorKind) -> u64 {
        self.by_error_type.get(&kind).copied().unwrap_or(0)
    }
}

/// Rows plus summary for a completed run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub rows: Vec<ReportRow>,
    pub summary: RunSummary,
}

/// Validate every claim against the truth table.
pub fn validate(claims: &[Claim], truth: &TruthTable, tolerance: Tolerance) -> ValidationReport {
    let mut rows = Vec::with_capacity(claims.len());
    let mut summary = RunSummary::new();

    for claim in claims {
        let row = match truth.get(&claim.key) {
            None => {
                debug!(example_id = %claim.example_id, key = %claim.key, "no truth value for key");
                summary.record_missing();
                ReportRow::missing(claim)
            }
            Some(truth_value) => {
                let result = compare(&claim.claimed_value, truth_value, tolerance);
                if !result.matched {
                    debug!(
                        example_id = %claim.example_id,
                        key = %claim.key,
                        kind = %result.error_kind,
                        claim_type = interpret(&claim.claimed_value).type_name(),
                        truth_type = interpret(truth_value).type_name(),
                        diagnostic = %result.diagnostic,
                        "claim mismatch"
                    );
                }
                summary.record_comparison(&result);
                ReportRow::compared(claim, truth_value, result)
            }
        };
        rows.push(row);
    }

    info!(
        total = summary.total_claims,
        matched = summary.matched,
        mismatched = summary.mismatched,
        missing = summary.missing_in_truth,
        "validation run complete"
    );

    ValidationReport { rows, summary }
}
