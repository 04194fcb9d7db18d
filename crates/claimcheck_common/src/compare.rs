//! Type-inferring comparison of a claimed value against a truth value.
//!
//! # Domain selection
//!
//! Both sides are inspected together, and the first domain in which
//! *either* side is interpretable decides the comparison:
//!
//! - **Boolean**: either side is in the boolean vocabulary
//! - **Number**: either side parses as a number
//! - **List**: either side carries a `,` or `;` separator
//! - **String**: canonical text equality, Levenshtein distance on mismatch;
//!   a null reads as `"none"`, never as empty text
//!
//! A domain claimed by only one side is a `type_mismatch_*`. Inspecting both
//! sides means `"1"` resolves the same way whether the claim or the truth
//! holds it.

use crate::normalize::{interpret, levenshtein, Interpretation};
use crate::types::RawValue;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Classification attached to every comparison outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Ok,
    /// Claim key absent from the truth table (assigned by the run, not `compare`)
    MissingTruthKey,
    TypeMismatchBool,
    TypeMismatchNumber,
    TypeMismatchList,
    MismatchBool,
    MismatchNumber,
    MismatchList,
    MismatchString,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Ok => "ok",
            ErrorKind::MissingTruthKey => "missing_truth_key",
            ErrorKind::TypeMismatchBool => "type_mismatch_bool",
            ErrorKind::TypeMismatchNumber => "type_mismatch_number",
            ErrorKind::TypeMismatchList => "type_mismatch_list",
            ErrorKind::MismatchBool => "mismatch_bool",
            ErrorKind::MismatchNumber => "mismatch_number",
            ErrorKind::MismatchList => "mismatch_list",
            ErrorKind::MismatchString => "mismatch_string",
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, ErrorKind::Ok)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Numeric tolerance band: `absolute + relative * max(1, |truth|)`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Tolerance {
    #[serde(default)]
    pub absolute: f64,
    #[serde(default)]
    pub relative: f64,
}

impl Tolerance {
    /// Exact comparison, no slack.
    pub const EXACT: Tolerance = Tolerance {
        absolute: 0.0,
        relative: 0.0,
    };

    pub fn new(absolute: f64, relative: f64) -> Self {
        Self { absolute, relative }
    }

    /// Allowed delta for a given truth value.
    ///
    /// The relative term scales by at least 1 so a truth of zero still
    /// admits the relative slack.
    pub fn band(&self, truth: f64) -> f64 {
        self.absolute + self.relative * truth.abs().max(1.0)
    }
}

/// Outcome of comparing one claim against its truth value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub matched: bool,
    pub error_kind: ErrorKind,
    /// Free-form detail: tolerance arithmetic, edit distance, or the raw pair
    pub diagnostic: String,
}

impl ComparisonResult {
    fn verdict(matched: bool, mismatch: ErrorKind, diagnostic: String) -> Self {
        Self {
            matched,
            error_kind: if matched { ErrorKind::Ok } else { mismatch },
            diagnostic,
        }
    }

    fn type_mismatch(kind: ErrorKind, claim: &RawValue, truth: &RawValue) -> Self {
        Self {
            matched: false,
            error_kind: kind,
            diagnostic: format!("claim={} truth={}", claim, truth),
        }
    }
}

/// Compare a claimed value against a truth value.
///
/// Each side is interpreted once. Equal tags compare within their domain;
/// unequal tags are a type mismatch in the higher-priority domain of the two.
pub fn compare(claim: &RawValue, truth: &RawValue, tolerance: Tolerance) -> ComparisonResult {
    use Interpretation::{Boolean, List, Number, Text};

    match (interpret(claim), interpret(truth)) {
        (Boolean(c), Boolean(t)) => {
            ComparisonResult::verdict(c == t, ErrorKind::MismatchBool, String::new())
        }
        (Number(c), Number(t)) => compare_numbers(c, t, tolerance),
        (List(c), List(t)) => {
            ComparisonResult::verdict(same_multiset(&c, &t), ErrorKind::MismatchList, String::new())
        }
        (Text(c), Text(t)) => compare_text(&c, &t),
        (Boolean(_), _) | (_, Boolean(_)) => {
            ComparisonResult::type_mismatch(ErrorKind::TypeMismatchBool, claim, truth)
        }
        (Number(_), _) | (_, Number(_)) => {
            ComparisonResult::type_mismatch(ErrorKind::TypeMismatchNumber, claim, truth)
        }
        // Only {List, Text} is left
        _ => ComparisonResult::type_mismatch(ErrorKind::TypeMismatchList, claim, truth),
    }
}

fn compare_text(claim: &str, truth: &str) -> ComparisonResult {
    if claim == truth {
        ComparisonResult::verdict(true, ErrorKind::MismatchString, String::new())
    } else {
        ComparisonResult::verdict(
            false,
            ErrorKind::MismatchString,
            format!("levenshtein={}", levenshtein(claim, truth)),
        )
    }
}

fn compare_numbers(claim: f64, truth: f64, tolerance: Tolerance) -> ComparisonResult {
    let delta = (claim - truth).abs();
    let tol = tolerance.band(truth);
    ComparisonResult::verdict(
        delta <= tol,
        ErrorKind::MismatchNumber,
        format!("delta={:?} tol={:?}", delta, tol),
    )
}

fn same_multiset(a: &[String], b: &[String]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut counts: HashMap<&str, i64> = HashMap::new();
    for item in a {
        *counts.entry(item.as_str()).or_default() += 1;
    }
    for item in b {
        *counts.entry(item.as_str()).or_default() -= 1;
    }
    counts.values().all(|&n| n == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cmp(claim: &str, truth: &str) -> ComparisonResult {
        compare(&RawValue::text(claim), &RawValue::text(truth), Tolerance::EXACT)
    }

    #[test]
    fn golden_bool_domain_wins_over_number() {
        let result = cmp("1", "true");
        assert!(result.matched);
        assert_eq!(result.error_kind, ErrorKind::Ok);
        assert_eq!(result.diagnostic, "");
    }

    #[test]
    fn golden_bool_mismatch() {
        let result = cmp("yes", "F");
        assert!(!result.matched);
        assert_eq!(result.error_kind, ErrorKind::MismatchBool);
    }

    #[test]
    fn golden_bool_type_mismatch() {
        let result = cmp("yes", "42");
        assert_eq!(result.error_kind, ErrorKind::TypeMismatchBool);
        assert_eq!(result.diagnostic, "claim=yes truth=42");

        // "1" is boolean-looking, "1.0" is not
        assert_eq!(cmp("1", "1.0").error_kind, ErrorKind::TypeMismatchBool);
    }

    #[test]
    fn golden_number_exact() {
        let result = cmp("95", "95.0");
        assert!(result.matched);
        assert_eq!(result.diagnostic, "delta=0.0 tol=0.0");
    }

    #[test]
    fn golden_number_mismatch_reports_delta() {
        let result = cmp("10", "12");
        assert!(!result.matched);
        assert_eq!(result.error_kind, ErrorKind::MismatchNumber);
        assert_eq!(result.diagnostic, "delta=2.0 tol=0.0");
    }

    #[test]
    fn golden_number_tolerance_band() {
        let claim = RawValue::text("10.5");
        let truth = RawValue::text("10");
        assert!(!compare(&claim, &truth, Tolerance::new(0.4, 0.0)).matched);
        assert!(compare(&claim, &truth, Tolerance::new(0.5, 0.0)).matched);
        // relative: 0.06 * 10 = 0.6
        assert!(compare(&claim, &truth, Tolerance::new(0.0, 0.06)).matched);
        assert!(!compare(&claim, &truth, Tolerance::new(0.0, 0.04)).matched);
    }

    #[test]
    fn golden_relative_tolerance_near_zero_truth() {
        let result = compare(
            &RawValue::text("0.01"),
            &RawValue::text("0.0"),
            Tolerance::new(0.0, 0.01),
        );
        assert!(result.matched);
    }

    #[test]
    fn golden_number_type_mismatch() {
        let result = cmp("12", "twelve");
        assert_eq!(result.error_kind, ErrorKind::TypeMismatchNumber);
        assert_eq!(result.diagnostic, "claim=12 truth=twelve");
    }

    #[test]
    fn golden_percent_against_fraction() {
        assert!(cmp("12.5%", "0.125").matched);
        assert!(!cmp("12.5%", "12.5").matched);
    }

    #[test]
    fn golden_list_multiset() {
        assert!(cmp("a,b,a", "a; A ;b").matched);
        let result = cmp("a,b,a", "a,b,b");
        assert!(!result.matched);
        assert_eq!(result.error_kind, ErrorKind::MismatchList);
    }

    #[test]
    fn golden_list_type_mismatch() {
        let result = cmp("red, green", "red");
        assert_eq!(result.error_kind, ErrorKind::TypeMismatchList);
    }

    #[test]
    fn golden_string_fallback() {
        let result = cmp("  New   York ", "new york");
        assert!(result.matched);
        assert_eq!(result.error_kind, ErrorKind::Ok);

        let result = cmp("Paris", "Pariss");
        assert!(!result.matched);
        assert_eq!(result.error_kind, ErrorKind::MismatchString);
        assert_eq!(result.diagnostic, "levenshtein=1");
    }

    #[test]
    fn golden_native_bool_against_text() {
        let result = compare(&RawValue::Bool(true), &RawValue::text("Yes"), Tolerance::EXACT);
        assert!(result.matched);
    }

    #[test]
    fn golden_null_is_not_empty_text() {
        let result = compare(&RawValue::Null, &RawValue::text(""), Tolerance::EXACT);
        assert!(!result.matched);
        assert_eq!(result.error_kind, ErrorKind::MismatchString);
        assert_eq!(result.diagnostic, "levenshtein=4");

        let result = compare(&RawValue::text("  "), &RawValue::Null, Tolerance::EXACT);
        assert_eq!(result.error_kind, ErrorKind::MismatchString);
    }

    #[test]
    fn golden_null_against_typed_values() {
        assert!(compare(&RawValue::Null, &RawValue::Null, Tolerance::EXACT).matched);
        assert!(compare(&RawValue::text("None"), &RawValue::Null, Tolerance::EXACT).matched);
        assert_eq!(
            compare(&RawValue::Null, &RawValue::text("yes"), Tolerance::EXACT).error_kind,
            ErrorKind::TypeMismatchBool
        );
        assert_eq!(
            compare(&RawValue::text("3.5"), &RawValue::Null, Tolerance::EXACT).error_kind,
            ErrorKind::TypeMismatchNumber
        );
        assert_eq!(
            compare(&RawValue::Null, &RawValue::text("a;b"), Tolerance::EXACT).error_kind,
            ErrorKind::TypeMismatchList
        );
    }

    #[test]
    fn golden_type_mismatch_uses_higher_domain() {
        // number vs list: the number domain decides
        assert_eq!(cmp("1,234", "a,b").error_kind, ErrorKind::TypeMismatchNumber);
        // boolean vs number: the boolean domain decides
        assert_eq!(cmp("2", "no").error_kind, ErrorKind::TypeMismatchBool);
        assert_eq!(cmp("x", "a;b").error_kind, ErrorKind::TypeMismatchList);
    }

    #[test]
    fn test_error_kind_wire_names() {
        assert_eq!(
            serde_json::to_string(&ErrorKind::TypeMismatchNumber).unwrap(),
            "\"type_mismatch_number\""
        );
        assert_eq!(ErrorKind::MissingTruthKey.to_string(), "missing_truth_key");
        assert!(ErrorKind::Ok.is_ok());
    }
}
