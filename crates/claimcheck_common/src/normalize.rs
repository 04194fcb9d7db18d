//! Value normalization: typed interpretations of raw claim and truth values.
//!
//! Each interpreter answers "can this text support type X?" and returns
//! `None` when it cannot. Nothing here guesses: `"maybe"` is not a boolean,
//! `"12abc"` is not a number, and `"a b"` is not a list.
//!
//! # Interpretation order
//!
//! 1. **Boolean**: closed vocabulary (`true/yes/y/t/1`, `false/no/n/f/0`)
//! 2. **Number**: strict literal grammar after dropping thousands commas, or a `%` suffix
//! 3. **List**: text containing `,` or `;`
//! 4. **Text**: canonical string form; a null reads as `"none"` here

use crate::types::RawValue;
use regex::Regex;
use std::sync::LazyLock;

static NUMBER_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?[0-9]+(?:\.[0-9]+)?(?:[eE][+-]?[0-9]+)?$").expect("valid number pattern")
});

/// Text a null value compares as in the string domain.
pub const NULL_TEXT: &str = "none";

/// One value resolved on its own, highest-priority type first.
#[derive(Debug, Clone, PartialEq)]
pub enum Interpretation {
    Boolean(bool),
    Number(f64),
    List(Vec<String>),
    Text(String),
}

impl Interpretation {
    pub fn type_name(&self) -> &'static str {
        match self {
            Interpretation::Boolean(_) => "boolean",
            Interpretation::Number(_) => "number",
            Interpretation::List(_) => "list",
            Interpretation::Text(_) => "text",
        }
    }
}

/// Resolve a single value in boolean > number > list > text order.
pub fn interpret(value: &RawValue) -> Interpretation {
    if let Some(b) = as_bool(value) {
        return Interpretation::Boolean(b);
    }
    if let Some(n) = as_number(value) {
        return Interpretation::Number(n);
    }
    if let Some(items) = as_list(value) {
        return Interpretation::List(items);
    }
    match value {
        RawValue::Null => Interpretation::Text(NULL_TEXT.to_string()),
        other => Interpretation::Text(canonical(&other.as_text())),
    }
}

/// Boolean interpretation against the fixed vocabulary.
pub fn as_bool(value: &RawValue) -> Option<bool> {
    match value {
        RawValue::Bool(b) => Some(*b),
        RawValue::Null => None,
        other => match other.as_text().trim().to_lowercase().as_str() {
            "true" | "yes" | "y" | "t" | "1" => Some(true),
            "false" | "no" | "n" | "f" | "0" => Some(false),
            _ => None,
        },
    }
}

/// Numeric interpretation.
///
/// Thousands commas are removed before matching. A trailing `%` divides by 100,
/// so `"12.3%"` reads as `0.123`.
pub fn as_number(value: &RawValue) -> Option<f64> {
    match value {
        RawValue::Number(n) => n.as_f64(),
        RawValue::Bool(_) | RawValue::Null => None,
        RawValue::Text(s) => parse_number_text(s),
    }
}

fn parse_number_text(s: &str) -> Option<f64> {
    let cleaned = s.trim().replace(',', "");

    if NUMBER_LITERAL.is_match(&cleaned) {
        return cleaned.parse::<f64>().ok();
    }

    cleaned
        .strip_suffix('%')
        .and_then(|rest| rest.trim().parse::<f64>().ok())
        .map(|pct| pct / 100.0)
}

/// List interpretation: only text carrying a `,` or `;` separator.
///
/// Fragments are canonicalized and empty fragments dropped. Text without a
/// separator is not a one-element list.
pub fn as_list(value: &RawValue) -> Option<Vec<String>> {
    if value.is_null() {
        return None;
    }
    let text = value.as_text();
    if !text.contains([',', ';']) {
        return None;
    }
    Some(
        text.split([',', ';'])
            .filter(|part| !part.trim().is_empty())
            .map(canonical)
            .collect(),
    )
}

/// Canonical string form: lowercased, trimmed, whitespace runs collapsed.
pub fn canonical(s: &str) -> String {
    s.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Classic edit distance with unit costs over Unicode scalar values.
///
/// Keeps a single DP row sized by the shorter input.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let (long, short) = if a.chars().count() >= b.chars().count() {
        (a, b)
    } else {
        (b, a)
    };
    let short: Vec<char> = short.chars().collect();

    let mut row: Vec<usize> = (0..=short.len()).collect();
    for (i, lc) in long.chars().enumerate() {
        // row[0] before overwrite is the diagonal for j = 1
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, sc) in short.iter().enumerate() {
            let above = row[j + 1];
            let cost = usize::from(lc != *sc);
            row[j + 1] = (above + 1).min(row[j] + 1).min(diagonal + cost);
            diagonal = above;
        }
    }
    row[short.len()]
}
