//! Best-effort `key: value` extraction from free-text model responses.
//!
//! This is a lossy heuristic with no grammar behind it. Prose such as
//! "Note: see below" yields a claim, and values containing `;` are cut
//! short. Callers should prefer structured claims when available.

use crate::normalize::canonical;
use regex::Regex;
use std::sync::LazyLock;

/// Key is a run of letters, digits, space, `_`, `.`, `-`, `/`; value runs to `;` or end of line.
static KEY_VALUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<key>[A-Za-z0-9_ .\-/]+)\s*[:=]\s*(?P<val>[^\n;]+)").expect("valid key/value pattern")
});

/// Extract `(canonical key, trimmed value)` pairs in order of appearance.
pub fn extract_key_values(text: &str) -> Vec<(String, String)> {
    KEY_VALUE
        .captures_iter(text)
        .map(|caps| {
            (
                canonical(&caps["key"]),
                caps["val"].trim().to_string(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(text: &str) -> Vec<(String, String)> {
        extract_key_values(text)
    }

    #[test]
    fn test_colon_and_equals() {
        assert_eq!(
            pairs("Total Revenue: 1,200\nmargin = 12%"),
            vec![
                ("total revenue".to_string(), "1,200".to_string()),
                ("margin".to_string(), "12%".to_string()),
            ]
        );
    }

    #[test]
    fn test_semicolon_ends_value() {
        assert_eq!(
            pairs("a: 1; b: 2"),
            vec![("a".to_string(), "1".to_string()), ("b".to_string(), "2".to_string())]
        );
    }

    #[test]
    fn test_key_charset() {
        assert_eq!(
            pairs("gdp/capita.2020-est: 42"),
            vec![("gdp/capita.2020-est".to_string(), "42".to_string())]
        );
    }

    #[test]
    fn test_no_pairs() {
        assert!(pairs("The answer is unclear.").is_empty());
        assert!(pairs("").is_empty());
    }
}
