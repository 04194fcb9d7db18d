//! Error types for claimcheck.
//!
//! Only load-time and configuration failures are errors. Per-claim
//! disagreements are reported as [`crate::compare::ErrorKind`] rows and never
//! abort a run.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClaimCheckError {
    #[error("Unsupported file type for {}: expected .csv, .json, .jsonl or .ndjson", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("Claims CSV must have columns for key and claimed_value (found: {})", found.join(", "))]
    MissingClaimColumns { found: Vec<String> },

    #[error("Truth CSV must have at least two columns (found {columns})")]
    TruthTableTooNarrow { columns: usize },

    #[error("Unsupported JSON truth format: expected an object or a list of objects, got {0}")]
    UnsupportedTruthShape(String),

    #[error("Invalid JSON on line {line}: {source}")]
    JsonLine {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClaimCheckError {
    /// Process exit code for this failure (sysexits-style).
    pub fn code(&self) -> i32 {
        match self {
            ClaimCheckError::UnsupportedFormat { .. } => 64,
            ClaimCheckError::MissingClaimColumns { .. } => 64,
            ClaimCheckError::TruthTableTooNarrow { .. } => 64,
            ClaimCheckError::UnsupportedTruthShape(_) => 64,
            ClaimCheckError::JsonLine { .. } => 64,
            ClaimCheckError::Csv(_) => 64,
            ClaimCheckError::Json(_) => 64,
            ClaimCheckError::Io(_) => 66,
            ClaimCheckError::Config(_) => 78,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClaimCheckError>;
