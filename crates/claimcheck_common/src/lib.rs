//! claimcheck common - claim validation against ground truth.
//!
//! Loads claims and truth tables from CSV / JSON / JSON Lines, compares each
//! claim under type-aware tolerant rules, and emits a row-level report plus
//! an aggregate summary.

pub mod compare;
pub mod config;
pub mod error;
pub mod loader;
pub mod normalize;
pub mod report;
pub mod run;
pub mod types;

pub use compare::{compare, ComparisonResult, ErrorKind, Tolerance};
pub use config::ClaimCheckConfig;
pub use error::{ClaimCheckError, Result};
pub use loader::{load_claims, load_truth, RecordLoader, SourceFormat};
pub use run::{validate, ReportRow, RunSummary, ValidationReport};
pub use types::{Claim, RawValue, TruthTable};
