//! CLI - Command-line argument parsing
//!
//! Keeps argument parsing separate from execution logic.

use clap::Parser;
use std::path::PathBuf;

/// Validate model-generated claims against ground-truth data
#[derive(Parser, Debug)]
#[command(name = "claimcheck")]
#[command(about = "Validate LLM claims against ground-truth data", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to claims file (CSV/JSON/JSONL)
    #[arg(long)]
    pub claims: PathBuf,

    /// Path to ground-truth file (CSV/JSON/JSONL)
    #[arg(long)]
    pub truth: PathBuf,

    /// Path to output CSV report [default: validate_report.csv]
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Path to output JSON summary [default: validate_summary.json]
    #[arg(long)]
    pub summary: Option<PathBuf>,

    /// Absolute tolerance for numeric comparison [default: 0.0]
    #[arg(long, allow_negative_numbers = true)]
    pub atol: Option<f64>,

    /// Relative tolerance for numeric comparison [default: 0.0]
    #[arg(long, allow_negative_numbers = true)]
    pub rtol: Option<f64>,

    /// Config file (overrides $CLAIMCHECK_CONFIG and defaults)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the summary as JSON on stdout
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
