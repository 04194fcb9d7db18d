//! Validate command - load inputs, run the comparison, write outputs.

use crate::cli::Cli;
use anyhow::{Context, Result};
use claimcheck_common::config::validate_tolerance;
use claimcheck_common::{
    load_claims, load_truth, validate, ClaimCheckConfig, RunSummary, Tolerance,
};
use std::path::PathBuf;
use tracing::info;

/// Effective settings after merging CLI flags over the config file.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSettings {
    pub claims: PathBuf,
    pub truth: PathBuf,
    pub report: PathBuf,
    pub summary: PathBuf,
    pub tolerance: Tolerance,
}

impl RunSettings {
    pub fn resolve(cli: &Cli, config: &ClaimCheckConfig) -> Result<Self> {
        let tolerance = Tolerance::new(
            cli.atol.unwrap_or(config.tolerance.absolute),
            cli.rtol.unwrap_or(config.tolerance.relative),
        );
        validate_tolerance(&tolerance)?;

        Ok(Self {
            claims: cli.claims.clone(),
            truth: cli.truth.clone(),
            report: cli.out.clone().unwrap_or_else(|| config.output.report.clone()),
            summary: cli
                .summary
                .clone()
                .unwrap_or_else(|| config.output.summary.clone()),
            tolerance,
        })
    }
}

/// Run a full validation and return the summary.
///
/// Both inputs are loaded before any comparison, so a load failure never
/// leaves a partial report behind.
pub fn execute(cli: &Cli) -> Result<RunSummary> {
    let config = ClaimCheckConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    let settings = RunSettings::resolve(cli, &config)?;

    let truth = load_truth(&settings.truth)
        .with_context(|| format!("Failed to load truth from {}", settings.truth.display()))?;
    let claims = load_claims(&settings.claims)
        .with_context(|| format!("Failed to load claims from {}", settings.claims.display()))?;

    info!(
        atol = settings.tolerance.absolute,
        rtol = settings.tolerance.relative,
        "comparing {} claims against {} truth keys",
        claims.len(),
        truth.len()
    );
    let report = validate(&claims, &truth, settings.tolerance);

    report
        .save(&settings.report, &settings.summary)
        .context("Failed to write report")?;

    Ok(report.summary)
}

/// One-line human summary.
pub fn summary_line(summary: &RunSummary) -> String {
    let accuracy = summary
        .accuracy
        .map(|a| format!("{:.1}%", a * 100.0))
        .unwrap_or_else(|| "n/a".to_string());
    format!(
        "{} claims: {} matched, {} mismatched, {} missing in truth (accuracy {})",
        summary.total_claims,
        summary.matched,
        summary.mismatched,
        summary.missing_in_truth,
        accuracy
    )
}
