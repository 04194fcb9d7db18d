//! claimcheck configuration.
//!
//! Config file: `--config <PATH>`, `$CLAIMCHECK_CONFIG`,
//! `$XDG_CONFIG_HOME/claimcheck/config.toml` or `~/.config/claimcheck/config.toml`.
//! Every section and field is optional.

use crate::compare::Tolerance;
use crate::error::{ClaimCheckError, Result};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_REPORT_PATH: &str = "validate_report.csv";
pub const DEFAULT_SUMMARY_PATH: &str = "validate_summary.json";

/// Output file locations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_report_path")]
    pub report: PathBuf,

    #[serde(default = "default_summary_path")]
    pub summary: PathBuf,
}

fn default_report_path() -> PathBuf {
    PathBuf::from(DEFAULT_REPORT_PATH)
}

fn default_summary_path() -> PathBuf {
    PathBuf::from(DEFAULT_SUMMARY_PATH)
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            report: default_report_path(),
            summary: default_summary_path(),
        }
    }
}

/// Main configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClaimCheckConfig {
    /// Numeric tolerance band
    #[serde(default)]
    pub tolerance: Tolerance,

    #[serde(default)]
    pub output: OutputConfig,
}

impl ClaimCheckConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: ClaimCheckConfig =
            toml::from_str(contents).map_err(|e| ClaimCheckError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from an explicit file, which must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            ClaimCheckError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&contents).map_err(|e| match e {
            ClaimCheckError::Config(msg) => {
                ClaimCheckError::Config(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }

    /// Discovered config file path, if any.
    ///
    /// Priority:
    /// 1. $CLAIMCHECK_CONFIG, when set, is the only candidate
    /// 2. $XDG_CONFIG_HOME/claimcheck/config.toml, if the file exists
    /// 3. $HOME/.config/claimcheck/config.toml, if the file exists
    pub fn discover_path() -> Option<PathBuf> {
        discover_with(|name| std::env::var_os(name))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Otherwise the discovered path is used
    /// when present, falling back to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        Self::load_with(explicit, |name| std::env::var_os(name))
    }

    fn load_with(
        explicit: Option<&Path>,
        env: impl Fn(&str) -> Option<OsString>,
    ) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        match discover_with(env) {
            Some(path) if path.exists() => {
                debug!(path = %path.display(), "loading config");
                Self::load_from(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Reject tolerances that would make the band meaningless.
    pub fn validate(&self) -> Result<()> {
        validate_tolerance(&self.tolerance)
    }
}

fn discover_with(env: impl Fn(&str) -> Option<OsString>) -> Option<PathBuf> {
    if let Some(path) = env("CLAIMCHECK_CONFIG") {
        return Some(PathBuf::from(path));
    }

    let xdg = env("XDG_CONFIG_HOME").map(|dir| PathBuf::from(dir).join("claimcheck"));
    let home = env("HOME").map(|dir| PathBuf::from(dir).join(".config").join("claimcheck"));
    [xdg, home]
        .into_iter()
        .flatten()
        .map(|dir| dir.join("config.toml"))
        .find(|path| path.exists())
}

/// Tolerances must be finite and non-negative.
pub fn validate_tolerance(tolerance: &Tolerance) -> Result<()> {
    for (name, value) in [("absolute", tolerance.absolute), ("relative", tolerance.relative)] {
        if !value.is_finite() || value < 0.0 {
            return Err(ClaimCheckError::Config(format!(
                "{} tolerance must be a finite, non-negative number (got {})",
                name, value
            )));
        }
    }
    Ok(())
}
