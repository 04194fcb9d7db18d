//! Report emission: row-level CSV and JSON summary.

use crate::error::Result;
use crate::run::{ReportRow, RunSummary, ValidationReport};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Column order of the row-level report.
pub const REPORT_COLUMNS: [&str; 7] = [
    "example_id",
    "key",
    "claimed_value",
    "truth_value",
    "match",
    "error_type",
    "diff",
];

/// Write the row-level report as CSV. The header is written even with no rows.
pub fn write_report<W: Write>(rows: &[ReportRow], writer: W) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(REPORT_COLUMNS)?;
    for row in rows {
        let error_type = if row.matched { "" } else { row.error_kind.as_str() };
        let claimed = row.claimed_value.as_text();
        let truth = row.truth_value.as_text();
        csv.write_record([
            row.example_id.as_str(),
            row.key.as_str(),
            &*claimed,
            &*truth,
            if row.matched { "true" } else { "false" },
            error_type,
            row.diagnostic.as_str(),
        ])?;
    }
    csv.flush()?;
    Ok(())
}

/// Write the summary as pretty-printed JSON.
pub fn write_summary<W: Write>(summary: &RunSummary, mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, summary)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

impl ValidationReport {
    /// Write the report CSV and summary JSON, creating parent directories.
    pub fn save(&self, report_path: &Path, summary_path: &Path) -> Result<()> {
        write_report(&self.rows, BufWriter::new(create_file(report_path)?))?;
        write_summary(&self.summary, BufWriter::new(create_file(summary_path)?))?;
        info!(
            report = %report_path.display(),
            summary = %summary_path.display(),
            "wrote validation report"
        );
        Ok(())
    }
}

fn create_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(File::create(path)?)
}
