use std::path::PathBuf;

use serde::Serialize;

use medclean_report::QualityReport;
use medclean_transform::CleaningSummary;

/// Result of the `clean` command.
#[derive(Debug, Serialize)]
pub struct CleanResult {
    pub input: PathBuf,
    pub output: PathBuf,
    pub summary: CleaningSummary,
}

/// Result of the `report` command.
#[derive(Debug, Serialize)]
pub struct ReportResult {
    pub input: PathBuf,
    pub report: QualityReport,
}

/// Result of the `generate` command.
#[derive(Debug, Serialize)]
pub struct GenerateResult {
    pub output: PathBuf,
    pub rows: usize,
    pub columns: usize,
    pub missing_cells: usize,
    pub duplicate_rows: usize,
    /// The first few rows as written, for a console preview.
    pub preview: Vec<Vec<String>>,
    pub header: Vec<String>,
}
