//! Report assembly.

use std::path::Path;

use polars::prelude::DataFrame;
use serde::Serialize;
use tracing::{info, info_span};

use medclean_ingest::read_raw_table;
use medclean_model::CleaningRules;

use crate::checks::{
    CategoryCheck, DuplicateCheck, MissingCheck, RangeCheck, check_categories, check_duplicates,
    check_missing, check_ranges,
};
use crate::error::Result;
use crate::score::HealthScore;

/// One row of the score table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckResult {
    pub name: &'static str,
    pub issues: usize,
}

impl CheckResult {
    pub fn passed(&self) -> bool {
        self.issues == 0
    }
}

/// Full quality report for one table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualityReport {
    pub rows: usize,
    pub columns: usize,
    pub missing: MissingCheck,
    pub duplicates: DuplicateCheck,
    pub ranges: RangeCheck,
    pub categories: CategoryCheck,
    pub score: HealthScore,
}

impl QualityReport {
    /// Issue counts per check, in report order.
    pub fn checks(&self) -> Vec<CheckResult> {
        vec![
            CheckResult {
                name: "Missing values",
                issues: self.missing.issue_count(),
            },
            CheckResult {
                name: "Duplicate rows",
                issues: self.duplicates.issue_count(),
            },
            CheckResult {
                name: "Range violations",
                issues: self.ranges.issue_count(),
            },
            CheckResult {
                name: "Category issues",
                issues: self.categories.issue_count(),
            },
        ]
    }

    pub fn failing_checks(&self) -> usize {
        self.checks().iter().filter(|check| !check.passed()).count()
    }
}

/// Run every check against a table.
pub fn build_report(df: &DataFrame, rules: &CleaningRules) -> QualityReport {
    let _guard = info_span!("report", rows = df.height(), columns = df.width()).entered();

    let missing = check_missing(df);
    let duplicates = check_duplicates(df);
    let ranges = check_ranges(df, rules);
    let categories = check_categories(df, rules);
    let failing = [
        missing.issue_count(),
        duplicates.issue_count(),
        ranges.issue_count(),
        categories.issue_count(),
    ]
    .iter()
    .filter(|&&issues| issues > 0)
    .count();
    let score = HealthScore::from_failing_checks(failing);

    info!(failing_checks = failing, score = score.label(), "report built");
    QualityReport {
        rows: df.height(),
        columns: df.width(),
        missing,
        duplicates,
        ranges,
        categories,
        score,
    }
}

/// Load a delimited file and report on it.
///
/// # Errors
///
/// Returns an error only if the file cannot be loaded.
pub fn report_file(path: &Path, rules: &CleaningRules) -> Result<QualityReport> {
    let df = read_raw_table(path)?;
    Ok(build_report(&df, rules))
}
