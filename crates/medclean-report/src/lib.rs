//! Data quality report for patient record tables.
//!
//! Four read-only checks run over a table and a qualitative score summarizes
//! them:
//!
//! 1. **Missing values**: columns with null cells
//! 2. **Duplicate rows**: rows repeating an earlier row
//! 3. **Range violations**: numeric values outside the clip ranges
//! 4. **Category issues**: values outside the expected category sets
//!
//! The ranges and category sets are the same [`medclean_model::CleaningRules`]
//! the cleaning pipeline enforces, so a freshly cleaned table scores
//! [`HealthScore::Excellent`].

pub mod checks;
mod error;
mod report;
mod score;

pub use checks::{
    CategoryCheck, CategoryFinding, ColumnMissing, DuplicateCheck, MissingCheck, RangeCheck,
    RangeViolation, check_categories, check_duplicates, check_missing, check_ranges,
};
pub use error::{ReportError, Result};
pub use report::{CheckResult, QualityReport, build_report, report_file};
pub use score::HealthScore;
