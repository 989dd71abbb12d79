//! Numeric range check.

use polars::prelude::{AnyValue, DataFrame};
use serde::Serialize;

use medclean_ingest::any_to_f64;
use medclean_model::CleaningRules;

use super::percent;

/// Values of one column that fall outside its valid range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeViolation {
    pub column: String,
    pub lo: f64,
    pub hi: f64,
    pub count: usize,
    pub percent: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RangeCheck {
    pub violations: Vec<RangeViolation>,
}

impl RangeCheck {
    /// Number of columns with at least one out-of-range value.
    pub fn issue_count(&self) -> usize {
        self.violations.len()
    }
}

/// Count out-of-range values for every ranged column present in the table.
///
/// Absent columns are skipped. Nulls and cells that are not numbers are not
/// range violations.
pub fn check_ranges(df: &DataFrame, rules: &CleaningRules) -> RangeCheck {
    let rows = df.height();
    let mut violations = Vec::new();
    for (name, range) in &rules.clip_ranges {
        let Ok(column) = df.column(name) else {
            continue;
        };
        let count = (0..rows)
            .filter_map(|idx| any_to_f64(column.get(idx).unwrap_or(AnyValue::Null)))
            .filter(|value| !range.contains(*value))
            .count();
        if count > 0 {
            violations.push(RangeViolation {
                column: name.clone(),
                lo: range.lo,
                hi: range.hi,
                count,
                percent: percent(count, rows),
            });
        }
    }
    RangeCheck { violations }
}
