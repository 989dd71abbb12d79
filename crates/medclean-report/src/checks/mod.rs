//! The four report checks.
//!
//! Each check reads the table, never mutates it, and returns a typed finding
//! whose `issue_count` feeds the health score.

pub mod categories;
pub mod duplicates;
pub mod missing;
pub mod ranges;

pub use categories::{CategoryCheck, CategoryFinding, check_categories};
pub use duplicates::{DuplicateCheck, check_duplicates};
pub use missing::{ColumnMissing, MissingCheck, check_missing};
pub use ranges::{RangeCheck, RangeViolation, check_ranges};

/// Share of `count` in `total` as a percentage; 0 for an empty table.
pub(crate) fn percent(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}
