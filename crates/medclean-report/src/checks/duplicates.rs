//! Duplicate row check.

use std::collections::BTreeSet;

use polars::prelude::DataFrame;
use serde::Serialize;

use medclean_ingest::row_key;

/// Rows identical in every column to an earlier row.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DuplicateCheck {
    pub duplicate_rows: usize,
}

impl DuplicateCheck {
    pub fn issue_count(&self) -> usize {
        self.duplicate_rows
    }
}

/// Count rows that repeat an earlier row exactly. The first occurrence is not
/// counted.
pub fn check_duplicates(df: &DataFrame) -> DuplicateCheck {
    let mut seen = BTreeSet::new();
    let duplicate_rows = (0..df.height())
        .filter(|&idx| !seen.insert(row_key(df, idx)))
        .count();
    DuplicateCheck { duplicate_rows }
}
