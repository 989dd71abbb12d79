use std::collections::BTreeSet;

use polars::prelude::{BooleanChunked, DataFrame, NewChunkedArray};

use medclean_ingest::row_key;
use medclean_model::CleaningRules;

use super::{CleaningStep, StepKind};
use crate::error::Result;

/// Removes rows identical to an earlier row across every column.
pub struct Deduplicator;

impl CleaningStep for Deduplicator {
    fn kind(&self) -> StepKind {
        StepKind::Deduplicate
    }

    fn apply(&self, df: &mut DataFrame, _rules: &CleaningRules) -> Result<usize> {
        remove_duplicates(df)
    }
}

/// Drop exact-duplicate rows, keeping the first occurrence in order.
///
/// Null equals null; null never equals any text. Returns the number of rows removed.
pub fn remove_duplicates(df: &mut DataFrame) -> Result<usize> {
    if df.height() == 0 {
        return Ok(0);
    }
    let mut seen = BTreeSet::new();
    let keep: Vec<bool> = (0..df.height())
        .map(|idx| seen.insert(row_key(df, idx)))
        .collect();
    let removed = keep.iter().filter(|kept| !**kept).count();
    if removed > 0 {
        let mask = BooleanChunked::from_slice("dedupe".into(), &keep);
        *df = df.filter(&mask)?;
    }
    Ok(removed)
}
