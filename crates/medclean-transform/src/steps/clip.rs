use polars::prelude::{DataFrame, DataType, NamedFrom, Series};
use tracing::debug;

use medclean_ingest::any_to_f64;
use medclean_model::CleaningRules;

use super::{CleaningStep, StepKind};
use crate::data_utils::required_column;
use crate::error::Result;

/// Clamps range-governed numeric columns into their valid intervals.
pub struct OutlierClipper;

impl CleaningStep for OutlierClipper {
    fn kind(&self) -> StepKind {
        StepKind::ClipOutliers
    }

    fn apply(&self, df: &mut DataFrame, rules: &CleaningRules) -> Result<usize> {
        clip_outliers(df, rules)
    }
}

/// Clamp every value of each ranged column into `[lo, hi]`.
///
/// Nulls stay null. Integer columns stay integer. Returns the number of cells
/// whose value changed.
pub fn clip_outliers(df: &mut DataFrame, rules: &CleaningRules) -> Result<usize> {
    let mut clipped = 0usize;
    for (name, range) in &rules.clip_ranges {
        let column = required_column(df, name)?;
        let series = if column.dtype() == &DataType::Int64 {
            let values: Vec<Option<i64>> = column.i64()?.into_iter().collect();
            let bounded: Vec<Option<i64>> = values
                .iter()
                .map(|value| value.map(|v| range.clamp_i64(v)))
                .collect();
            clipped += count_changed(&values, &bounded);
            Series::new(name.as_str().into(), bounded)
        } else {
            let values: Vec<Option<f64>> = (0..df.height())
                .map(|idx| column.get(idx).ok().and_then(any_to_f64))
                .collect();
            let bounded: Vec<Option<f64>> = values
                .iter()
                .map(|value| value.map(|v| range.clamp(v)))
                .collect();
            clipped += count_changed(&values, &bounded);
            Series::new(name.as_str().into(), bounded)
        };
        df.with_column(series)?;
    }
    debug!(cells_clipped = clipped, "outliers clipped");
    Ok(clipped)
}

fn count_changed<T: PartialEq>(before: &[Option<T>], after: &[Option<T>]) -> usize {
    before
        .iter()
        .zip(after)
        .filter(|(old, new)| old != new)
        .count()
}
