use std::collections::BTreeMap;

use polars::prelude::{DataFrame, DataType, NamedFrom, Series};
use serde::Serialize;
use tracing::{debug, warn};

use medclean_ingest::any_to_f64;
use medclean_model::CleaningRules;
use medclean_model::schema::{MEDIAN_IMPUTED_COLUMNS, MODE_IMPUTED_COLUMNS};

use super::{CleaningStep, StepKind};
use crate::data_utils::{column_text, require_columns, required_column};
use crate::error::Result;
use crate::normalization::median;

/// Fills numeric nulls with the column median and categorical nulls with the
/// column mode.
pub struct MissingValueImputer;

impl CleaningStep for MissingValueImputer {
    fn kind(&self) -> StepKind {
        StepKind::ImputeMissing
    }

    fn apply(&self, df: &mut DataFrame, _rules: &CleaningRules) -> Result<usize> {
        impute_missing(df).map(|result| result.filled)
    }
}

/// Outcome of an imputation pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ImputationResult {
    /// Cells that received an imputed value.
    pub filled: usize,
    /// Columns left with nulls because they had no non-null value.
    pub unfilled_columns: Vec<String>,
}

/// Most frequent value; ties resolve to the lexicographically smallest value.
pub fn mode<'a, I>(values: I) -> Option<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }
    let mut best: Option<(&str, usize)> = None;
    for (value, count) in counts {
        if best.is_none_or(|(_, top)| count > top) {
            best = Some((value, count));
        }
    }
    best.map(|(value, _)| value.to_string())
}

/// Fill nulls in the median and mode column groups.
///
/// Statistics come from the column's current non-null values. Integer columns
/// receive the median rounded to the nearest whole number. A column with no
/// non-null values is left as-is and reported in
/// [`ImputationResult::unfilled_columns`].
pub fn impute_missing(df: &mut DataFrame) -> Result<ImputationResult> {
    require_columns(df, MEDIAN_IMPUTED_COLUMNS)?;
    require_columns(df, MODE_IMPUTED_COLUMNS)?;

    let mut result = ImputationResult::default();

    for name in MEDIAN_IMPUTED_COLUMNS {
        let column = required_column(df, name)?;
        let nulls = column.null_count();
        if nulls == 0 {
            continue;
        }
        let is_integer = column.dtype() == &DataType::Int64;
        let values: Vec<Option<f64>> = (0..df.height())
            .map(|idx| column.get(idx).ok().and_then(any_to_f64))
            .collect();
        let present: Vec<f64> = values.iter().flatten().copied().collect();
        let Some(fill) = median(&present) else {
            warn!(column = %name, nulls, "no values to compute median; nulls left in place");
            result.unfilled_columns.push((*name).to_string());
            continue;
        };
        let series = if is_integer {
            let fill = fill.round() as i64;
            let filled: Vec<Option<i64>> = values
                .iter()
                .map(|value| Some(value.map_or(fill, |v| v as i64)))
                .collect();
            Series::new((*name).into(), filled)
        } else {
            let filled: Vec<Option<f64>> = values
                .iter()
                .map(|value| Some(value.unwrap_or(fill)))
                .collect();
            Series::new((*name).into(), filled)
        };
        df.with_column(series)?;
        result.filled += nulls;
        debug!(column = %name, filled = nulls, median = fill, "median imputed");
    }

    for name in MODE_IMPUTED_COLUMNS {
        let values = column_text(df, name)?;
        let nulls = values.iter().filter(|value| value.is_none()).count();
        if nulls == 0 {
            continue;
        }
        let Some(fill) = mode(values.iter().flatten().map(String::as_str)) else {
            warn!(column = %name, nulls, "no values to compute mode; nulls left in place");
            result.unfilled_columns.push((*name).to_string());
            continue;
        };
        let filled: Vec<Option<String>> = values
            .into_iter()
            .map(|value| Some(value.unwrap_or_else(|| fill.clone())))
            .collect();
        df.with_column(Series::new((*name).into(), filled))?;
        result.filled += nulls;
        debug!(column = %name, filled = nulls, "mode imputed");
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{Column, IntoColumn};

    use crate::data_utils::total_null_count;

    fn frame(overrides: Vec<Column>) -> DataFrame {
        let height = overrides.first().map_or(3, Column::len);
        let mut columns = Vec::new();
        for name in MEDIAN_IMPUTED_COLUMNS {
            columns.push(Series::new((*name).into(), vec![Some(1.0f64); height]).into_column());
        }
        for name in MODE_IMPUTED_COLUMNS {
            columns.push(Series::new((*name).into(), vec![Some("x"); height]).into_column());
        }
        let mut df = DataFrame::new(columns).unwrap();
        for column in overrides {
            df.with_column(column).unwrap();
        }
        df
    }

    #[test]
    fn numeric_nulls_take_median() {
        let mut df = frame(vec![
            Series::new(
                "height_cm".into(),
                vec![Some(10.0), None, Some(20.0), None, Some(30.0)],
            )
            .into_column(),
        ]);

        let result = impute_missing(&mut df).unwrap();

        assert_eq!(result.filled, 2);
        let values: Vec<_> = df
            .column("height_cm")
            .unwrap()
            .f64()
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(
            values,
            vec![Some(10.0), Some(20.0), Some(20.0), Some(20.0), Some(30.0)]
        );
    }

    #[test]
    fn integer_median_is_rounded() {
        let mut df = frame(vec![
            Series::new("age".into(), vec![Some(20i64), None, Some(31)]).into_column(),
        ]);

        impute_missing(&mut df).unwrap();

        let age = df.column("age").unwrap();
        assert_eq!(age.dtype(), &DataType::Int64);
        assert_eq!(age.i64().unwrap().get(1), Some(26));
    }

    #[test]
    fn categorical_nulls_take_mode() {
        let mut df = frame(vec![
            Series::new(
                "gender".into(),
                vec![Some("Female"), None, Some("Male"), Some("Female")],
            )
            .into_column(),
        ]);

        impute_missing(&mut df).unwrap();

        let gender = df.column("gender").unwrap().str().unwrap();
        assert_eq!(gender.get(1), Some("Female"));
    }

    #[test]
    fn mode_tie_picks_smallest_value() {
        assert_eq!(
            mode(["Medicare", "Private", "Private", "Medicare"]),
            Some("Medicare".to_string())
        );
        assert_eq!(mode(["b", "a"]), Some("a".to_string()));
        assert_eq!(mode(Vec::<&str>::new()), None);
    }

    #[test]
    fn tie_break_is_independent_of_row_order() {
        let first = mode(["Private", "Medicare"]);
        let second = mode(["Medicare", "Private"]);
        assert_eq!(first, second);
    }

    #[test]
    fn all_null_column_is_left_and_reported() {
        let mut df = frame(vec![
            Series::new("weight_kg".into(), vec![None::<f64>, None, None]).into_column(),
        ]);

        let result = impute_missing(&mut df).unwrap();

        assert_eq!(result.unfilled_columns, vec!["weight_kg".to_string()]);
        assert_eq!(df.column("weight_kg").unwrap().null_count(), 3);
        assert_eq!(total_null_count(&df), 3);
    }

    #[test]
    fn complete_columns_are_untouched() {
        let mut df = frame(vec![]);

        let result = impute_missing(&mut df).unwrap();

        assert_eq!(result, ImputationResult::default());
    }
}
