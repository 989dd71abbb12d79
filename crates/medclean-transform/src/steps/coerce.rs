use std::sync::LazyLock;

use polars::prelude::{DataFrame, NamedFrom, Series};
use regex::Regex;
use tracing::debug;

use medclean_model::CleaningRules;
use medclean_model::schema::{
    ADMISSION_DATE, BLOOD_PRESSURE, DIAGNOSIS, DIASTOLIC_BP, FLOAT_COLUMNS, GENDER,
    INSURANCE_TYPE, INTEGER_COLUMNS, SYSTOLIC_BP,
};

use super::{CleaningStep, StepKind};
use crate::data_utils::{column_text, require_columns};
use crate::error::{Result, TransformError};
use crate::normalization::{normalize_date, parse_float, parse_integer};

/// Digits with optional decimals, an optional slash, and an optional second number.
static BLOOD_PRESSURE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+\.?\d*)/?(\d+\.?\d*)?").expect("blood pressure pattern is valid")
});

/// Text marker that counts as a missing insurance value.
const MISSING_TEXT_MARKER: &str = "nan";

/// Forces each column into its declared type; unparseable cells become null.
pub struct TypeCoercer;

impl CleaningStep for TypeCoercer {
    fn kind(&self) -> StepKind {
        StepKind::CoerceTypes
    }

    fn apply(&self, df: &mut DataFrame, _rules: &CleaningRules) -> Result<usize> {
        coerce_types(df)
    }
}

/// Split a `sys/dia` reading into its two numbers.
///
/// The first number is systolic, the second (if any) diastolic. Text with no
/// digits yields `(None, None)`.
pub fn split_blood_pressure(raw: &str) -> (Option<f64>, Option<f64>) {
    let Some(captures) = BLOOD_PRESSURE_PATTERN.captures(raw) else {
        return (None, None);
    };
    let systolic = captures.get(1).and_then(|m| parse_float(m.as_str()));
    let diastolic = captures.get(2).and_then(|m| parse_float(m.as_str()));
    (systolic, diastolic)
}

/// Check that a table carries every column [`coerce_types`] reads.
///
/// Blood pressure may arrive either as the raw `blood_pressure` column or
/// already split into `systolic_bp` / `diastolic_bp` (a cleaned table).
pub fn require_input_columns(df: &DataFrame) -> Result<()> {
    require_columns(df, INTEGER_COLUMNS)?;
    require_columns(df, FLOAT_COLUMNS)?;
    require_columns(df, &[GENDER, DIAGNOSIS, ADMISSION_DATE, INSURANCE_TYPE])?;
    let already_split = require_columns(df, &[SYSTOLIC_BP, DIASTOLIC_BP]).is_ok();
    if df.column(BLOOD_PRESSURE).is_err() && !already_split {
        return Err(TransformError::MissingColumn {
            column: BLOOD_PRESSURE.to_string(),
        });
    }
    Ok(())
}

/// Coerce the table to the cleaned column types.
///
/// - integer columns to `Int64`, float columns to `Float64`
/// - `blood_pressure` split into `systolic_bp` / `diastolic_bp`, then dropped
/// - `admission_date` re-formatted as `YYYY-MM-DD`
/// - the literal text `"nan"` in `insurance_type` becomes null
///
/// A table that already has `systolic_bp` / `diastolic_bp` and no
/// `blood_pressure` has those two parsed as floats instead.
///
/// Returns the number of non-null cells that became null.
pub fn coerce_types(df: &mut DataFrame) -> Result<usize> {
    require_input_columns(df)?;

    let mut nulled = 0usize;

    for name in INTEGER_COLUMNS {
        let raw = column_text(df, name)?;
        let values: Vec<Option<i64>> = raw
            .iter()
            .map(|cell| cell.as_deref().and_then(parse_integer))
            .collect();
        nulled += count_lost(&raw, &values);
        df.with_column(Series::new((*name).into(), values))?;
    }

    for name in FLOAT_COLUMNS {
        let raw = column_text(df, name)?;
        let values: Vec<Option<f64>> = raw
            .iter()
            .map(|cell| cell.as_deref().and_then(parse_float))
            .collect();
        nulled += count_lost(&raw, &values);
        df.with_column(Series::new((*name).into(), values))?;
    }

    if df.column(BLOOD_PRESSURE).is_ok() {
        let raw = column_text(df, BLOOD_PRESSURE)?;
        let (systolic, diastolic): (Vec<Option<f64>>, Vec<Option<f64>>) = raw
            .iter()
            .map(|cell| match cell {
                Some(text) => split_blood_pressure(text),
                None => (None, None),
            })
            .unzip();
        nulled += count_lost(&raw, &systolic);
        df.drop_in_place(BLOOD_PRESSURE)?;
        df.with_column(Series::new(SYSTOLIC_BP.into(), systolic))?;
        df.with_column(Series::new(DIASTOLIC_BP.into(), diastolic))?;
    } else {
        for name in [SYSTOLIC_BP, DIASTOLIC_BP] {
            let raw = column_text(df, name)?;
            let values: Vec<Option<f64>> = raw
                .iter()
                .map(|cell| cell.as_deref().and_then(parse_float))
                .collect();
            nulled += count_lost(&raw, &values);
            df.with_column(Series::new(name.into(), values))?;
        }
    }

    let raw = column_text(df, ADMISSION_DATE)?;
    let dates: Vec<Option<String>> = raw
        .iter()
        .map(|cell| cell.as_deref().and_then(normalize_date))
        .collect();
    nulled += count_lost(&raw, &dates);
    df.with_column(Series::new(ADMISSION_DATE.into(), dates))?;

    let raw = column_text(df, INSURANCE_TYPE)?;
    let insurance: Vec<Option<String>> = raw
        .iter()
        .map(|cell| cell.clone().filter(|text| text.trim() != MISSING_TEXT_MARKER))
        .collect();
    nulled += count_lost(&raw, &insurance);
    df.with_column(Series::new(INSURANCE_TYPE.into(), insurance))?;

    debug!(cells_nulled = nulled, "types coerced");
    Ok(nulled)
}

fn count_lost<T>(raw: &[Option<String>], parsed: &[Option<T>]) -> usize {
    raw.iter()
        .zip(parsed)
        .filter(|(before, after)| before.is_some() && after.is_none())
        .count()
}
