//! DataFrame access helpers for the pipeline steps.

use polars::prelude::{Column, DataFrame};

use medclean_ingest::cell_string;

use crate::error::{Result, TransformError};

/// Fail with [`TransformError::MissingColumn`] for the first absent column.
pub fn require_columns<S: AsRef<str>>(df: &DataFrame, columns: &[S]) -> Result<()> {
    for column in columns {
        let column = column.as_ref();
        if df.column(column).is_err() {
            return Err(TransformError::MissingColumn {
                column: column.to_string(),
            });
        }
    }
    Ok(())
}

/// Get a column, mapping absence to [`TransformError::MissingColumn`].
pub fn required_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column> {
    df.column(name).map_err(|_| TransformError::MissingColumn {
        column: name.to_string(),
    })
}

/// All cells of a column as optional text, whatever the column's dtype.
pub fn column_text(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let column = required_column(df, name)?;
    Ok((0..df.height())
        .map(|idx| cell_string(column, idx))
        .collect())
}

/// Total null cells across the whole table.
pub fn total_null_count(df: &DataFrame) -> usize {
    df.get_columns().iter().map(Column::null_count).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{IntoColumn, NamedFrom, Series};

    fn df() -> DataFrame {
        DataFrame::new(vec![
            Series::new("age".into(), vec![Some(40i64), None]).into_column(),
            Series::new("gender".into(), vec![None, Some("F")]).into_column(),
        ])
        .unwrap()
    }

    #[test]
    fn require_reports_first_missing() {
        let err = require_columns(&df(), &["age", "weight_kg", "bmi"]).unwrap_err();
        assert!(matches!(err, TransformError::MissingColumn { column } if column == "weight_kg"));
    }

    #[test]
    fn column_text_reads_any_dtype() {
        let values = column_text(&df(), "age").unwrap();
        assert_eq!(values, vec![Some("40".to_string()), None]);
    }

    #[test]
    fn counts_nulls_across_columns() {
        assert_eq!(total_null_count(&df()), 2);
    }
}
