//! Missing value check.

use polars::prelude::DataFrame;
use serde::Serialize;

use super::percent;

/// Missing cells in one column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnMissing {
    pub column: String,
    pub missing: usize,
    pub percent: f64,
}

/// Columns that have at least one missing cell, in table order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MissingCheck {
    pub columns: Vec<ColumnMissing>,
}

impl MissingCheck {
    /// Number of columns with missing values.
    pub fn issue_count(&self) -> usize {
        self.columns.len()
    }
}

/// Count null cells per column.
pub fn check_missing(df: &DataFrame) -> MissingCheck {
    let rows = df.height();
    let columns = df
        .get_columns()
        .iter()
        .filter(|column| column.null_count() > 0)
        .map(|column| ColumnMissing {
            column: column.name().to_string(),
            missing: column.null_count(),
            percent: percent(column.null_count(), rows),
        })
        .collect();
    MissingCheck { columns }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{IntoColumn, NamedFrom, Series};

    #[test]
    fn reports_only_columns_with_nulls() {
        let df = DataFrame::new(vec![
            Series::new("age".into(), vec![Some(40i64), None, None, Some(50)]).into_column(),
            Series::new("gender".into(), vec![Some("M"), Some("F"), Some("U"), Some("M")])
                .into_column(),
        ])
        .unwrap();

        let check = check_missing(&df);

        assert_eq!(check.issue_count(), 1);
        assert_eq!(
            check.columns,
            vec![ColumnMissing {
                column: "age".to_string(),
                missing: 2,
                percent: 50.0,
            }]
        );
    }

    #[test]
    fn complete_table_has_no_issues() {
        let df = DataFrame::new(vec![
            Series::new("age".into(), vec![Some(40i64)]).into_column(),
        ])
        .unwrap();

        assert_eq!(check_missing(&df), MissingCheck::default());
    }
}
