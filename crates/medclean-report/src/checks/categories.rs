//! Categorical consistency check.

use std::collections::BTreeSet;

use polars::prelude::DataFrame;
use serde::Serialize;

use medclean_ingest::cell_string;
use medclean_model::CleaningRules;

/// Text used for a null cell when listing category values.
pub const NULL_TEXT: &str = "null";

/// Distinct values found in one categorical column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryFinding {
    pub column: String,
    /// Sorted distinct values.
    pub found: Vec<String>,
    /// Values outside the expected set, in order of first appearance.
    pub unexpected: Vec<String>,
}

impl CategoryFinding {
    pub fn is_consistent(&self) -> bool {
        self.unexpected.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CategoryCheck {
    pub columns: Vec<CategoryFinding>,
}

impl CategoryCheck {
    /// Number of columns holding at least one unexpected value.
    pub fn issue_count(&self) -> usize {
        self.columns.iter().filter(|c| !c.is_consistent()).count()
    }
}

/// Compare each categorical column present in the table against its expected
/// value set.
pub fn check_categories(df: &DataFrame, rules: &CleaningRules) -> CategoryCheck {
    let mut columns = Vec::new();
    for (name, expected) in &rules.expected_categories {
        let Ok(column) = df.column(name) else {
            continue;
        };
        let mut found = BTreeSet::new();
        let mut unexpected = Vec::new();
        for idx in 0..df.height() {
            let value = cell_string(column, idx).unwrap_or_else(|| NULL_TEXT.to_string());
            if !expected.contains(&value) && !unexpected.contains(&value) {
                unexpected.push(value.clone());
            }
            found.insert(value);
        }
        columns.push(CategoryFinding {
            column: name.clone(),
            found: found.into_iter().collect(),
            unexpected,
        });
    }
    CategoryCheck { columns }
}
