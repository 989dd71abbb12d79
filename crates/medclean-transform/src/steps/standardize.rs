use polars::prelude::{DataFrame, NamedFrom, Series};
use tracing::debug;

use medclean_model::schema::TEXT_COLUMNS;
use medclean_model::{CleaningRules, SynonymMap};

use super::{CleaningStep, StepKind};
use crate::data_utils::{column_text, require_columns};
use crate::error::Result;
use crate::normalization::normalize_text;

/// Trims and title-cases text columns, then maps known synonyms to canonical labels.
pub struct TextStandardizer;

impl CleaningStep for TextStandardizer {
    fn kind(&self) -> StepKind {
        StepKind::StandardizeText
    }

    fn apply(&self, df: &mut DataFrame, rules: &CleaningRules) -> Result<usize> {
        standardize_text(df, rules)
    }
}

/// Normalize one value: trim, title-case, then resolve through the synonym
/// table (matched case-insensitively). Unmapped values pass through title-cased.
///
/// # Examples
///
/// ```
/// use medclean_model::SynonymMap;
/// use medclean_transform::steps::standardize_value;
///
/// let genders = SynonymMap::new([("Male", "M")]);
/// assert_eq!(standardize_value(" MALE ", Some(&genders)), "M");
/// assert_eq!(standardize_value("heart disease", None), "Heart Disease");
/// ```
pub fn standardize_value(raw: &str, synonyms: Option<&SynonymMap>) -> String {
    let cased = normalize_text(raw);
    match synonyms.and_then(|map| map.get(&cased)) {
        Some(canonical) => canonical.to_string(),
        None => cased,
    }
}

/// Standardize `gender`, `insurance_type` and `diagnosis`.
///
/// Only `gender` and `insurance_type` have synonym tables; `diagnosis` is
/// cased only. Nulls stay null. Returns the number of cells whose text changed.
pub fn standardize_text(df: &mut DataFrame, rules: &CleaningRules) -> Result<usize> {
    require_columns(df, TEXT_COLUMNS)?;

    let mut changed = 0usize;
    for name in TEXT_COLUMNS {
        let synonyms = rules.synonyms_for(name);
        let values = column_text(df, name)?;
        let standardized: Vec<Option<String>> = values
            .iter()
            .map(|value| {
                value
                    .as_deref()
                    .map(|text| standardize_value(text, synonyms))
            })
            .collect();
        changed += values
            .iter()
            .zip(&standardized)
            .filter(|(old, new)| old != new)
            .count();
        df.with_column(Series::new((*name).into(), standardized))?;
    }
    debug!(cells_changed = changed, "text standardised");
    Ok(changed)
}
