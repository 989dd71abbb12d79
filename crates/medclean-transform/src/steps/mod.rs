//! Cleaning steps and the trait the orchestrator runs them through.
//!
//! Each step is a unit struct implementing [`CleaningStep`] and wraps a free
//! function that can be called directly:
//!
//! | step | function | count returned |
//! |---|---|---|
//! | [`Deduplicator`] | [`remove_duplicates`] | rows removed |
//! | [`TypeCoercer`] | [`coerce_types`] | cells turned null |
//! | [`MissingValueImputer`] | [`impute_missing`] | cells filled |
//! | [`OutlierClipper`] | [`clip_outliers`] | cells clamped |
//! | [`TextStandardizer`] | [`standardize_text`] | cells rewritten |

mod clip;
mod coerce;
mod dedupe;
mod impute;
mod standardize;

use std::fmt;

use polars::prelude::DataFrame;
use serde::Serialize;

use medclean_model::CleaningRules;

use crate::error::Result;

pub use clip::{OutlierClipper, clip_outliers};
pub use coerce::{TypeCoercer, coerce_types, require_input_columns, split_blood_pressure};
pub use dedupe::{Deduplicator, remove_duplicates};
pub use impute::{ImputationResult, MissingValueImputer, impute_missing, mode};
pub use standardize::{TextStandardizer, standardize_text, standardize_value};

/// Identifies a pipeline step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    Deduplicate,
    CoerceTypes,
    ImputeMissing,
    ClipOutliers,
    StandardizeText,
}

impl StepKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StepKind::Deduplicate => "deduplicate",
            StepKind::CoerceTypes => "coerce_types",
            StepKind::ImputeMissing => "impute_missing",
            StepKind::ClipOutliers => "clip_outliers",
            StepKind::StandardizeText => "standardize_text",
        }
    }

    /// Human-readable label for console output.
    pub fn label(&self) -> &'static str {
        match self {
            StepKind::Deduplicate => "Duplicates removed",
            StepKind::CoerceTypes => "Data types fixed",
            StepKind::ImputeMissing => "Missing values filled",
            StepKind::ClipOutliers => "Outliers clipped",
            StepKind::StandardizeText => "Text standardised",
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single whole-table transformation.
///
/// Steps hold no state between runs; any statistic is recomputed from the
/// table passed in.
pub trait CleaningStep: Send + Sync {
    /// Which step this is.
    fn kind(&self) -> StepKind;

    /// Transform the table in place.
    ///
    /// Returns the step's headline count (see the module table).
    ///
    /// # Errors
    ///
    /// Returns an error if a column the step reads is absent.
    fn apply(&self, df: &mut DataFrame, rules: &CleaningRules) -> Result<usize>;
}

/// The five steps in their fixed execution order.
pub fn default_steps() -> Vec<Box<dyn CleaningStep>> {
    vec![
        Box::new(Deduplicator),
        Box::new(TypeCoercer),
        Box::new(MissingValueImputer),
        Box::new(OutlierClipper),
        Box::new(TextStandardizer),
    ]
}
