//! Cleaning pipeline orchestration.
//!
//! The pipeline runs the five steps in a fixed order over one table:
//! 1. **Deduplicate**: drop exact-duplicate rows
//! 2. **Coerce types**: typed columns, blood pressure split, dates parsed
//! 3. **Impute missing**: median for numeric, mode for categorical
//! 4. **Clip outliers**: clamp numerics to their valid ranges
//! 5. **Standardize text**: trim, title-case, map synonyms
//!
//! Each step takes the output of the previous one. The orchestrator only
//! records per-step counters; it never transforms data itself.

use std::time::Instant;

use polars::prelude::DataFrame;
use serde::Serialize;
use tracing::{debug, info, info_span};

use medclean_model::CleaningRules;

use crate::data_utils::total_null_count;
use crate::error::Result;
use crate::steps::{CleaningStep, StepKind, default_steps, require_input_columns};

/// Counters recorded for one step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepOutcome {
    pub step: StepKind,
    pub rows_before: usize,
    pub rows_after: usize,
    /// The step's headline count (rows removed, cells nulled/filled/clipped/rewritten).
    pub affected: usize,
    /// Null cells left in the whole table after the step.
    pub nulls_remaining: usize,
    pub duration_ms: u128,
}

/// Counters for a whole pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CleaningSummary {
    pub input_rows: usize,
    pub input_columns: usize,
    pub output_rows: usize,
    pub output_columns: usize,
    pub steps: Vec<StepOutcome>,
}

impl CleaningSummary {
    pub fn step(&self, kind: StepKind) -> Option<&StepOutcome> {
        self.steps.iter().find(|outcome| outcome.step == kind)
    }

    pub fn duplicates_removed(&self) -> usize {
        self.step(StepKind::Deduplicate)
            .map_or(0, |outcome| outcome.affected)
    }

    /// Nulls left after imputation.
    pub fn nulls_after_imputation(&self) -> usize {
        self.step(StepKind::ImputeMissing)
            .map_or(0, |outcome| outcome.nulls_remaining)
    }

    /// Nulls in the final table.
    pub fn nulls_remaining(&self) -> usize {
        self.steps.last().map_or(0, |outcome| outcome.nulls_remaining)
    }
}

/// Runs the cleaning steps over a table with a fixed rule set.
pub struct CleaningPipeline {
    rules: CleaningRules,
    steps: Vec<Box<dyn CleaningStep>>,
}

impl Default for CleaningPipeline {
    fn default() -> Self {
        Self::new(CleaningRules::default())
    }
}

impl CleaningPipeline {
    pub fn new(rules: CleaningRules) -> Self {
        Self {
            rules,
            steps: default_steps(),
        }
    }

    pub fn rules(&self) -> &CleaningRules {
        &self.rules
    }

    pub fn steps(&self) -> impl Iterator<Item = StepKind> + '_ {
        self.steps.iter().map(|step| step.kind())
    }

    /// Clean a raw table, or re-clean a table this pipeline already produced.
    ///
    /// # Errors
    ///
    /// Returns [`crate::TransformError::MissingColumn`] before any step runs if
    /// the table lacks an input column; a failing step aborts the whole run.
    pub fn run(&self, mut df: DataFrame) -> Result<(DataFrame, CleaningSummary)> {
        let pipeline_span = info_span!("clean", rows = df.height(), columns = df.width());
        let _pipeline_guard = pipeline_span.enter();
        let pipeline_start = Instant::now();

        require_input_columns(&df)?;

        let input_rows = df.height();
        let input_columns = df.width();
        let mut outcomes = Vec::with_capacity(self.steps.len());

        for step in &self.steps {
            let kind = step.kind();
            let outcome = info_span!("step", step = %kind).in_scope(|| -> Result<_> {
                let start = Instant::now();
                let rows_before = df.height();
                let affected = step.apply(&mut df, &self.rules)?;
                let outcome = StepOutcome {
                    step: kind,
                    rows_before,
                    rows_after: df.height(),
                    affected,
                    nulls_remaining: total_null_count(&df),
                    duration_ms: start.elapsed().as_millis(),
                };
                debug!(
                    step = %kind,
                    rows_before = outcome.rows_before,
                    rows_after = outcome.rows_after,
                    affected = outcome.affected,
                    nulls_remaining = outcome.nulls_remaining,
                    duration_ms = outcome.duration_ms,
                    "step complete"
                );
                Ok(outcome)
            })?;
            outcomes.push(outcome);
        }

        let summary = CleaningSummary {
            input_rows,
            input_columns,
            output_rows: df.height(),
            output_columns: df.width(),
            steps: outcomes,
        };
        info!(
            input_rows = summary.input_rows,
            output_rows = summary.output_rows,
            duplicates_removed = summary.duplicates_removed(),
            nulls_remaining = summary.nulls_remaining(),
            duration_ms = pipeline_start.elapsed().as_millis(),
            "cleaning complete"
        );
        Ok((df, summary))
    }
}

/// Clean a raw table with the default rules.
pub fn clean_table(df: DataFrame) -> Result<(DataFrame, CleaningSummary)> {
    CleaningPipeline::default().run(df)
}
