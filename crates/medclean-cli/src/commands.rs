use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use medclean_generate::{DEFAULT_ROWS, DEFAULT_SEED, generate};
use medclean_ingest::{any_to_opt_string, read_raw_table, write_table};
use medclean_model::CleaningRules;
use medclean_report::{build_report, check_duplicates, check_missing};
use medclean_transform::CleaningPipeline;

use crate::types::{CleanResult, GenerateResult, ReportResult};

pub const DEFAULT_CLEAN_INPUT: &str = "data/sample_data_messy.csv";
pub const DEFAULT_CLEAN_OUTPUT: &str = "data/healthcare_dataset_clean.csv";
pub const DEFAULT_GENERATE_OUTPUT: &str = "data/simple_healthcare_dataset.csv";
pub const DEFAULT_GENERATE_ROWS: usize = DEFAULT_ROWS;
pub const DEFAULT_GENERATE_SEED: u64 = DEFAULT_SEED;

/// Rows shown in the `generate` preview.
const PREVIEW_ROWS: usize = 5;

/// Load, clean and write. The output file is only written once every step
/// has succeeded.
pub fn run_clean(input: &Path, output: &Path) -> Result<CleanResult> {
    let _span = info_span!("clean_command", input = %input.display()).entered();

    let raw = read_raw_table(input)
        .with_context(|| format!("load input table {}", input.display()))?;
    info!(rows = raw.height(), columns = raw.width(), "input loaded");

    let pipeline = CleaningPipeline::new(CleaningRules::default());
    let (clean, summary) = pipeline.run(raw).context("clean table")?;

    write_table(&clean, output)
        .with_context(|| format!("write cleaned table {}", output.display()))?;

    Ok(CleanResult {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        summary,
    })
}

pub fn run_report(input: &Path) -> Result<ReportResult> {
    let _span = info_span!("report_command", input = %input.display()).entered();

    let df = read_raw_table(input)
        .with_context(|| format!("load table {}", input.display()))?;
    let report = build_report(&df, &CleaningRules::default());

    Ok(ReportResult {
        input: input.to_path_buf(),
        report,
    })
}

pub fn run_generate(rows: usize, seed: u64, output: &Path) -> Result<GenerateResult> {
    let _span = info_span!("generate_command", rows, seed).entered();

    let df = generate(rows, seed).context("generate dataset")?;
    write_table(&df, output)
        .with_context(|| format!("write generated table {}", output.display()))?;

    let missing_cells = check_missing(&df)
        .columns
        .iter()
        .map(|column| column.missing)
        .sum();
    let header = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    let preview = (0..df.height().min(PREVIEW_ROWS))
        .map(|idx| {
            df.get_columns()
                .iter()
                .map(|column| {
                    column
                        .get(idx)
                        .ok()
                        .and_then(any_to_opt_string)
                        .unwrap_or_default()
                })
                .collect()
        })
        .collect();

    Ok(GenerateResult {
        output: output.to_path_buf(),
        rows: df.height(),
        columns: df.width(),
        missing_cells,
        duplicate_rows: check_duplicates(&df).duplicate_rows,
        preview,
        header,
    })
}
