use anyhow::Result;
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;

use medclean_cli::types::{CleanResult, GenerateResult, ReportResult};
use medclean_report::{HealthScore, QualityReport};
use medclean_transform::StepKind;

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn print_clean_summary(result: &CleanResult) {
    let summary = &result.summary;
    println!("Input: {}", result.input.display());
    println!(
        "Loaded: {} rows x {} columns",
        summary.input_rows, summary.input_columns
    );

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Step"),
        header_cell("Rows"),
        header_cell("Changed"),
        header_cell("Nulls left"),
        header_cell("ms"),
    ]);
    apply_table_style(&mut table);
    for column in 1..=4 {
        align_column(&mut table, column, CellAlignment::Right);
    }
    for outcome in &summary.steps {
        table.add_row(vec![
            Cell::new(outcome.step.label()),
            Cell::new(outcome.rows_after),
            count_cell(outcome.affected, step_color(outcome.step)),
            count_cell(outcome.nulls_remaining, Color::Yellow),
            dim_cell(outcome.duration_ms),
        ]);
    }
    println!("{table}");

    println!("Saved: {}", result.output.display());
    println!(
        "Final shape: {} rows x {} columns",
        summary.output_rows, summary.output_columns
    );
}

pub fn print_report(result: &ReportResult) {
    let report = &result.report;
    println!("File: {}", result.input.display());
    println!("Shape: {} rows x {} columns", report.rows, report.columns);

    print_missing(report);
    print_duplicates(report);
    print_ranges(report);
    print_categories(report);

    let mut table = Table::new();
    table.set_header(vec![header_cell("Check"), header_cell("Status")]);
    apply_table_style(&mut table);
    for check in report.checks() {
        let status = if check.passed() {
            Cell::new("Pass").fg(Color::Green)
        } else {
            Cell::new(format!("{} issue(s)", check.issues)).fg(Color::Yellow)
        };
        table.add_row(vec![Cell::new(check.name), status]);
    }
    table.add_row(vec![
        header_cell("Health score"),
        Cell::new(report.score)
            .fg(score_color(report.score))
            .add_attribute(Attribute::Bold),
    ]);
    println!();
    println!("{table}");
}

fn print_missing(report: &QualityReport) {
    println!();
    println!("Missing values");
    if report.missing.columns.is_empty() {
        println!("  No missing values found.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Missing"),
        header_cell("%"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for column in &report.missing.columns {
        table.add_row(vec![
            Cell::new(&column.column),
            Cell::new(column.missing).fg(Color::Yellow),
            Cell::new(format!("{:.1}", column.percent)),
        ]);
    }
    println!("{table}");
}

fn print_duplicates(report: &QualityReport) {
    println!();
    println!("Duplicate rows");
    match report.duplicates.duplicate_rows {
        0 => println!("  No duplicate rows found."),
        n => println!("  {n} duplicate row(s) found."),
    }
}

fn print_ranges(report: &QualityReport) {
    println!();
    println!("Numeric ranges");
    if report.ranges.violations.is_empty() {
        println!("  All numeric values within valid ranges.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Outside"),
        header_cell("Range"),
        header_cell("%"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for violation in &report.ranges.violations {
        table.add_row(vec![
            Cell::new(&violation.column),
            Cell::new(violation.count).fg(Color::Yellow),
            Cell::new(format!("[{}, {}]", violation.lo, violation.hi)),
            Cell::new(format!("{:.1}", violation.percent)),
        ]);
    }
    println!("{table}");
}

fn print_categories(report: &QualityReport) {
    println!();
    println!("Categorical consistency");
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Values found"),
        header_cell("Unexpected"),
    ]);
    apply_table_style(&mut table);
    for finding in &report.categories.columns {
        let unexpected = if finding.is_consistent() {
            Cell::new("-").fg(Color::Green)
        } else {
            Cell::new(finding.unexpected.join(", ")).fg(Color::Yellow)
        };
        table.add_row(vec![
            Cell::new(&finding.column),
            Cell::new(finding.found.join(", ")),
            unexpected,
        ]);
    }
    println!("{table}");
}

pub fn print_generate_summary(result: &GenerateResult) {
    println!("Dataset generated: {}", result.output.display());
    println!("Rows: {} | Columns: {}", result.rows, result.columns);
    println!(
        "Missing: {} | Duplicates: {}",
        result.missing_cells, result.duplicate_rows
    );
    if result.preview.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(result.header.iter().map(|name| header_cell(name)));
    apply_table_style(&mut table);
    for row in &result.preview {
        table.add_row(row);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn step_color(step: StepKind) -> Color {
    match step {
        StepKind::Deduplicate | StepKind::CoerceTypes => Color::Yellow,
        StepKind::ImputeMissing | StepKind::ClipOutliers | StepKind::StandardizeText => {
            Color::Blue
        }
    }
}

fn score_color(score: HealthScore) -> Color {
    match score {
        HealthScore::Excellent => Color::Green,
        HealthScore::Good => Color::Yellow,
        HealthScore::Fair => Color::DarkYellow,
        HealthScore::Poor => Color::Red,
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
