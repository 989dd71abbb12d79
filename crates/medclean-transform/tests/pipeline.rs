//! Integration tests for the cleaning pipeline.

use std::fs;
use std::path::Path;

use polars::prelude::DataFrame;
use tempfile::TempDir;

use medclean_ingest::{column_strings, read_raw_table, write_table};
use medclean_model::CleaningRules;
use medclean_model::schema::clean_column_names;
use medclean_transform::{CleaningPipeline, StepKind, TransformError, clean_table};

const HEADER: &str = "patient_id,age,gender,height_cm,weight_kg,temperature,blood_pressure,heart_rate,diagnosis,length_of_stay,admission_date,insurance_type";

const MESSY: &str = "\
patient_id,age,gender,height_cm,weight_kg,temperature,blood_pressure,heart_rate,diagnosis,length_of_stay,admission_date,insurance_type
1001,45,Male,170.5,70,98.6,120/80,72,asthma,3,2023-01-10,Private
1001,45,Male,170.5,70,98.6,120/80,72,asthma,3,2023-01-10,Private
1002,abc,female,160,60,98.4,110/70,80,FLU,2,01/15/2023,prvt
1003,60,MALE,175,80,99,200/130,90,Diabetes,5,2023-03-12,Medicare
1004,30,F,165,65,98.7,118/76,70,Asthma,4,2023-04-13,
";

fn load(dir: &TempDir, name: &str, contents: &str) -> DataFrame {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    read_raw_table(&path).unwrap()
}

fn texts(df: &DataFrame, name: &str) -> Vec<String> {
    column_strings(df, name)
        .unwrap()
        .into_iter()
        .map(|value| value.unwrap_or_default())
        .collect()
}

fn write_and_read(df: &DataFrame, path: &Path) -> (String, DataFrame) {
    write_table(df, path).unwrap();
    (fs::read_to_string(path).unwrap(), read_raw_table(path).unwrap())
}

#[test]
fn cleans_messy_table_end_to_end() {
    let dir = TempDir::new().unwrap();
    let raw = load(&dir, "messy.csv", MESSY);

    let (clean, summary) = clean_table(raw).unwrap();

    assert_eq!(clean.height(), 4);
    assert_eq!(summary.input_rows, 5);
    assert_eq!(summary.duplicates_removed(), 1);
    assert_eq!(summary.nulls_remaining(), 0);
    assert_eq!(texts(&clean, "age"), ["45", "45", "60", "30"]);
    assert_eq!(texts(&clean, "systolic_bp"), ["120", "110", "200", "118"]);
    assert_eq!(texts(&clean, "diastolic_bp"), ["80", "70", "120", "76"]);
    assert_eq!(texts(&clean, "gender"), ["M", "F", "M", "F"]);
    assert_eq!(
        texts(&clean, "insurance_type"),
        ["Private", "Private", "Medicare", "Medicare"]
    );
    assert_eq!(texts(&clean, "diagnosis"), ["Asthma", "Flu", "Diabetes", "Asthma"]);
    assert_eq!(
        texts(&clean, "admission_date"),
        ["2023-01-10", "2023-01-15", "2023-03-12", "2023-04-13"]
    );
}

#[test]
fn step_counters_follow_the_data() {
    let dir = TempDir::new().unwrap();
    let raw = load(&dir, "messy.csv", MESSY);

    let (_, summary) = clean_table(raw).unwrap();

    let affected: Vec<(StepKind, usize)> = summary
        .steps
        .iter()
        .map(|outcome| (outcome.step, outcome.affected))
        .collect();
    assert_eq!(
        affected,
        vec![
            (StepKind::Deduplicate, 1),
            (StepKind::CoerceTypes, 1),
            (StepKind::ImputeMissing, 2),
            (StepKind::ClipOutliers, 1),
            (StepKind::StandardizeText, 6),
        ]
    );
    let dedupe = summary.step(StepKind::Deduplicate).unwrap();
    assert_eq!((dedupe.rows_before, dedupe.rows_after), (5, 4));
    assert_eq!(summary.nulls_after_imputation(), 0);
}

#[test]
fn written_output_matches_clean_layout() {
    let dir = TempDir::new().unwrap();
    let raw = load(&dir, "messy.csv", MESSY);
    let (clean, _) = clean_table(raw).unwrap();

    let (contents, _) = write_and_read(&clean, &dir.path().join("out").join("clean.csv"));

    insta::assert_snapshot!(contents, @r"
    patient_id,age,gender,height_cm,weight_kg,temperature,heart_rate,diagnosis,length_of_stay,admission_date,insurance_type,systolic_bp,diastolic_bp
    1001,45,M,170.5,70,98.6,72,Asthma,3,2023-01-10,Private,120,80
    1002,45,F,160,60,98.4,80,Flu,2,2023-01-15,Private,110,70
    1003,60,M,175,80,99,90,Diabetes,5,2023-03-12,Medicare,200,120
    1004,30,F,165,65,98.7,70,Asthma,4,2023-04-13,Medicare,118,76
    ");
}

#[test]
fn output_columns_follow_clean_schema() {
    let dir = TempDir::new().unwrap();
    let raw = load(&dir, "messy.csv", MESSY);

    let (clean, summary) = clean_table(raw).unwrap();

    let mut names: Vec<&str> = clean.get_column_names().iter().map(|n| n.as_str()).collect();
    names.sort_unstable();
    let mut expected = clean_column_names();
    expected.sort_unstable();
    assert_eq!(names, expected);
    assert!(clean.column("blood_pressure").is_err());
    assert_eq!(summary.output_columns, 13);
}

#[test]
fn second_run_changes_nothing() {
    let dir = TempDir::new().unwrap();
    let raw = load(&dir, "messy.csv", MESSY);
    let (first, _) = clean_table(raw).unwrap();
    let (first_csv, reloaded) = write_and_read(&first, &dir.path().join("first.csv"));

    let (second, summary) = clean_table(reloaded).unwrap();
    let (second_csv, _) = write_and_read(&second, &dir.path().join("second.csv"));

    assert_eq!(first_csv, second_csv);
    assert_eq!(summary.duplicates_removed(), 0);
    for outcome in &summary.steps {
        assert_eq!(outcome.affected, 0, "{} changed a clean table", outcome.step);
    }
}

#[test]
fn values_land_in_ranges_and_categories() {
    let dir = TempDir::new().unwrap();
    let raw = load(
        &dir,
        "extreme.csv",
        &format!(
            "{HEADER}\n\
             1,-5,X,50,400,120,300/20,5,flu,99,2024-02-30,NA\n\
             2,150,unknown,250,10,90,,200,,-3,2024-02-28,med\n\
             3,,,,,,,,,,,\n"
        ),
    );
    let rules = CleaningRules::default();

    let (clean, _) = CleaningPipeline::new(rules.clone()).run(raw).unwrap();

    for (name, range) in &rules.clip_ranges {
        for value in texts(&clean, name) {
            let value: f64 = value.parse().unwrap();
            assert!(range.contains(value), "{name}={value} outside {range:?}");
        }
    }
    for (name, allowed) in &rules.expected_categories {
        for value in texts(&clean, name) {
            assert!(allowed.contains(&value), "{name}={value} not expected");
        }
    }
}

#[test]
fn every_copy_of_a_duplicate_collapses_to_one() {
    let dir = TempDir::new().unwrap();
    let row = "7,40,F,160,55,98.6,110/70,70,Flu,2,2023-06-01,Medicaid";
    let body = std::iter::repeat_n(row, 4).collect::<Vec<_>>().join("\n");
    let raw = load(&dir, "copies.csv", &format!("{HEADER}\n{body}\n"));

    let (clean, summary) = clean_table(raw).unwrap();

    assert_eq!(clean.height(), 1);
    assert_eq!(summary.duplicates_removed(), 3);
}

#[test]
fn missing_column_aborts_before_any_step() {
    let dir = TempDir::new().unwrap();
    let header = HEADER.replace(",heart_rate", "");
    let raw = load(
        &dir,
        "short.csv",
        &format!("{header}\n1,40,F,160,55,98.6,110/70,Flu,2,2023-06-01,Medicaid\n"),
    );

    let err = clean_table(raw).unwrap_err();

    assert!(matches!(err, TransformError::MissingColumn { column } if column == "heart_rate"));
}

#[test]
fn empty_table_cleans_to_empty_table() {
    let dir = TempDir::new().unwrap();
    let raw = load(&dir, "empty.csv", &format!("{HEADER}\n"));

    let (clean, summary) = clean_table(raw).unwrap();

    assert_eq!(clean.height(), 0);
    assert_eq!(summary.output_columns, 13);
}
