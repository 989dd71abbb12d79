//! Integration tests for the quality report.

use std::fs;

use tempfile::TempDir;

use medclean_ingest::{read_raw_table, write_table};
use medclean_model::CleaningRules;
use medclean_report::{HealthScore, build_report, report_file};
use medclean_transform::clean_table;

const MESSY: &str = "\
patient_id,age,gender,height_cm,weight_kg,temperature,blood_pressure,heart_rate,diagnosis,length_of_stay,admission_date,insurance_type
1001,45,Male,170.5,70,98.6,120/80,72,asthma,3,2023-01-10,Private
1001,45,Male,170.5,70,98.6,120/80,72,asthma,3,2023-01-10,Private
1002,abc,female,160,60,98.4,110/70,300,FLU,2,01/15/2023,prvt
1003,60,MALE,175,80,99,200/130,90,Diabetes,5,2023-03-12,Medicare
1004,30,F,165,65,98.7,118/76,70,Asthma,4,2023-04-13,
";

fn messy_path(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("messy.csv");
    fs::write(&path, MESSY).unwrap();
    path
}

#[test]
fn messy_table_scores_poor() {
    let dir = TempDir::new().unwrap();

    let report = report_file(&messy_path(&dir), &CleaningRules::default()).unwrap();

    assert_eq!(report.rows, 5);
    assert_eq!(report.columns, 12);
    assert_eq!(report.missing.columns[0].column, "insurance_type");
    assert_eq!(report.duplicates.duplicate_rows, 1);
    assert_eq!(report.ranges.violations[0].column, "heart_rate");
    assert_eq!(report.categories.issue_count(), 2);
    assert_eq!(report.failing_checks(), 4);
    assert_eq!(report.score, HealthScore::Poor);
}

#[test]
fn cleaned_table_scores_excellent() {
    let dir = TempDir::new().unwrap();
    let raw = read_raw_table(&messy_path(&dir)).unwrap();
    let (clean, _) = clean_table(raw).unwrap();
    let clean_path = dir.path().join("clean.csv");
    write_table(&clean, &clean_path).unwrap();

    let report = report_file(&clean_path, &CleaningRules::default()).unwrap();

    assert_eq!(report.failing_checks(), 0);
    assert_eq!(report.score, HealthScore::Excellent);
    assert!(report.checks().iter().all(|check| check.passed()));
}

#[test]
fn report_serializes_for_machine_output() {
    let dir = TempDir::new().unwrap();
    let raw = read_raw_table(&messy_path(&dir)).unwrap();

    let report = build_report(&raw, &CleaningRules::default());
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["score"], "poor");
    assert_eq!(json["duplicates"]["duplicate_rows"], 1);
    assert_eq!(json["categories"]["columns"][0]["column"], "gender");
}

#[test]
fn missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();

    let err = report_file(&dir.path().join("absent.csv"), &CleaningRules::default()).unwrap_err();

    assert!(err.to_string().contains("not found"));
}
