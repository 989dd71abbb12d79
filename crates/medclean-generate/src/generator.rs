use chrono::{NaiveDate, TimeDelta};
use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use tracing::debug;

use medclean_model::schema::{
    ADMISSION_DATE, AGE, BLOOD_PRESSURE, DIAGNOSIS, GENDER, HEART_RATE, HEIGHT_CM, INSURANCE_TYPE,
    LENGTH_OF_STAY, PATIENT_ID, TEMPERATURE, WEIGHT_KG,
};

use crate::error::{GenerateError, Result};

pub const DEFAULT_ROWS: usize = 200;
pub const DEFAULT_SEED: u64 = 42;

/// Identifier of the first generated patient; later rows count up from here.
pub const FIRST_PATIENT_ID: i64 = 1001;

pub const DIAGNOSES: &[&str] = &[
    "Hypertension",
    "Diabetes",
    "Asthma",
    "Heart Disease",
    "Injury",
    "Cancer",
    "COPD",
    "Anxiety",
    "Depression",
    "Obesity",
];
pub const INSURANCE_TYPES: &[&str] = &["Private", "Medicare", "Medicaid", "Uninsured"];
pub const GENDERS: &[&str] = &["Male", "Female"];

/// First and last admission dates as `(year, month, day)`; dates are drawn
/// uniformly from this closed window.
pub const ADMISSION_START: (i32, u32, u32) = (2022, 1, 1);
pub const ADMISSION_END: (i32, u32, u32) = (2024, 12, 31);

/// Generate `rows` synthetic patient records in the raw column layout.
///
/// The same `(rows, seed)` always yields the same table. Values are clean:
/// every cell is present and inside its valid range, so the output is a
/// starting point for injecting faults by hand.
///
/// # Errors
///
/// Returns an error only if a distribution or date constant is invalid, or
/// the table cannot be assembled.
pub fn generate(rows: usize, seed: u64) -> Result<DataFrame> {
    let mut rng = StdRng::seed_from_u64(seed);

    let patient_id: Vec<i64> = (FIRST_PATIENT_ID..).take(rows).collect();
    let age: Vec<i64> = (0..rows).map(|_| rng.gen_range(18..90)).collect();
    let gender = choose_each(&mut rng, GENDERS, rows);
    let height_cm = sample_normal(&mut rng, HEIGHT_CM, 168.0, 9.0, rows)?;
    let weight_kg = sample_normal(&mut rng, WEIGHT_KG, 74.0, 14.0, rows)?;
    let temperature: Vec<f64> = (0..rows)
        .map(|_| round_one_decimal(rng.gen_range(97.5..99.5)))
        .collect();
    let blood_pressure: Vec<String> = (0..rows)
        .map(|_| {
            let systolic: u32 = rng.gen_range(100..=160);
            let diastolic: u32 = rng.gen_range(60..=100);
            format!("{systolic}/{diastolic}")
        })
        .collect();
    let heart_rate: Vec<i64> = (0..rows).map(|_| rng.gen_range(55..105)).collect();
    let diagnosis = choose_each(&mut rng, DIAGNOSES, rows);
    let length_of_stay: Vec<i64> = (0..rows).map(|_| rng.gen_range(1..15)).collect();
    let admission_date = sample_dates(&mut rng, rows)?;
    let insurance_type = choose_each(&mut rng, INSURANCE_TYPES, rows);

    let columns: Vec<Column> = vec![
        Series::new(PATIENT_ID.into(), patient_id).into_column(),
        Series::new(AGE.into(), age).into_column(),
        Series::new(GENDER.into(), gender).into_column(),
        Series::new(HEIGHT_CM.into(), height_cm).into_column(),
        Series::new(WEIGHT_KG.into(), weight_kg).into_column(),
        Series::new(TEMPERATURE.into(), temperature).into_column(),
        Series::new(BLOOD_PRESSURE.into(), blood_pressure).into_column(),
        Series::new(HEART_RATE.into(), heart_rate).into_column(),
        Series::new(DIAGNOSIS.into(), diagnosis).into_column(),
        Series::new(LENGTH_OF_STAY.into(), length_of_stay).into_column(),
        Series::new(ADMISSION_DATE.into(), admission_date).into_column(),
        Series::new(INSURANCE_TYPE.into(), insurance_type).into_column(),
    ];
    let df = DataFrame::new(columns)?;
    debug!(rows, seed, "dataset generated");
    Ok(df)
}

fn choose_each(rng: &mut StdRng, choices: &[&str], rows: usize) -> Vec<String> {
    (0..rows)
        .map(|_| choices.choose(rng).copied().unwrap_or_default().to_string())
        .collect()
}

fn sample_normal(
    rng: &mut StdRng,
    column: &'static str,
    mean: f64,
    std_dev: f64,
    rows: usize,
) -> Result<Vec<f64>> {
    let normal = Normal::new(mean, std_dev).map_err(|e| GenerateError::Distribution {
        column,
        message: e.to_string(),
    })?;
    Ok((0..rows)
        .map(|_| round_one_decimal(normal.sample(rng)))
        .collect())
}

fn sample_dates(rng: &mut StdRng, rows: usize) -> Result<Vec<String>> {
    let (Some(start), Some(end)) = (calendar_date(ADMISSION_START), calendar_date(ADMISSION_END))
    else {
        return Err(GenerateError::Distribution {
            column: ADMISSION_DATE,
            message: "admission window is not a valid calendar range".to_string(),
        });
    };
    let span = (end - start).num_days();
    Ok((0..rows)
        .map(|_| {
            let offset = rng.gen_range(0..=span);
            (start + TimeDelta::days(offset))
                .format("%Y-%m-%d")
                .to_string()
        })
        .collect())
}

fn calendar_date((year, month, day): (i32, u32, u32)) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
