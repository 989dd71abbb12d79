//! Fixed column schema for patient record datasets.
//!
//! The raw schema is what the generator emits and what the cleaning pipeline
//! accepts. The cleaned schema drops `blood_pressure` and appends the derived
//! `systolic_bp` / `diastolic_bp` columns.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const PATIENT_ID: &str = "patient_id";
pub const AGE: &str = "age";
pub const GENDER: &str = "gender";
pub const HEIGHT_CM: &str = "height_cm";
pub const WEIGHT_KG: &str = "weight_kg";
pub const TEMPERATURE: &str = "temperature";
pub const BLOOD_PRESSURE: &str = "blood_pressure";
pub const SYSTOLIC_BP: &str = "systolic_bp";
pub const DIASTOLIC_BP: &str = "diastolic_bp";
pub const HEART_RATE: &str = "heart_rate";
pub const DIAGNOSIS: &str = "diagnosis";
pub const LENGTH_OF_STAY: &str = "length_of_stay";
pub const ADMISSION_DATE: &str = "admission_date";
pub const INSURANCE_TYPE: &str = "insurance_type";

/// Semantic type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    /// Nullable 64-bit integer.
    Integer,
    /// Nullable 64-bit float.
    Float,
    /// Free or categorical text.
    Text,
    /// Calendar date, stored as `YYYY-MM-DD` text.
    Date,
    /// `sys/dia` string that is split into two float columns.
    Composite,
}

impl ColumnKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnKind::Integer => "integer",
            ColumnKind::Float => "float",
            ColumnKind::Text => "text",
            ColumnKind::Date => "date",
            ColumnKind::Composite => "composite",
        }
    }

    /// Integer and float columns.
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnKind::Integer | ColumnKind::Float)
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named column with its semantic type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub kind: ColumnKind,
}

impl ColumnSpec {
    const fn new(name: &'static str, kind: ColumnKind) -> Self {
        Self { name, kind }
    }
}

/// Raw input schema in file order.
pub const RAW_SCHEMA: &[ColumnSpec] = &[
    ColumnSpec::new(PATIENT_ID, ColumnKind::Integer),
    ColumnSpec::new(AGE, ColumnKind::Integer),
    ColumnSpec::new(GENDER, ColumnKind::Text),
    ColumnSpec::new(HEIGHT_CM, ColumnKind::Float),
    ColumnSpec::new(WEIGHT_KG, ColumnKind::Float),
    ColumnSpec::new(TEMPERATURE, ColumnKind::Float),
    ColumnSpec::new(BLOOD_PRESSURE, ColumnKind::Composite),
    ColumnSpec::new(HEART_RATE, ColumnKind::Integer),
    ColumnSpec::new(DIAGNOSIS, ColumnKind::Text),
    ColumnSpec::new(LENGTH_OF_STAY, ColumnKind::Integer),
    ColumnSpec::new(ADMISSION_DATE, ColumnKind::Date),
    ColumnSpec::new(INSURANCE_TYPE, ColumnKind::Text),
];

/// Cleaned output schema in file order.
pub const CLEAN_SCHEMA: &[ColumnSpec] = &[
    ColumnSpec::new(PATIENT_ID, ColumnKind::Integer),
    ColumnSpec::new(AGE, ColumnKind::Integer),
    ColumnSpec::new(GENDER, ColumnKind::Text),
    ColumnSpec::new(HEIGHT_CM, ColumnKind::Float),
    ColumnSpec::new(WEIGHT_KG, ColumnKind::Float),
    ColumnSpec::new(TEMPERATURE, ColumnKind::Float),
    ColumnSpec::new(HEART_RATE, ColumnKind::Integer),
    ColumnSpec::new(DIAGNOSIS, ColumnKind::Text),
    ColumnSpec::new(LENGTH_OF_STAY, ColumnKind::Integer),
    ColumnSpec::new(ADMISSION_DATE, ColumnKind::Date),
    ColumnSpec::new(INSURANCE_TYPE, ColumnKind::Text),
    ColumnSpec::new(SYSTOLIC_BP, ColumnKind::Float),
    ColumnSpec::new(DIASTOLIC_BP, ColumnKind::Float),
];

/// Columns coerced to nullable integers.
pub const INTEGER_COLUMNS: &[&str] = &[PATIENT_ID, AGE, HEART_RATE, LENGTH_OF_STAY];

/// Columns coerced to nullable floats (the derived blood pressure columns are
/// produced by the composite split, not by coercion).
pub const FLOAT_COLUMNS: &[&str] = &[HEIGHT_CM, WEIGHT_KG, TEMPERATURE];

/// Columns whose nulls are filled with the column median.
pub const MEDIAN_IMPUTED_COLUMNS: &[&str] = &[
    AGE,
    HEIGHT_CM,
    WEIGHT_KG,
    TEMPERATURE,
    HEART_RATE,
    LENGTH_OF_STAY,
    SYSTOLIC_BP,
    DIASTOLIC_BP,
];

/// Columns whose nulls are filled with the column mode.
pub const MODE_IMPUTED_COLUMNS: &[&str] = &[GENDER, DIAGNOSIS, INSURANCE_TYPE, ADMISSION_DATE];

/// Text columns trimmed and title-cased by the standardizer.
pub const TEXT_COLUMNS: &[&str] = &[GENDER, INSURANCE_TYPE, DIAGNOSIS];

/// Names of every raw column, in file order.
pub fn raw_column_names() -> Vec<&'static str> {
    RAW_SCHEMA.iter().map(|spec| spec.name).collect()
}

/// Names of every cleaned column, in file order.
pub fn clean_column_names() -> Vec<&'static str> {
    CLEAN_SCHEMA.iter().map(|spec| spec.name).collect()
}

/// Look up the semantic type of a cleaned column.
pub fn clean_column_kind(name: &str) -> Option<ColumnKind> {
    CLEAN_SCHEMA
        .iter()
        .find(|spec| spec.name == name)
        .map(|spec| spec.kind)
}
