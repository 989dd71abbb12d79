//! Seeded synthetic patient record generator.
//!
//! Produces a clean table in the raw column layout (blood pressure as a
//! `sys/dia` string, text categories unabbreviated) for demos and tests.

mod error;
mod generator;

pub use error::{GenerateError, Result};
pub use generator::{
    ADMISSION_END, ADMISSION_START, DEFAULT_ROWS, DEFAULT_SEED, DIAGNOSES, FIRST_PATIENT_ID,
    GENDERS, INSURANCE_TYPES, generate,
};
