//! Cleaning pipeline for patient record tables.
//!
//! This crate provides the transformation logic between ingest and export:
//!
//! - **steps**: the five whole-table cleaning steps and their shared trait
//! - **pipeline**: fixed-order orchestration with per-step counters
//! - **normalization**: numeric, date and text parsing helpers
//! - **data_utils**: DataFrame column access used by the steps

pub mod data_utils;
pub mod error;
pub mod normalization;
pub mod pipeline;
pub mod steps;

pub use error::{Result, TransformError};
pub use pipeline::{CleaningPipeline, CleaningSummary, StepOutcome, clean_table};
pub use steps::{CleaningStep, StepKind, default_steps};
