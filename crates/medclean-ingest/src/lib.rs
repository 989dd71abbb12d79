//! Patient record ingestion and persistence.
//!
//! This crate loads raw delimited files into Polars DataFrames and writes
//! cleaned tables back out.
//!
//! # Features
//!
//! - **Raw loading**: every column arrives as nullable text, empty cells are null
//! - **Atomic persistence**: output goes to a temp file that is renamed into place
//! - **Value helpers**: `AnyValue` conversions used across the workspace
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use medclean_ingest::{read_raw_table, write_table};
//!
//! let df = read_raw_table(Path::new("data/sample_data_messy.csv"))?;
//! write_table(&df, Path::new("data/copy.csv"))?;
//! ```

mod csv_io;
mod error;
pub mod polars_utils;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading / Writing ===
pub use csv_io::{read_raw_table, write_table};

// === Value Helpers ===
pub use polars_utils::{
    any_to_f64, any_to_opt_string, any_to_string, cell_string, column_strings, format_numeric,
    parse_f64, row_key,
};
