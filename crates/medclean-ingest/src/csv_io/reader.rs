//! Raw table loading.
//!
//! Every column is loaded as nullable text; typing is the pipeline's job. An
//! empty or whitespace-only cell is the null marker.

use std::path::Path;

use csv::ReaderBuilder;
use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};
use tracing::debug;

use crate::error::{IngestError, Result};

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

fn normalize_cell(raw: &str) -> Option<String> {
    if raw.trim().is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}

/// Read a delimited file into a DataFrame of nullable string columns.
///
/// # Errors
///
/// Returns an error if the file is missing, unreadable, has no header row, or
/// contains a record whose field count differs from the header.
pub fn read_raw_table(path: &Path) -> Result<DataFrame> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|e| csv_parse_error(path, &e))?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| csv_parse_error(path, &e))?
        .iter()
        .map(normalize_header)
        .collect();
    if headers.iter().all(String::is_empty) {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    let mut cells: Vec<Vec<Option<String>>> = vec![Vec::new(); headers.len()];
    for record in reader.records() {
        let record = record.map_err(|e| csv_parse_error(path, &e))?;
        for (idx, values) in cells.iter_mut().enumerate() {
            values.push(record.get(idx).and_then(normalize_cell));
        }
    }

    let columns: Vec<Column> = headers
        .iter()
        .zip(cells)
        .map(|(name, values)| Series::new(name.as_str().into(), values).into_column())
        .collect();
    let df = DataFrame::new(columns)?;
    debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "raw table loaded"
    );
    Ok(df)
}

fn csv_parse_error(path: &Path, error: &csv::Error) -> IngestError {
    if let csv::ErrorKind::Io(io) = error.kind() {
        return IngestError::FileRead {
            path: path.to_path_buf(),
            source: std::io::Error::new(io.kind(), io.to_string()),
        };
    }
    IngestError::CsvParse {
        path: path.to_path_buf(),
        message: error.to_string(),
    }
}
