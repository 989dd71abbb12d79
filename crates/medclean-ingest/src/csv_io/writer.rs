//! Table persistence.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use csv::WriterBuilder;
use polars::prelude::DataFrame;
use tracing::info;

use crate::error::{IngestError, Result};
use crate::polars_utils::cell_string;

/// Write a DataFrame as CSV with a header row. Nulls become empty cells.
///
/// Uses atomic write (temp file + rename) so a failure never leaves a
/// truncated file at `path`.
pub fn write_table(df: &DataFrame, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| IngestError::FileWrite {
            operation: "create directory",
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let temp_path = temp_path_for(path);
    if let Err(error) = write_csv(df, &temp_path) {
        let _ = fs::remove_file(&temp_path);
        return Err(error);
    }

    fs::rename(&temp_path, path).map_err(|e| IngestError::AtomicWriteFailed {
        temp_path: temp_path.clone(),
        target_path: path.to_path_buf(),
        source: e,
    })?;

    info!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "table written"
    );
    Ok(())
}

fn write_csv(df: &DataFrame, path: &Path) -> Result<()> {
    let csv_error = |e: csv::Error| IngestError::CsvWrite {
        path: path.to_path_buf(),
        message: e.to_string(),
    };
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(csv_error)?;

    let columns = df.get_columns();
    writer
        .write_record(columns.iter().map(|column| column.name().as_str()))
        .map_err(csv_error)?;
    for idx in 0..df.height() {
        let record: Vec<String> = columns
            .iter()
            .map(|column| cell_string(column, idx).unwrap_or_default())
            .collect();
        writer.write_record(&record).map_err(csv_error)?;
    }
    writer.flush().map_err(|e| IngestError::FileWrite {
        operation: "flush",
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("table.csv"));
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{IntoColumn, NamedFrom, Series};
    use tempfile::tempdir;

    use crate::csv_io::read_raw_table;

    fn sample_df() -> DataFrame {
        DataFrame::new(vec![
            Series::new("patient_id".into(), vec![Some(1001i64), None]).into_column(),
            Series::new("systolic_bp".into(), vec![Some(120.0f64), Some(131.5)]).into_column(),
            Series::new("gender".into(), vec![Some("M"), Some("F")]).into_column(),
        ])
        .unwrap()
    }

    #[test]
    fn test_write_table_formats_cells() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("clean.csv");

        write_table(&sample_df(), &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "patient_id,systolic_bp,gender\n1001,120,M\n,131.5,F\n"
        );
        assert!(!temp_path_for(&path).exists());
    }

    #[test]
    fn test_write_table_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("out").join("clean.csv");

        write_table(&sample_df(), &path).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_written_table_reads_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("clean.csv");
        write_table(&sample_df(), &path).unwrap();

        let df = read_raw_table(&path).unwrap();

        assert_eq!(df.height(), 2);
        assert_eq!(df.column("patient_id").unwrap().null_count(), 1);
        let bp = df.column("systolic_bp").unwrap().str().unwrap();
        assert_eq!(bp.get(0), Some("120"));
    }

    #[test]
    fn test_temp_path_sits_next_to_target() {
        let path = Path::new("data/clean.csv");
        assert_eq!(temp_path_for(path), PathBuf::from("data/clean.csv.tmp"));
    }
}
