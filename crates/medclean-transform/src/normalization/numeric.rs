//! Numeric parsing and column statistics.

use medclean_ingest::parse_f64;

/// Parses a string as a finite f64, returning None for invalid or empty strings.
pub fn parse_float(value: &str) -> Option<f64> {
    parse_f64(value)
}

/// Parses an integer-compatible number.
///
/// Accepts plain integers and floats with no fractional part (`"42"`,
/// `"42.0"`); anything else is None.
pub fn parse_integer(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if let Ok(v) = trimmed.parse::<i64>() {
        return Some(v);
    }
    let v = parse_f64(trimmed)?;
    if v.fract() == 0.0 && v >= i64::MIN as f64 && v < i64::MAX as f64 {
        Some(v as i64)
    } else {
        None
    }
}

/// Median of the given values, or None when empty.
///
/// Even-length inputs average the two middle values.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}
