//! Cell-level normalization used by the pipeline steps.

pub mod datetime;
pub mod numeric;
pub mod text;

pub use datetime::{format_date, normalize_date, parse_calendar_date};
pub use numeric::{median, parse_float, parse_integer};
pub use text::{normalize_text, title_case};
