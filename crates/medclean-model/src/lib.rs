//! Data model for patient record cleaning: column schema and fixed rule tables.

pub mod lookup;
pub mod rules;
pub mod schema;

pub use lookup::SynonymMap;
pub use rules::{CLIP_RANGES, CleaningRules, ClipRange};
pub use schema::{ColumnKind, ColumnSpec, CLEAN_SCHEMA, RAW_SCHEMA};
