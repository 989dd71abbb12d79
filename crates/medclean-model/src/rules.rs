//! Fixed data-quality rule tables shared by the cleaning pipeline and the
//! quality report.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::lookup::SynonymMap;
use crate::schema::{
    AGE, DIASTOLIC_BP, GENDER, HEART_RATE, HEIGHT_CM, INSURANCE_TYPE, LENGTH_OF_STAY, SYSTOLIC_BP,
    TEMPERATURE, WEIGHT_KG,
};

/// Closed interval `[lo, hi]` of medically plausible values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClipRange {
    pub lo: f64,
    pub hi: f64,
}

impl ClipRange {
    pub const fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.lo && value <= self.hi
    }

    /// Clamp a value into the range. NaN is returned unchanged.
    pub fn clamp(&self, value: f64) -> f64 {
        if value < self.lo {
            self.lo
        } else if value > self.hi {
            self.hi
        } else {
            value
        }
    }

    /// Integer clamp for nullable integer columns.
    pub fn clamp_i64(&self, value: i64) -> i64 {
        let lo = self.lo.ceil() as i64;
        let hi = self.hi.floor() as i64;
        value.clamp(lo, hi)
    }
}

/// Valid ranges per numeric column, in reporting order.
pub const CLIP_RANGES: &[(&str, ClipRange)] = &[
    (AGE, ClipRange::new(0.0, 90.0)),
    (HEIGHT_CM, ClipRange::new(100.0, 200.0)),
    (WEIGHT_KG, ClipRange::new(20.0, 150.0)),
    (TEMPERATURE, ClipRange::new(95.0, 106.0)),
    (HEART_RATE, ClipRange::new(30.0, 150.0)),
    (LENGTH_OF_STAY, ClipRange::new(0.0, 30.0)),
    (SYSTOLIC_BP, ClipRange::new(80.0, 200.0)),
    (DIASTOLIC_BP, ClipRange::new(40.0, 120.0)),
];

pub const GENDER_SYNONYMS: &[(&str, &str)] = &[
    ("Male", "M"),
    ("Female", "F"),
    ("M", "M"),
    ("F", "F"),
    ("1", "U"),
    ("2", "U"),
    ("X", "U"),
    ("Unknown", "U"),
    ("U", "U"),
];

pub const INSURANCE_SYNONYMS: &[(&str, &str)] = &[
    ("Prvt", "Private"),
    ("Med", "Medicare"),
    ("None", "Uninsured"),
    ("NA", "Uninsured"),
    ("nan", "Uninsured"),
];

pub const GENDER_CATEGORIES: &[&str] = &["M", "F", "U"];

pub const INSURANCE_CATEGORIES: &[&str] =
    &["Private", "Medicare", "Medicaid", "Uninsured", "Employer"];

/// The complete rule set handed to each pipeline step and to the report.
#[derive(Debug, Clone, Serialize)]
pub struct CleaningRules {
    /// Ordered `(column, range)` pairs.
    pub clip_ranges: Vec<(String, ClipRange)>,
    pub gender_map: SynonymMap,
    pub insurance_map: SynonymMap,
    /// Expected canonical values for categorical columns.
    pub expected_categories: BTreeMap<String, Vec<String>>,
}

impl Default for CleaningRules {
    fn default() -> Self {
        let mut expected_categories = BTreeMap::new();
        expected_categories.insert(GENDER.to_string(), owned(GENDER_CATEGORIES));
        expected_categories.insert(INSURANCE_TYPE.to_string(), owned(INSURANCE_CATEGORIES));
        Self {
            clip_ranges: CLIP_RANGES
                .iter()
                .map(|(column, range)| ((*column).to_string(), *range))
                .collect(),
            gender_map: SynonymMap::new(GENDER_SYNONYMS.iter().copied()),
            insurance_map: SynonymMap::new(INSURANCE_SYNONYMS.iter().copied()),
            expected_categories,
        }
    }
}

impl CleaningRules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clip_range(&self, column: &str) -> Option<ClipRange> {
        self.clip_ranges
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, range)| *range)
    }

    pub fn expected_values(&self, column: &str) -> Option<&[String]> {
        self.expected_categories.get(column).map(Vec::as_slice)
    }

    /// Synonym table for a text column, if it has one.
    pub fn synonyms_for(&self, column: &str) -> Option<&SynonymMap> {
        match column {
            GENDER => Some(&self.gender_map),
            INSURANCE_TYPE => Some(&self.insurance_map),
            _ => None,
        }
    }
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::DIAGNOSIS;

    #[test]
    fn clamp_bounds() {
        let range = ClipRange::new(80.0, 200.0);
        assert_eq!(range.clamp(250.0), 200.0);
        assert_eq!(range.clamp(10.0), 80.0);
        assert_eq!(range.clamp(120.5), 120.5);
        assert!(range.clamp(f64::NAN).is_nan());
        assert_eq!(range.clamp_i64(-3), 80);
    }

    #[test]
    fn default_rules_cover_every_range_column() {
        let rules = CleaningRules::default();
        assert_eq!(rules.clip_ranges.len(), 8);
        assert_eq!(rules.clip_range(DIASTOLIC_BP), Some(ClipRange::new(40.0, 120.0)));
        assert_eq!(rules.clip_range(DIAGNOSIS), None);
    }

    #[test]
    fn gender_map_resolves_to_expected_categories() {
        let rules = CleaningRules::default();
        let expected = rules.expected_values(GENDER).expect("gender categories");
        for value in rules.gender_map.canonical_values() {
            assert!(expected.iter().any(|e| e == value), "{value}");
        }
        assert_eq!(rules.gender_map.get("MALE"), Some("M"));
    }

    #[test]
    fn insurance_map_resolves_to_expected_categories() {
        let rules = CleaningRules::default();
        let expected = rules.expected_values(INSURANCE_TYPE).expect("insurance categories");
        for value in rules.insurance_map.canonical_values() {
            assert!(expected.iter().any(|e| e == value), "{value}");
        }
        assert!(rules.synonyms_for(DIAGNOSIS).is_none());
    }
}
