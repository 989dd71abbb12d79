//! Qualitative health score.

use std::fmt;

use serde::Serialize;

/// Overall verdict derived from how many checks found issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthScore {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl HealthScore {
    /// 0 failing checks is Excellent, 1 Good, 2 Fair, 3 or more Poor.
    pub fn from_failing_checks(failing: usize) -> Self {
        match failing {
            0 => Self::Excellent,
            1 => Self::Good,
            2 => Self::Fair,
            _ => Self::Poor,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "EXCELLENT",
            Self::Good => "GOOD",
            Self::Fair => "FAIR",
            Self::Poor => "POOR",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Excellent => "Data is clean and ready to use.",
            Self::Good => "Minor issues, generally fine.",
            Self::Fair => "Moderate issues, review recommended.",
            Self::Poor => "Significant issues, cleaning required.",
        }
    }
}

impl fmt::Display for HealthScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label(), self.description())
    }
}
