//! Comparison domain models.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether the actual value is ahead of or behind the prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    ActualAhead,
    ActualBehind,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::ActualAhead => "ACTUAL_AHEAD",
            Direction::ActualBehind => "ACTUAL_BEHIND",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of comparing a predicted value against the actual value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    /// Predicted value in crores, rounded to 3 decimals
    pub predicted_value_crores: f64,
    /// Actual value in crores, rounded to 3 decimals
    pub actual_value_crores: f64,
    pub direction: Direction,
    /// Magnitude of the divergence in percent
    pub delta_percent: f64,
}

impl ComparisonResult {
    pub fn is_actual_ahead(&self) -> bool {
        self.direction == Direction::ActualAhead
    }

    /// Delta with its sign and two decimals, e.g. `-9.09%` or `+4.76%`.
    pub fn signed_delta_label(&self) -> String {
        let sign = match self.direction {
            Direction::ActualAhead => '+',
            Direction::ActualBehind => '-',
        };
        format!("{}{:.2}%", sign, self.delta_percent)
    }
}
