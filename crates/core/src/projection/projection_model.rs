//! Projection domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::{CRORE_BASE, DEFAULT_PROJECTION_DAYS};

/// A single point of a projected series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentPoint {
    /// Calendar date of this point
    pub date: NaiveDate,
    /// Portfolio value in base currency units
    pub value: f64,
}

impl InvestmentPoint {
    /// Value expressed in crores.
    pub fn value_in_crores(&self) -> f64 {
        self.value / CRORE_BASE
    }
}

/// Inputs of a projection run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionConfig {
    pub start_date: NaiveDate,
    /// Starting portfolio value in base currency units
    pub initial_value: f64,
    /// Annual growth rate as a percentage (25 means 25%)
    pub annual_rate_percent: f64,
    /// Added whenever a step lands on the first day of a month
    pub monthly_contribution: f64,
    pub step_days: u64,
    pub total_days: u64,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            start_date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap_or_default(),
            initial_value: 1.10e7,
            annual_rate_percent: 25.0,
            monthly_contribution: 2e5,
            step_days: 1,
            total_days: DEFAULT_PROJECTION_DAYS,
        }
    }
}
