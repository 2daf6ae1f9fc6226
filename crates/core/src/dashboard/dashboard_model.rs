//! Dashboard view models.

use serde::{Deserialize, Serialize};

use crate::charts::ChartData;
use crate::comparison::ComparisonResult;
use crate::investments::FetchStatus;
use crate::projection::InvestmentPoint;

/// Net worth chart with the predicted-vs-actual comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetWorthView {
    pub status: FetchStatus,
    pub chart: ChartData,
    /// Projected point for the requested date, if the series lands on it
    pub anchor: Option<InvestmentPoint>,
    /// Predicted value as of the requested date in crores (0 without anchor)
    pub predicted_value_crores: f64,
    /// Absent when there is no actual data to compare against
    pub comparison: Option<ComparisonResult>,
}

/// Net return percentage over time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PercentageView {
    pub status: FetchStatus,
    pub chart: ChartData,
}
