//! Actual investment history models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::utils::time_utils::parse_backend_date;

/// One point of the actual portfolio history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActualPoint {
    /// Date as encoded by the backend
    pub date: String,
    /// Cumulative profit/loss in crores
    pub total_returns: f64,
    /// Cumulative portfolio value in crores
    pub total_value: f64,
    /// Precomputed percentage return
    pub total_return_percentage: f64,
    pub id: String,
}

impl ActualPoint {
    /// Calendar date of this point.
    pub fn calendar_date(&self) -> Result<NaiveDate> {
        parse_backend_date(&self.date)
    }
}

/// State of the most recent fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FetchStatus {
    /// No fetch has completed yet
    Loading,
    Loaded,
    /// The last fetch failed; the series is empty
    Failed,
}

impl FetchStatus {
    pub fn is_finished(&self) -> bool {
        !matches!(self, FetchStatus::Loading)
    }
}

/// Current actual series together with the fetch status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentsSnapshot {
    pub status: FetchStatus,
    pub total_investments: Vec<ActualPoint>,
}

impl Default for InvestmentsSnapshot {
    fn default() -> Self {
        Self {
            status: FetchStatus::Loading,
            total_investments: Vec::new(),
        }
    }
}
