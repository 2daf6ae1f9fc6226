//! Wire schema of the investments backend.
//!
//! Every field is required. A record with a missing field, a non-finite
//! number, an empty id or an unreadable date rejects the whole response
//! instead of being coerced.

use networth_core::investments::ActualPoint;
use networth_core::utils::time_utils::parse_backend_date;
use serde::Deserialize;

use crate::errors::BackendError;

/// Body of `GET /api/v1/getTotalInvestments`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalInvestmentsResponse {
    pub total_investments: Vec<TotalInvestmentRecord>,
}

/// One record of the investment history, as sent by the backend
#[derive(Debug, Clone, Deserialize)]
pub struct TotalInvestmentRecord {
    pub date: String,
    /// Cumulative profit/loss in crores
    #[serde(rename = "totalreturns")]
    pub total_returns: f64,
    /// Cumulative value in crores
    #[serde(rename = "totalvalue")]
    pub total_value: f64,
    #[serde(rename = "totalreturnpercentage")]
    pub total_return_percentage: f64,
    pub id: String,
}

impl TotalInvestmentRecord {
    fn into_actual_point(self, index: usize) -> Result<ActualPoint, BackendError> {
        let numbers = [
            ("totalreturns", self.total_returns),
            ("totalvalue", self.total_value),
            ("totalreturnpercentage", self.total_return_percentage),
        ];
        if let Some((field, _)) = numbers.iter().find(|(_, value)| !value.is_finite()) {
            return Err(BackendError::invalid(format!(
                "record {}: '{}' is not a finite number",
                index, field
            )));
        }
        if self.id.trim().is_empty() {
            return Err(BackendError::invalid(format!("record {}: empty id", index)));
        }
        if parse_backend_date(&self.date).is_err() {
            return Err(BackendError::invalid(format!(
                "record {}: unreadable date '{}'",
                index, self.date
            )));
        }

        Ok(ActualPoint {
            date: self.date,
            total_returns: self.total_returns,
            total_value: self.total_value,
            total_return_percentage: self.total_return_percentage,
            id: self.id,
        })
    }
}

impl TotalInvestmentsResponse {
    /// Validates every record and converts it into the core model.
    pub fn into_actual_points(self) -> Result<Vec<ActualPoint>, BackendError> {
        self.total_investments
            .into_iter()
            .enumerate()
            .map(|(index, record)| record.into_actual_point(index))
            .collect()
    }
}

/// Parses and validates a response body.
///
/// Records keep the order the backend sent them in.
pub fn parse_total_investments(body: &str) -> Result<Vec<ActualPoint>, BackendError> {
    let response: TotalInvestmentsResponse = serde_json::from_str(body)
        .map_err(|e| BackendError::invalid(format!("Failed to parse response: {}", e)))?;
    response.into_actual_points()
}
