use chrono::NaiveDate;

use super::projection_model::{InvestmentPoint, ProjectionConfig};

/// Read-only access to the projected series.
pub trait ProjectionServiceTrait: Send + Sync {
    /// The configuration the series was generated from.
    fn config(&self) -> &ProjectionConfig;

    /// The full projected series, ordered by date ascending.
    fn series(&self) -> &[InvestmentPoint];

    /// The projected point for `date`, if the series lands on it.
    fn anchor(&self, date: NaiveDate) -> Option<InvestmentPoint>;
}
