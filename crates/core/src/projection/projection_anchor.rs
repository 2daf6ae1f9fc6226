use chrono::NaiveDate;

use super::projection_model::InvestmentPoint;
use crate::utils::time_utils::dashboard_date_today;

/// Returns the first point whose calendar date equals `reference_date`.
///
/// `None` when the date is outside the series or the step size skips it.
pub fn find_anchor(series: &[InvestmentPoint], reference_date: NaiveDate) -> Option<InvestmentPoint> {
    series
        .iter()
        .find(|point| point.date == reference_date)
        .copied()
}

/// Anchor for the current date in the dashboard timezone.
pub fn find_anchor_today(series: &[InvestmentPoint]) -> Option<InvestmentPoint> {
    find_anchor(series, dashboard_date_today())
}
