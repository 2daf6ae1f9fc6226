use chrono::NaiveDate;

use super::dashboard_model::{NetWorthView, PercentageView};
use crate::charts::{ChartData, TooltipEntry};
use crate::errors::Result;

/// Trait defining the dashboard view operations.
pub trait DashboardServiceTrait: Send + Sync {
    /// Net worth chart (actual with projected overlay) and the comparison
    /// of the last actual value against the projection anchored at `date`.
    fn net_worth_view(&self, date: NaiveDate) -> Result<NetWorthView>;

    /// Tooltip for a point of the net worth chart.
    fn net_worth_tooltip(&self, dataset_label: &str, index: usize) -> Result<Option<TooltipEntry>>;

    fn percentage_view(&self) -> Result<PercentageView>;

    /// Projected series alone, labelled by projected dates.
    fn prediction_view(&self) -> ChartData;
}
