use chrono::NaiveDate;
use log::debug;
use std::sync::Arc;

use super::dashboard_model::{NetWorthView, PercentageView};
use super::dashboard_traits::DashboardServiceTrait;
use crate::charts::{
    build_net_worth_chart, build_percentage_chart, build_prediction_chart, resolve_tooltip,
    ChartData, TooltipEntry, TOTAL_AMOUNT_LABEL,
};
use crate::comparison::compare;
use crate::constants::{CRORE_BASE, CRORE_DECIMAL_PRECISION};
use crate::errors::Result;
use crate::investments::InvestmentsServiceTrait;
use crate::projection::ProjectionServiceTrait;
use crate::utils::number_utils::round_dp;

/// Service deriving the dashboard views on every call.
pub struct DashboardService {
    projection_service: Arc<dyn ProjectionServiceTrait>,
    investments_service: Arc<dyn InvestmentsServiceTrait>,
}

impl DashboardService {
    pub fn new(
        projection_service: Arc<dyn ProjectionServiceTrait>,
        investments_service: Arc<dyn InvestmentsServiceTrait>,
    ) -> Self {
        Self {
            projection_service,
            investments_service,
        }
    }
}

impl DashboardServiceTrait for DashboardService {
    fn net_worth_view(&self, date: NaiveDate) -> Result<NetWorthView> {
        let snapshot = self.investments_service.snapshot();
        let projected = self.projection_service.series();

        let chart = build_net_worth_chart(&snapshot.total_investments, Some(projected))?;

        let anchor = self.projection_service.anchor(date);
        let predicted_raw = anchor.map(|p| p.value).unwrap_or(0.0);
        let predicted_value_crores = round_dp(
            predicted_raw / CRORE_BASE,
            CRORE_DECIMAL_PRECISION,
            "predictedValue",
        )?;

        let latest_actual = chart
            .dataset(TOTAL_AMOUNT_LABEL)
            .and_then(|d| d.data.last().copied());

        let comparison = match latest_actual {
            Some(actual) => Some(compare(predicted_raw, actual)?),
            None => {
                debug!("No actual data for {}; showing prediction only", date);
                None
            }
        };

        Ok(NetWorthView {
            status: snapshot.status,
            chart,
            anchor,
            predicted_value_crores,
            comparison,
        })
    }

    fn net_worth_tooltip(&self, dataset_label: &str, index: usize) -> Result<Option<TooltipEntry>> {
        let snapshot = self.investments_service.snapshot();
        resolve_tooltip(
            &snapshot.total_investments,
            self.projection_service.series(),
            dataset_label,
            index,
        )
    }

    fn percentage_view(&self) -> Result<PercentageView> {
        let snapshot = self.investments_service.snapshot();
        Ok(PercentageView {
            status: snapshot.status,
            chart: build_percentage_chart(&snapshot.total_investments)?,
        })
    }

    fn prediction_view(&self) -> ChartData {
        build_prediction_chart(self.projection_service.series())
    }
}
