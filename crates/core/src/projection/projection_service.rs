use std::sync::Arc;

use chrono::NaiveDate;
use log::info;

use super::projection_anchor::find_anchor;
use super::projection_engine::simulate_with;
use super::projection_model::{InvestmentPoint, ProjectionConfig};
use super::projection_traits::ProjectionServiceTrait;
use crate::errors::Result;

/// Holds the projected series for the lifetime of the process.
///
/// The series is generated once in [`ProjectionService::new`] and never
/// recomputed; clones share the same buffer.
#[derive(Debug, Clone)]
pub struct ProjectionService {
    config: ProjectionConfig,
    series: Arc<[InvestmentPoint]>,
}

impl ProjectionService {
    pub fn new(config: ProjectionConfig) -> Result<Self> {
        let series: Arc<[InvestmentPoint]> = simulate_with(&config)?.into();

        if let Some(last) = series.last() {
            info!(
                "Projection ready: {} points from {} to {} (final value {:.2} Cr)",
                series.len(),
                config.start_date,
                last.date,
                last.value_in_crores()
            );
        }

        Ok(Self { config, series })
    }
}

impl ProjectionServiceTrait for ProjectionService {
    fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    fn series(&self) -> &[InvestmentPoint] {
        &self.series
    }

    fn anchor(&self, date: NaiveDate) -> Option<InvestmentPoint> {
        find_anchor(&self.series, date)
    }
}
