//! Chart-ready datasets for the dashboard views.

mod chart_model;
mod series_aggregator;

pub use chart_model::*;
pub use series_aggregator::*;

#[cfg(test)]
mod series_aggregator_tests;
