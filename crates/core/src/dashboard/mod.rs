//! Dashboard views combining the projected and actual series.

mod dashboard_model;
mod dashboard_service;
mod dashboard_traits;

pub use dashboard_model::*;
pub use dashboard_service::*;
pub use dashboard_traits::*;
