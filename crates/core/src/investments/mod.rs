//! Actual investment history fetched from the backend.
//!
//! The series is owned by [`InvestmentsService`] and replaced wholesale every
//! time a fetch completes. A failed fetch leaves an empty series and a
//! [`FetchStatus::Failed`] marker so views can render degraded.

mod investments_model;
mod investments_service;
mod investments_traits;

pub use investments_model::*;
pub use investments_service::*;
pub use investments_traits::*;

#[cfg(test)]
mod investments_service_tests;
