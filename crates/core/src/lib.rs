//! Net worth core - projection engine, comparison and chart datasets.
//!
//! This crate contains the business logic of the net worth dashboard. It does
//! no I/O of its own: the actual investment history arrives through
//! [`investments::InvestmentHistoryProviderTrait`], implemented by the
//! `networth-backend` crate.

pub mod charts;
pub mod comparison;
pub mod constants;
pub mod dashboard;
pub mod errors;
pub mod investments;
pub mod projection;
pub mod units;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
