//! Investments backend client.
//!
//! Fetches the actual portfolio history from
//! `GET <base>/api/v1/getTotalInvestments`, validates the payload against an
//! explicit schema and hands it to the core as
//! [`networth_core::investments::ActualPoint`]s.

pub mod client;
pub mod errors;
pub mod models;

pub use client::{InvestmentsClient, INVESTMENTS_ENDPOINT};
pub use errors::BackendError;
pub use models::{parse_total_investments, TotalInvestmentRecord, TotalInvestmentsResponse};
