//! Magnitude strings ("2.5 Crore", "250 Lakh") normalized to crores.
//!
//! The backend currently returns numeric crore values, so nothing on the live
//! fetch path calls this. It is kept for payloads that still carry the
//! human-readable form and is reachable through the units API.

mod unit_converter;

pub use unit_converter::*;
