//! Projected net worth trajectory.
//!
//! The engine simulates compound growth with monthly contributions; the
//! service holds the one series computed at start-up and answers anchor
//! lookups against it.

mod projection_anchor;
mod projection_engine;
mod projection_model;
mod projection_service;
mod projection_traits;

pub use projection_anchor::*;
pub use projection_engine::*;
pub use projection_model::*;
pub use projection_service::*;
pub use projection_traits::*;
