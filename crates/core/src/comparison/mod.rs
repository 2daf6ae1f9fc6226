//! Predicted vs actual net worth comparison.

mod comparison_calculator;
mod comparison_model;

pub use comparison_calculator::*;
pub use comparison_model::*;
