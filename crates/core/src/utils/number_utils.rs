use num_traits::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::errors::{Result, ValidationError};

/// Rounds a float to `dp` decimal places, half away from zero.
///
/// The value goes through `Decimal` so that `1.0005` rounds to `1.001` the way
/// a display formatter would, rather than drifting on binary representation.
pub fn round_dp(value: f64, dp: u32, field: &str) -> Result<f64> {
    let decimal = Decimal::from_f64(value)
        .ok_or_else(|| ValidationError::NonFinite(field.to_string()))?;
    decimal
        .round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .ok_or_else(|| ValidationError::NonFinite(field.to_string()).into())
}
