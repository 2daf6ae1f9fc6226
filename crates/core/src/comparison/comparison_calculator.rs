use log::debug;

use super::comparison_model::{ComparisonResult, Direction};
use crate::constants::{CRORE_BASE, CRORE_DECIMAL_PRECISION};
use crate::errors::{DivisionError, Result};
use crate::utils::number_utils::round_dp;

/// Compares a predicted value (base units) with an actual value (crores).
///
/// Both are normalized to crores with three decimals. The delta is measured
/// against the predicted value when the actual is behind, and against the
/// actual value when it is ahead. The two branches are not symmetric: a
/// portfolio 10% behind and one 10% ahead do not report the same magnitude.
pub fn compare(predicted_raw: f64, actual_crores: f64) -> Result<ComparisonResult> {
    let predicted = round_dp(
        predicted_raw / CRORE_BASE,
        CRORE_DECIMAL_PRECISION,
        "predictedValue",
    )?;
    let actual = round_dp(actual_crores, CRORE_DECIMAL_PRECISION, "actualValue")?;

    let direction = if actual > predicted {
        Direction::ActualAhead
    } else {
        Direction::ActualBehind
    };

    let delta_percent = match direction {
        Direction::ActualBehind => {
            if predicted == 0.0 {
                return Err(DivisionError {
                    direction,
                    denominator: "predicted",
                }
                .into());
            }
            (1.0 - actual / predicted) * 100.0
        }
        Direction::ActualAhead => {
            if actual == 0.0 {
                return Err(DivisionError {
                    direction,
                    denominator: "actual",
                }
                .into());
            }
            (1.0 - predicted / actual) * 100.0
        }
    };

    debug!(
        "Compared predicted {} Cr with actual {} Cr: {} {:.2}%",
        predicted, actual, direction, delta_percent
    );

    Ok(ComparisonResult {
        predicted_value_crores: predicted,
        actual_value_crores: actual,
        direction,
        delta_percent,
    })
}
