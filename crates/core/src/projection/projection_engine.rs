use chrono::{Datelike, Days, NaiveDate};
use log::debug;

use super::projection_model::{InvestmentPoint, ProjectionConfig};
use crate::constants::DAYS_PER_MONTH;
use crate::errors::{ProjectionError, Result};

/// Simulates compound growth from `start_date` over `total_days`.
///
/// Each step advances the date by `step_days`, adds `monthly_contribution`
/// when the landing date is the first of a month, then compounds the value by
/// `(1 + monthly_rate)^(step_days / 30)`. Only the landing date is checked, so
/// a step that jumps over the 1st skips that month's contribution.
///
/// One point is emitted per iteration of `day = 0, step, 2*step, .. <= total`,
/// giving `total_days / step_days + 1` points. The first point is already one
/// step after `start_date`.
pub fn simulate(
    start_date: NaiveDate,
    initial_value: f64,
    annual_rate_percent: f64,
    monthly_contribution: f64,
    step_days: u64,
    total_days: u64,
) -> Result<Vec<InvestmentPoint>> {
    if step_days == 0 {
        return Err(ProjectionError::InvalidStep.into());
    }

    let monthly_rate = annual_rate_percent / 12.0 / 100.0;
    let step_growth = (1.0 + monthly_rate).powf(step_days as f64 / DAYS_PER_MONTH);
    // The last point lands `(total_days / step_days + 1) * step_days` days
    // after the start; reject horizons chrono cannot represent before sizing
    let steps = total_days / step_days;
    let span = steps
        .checked_mul(step_days)
        .and_then(|days| days.checked_add(step_days))
        .ok_or(ProjectionError::DateOutOfRange {
            from: start_date,
            days: total_days,
        })?;
    if start_date.checked_add_days(Days::new(span)).is_none() {
        return Err(ProjectionError::DateOutOfRange {
            from: start_date,
            days: span,
        }
        .into());
    }
    let capacity = usize::try_from(steps).map_or(0, |n| n.saturating_add(1));

    let mut points = Vec::with_capacity(capacity);
    let mut current_value = initial_value;
    let mut current_date = start_date;
    let mut day = 0u64;

    while day <= total_days {
        current_date = current_date
            .checked_add_days(Days::new(step_days))
            .ok_or(ProjectionError::DateOutOfRange {
                from: current_date,
                days: step_days,
            })?;

        if current_date.day() == 1 {
            current_value += monthly_contribution;
        }

        current_value *= step_growth;

        points.push(InvestmentPoint {
            date: current_date,
            value: current_value,
        });

        day = match day.checked_add(step_days) {
            Some(next) => next,
            None => break,
        };
    }

    debug!(
        "Projected {} points from {} at {}% with {} monthly",
        points.len(),
        start_date,
        annual_rate_percent,
        monthly_contribution
    );

    Ok(points)
}

/// Runs [`simulate`] with the values of a [`ProjectionConfig`].
pub fn simulate_with(config: &ProjectionConfig) -> Result<Vec<InvestmentPoint>> {
    simulate(
        config.start_date,
        config.initial_value,
        config.annual_rate_percent,
        config.monthly_contribution,
        config.step_days,
        config.total_days,
    )
}
