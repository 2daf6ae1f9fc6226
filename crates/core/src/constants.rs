/// Base currency units in one crore
pub const CRORE_BASE: f64 = 10_000_000.0;

/// Lakhs in one crore
pub const LAKHS_PER_CRORE: f64 = 100.0;

/// Decimal precision for crore values in comparisons
pub const CRORE_DECIMAL_PRECISION: u32 = 3;

/// Decimal precision for profit/loss amounts in tooltips
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Days used as one month when compounding a step
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Projection horizon, approximately 25 years (leap days ignored)
pub const DEFAULT_PROJECTION_DAYS: u64 = 25 * 365;
