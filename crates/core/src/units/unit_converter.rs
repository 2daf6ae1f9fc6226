use crate::constants::LAKHS_PER_CRORE;
use crate::errors::FormatError;

const CRORE_MARKER: &str = "Crore";
const LAKH_MARKER: &str = "Lakh";

/// Converts a magnitude string into crores.
///
/// The leading space-separated token is the number. A string containing
/// "Crore" is taken as crores as-is; otherwise one containing "Lakh" is
/// divided by 100. Anything else is rejected rather than guessed.
pub fn convert(raw: &str) -> Result<f64, FormatError> {
    if raw.contains(CRORE_MARKER) {
        leading_number(raw)
    } else if raw.contains(LAKH_MARKER) {
        Ok(leading_number(raw)? / LAKHS_PER_CRORE)
    } else {
        Err(FormatError::MissingUnit(raw.to_string()))
    }
}

fn leading_number(raw: &str) -> Result<f64, FormatError> {
    raw.split(' ')
        .next()
        .and_then(|token| token.parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .ok_or_else(|| FormatError::InvalidNumber(raw.to_string()))
}
