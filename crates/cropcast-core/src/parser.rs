//! Yield extraction from the upstream reply string.
//!
//! The hosted predictor answers with a markdown fragment of the fixed
//! shape `## <number> Tons per Hectare`. This module is the only place
//! that knows about that shape; if the upstream reply format changes,
//! callers are untouched.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::YieldParseError;

/// Yield marker: one or more digits, optionally a dot and more digits.
static YIELD_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"## ([0-9]+(?:\.[0-9]+)?) Tons per Hectare")
        .expect("yield pattern is a valid regex")
});

/// Extracts the predicted yield from an upstream reply string.
///
/// Returns the value exactly as parsed -- no rounding happens at this
/// layer. Fails with [`YieldParseError::NoMatch`] when the marker is
/// absent and [`YieldParseError::NotFinite`] when the matched text
/// overflows or otherwise fails to parse as a finite `f64`.
pub fn parse_yield(reply: &str) -> Result<f64, YieldParseError> {
    let captures = YIELD_PATTERN
        .captures(reply)
        .ok_or(YieldParseError::NoMatch)?;

    let value: f64 = captures[1]
        .parse()
        .map_err(|_| YieldParseError::NotFinite)?;

    if !value.is_finite() {
        return Err(YieldParseError::NotFinite);
    }
    Ok(value)
}
