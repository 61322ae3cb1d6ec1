//! Request and result types for a single prediction exchange.
//!
//! [`RawPredictionRequest`] is the candidate input as it arrives off the
//! wire: every field optional so the validator can report exactly what is
//! missing. [`PredictionRequest`] is the validated form with concrete
//! numeric types; it is only produced by [`crate::validate::validate`].

use serde::{Deserialize, Serialize};

/// A numeric input that may arrive as a JSON number or a numeric string.
///
/// Form frontends routinely submit `"2.5"` where an API client would send
/// `2.5`; both must be accepted for `year` and `area`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericField {
    Number(f64),
    Text(String),
}

impl NumericField {
    /// Returns the finite numeric value, if there is one.
    ///
    /// Non-numeric text, NaN, and infinities all yield `None`.
    pub fn as_f64(&self) -> Option<f64> {
        let value = match self {
            NumericField::Number(n) => Some(*n),
            NumericField::Text(s) => s.trim().parse::<f64>().ok(),
        };
        value.filter(|v| v.is_finite())
    }
}

/// Candidate prediction input before validation.
///
/// All fields are optional at the type level; presence is a validator
/// concern, not a deserialization concern, so that a missing field maps to
/// a structured validation defect instead of a serde error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPredictionRequest {
    pub district: Option<String>,
    pub crop: Option<String>,
    pub season: Option<String>,
    pub year: Option<NumericField>,
    pub area: Option<NumericField>,
}

/// A validated prediction request.
///
/// `year` is a whole planting year and `area` is a positive, finite
/// cultivation area in hectares. Instances come out of
/// [`crate::validate::validate`]; handlers and clients never build one
/// from unchecked input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionRequest {
    pub district: String,
    pub crop: String,
    pub season: String,
    pub year: i32,
    pub area: f64,
}

/// A user-defined partition of the total farm area assigned to one crop.
///
/// Sub-plots are a form-side concept only: the current upstream contract
/// takes a single crop and area, so sub-plots are never sent upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubPlot {
    pub crop: String,
    pub area: f64,
}
