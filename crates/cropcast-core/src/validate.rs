//! Input validation for prediction requests.
//!
//! [`validate`] is a pure function: it inspects a [`RawPredictionRequest`]
//! and either produces a typed [`PredictionRequest`] or a
//! [`ValidationError`] listing every defective field by class. It never
//! checks catalog membership -- unknown districts and crops are the
//! upstream model's to reject, and it answers those with an explicit
//! error string.

use crate::error::ValidationError;
use crate::request::{NumericField, PredictionRequest, RawPredictionRequest};

/// Validates a candidate request.
///
/// All five fields must be present and non-blank; `year` and `area` must
/// parse as finite numbers, and `area` must be positive. `year` is
/// truncated to a whole year the way `parseInt` would.
pub fn validate(raw: &RawPredictionRequest) -> Result<PredictionRequest, ValidationError> {
    let mut missing: Vec<&'static str> = Vec::new();
    let mut invalid: Vec<&'static str> = Vec::new();

    let district = text_field(&raw.district, "district", &mut missing);
    let crop = text_field(&raw.crop, "crop", &mut missing);
    let season = text_field(&raw.season, "season", &mut missing);

    let year = numeric_field(&raw.year, "year", &mut missing, &mut invalid);
    let mut area = numeric_field(&raw.area, "area", &mut missing, &mut invalid);
    if let Some(v) = area {
        if v <= 0.0 {
            invalid.push("area");
            area = None;
        }
    }

    if !missing.is_empty() || !invalid.is_empty() {
        return Err(ValidationError { missing, invalid });
    }

    // All defect lists are empty, so every Option above is Some.
    Ok(PredictionRequest {
        district: district.unwrap_or_default().to_string(),
        crop: crop.unwrap_or_default().to_string(),
        season: season.unwrap_or_default().to_string(),
        year: year.unwrap_or_default().trunc() as i32,
        area: area.unwrap_or_default(),
    })
}

fn text_field<'a>(
    value: &'a Option<String>,
    name: &'static str,
    missing: &mut Vec<&'static str>,
) -> Option<&'a str> {
    match value.as_deref().map(str::trim) {
        Some(s) if !s.is_empty() => Some(s),
        _ => {
            missing.push(name);
            None
        }
    }
}

fn numeric_field(
    value: &Option<NumericField>,
    name: &'static str,
    missing: &mut Vec<&'static str>,
    invalid: &mut Vec<&'static str>,
) -> Option<f64> {
    match value {
        None => {
            missing.push(name);
            None
        }
        // A blank string is an empty form control, not a malformed number.
        Some(NumericField::Text(s)) if s.trim().is_empty() => {
            missing.push(name);
            None
        }
        Some(field) => match field.as_f64() {
            Some(v) => Some(v),
            None => {
                invalid.push(name);
                None
            }
        },
    }
}
