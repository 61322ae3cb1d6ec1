//! Result presentation.
//!
//! Turns a raw predicted yield into the strings shown to the user: the
//! yield rounded to two decimals, a comparative percentage, and a short
//! advice line echoing the request.
//!
//! The comparative percentage is a display placeholder: drawn uniformly
//! from [5, 30) on every render, independent of any historical baseline.

use cropcast_core::PredictionRequest;
use rand::Rng;

/// Display strings for one successful prediction.
#[derive(Debug)]
pub struct Presentation {
    /// Yield rounded to two decimal places, e.g. "4.75".
    pub yield_text: String,
    /// Placeholder percentage above average, one decimal, e.g. "12.3".
    pub comparative_text: String,
    /// One-sentence summary of the result.
    pub advice: String,
}

/// Builds the presentation for a prediction. The yield value itself is
/// only rounded here, at the display edge.
pub fn present<R: Rng>(rng: &mut R, request: &PredictionRequest, value: f64) -> Presentation {
    let yield_text = format!("{:.2}", value);
    let comparative_text = format!("{:.1}", comparative_percentage(rng));
    let advice = format!(
        "Based on your {} hectares in {}, the predicted yield for {} is {} tons per hectare.",
        request.area, request.district, request.crop, yield_text,
    );

    Presentation {
        yield_text,
        comparative_text,
        advice,
    }
}

/// Placeholder statistic in [5, 30), fresh per render.
fn comparative_percentage<R: Rng>(rng: &mut R) -> f64 {
    rng.gen_range(5.0..30.0)
}
