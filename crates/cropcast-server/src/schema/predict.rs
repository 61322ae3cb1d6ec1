//! Schema types for `POST /api/predict-yield`.

use serde::Serialize;

/// Success body: the predicted yield in tons per hectare, unrounded.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictYieldResponse {
    pub predicted_yield: f64,
    pub message: String,
}

impl PredictYieldResponse {
    pub fn successful(predicted_yield: f64) -> Self {
        PredictYieldResponse {
            predicted_yield,
            message: "Prediction successful".to_string(),
        }
    }
}
