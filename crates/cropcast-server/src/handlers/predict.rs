//! Prediction handler.

use axum::extract::State;
use axum::Json;
use serde_json::Value;

use cropcast_core::{validate, RawPredictionRequest};

use crate::error::ApiError;
use crate::schema::predict::PredictYieldResponse;
use crate::state::AppState;

/// Runs one prediction: validate the form input, call the upstream
/// predictor, return the normalized result.
///
/// `POST /api/predict-yield`
///
/// The body is taken as a raw JSON value first so that shape mismatches
/// (a boolean where a number belongs, say) surface as the contract's
/// fixed 400 message rather than a framework rejection.
pub async fn predict_yield(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<PredictYieldResponse>, ApiError> {
    let raw: RawPredictionRequest = serde_json::from_value(body)
        .map_err(|err| ApiError::InvalidInput(err.to_string()))?;

    let request = validate(&raw)?;

    let predicted_yield = state.gateway.predict_yield(&request).await?;
    tracing::info!(
        district = %request.district,
        crop = %request.crop,
        predicted_yield,
        "prediction successful"
    );

    Ok(Json(PredictYieldResponse::successful(predicted_yield)))
}

/// Answers any non-POST method on the prediction route.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
