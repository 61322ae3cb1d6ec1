//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] is the unified error type for all API endpoints. It
//! implements `axum::response::IntoResponse` to produce the exact JSON
//! error bodies of the public contract: every error is `{"message": ...}`,
//! with an additional `"error"` detail field on internal failures only.
//!
//! Status mapping follows the failure's trust boundary: malformed caller
//! input and explicit upstream rejections are 400s; a reply that breaks
//! the upstream contract (unparsable, non-finite) or a transport failure
//! is a 500, since the caller did nothing wrong.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use cropcast_core::{ValidationError, YieldParseError};
use cropcast_gateway::GatewayError;

/// Fixed client-facing message for every input validation failure.
const INVALID_INPUT_MESSAGE: &str =
    "Missing or invalid parameters. Please ensure all fields are filled correctly.";

/// API errors with HTTP status code mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The prediction route only accepts POST (405).
    #[error("method not allowed")]
    MethodNotAllowed,

    /// Client-supplied input was malformed (400). The detail is logged;
    /// the response body carries the fixed contract message.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The upstream service returned an explicit error payload (400).
    /// The message is surfaced verbatim.
    #[error("{0}")]
    UpstreamRejected(String),

    /// The upstream reply did not match the expected shape (500).
    #[error("could not parse yield from server response")]
    ParseFailure,

    /// The matched yield value was not a finite number (500).
    #[error("prediction returned an invalid number")]
    InvalidNumber,

    /// Transport failure, timeout, or any other unexpected error (500).
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                json!({ "message": "Method Not Allowed" }),
            ),
            ApiError::InvalidInput(detail) => {
                tracing::warn!(%detail, "rejected invalid prediction input");
                (
                    StatusCode::BAD_REQUEST,
                    json!({ "message": INVALID_INPUT_MESSAGE }),
                )
            }
            ApiError::UpstreamRejected(message) => (
                StatusCode::BAD_REQUEST,
                json!({ "message": message }),
            ),
            ApiError::ParseFailure => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "message": "Could not parse yield from server response." }),
            ),
            ApiError::InvalidNumber => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "message": "Prediction returned an invalid number." }),
            ),
            ApiError::Internal(detail) => {
                tracing::error!(%detail, "prediction call failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "message": "Internal Server Error", "error": detail }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::InvalidInput(err.to_string())
    }
}

impl From<GatewayError> for ApiError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::UpstreamRejected(message) => ApiError::UpstreamRejected(message),
            GatewayError::Parse(YieldParseError::NoMatch) => ApiError::ParseFailure,
            GatewayError::Parse(YieldParseError::NotFinite) => ApiError::InvalidNumber,
            GatewayError::UpstreamTimeout
            | GatewayError::Transport(_)
            | GatewayError::UpstreamStatus { .. }
            | GatewayError::MalformedReply(_) => ApiError::Internal(err.to_string()),
        }
    }
}
