//! The inference client.
//!
//! One `reqwest::Client` per [`InferenceClient`], with the configured
//! timeout baked in. A prediction is a single POST to the upstream's
//! named function route; failures propagate immediately, without retries.

use cropcast_core::{parse_yield, PredictionRequest};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::config::GatewayConfig;
use crate::error::GatewayError;

/// Name of the remote procedure exposed by the inference space.
const PREDICT_FN: &str = "predict_yield";

/// Reply envelope of a Gradio prediction route: the outputs of the remote
/// function, positionally, under `data`.
#[derive(Debug, Deserialize)]
struct UpstreamReply {
    data: Vec<Value>,
}

/// Client for the upstream crop-yield predictor.
pub struct InferenceClient {
    http: reqwest::Client,
    base_url: String,
    hf_token: Option<String>,
}

impl InferenceClient {
    /// Builds a client from the given configuration.
    pub fn new(config: GatewayConfig) -> Result<Self, GatewayError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(GatewayError::Transport)?;

        Ok(InferenceClient {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            hf_token: config.hf_token,
        })
    }

    /// Calls the upstream `predict_yield` function for a validated request
    /// and returns the predicted yield in tons per hectare.
    pub async fn predict_yield(
        &self,
        request: &PredictionRequest,
    ) -> Result<f64, GatewayError> {
        let endpoint = format!("{}/run/{}", self.base_url, PREDICT_FN);
        tracing::debug!(district = %request.district, crop = %request.crop, "calling upstream predictor");

        let mut call = self
            .http
            .post(&endpoint)
            .header("Content-Type", "application/json")
            .json(&json!({ "data": positional_args(request) }));

        if let Some(token) = &self.hf_token {
            call = call.header("Authorization", format!("Bearer {}", token));
        }

        let response = call.send().await.map_err(classify_transport)?;

        let status = response.status();
        let body = response.text().await.map_err(classify_transport)?;

        if !status.is_success() {
            return Err(GatewayError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        let reply: UpstreamReply = serde_json::from_str(&body)
            .map_err(|err| GatewayError::MalformedReply(err.to_string()))?;

        let first = first_reply_string(&reply.data)?;
        interpret_reply(first)
    }
}

/// The upstream function's argument order is positional and fixed:
/// `[district, crop, season, year, area]`, with `year` a whole number and
/// `area` a float.
fn positional_args(request: &PredictionRequest) -> Value {
    json!([
        request.district,
        request.crop,
        request.season,
        request.year,
        request.area,
    ])
}

/// Pulls the first data element out of the reply and requires it to be a
/// string, which this upstream always produces (markdown or error text).
fn first_reply_string(data: &[Value]) -> Result<&str, GatewayError> {
    let first = data.first().ok_or_else(|| {
        GatewayError::MalformedReply("reply data array is empty".to_string())
    })?;
    first.as_str().ok_or_else(|| {
        GatewayError::MalformedReply("first reply element is not a string".to_string())
    })
}

/// Classifies a reply string: an embedded `"Error"` marks the whole call
/// as rejected, with the string surfaced verbatim; anything else must
/// carry a parseable yield.
fn interpret_reply(text: &str) -> Result<f64, GatewayError> {
    if text.contains("Error") {
        tracing::warn!(reply = %text, "upstream rejected the prediction");
        return Err(GatewayError::UpstreamRejected(text.to_string()));
    }
    Ok(parse_yield(text)?)
}

fn classify_transport(err: reqwest::Error) -> GatewayError {
    if err.is_timeout() {
        GatewayError::UpstreamTimeout
    } else {
        GatewayError::Transport(err)
    }
}
