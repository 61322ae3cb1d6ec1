//! Gateway configuration.
//!
//! The access token and upstream address are explicit construction-time
//! configuration, injected into [`crate::InferenceClient`] rather than
//! read ad hoc at call sites. `from_env` exists for the binaries; tests
//! and embedders build the struct directly.

use std::time::Duration;

/// The hosted inference space for the Odisha yield model.
pub const DEFAULT_UPSTREAM_URL: &str =
    "https://rockstar00-odisha-crop-yield-predictor.hf.space";

/// Upstream calls are bounded; the third-party host carries no SLA.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for the upstream inference service.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Base URL of the inference space.
    pub base_url: String,
    /// Hugging Face access token, sent as a bearer credential when set.
    /// Server-side only; never exposed to clients of this service.
    pub hf_token: Option<String>,
    /// Per-request timeout, covering connect through body read.
    pub timeout: Duration,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        GatewayConfig {
            base_url: DEFAULT_UPSTREAM_URL.to_string(),
            hf_token: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl GatewayConfig {
    /// Reads configuration from the environment:
    /// - `CROPCAST_UPSTREAM_URL`: upstream base URL (default: the hosted space)
    /// - `HF_ACCESS_TOKEN`: access token (default: unauthenticated)
    /// - `CROPCAST_UPSTREAM_TIMEOUT_SECS`: request timeout (default: 30)
    pub fn from_env() -> Self {
        let base_url = std::env::var("CROPCAST_UPSTREAM_URL")
            .unwrap_or_else(|_| DEFAULT_UPSTREAM_URL.to_string());
        let hf_token = std::env::var("HF_ACCESS_TOKEN")
            .ok()
            .filter(|token| !token.trim().is_empty());
        let timeout = std::env::var("CROPCAST_UPSTREAM_TIMEOUT_SECS")
            .ok()
            .and_then(|secs| secs.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT);

        GatewayConfig {
            base_url,
            hf_token,
            timeout,
        }
    }
}
