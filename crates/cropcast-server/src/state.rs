//! Application state shared across handlers.
//!
//! Request handling is stateless: the only shared resource is the
//! upstream gateway client, which is internally thread-safe, so the
//! state is a plain `Arc` with no locking.

use std::sync::Arc;

use cropcast_gateway::{GatewayConfig, GatewayError, InferenceClient};

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// Client for the upstream inference space.
    pub gateway: Arc<InferenceClient>,
}

impl AppState {
    /// Creates the state with a gateway client built from `config`.
    pub fn new(config: GatewayConfig) -> Result<Self, GatewayError> {
        Ok(AppState {
            gateway: Arc::new(InferenceClient::new(config)?),
        })
    }
}
