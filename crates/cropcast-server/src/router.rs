//! Router assembly for the cropcast HTTP API.
//!
//! [`build_router`] wires the handler functions to their routes with CORS
//! and tracing middleware layers.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the complete axum router.
///
/// The prediction route is POST-only; the method fallback answers every
/// other verb with the contract's 405 JSON body instead of axum's empty
/// default. CORS is permissive (the form may be served from a different
/// origin). TraceLayer provides request-level logging via tracing.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/predict-yield",
            post(handlers::predict::predict_yield)
                .fallback(handlers::predict::method_not_allowed),
        )
        .route("/api/catalog", get(handlers::catalog::catalog))
        .route("/api/health", get(handlers::health::health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
