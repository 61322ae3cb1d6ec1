//! Binary entrypoint for the cropcast HTTP server.
//!
//! Reads configuration from environment variables:
//! - `CROPCAST_PORT`: server listen port (default: "3000")
//! - `CROPCAST_UPSTREAM_URL`: inference space base URL (default: hosted space)
//! - `HF_ACCESS_TOKEN`: upstream access token (default: unauthenticated)
//! - `CROPCAST_UPSTREAM_TIMEOUT_SECS`: upstream timeout (default: 30)

use cropcast_gateway::GatewayConfig;
use cropcast_server::router::build_router;
use cropcast_server::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let port = std::env::var("CROPCAST_PORT").unwrap_or_else(|_| "3000".to_string());

    let state = AppState::new(GatewayConfig::from_env())
        .expect("Failed to initialize gateway client");

    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    tracing::info!("cropcast server starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
