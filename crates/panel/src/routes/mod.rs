//! HTTP surface for the embedded panel.
//!
//! Two routes make up the renderer boundary: the activation trigger and the
//! displayed-state pull. Everything behind them is the load-cycle pipeline.

pub mod panel;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::middleware::request_id::request_id_middleware;
use crate::state::AppState;

/// Build the router for the panel service.
#[must_use]
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/panel/activate", post(panel::activate))
        .route("/panel/view", get(panel::view))
        .route("/health", get(health))
        .layer(axum::middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        // The panel is embedded cross-origin inside the desk
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}
