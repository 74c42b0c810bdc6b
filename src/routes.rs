//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /health`   - Liveness (public)
//! - `/posts/*`, `/users/{id}/posts` - Post API (caller identity required)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Identity** - `X-User-Id` from the upstream gateway
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{identity, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the routes with state and middleware applied.
pub fn api_router(state: AppState) -> Router {
    let protected =
        api::routes::protected_routes().route_layer(middleware::from_fn(identity::layer));

    Router::new()
        .route("/health", get(health_handler))
        .merge(protected)
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application service: [`api_router`] with trailing slashes trimmed.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(api_router(state))
}
