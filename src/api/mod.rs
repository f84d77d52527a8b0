//! REST API layer: route handlers, validation, DTOs, OpenAPI docs, and
//! router composition.

pub mod docs;
pub mod dto;
pub mod handlers;
pub mod validation;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;

/// Builds the router with every REST endpoint.
pub fn build_router() -> Router<AppState> {
    Router::new().merge(handlers::routes())
}

/// Builds the complete application: REST endpoints, documentation,
/// request tracing, and permissive CORS.
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .merge(build_router())
        .merge(docs::routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
