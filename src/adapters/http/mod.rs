//! HTTP adapters - REST API implementations.
//!
//! Each area has its own `dto`/`handlers`/`routes` triple; [`api_router`]
//! mounts them under `/api` with the shared middleware stack.

pub mod error;
pub mod profile;
pub mod report;
pub mod state;

pub use error::{ApiError, ErrorResponse};
pub use state::AppState;

use std::time::Duration;

use axum::{
    http::{HeaderName, HeaderValue},
    routing::get,
    Json, Router,
};
use serde_json::json;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServerConfig;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// GET /api/health
async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok", "version": env!("CARGO_PKG_VERSION") }))
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

/// The complete REST API.
pub fn api_router(state: AppState, config: &ServerConfig) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    let api = Router::new()
        .route("/health", get(health))
        .merge(profile::profile_routes())
        .merge(report::report_routes());

    Router::new()
        .nest("/api", api)
        .with_state(state)
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.request_timeout_secs,
        )))
        .layer(cors_layer(config))
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
}
