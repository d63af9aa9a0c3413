//! HTTP routes for report endpoints.

use axum::{routing::post, Router};

use super::handlers::{export_report, generate_daily, generate_range};
use crate::adapters::http::state::AppState;

/// Report routes, relative to the API root.
pub fn report_routes() -> Router<AppState> {
    Router::new()
        .route("/generate/daily", post(generate_daily))
        .route("/generate/range", post(generate_range))
        .route("/export/:format", post(export_report))
}
