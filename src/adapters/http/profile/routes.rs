//! HTTP routes for profile endpoints.

use axum::{routing::get, Router};

use super::handlers::{create_profile, delete_profile, get_profile, list_profiles, update_profile};
use crate::adapters::http::state::AppState;

/// Profile routes, relative to the API root.
pub fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/profiles", get(list_profiles).post(create_profile))
        .route(
            "/profiles/:name",
            get(get_profile).put(update_profile).delete(delete_profile),
        )
}
