//! HTTP handlers for profile endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;
use crate::application::handlers::{
    CreateProfileCommand, DeleteProfileCommand, GetProfileQuery, UpdateProfileCommand,
};

use super::dto::{ProfileRequest, ProfileResponse};

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/profiles - List all profiles
pub async fn list_profiles(State(state): State<AppState>) -> Response {
    match state.list_profiles_handler().handle().await {
        Ok(profiles) => {
            let body: Vec<ProfileResponse> = profiles.iter().map(ProfileResponse::from).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => ApiError(e).into_response(),
    }
}

/// POST /api/profiles - Create a new profile
pub async fn create_profile(
    State(state): State<AppState>,
    Json(req): Json<ProfileRequest>,
) -> Response {
    let profile = match req.into_profile() {
        Ok(profile) => profile,
        Err(e) => return ApiError(e).into_response(),
    };

    match state
        .create_profile_handler()
        .handle(CreateProfileCommand { profile })
        .await
    {
        Ok(created) => (StatusCode::CREATED, Json(ProfileResponse::from(&created))).into_response(),
        Err(e) => ApiError(e).into_response(),
    }
}

/// GET /api/profiles/:name - Fetch one profile
pub async fn get_profile(State(state): State<AppState>, Path(name): Path<String>) -> Response {
    match state.get_profile_handler().handle(GetProfileQuery { name }).await {
        Ok(profile) => (StatusCode::OK, Json(ProfileResponse::from(&profile))).into_response(),
        Err(e) => ApiError(e).into_response(),
    }
}

/// PUT /api/profiles/:name - Replace a profile, renaming when the body's name differs
pub async fn update_profile(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(req): Json<ProfileRequest>,
) -> Response {
    let profile = match req.into_profile() {
        Ok(profile) => profile,
        Err(e) => return ApiError(e).into_response(),
    };

    match state
        .update_profile_handler()
        .handle(UpdateProfileCommand { name, profile })
        .await
    {
        Ok(updated) => (StatusCode::OK, Json(ProfileResponse::from(&updated))).into_response(),
        Err(e) => ApiError(e).into_response(),
    }
}

/// DELETE /api/profiles/:name - Remove a profile
pub async fn delete_profile(State(state): State<AppState>, Path(name): Path<String>) -> Response {
    match state
        .delete_profile_handler()
        .handle(DeleteProfileCommand { name })
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => ApiError(e).into_response(),
    }
}
