//! HTTP adapter for profile endpoints.
//!
//! - `GET /api/profiles` - List profiles
//! - `POST /api/profiles` - Create a profile
//! - `GET /api/profiles/:name` - Fetch one profile
//! - `PUT /api/profiles/:name` - Replace (and possibly rename) a profile
//! - `DELETE /api/profiles/:name` - Remove a profile

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{BirthDataRequest, LocationRequest, ProfileRequest, ProfileResponse};
pub use routes::profile_routes;
