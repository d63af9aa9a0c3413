//! Profile application handlers.
//!
//! Command and query handlers for stored user profiles.

mod create_profile;
mod delete_profile;
mod get_profile;
mod update_profile;

pub use create_profile::{CreateProfileCommand, CreateProfileHandler};
pub use delete_profile::{DeleteProfileCommand, DeleteProfileHandler};
pub use get_profile::{GetProfileHandler, GetProfileQuery, ListProfilesHandler};
pub use update_profile::{UpdateProfileCommand, UpdateProfileHandler};
