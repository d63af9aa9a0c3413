//! User profiles: birth data and cached numerology values.

mod birth;
mod user_profile;

pub use birth::{parse_date, parse_time, BirthData, BirthTimeRange, Location, TimeConfidence};
pub use user_profile::{validate_profile_name, ProfileMetadata, UserProfile};
