//! Report application handlers.
//!
//! Generation loads the profile, runs the daily pipeline and, when the run
//! filled the life-path cache, writes the profile back on a best-effort basis.

mod export_report;
mod generate_daily;
mod generate_range;

pub use export_report::{ExportReportCommand, ExportReportHandler};
pub use generate_daily::{GenerateDailyCommand, GenerateDailyHandler};
pub use generate_range::{GenerateRangeCommand, GenerateRangeHandler};

use tracing::warn;

use crate::domain::foundation::DomainError;
use crate::domain::profile::UserProfile;
use crate::ports::ProfileRepository;

async fn load_profile(
    repository: &dyn ProfileRepository,
    name: &str,
) -> Result<UserProfile, DomainError> {
    repository
        .find_by_name(name)
        .await?
        .ok_or_else(|| DomainError::profile_not_found(name))
}

/// Saves `profile` if generation filled a cache that was empty on load.
/// Failures are logged, never returned.
async fn persist_filled_cache(
    repository: &dyn ProfileRepository,
    profile: &UserProfile,
    had_life_path: bool,
) {
    if had_life_path || profile.life_path_number.is_none() {
        return;
    }
    if let Err(e) = repository.update(profile).await {
        warn!(profile = %profile.name, error = %e, "could not persist life path cache");
    }
}
