//! CreateProfile - Command handler for registering a new profile.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::DomainError;
use crate::domain::profile::UserProfile;
use crate::ports::ProfileRepository;

/// Command to create a profile.
#[derive(Debug, Clone)]
pub struct CreateProfileCommand {
    pub profile: UserProfile,
}

/// Handler for creating profiles.
pub struct CreateProfileHandler {
    repository: Arc<dyn ProfileRepository>,
}

impl CreateProfileHandler {
    pub fn new(repository: Arc<dyn ProfileRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CreateProfileCommand) -> Result<UserProfile, DomainError> {
        let mut profile = cmd.profile;

        // 1. Validate
        profile.validate()?;

        // 2. Reject duplicates before doing any work
        if self.repository.exists(&profile.name).await? {
            return Err(DomainError::conflict(format!(
                "Profile '{}' already exists",
                profile.name
            ))
            .with_detail("profile", profile.name.clone()));
        }

        // 3. Derived values and bookkeeping
        profile.ensure_life_path();
        profile.touch();

        // 4. Persist
        self.repository.create(&profile).await?;
        info!(profile = %profile.name, life_path = ?profile.life_path_number, "profile created");

        Ok(profile)
    }
}
