//! UpdateProfile - Command handler for replacing a stored profile.
//!
//! The incoming profile carries the user-editable fields. Derived caches and
//! creation metadata are carried over from the stored record, and a change of
//! name moves the record.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::DomainError;
use crate::domain::profile::UserProfile;
use crate::ports::ProfileRepository;

/// Command to update the profile stored under `name`.
#[derive(Debug, Clone)]
pub struct UpdateProfileCommand {
    pub name: String,
    pub profile: UserProfile,
}

/// Handler for updating profiles.
pub struct UpdateProfileHandler {
    repository: Arc<dyn ProfileRepository>,
}

impl UpdateProfileHandler {
    pub fn new(repository: Arc<dyn ProfileRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: UpdateProfileCommand) -> Result<UserProfile, DomainError> {
        // 1. Load existing
        let existing = self
            .repository
            .find_by_name(&cmd.name)
            .await?
            .ok_or_else(|| DomainError::profile_not_found(&cmd.name))?;

        let mut updated = cmd.profile;
        updated.validate()?;
        let renamed = updated.name != existing.name;

        // 2. A rename must not clobber another profile
        if renamed && self.repository.exists(&updated.name).await? {
            return Err(DomainError::conflict(format!(
                "Profile '{}' already exists",
                updated.name
            )));
        }

        // 3. Carry over what the request does not own
        if updated.human_design_type.is_none() {
            updated.human_design_type = existing.human_design_type;
        }
        if updated.human_design_strategy.is_none() {
            updated.human_design_strategy = existing.human_design_strategy.clone();
        }
        if updated.human_design_authority.is_none() {
            updated.human_design_authority = existing.human_design_authority.clone();
        }
        if updated.metadata.notes.is_none() {
            updated.metadata.notes = existing.metadata.notes.clone();
        }
        updated.metadata.created_at = existing.metadata.created_at;

        if updated.birth_date() == existing.birth_date() {
            updated.life_path_number = existing.life_path_number;
            updated.personal_year_cache = existing.personal_year_cache.clone();
        } else {
            updated.clear_derived();
        }
        updated.ensure_life_path();
        updated.touch();

        // 4. Persist; on rename write the new record before dropping the old
        if renamed {
            self.repository.create(&updated).await?;
            self.repository.delete(&existing.name).await?;
            info!(from = %existing.name, to = %updated.name, "profile renamed");
        } else {
            self.repository.update(&updated).await?;
            info!(profile = %updated.name, "profile updated");
        }

        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{profile, InMemoryProfileRepository};
    use crate::domain::calendar::HumanDesignType;
    use crate::domain::foundation::{ErrorCode, Timestamp};
    use chrono::NaiveDate;

    fn stored() -> UserProfile {
        let mut p = profile("erin");
        p.human_design_type = Some(HumanDesignType::Projector);
        p.ensure_life_path();
        p.personal_year(2026);
        p.touch();
        p
    }

    #[tokio::test]
    async fn test_update_preserves_caches_and_created_at() {
        let original = stored();
        let created_at: Option<Timestamp> = original.metadata.created_at;
        let repo = Arc::new(InMemoryProfileRepository::default().with_profile(original));
        let handler = UpdateProfileHandler::new(repo.clone());

        let updated = handler
            .handle(UpdateProfileCommand {
                name: "erin".to_string(),
                profile: profile("erin"),
            })
            .await
            .unwrap();

        assert_eq!(updated.human_design_type, Some(HumanDesignType::Projector));
        assert_eq!(updated.metadata.created_at, created_at);
        assert!(updated.personal_year_cache.contains_key(&2026));
        assert_eq!(repo.stored("erin"), Some(updated));
    }

    #[tokio::test]
    async fn test_update_recomputes_life_path_on_new_birth_date() {
        let repo = Arc::new(InMemoryProfileRepository::default().with_profile(stored()));
        let handler = UpdateProfileHandler::new(repo);

        let mut incoming = profile("erin");
        incoming.birth_data.date = NaiveDate::from_ymd_opt(1985, 3, 15).unwrap();
        let updated = handler
            .handle(UpdateProfileCommand {
                name: "erin".to_string(),
                profile: incoming,
            })
            .await
            .unwrap();

        assert_eq!(updated.life_path_number, Some(5));
        assert!(updated.personal_year_cache.is_empty());
    }

    #[tokio::test]
    async fn test_rename_moves_record() {
        let repo = Arc::new(InMemoryProfileRepository::default().with_profile(stored()));
        let handler = UpdateProfileHandler::new(repo.clone());

        handler
            .handle(UpdateProfileCommand {
                name: "erin".to_string(),
                profile: profile("erin2"),
            })
            .await
            .unwrap();

        assert!(repo.stored("erin").is_none());
        assert!(repo.stored("erin2").is_some());
    }

    #[tokio::test]
    async fn test_rename_onto_existing_conflicts() {
        let repo = Arc::new(
            InMemoryProfileRepository::default()
                .with_profile(stored())
                .with_profile(profile("frank")),
        );
        let handler = UpdateProfileHandler::new(repo.clone());

        let err = handler
            .handle(UpdateProfileCommand {
                name: "erin".to_string(),
                profile: profile("frank"),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::Conflict);
        assert!(repo.stored("erin").is_some());
    }

    #[tokio::test]
    async fn test_update_missing_profile() {
        let repo = Arc::new(InMemoryProfileRepository::default());
        let err = UpdateProfileHandler::new(repo)
            .handle(UpdateProfileCommand {
                name: "nobody".to_string(),
                profile: profile("nobody"),
            })
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
