//! Profile queries.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::profile::UserProfile;
use crate::ports::ProfileRepository;

#[derive(Debug, Clone)]
pub struct GetProfileQuery {
    pub name: String,
}

pub struct GetProfileHandler {
    repository: Arc<dyn ProfileRepository>,
}

impl GetProfileHandler {
    pub fn new(repository: Arc<dyn ProfileRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetProfileQuery) -> Result<UserProfile, DomainError> {
        self.repository
            .find_by_name(&query.name)
            .await?
            .ok_or_else(|| DomainError::profile_not_found(&query.name))
    }
}

/// Lists every stored profile, sorted by name.
pub struct ListProfilesHandler {
    repository: Arc<dyn ProfileRepository>,
}

impl ListProfilesHandler {
    pub fn new(repository: Arc<dyn ProfileRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<Vec<UserProfile>, DomainError> {
        let mut profiles = self.repository.list().await?;
        profiles.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(profiles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{profile, InMemoryProfileRepository};
    use crate::domain::foundation::ErrorCode;

    #[tokio::test]
    async fn test_get_profile_found_and_missing() {
        let repo = Arc::new(InMemoryProfileRepository::default().with_profile(profile("carol")));
        let handler = GetProfileHandler::new(repo);

        let found = handler
            .handle(GetProfileQuery {
                name: "carol".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(found.name, "carol");

        let err = handler
            .handle(GetProfileQuery {
                name: "dave".to_string(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::ProfileNotFound);
    }

    #[tokio::test]
    async fn test_list_profiles_sorted() {
        let repo = Arc::new(
            InMemoryProfileRepository::default()
                .with_profile(profile("zed"))
                .with_profile(profile("amy")),
        );
        let names: Vec<String> = ListProfilesHandler::new(repo)
            .handle()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["amy", "zed"]);
    }
}
