//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod profile;
pub mod report;

pub use profile::{
    CreateProfileCommand, CreateProfileHandler, DeleteProfileCommand, DeleteProfileHandler,
    GetProfileHandler, GetProfileQuery, ListProfilesHandler, UpdateProfileCommand,
    UpdateProfileHandler,
};
pub use report::{
    ExportReportCommand, ExportReportHandler, GenerateDailyCommand, GenerateDailyHandler,
    GenerateRangeCommand, GenerateRangeHandler,
};

#[cfg(test)]
pub(crate) mod test_support {
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::NaiveDate;

    use crate::domain::foundation::DomainError;
    use crate::domain::profile::{BirthData, UserProfile};
    use crate::ports::ProfileRepository;

    /// Map-backed repository that counts writes.
    #[derive(Default)]
    pub struct InMemoryProfileRepository {
        profiles: Mutex<BTreeMap<String, UserProfile>>,
        writes: Mutex<usize>,
    }

    impl InMemoryProfileRepository {
        pub fn with_profile(self, profile: UserProfile) -> Self {
            self.profiles
                .lock()
                .unwrap()
                .insert(profile.name.clone(), profile);
            self
        }

        pub fn stored(&self, name: &str) -> Option<UserProfile> {
            self.profiles.lock().unwrap().get(name).cloned()
        }

        pub fn write_count(&self) -> usize {
            *self.writes.lock().unwrap()
        }
    }

    #[async_trait]
    impl ProfileRepository for InMemoryProfileRepository {
        async fn create(&self, profile: &UserProfile) -> Result<(), DomainError> {
            let mut profiles = self.profiles.lock().unwrap();
            if profiles.contains_key(&profile.name) {
                return Err(DomainError::conflict(format!(
                    "Profile '{}' already exists",
                    profile.name
                )));
            }
            profiles.insert(profile.name.clone(), profile.clone());
            *self.writes.lock().unwrap() += 1;
            Ok(())
        }

        async fn update(&self, profile: &UserProfile) -> Result<(), DomainError> {
            self.profiles
                .lock()
                .unwrap()
                .insert(profile.name.clone(), profile.clone());
            *self.writes.lock().unwrap() += 1;
            Ok(())
        }

        async fn find_by_name(&self, name: &str) -> Result<Option<UserProfile>, DomainError> {
            Ok(self.stored(name))
        }

        async fn list(&self) -> Result<Vec<UserProfile>, DomainError> {
            Ok(self.profiles.lock().unwrap().values().cloned().collect())
        }

        async fn list_names(&self) -> Result<Vec<String>, DomainError> {
            Ok(self.profiles.lock().unwrap().keys().cloned().collect())
        }

        async fn delete(&self, name: &str) -> Result<(), DomainError> {
            self.profiles
                .lock()
                .unwrap()
                .remove(name)
                .map(|_| ())
                .ok_or_else(|| DomainError::profile_not_found(name))
        }

        async fn exists(&self, name: &str) -> Result<bool, DomainError> {
            Ok(self.profiles.lock().unwrap().contains_key(name))
        }
    }

    pub fn profile(name: &str) -> UserProfile {
        UserProfile::new(
            name,
            BirthData::new(NaiveDate::from_ymd_opt(1990, 6, 15).unwrap()),
        )
        .unwrap()
    }
}
