//! Shared application state for the REST API.

use std::sync::Arc;

use crate::application::handlers::{
    CreateProfileHandler, DeleteProfileHandler, ExportReportHandler, GenerateDailyHandler,
    GenerateRangeHandler, GetProfileHandler, ListProfilesHandler, UpdateProfileHandler,
};
use crate::domain::daily::DailyEntryGenerator;
use crate::ports::ProfileRepository;

/// Cloned into every request; handlers are built on demand from it.
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn ProfileRepository>,
    pub generator: DailyEntryGenerator,
}

impl AppState {
    pub fn new(repository: Arc<dyn ProfileRepository>, generator: DailyEntryGenerator) -> Self {
        Self {
            repository,
            generator,
        }
    }

    pub fn create_profile_handler(&self) -> CreateProfileHandler {
        CreateProfileHandler::new(self.repository.clone())
    }

    pub fn update_profile_handler(&self) -> UpdateProfileHandler {
        UpdateProfileHandler::new(self.repository.clone())
    }

    pub fn delete_profile_handler(&self) -> DeleteProfileHandler {
        DeleteProfileHandler::new(self.repository.clone())
    }

    pub fn get_profile_handler(&self) -> GetProfileHandler {
        GetProfileHandler::new(self.repository.clone())
    }

    pub fn list_profiles_handler(&self) -> ListProfilesHandler {
        ListProfilesHandler::new(self.repository.clone())
    }

    pub fn generate_daily_handler(&self) -> GenerateDailyHandler {
        GenerateDailyHandler::new(self.repository.clone(), self.generator.clone())
    }

    pub fn generate_range_handler(&self) -> GenerateRangeHandler {
        GenerateRangeHandler::new(self.repository.clone(), self.generator.clone())
    }

    pub fn export_report_handler(&self) -> ExportReportHandler {
        ExportReportHandler::new(self.repository.clone(), self.generator.clone())
    }
}
