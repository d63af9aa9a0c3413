//! DeleteProfile - Command handler for removing a stored profile.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::DomainError;
use crate::ports::ProfileRepository;

/// Command to delete a profile.
#[derive(Debug, Clone)]
pub struct DeleteProfileCommand {
    pub name: String,
}

/// Handler for deleting profiles.
pub struct DeleteProfileHandler {
    repository: Arc<dyn ProfileRepository>,
}

impl DeleteProfileHandler {
    pub fn new(repository: Arc<dyn ProfileRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteProfileCommand) -> Result<(), DomainError> {
        if !self.repository.exists(&cmd.name).await? {
            return Err(DomainError::profile_not_found(&cmd.name));
        }
        self.repository.delete(&cmd.name).await?;
        info!(profile = %cmd.name, "profile deleted");
        Ok(())
    }
}
