//! GenerateRange - builds one report per day of an inclusive range.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use super::{load_profile, persist_filled_cache};
use crate::domain::daily::{DailyEntryGenerator, DailyPreparation, DateSpan};
use crate::domain::foundation::DomainError;
use crate::ports::ProfileRepository;

#[derive(Debug, Clone)]
pub struct GenerateRangeCommand {
    pub profile: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

pub struct GenerateRangeHandler {
    repository: Arc<dyn ProfileRepository>,
    generator: DailyEntryGenerator,
}

impl GenerateRangeHandler {
    pub fn new(repository: Arc<dyn ProfileRepository>, generator: DailyEntryGenerator) -> Self {
        Self {
            repository,
            generator,
        }
    }

    pub async fn handle(
        &self,
        cmd: GenerateRangeCommand,
    ) -> Result<Vec<DailyPreparation>, DomainError> {
        // Range is checked before touching storage
        let span = DateSpan::new(cmd.start, cmd.end)?;

        let mut profile = load_profile(self.repository.as_ref(), &cmd.profile).await?;
        let had_life_path = profile.life_path_number.is_some();

        let entries = self.generator.generate_days(span.days(), &mut profile);
        info!(
            profile = %profile.name,
            start = %span.start(),
            end = %span.end(),
            days = entries.len(),
            "range generated"
        );

        persist_filled_cache(self.repository.as_ref(), &profile, had_life_path).await;
        Ok(entries)
    }
}
