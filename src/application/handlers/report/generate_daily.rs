//! GenerateDaily - builds the report for one date.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use super::{load_profile, persist_filled_cache};
use crate::domain::daily::{DailyEntryGenerator, DailyPreparation};
use crate::domain::foundation::DomainError;
use crate::ports::ProfileRepository;

#[derive(Debug, Clone)]
pub struct GenerateDailyCommand {
    pub profile: String,
    pub date: NaiveDate,
}

pub struct GenerateDailyHandler {
    repository: Arc<dyn ProfileRepository>,
    generator: DailyEntryGenerator,
}

impl GenerateDailyHandler {
    pub fn new(repository: Arc<dyn ProfileRepository>, generator: DailyEntryGenerator) -> Self {
        Self {
            repository,
            generator,
        }
    }

    pub async fn handle(&self, cmd: GenerateDailyCommand) -> Result<DailyPreparation, DomainError> {
        let mut profile = load_profile(self.repository.as_ref(), &cmd.profile).await?;
        let had_life_path = profile.life_path_number.is_some();

        let entry = self.generator.generate(cmd.date, &mut profile);
        info!(
            profile = %profile.name,
            date = %cmd.date,
            engine = self.generator.engine_name(),
            "daily report generated"
        );

        persist_filled_cache(self.repository.as_ref(), &profile, had_life_path).await;
        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::lunar::SimplifiedMoonEngine;
    use crate::application::handlers::test_support::{profile, InMemoryProfileRepository};
    use crate::domain::foundation::ErrorCode;

    fn handler(repo: Arc<InMemoryProfileRepository>) -> GenerateDailyHandler {
        GenerateDailyHandler::new(
            repo,
            DailyEntryGenerator::new(Arc::new(SimplifiedMoonEngine::new())),
        )
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
    }

    #[tokio::test]
    async fn test_generate_daily_persists_filled_cache_once() {
        let repo = Arc::new(InMemoryProfileRepository::default().with_profile(profile("gina")));
        let handler = handler(repo.clone());

        let entry = handler
            .handle(GenerateDailyCommand {
                profile: "gina".to_string(),
                date: date(),
            })
            .await
            .unwrap();

        assert_eq!(entry.date, date());
        assert_eq!(entry.day_of_week, "Thursday");
        assert_eq!(repo.stored("gina").unwrap().life_path_number, Some(4));
        assert_eq!(repo.write_count(), 1);

        handler
            .handle(GenerateDailyCommand {
                profile: "gina".to_string(),
                date: date(),
            })
            .await
            .unwrap();
        assert_eq!(repo.write_count(), 1);
    }

    #[tokio::test]
    async fn test_generate_daily_unknown_profile() {
        let repo = Arc::new(InMemoryProfileRepository::default());
        let err = handler(repo)
            .handle(GenerateDailyCommand {
                profile: "nobody".to_string(),
                date: date(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::ProfileNotFound);
    }
}
