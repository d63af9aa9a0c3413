//! ExportReport - generates a range and renders it in a download format.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use super::{GenerateRangeCommand, GenerateRangeHandler};
use crate::adapters::export::exporter_for;
use crate::domain::daily::DailyEntryGenerator;
use crate::domain::foundation::DomainError;
use crate::ports::{ExportFormat, ExportedDocument, ProfileRepository};

#[derive(Debug, Clone)]
pub struct ExportReportCommand {
    pub profile: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub format: ExportFormat,
}

pub struct ExportReportHandler {
    range: GenerateRangeHandler,
}

impl ExportReportHandler {
    pub fn new(repository: Arc<dyn ProfileRepository>, generator: DailyEntryGenerator) -> Self {
        Self {
            range: GenerateRangeHandler::new(repository, generator),
        }
    }

    pub async fn handle(&self, cmd: ExportReportCommand) -> Result<ExportedDocument, DomainError> {
        let entries = self
            .range
            .handle(GenerateRangeCommand {
                profile: cmd.profile.clone(),
                start: cmd.start,
                end: cmd.end,
            })
            .await?;

        let title = format!(
            "Sovereign Alignment Guide for {}: {} to {}",
            cmd.profile, cmd.start, cmd.end
        );
        // xlsx and pdf rendering is CPU-bound; keep it off the async workers.
        let format = cmd.format;
        let content = tokio::task::spawn_blocking(move || {
            exporter_for(format).export(&entries, &title)
        })
        .await
        .map_err(|e| DomainError::internal(format!("export task failed: {}", e)))??;
        let base = format!("skyforge_{}_{}_{}", cmd.profile, cmd.start, cmd.end);
        let document = ExportedDocument::new(content, cmd.format, &base);

        info!(
            profile = %cmd.profile,
            format = %cmd.format,
            bytes = document.content.len(),
            "report exported"
        );
        Ok(document)
    }
}
