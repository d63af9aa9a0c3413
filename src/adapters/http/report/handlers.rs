//! HTTP handlers for report endpoints.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;
use crate::application::handlers::{
    ExportReportCommand, GenerateDailyCommand, GenerateRangeCommand,
};
use crate::domain::foundation::DomainError;
use crate::ports::ExportFormat;

use super::dto::{DailyRequest, RangeRequest};

/// POST /api/generate/daily
pub async fn generate_daily(
    State(state): State<AppState>,
    Json(req): Json<DailyRequest>,
) -> Result<Response, ApiError> {
    let date = req.date()?;
    let entry = state
        .generate_daily_handler()
        .handle(GenerateDailyCommand {
            profile: req.profile,
            date,
        })
        .await?;
    Ok((StatusCode::OK, Json(entry)).into_response())
}

/// POST /api/generate/range - One report per day, oldest first
pub async fn generate_range(
    State(state): State<AppState>,
    Json(req): Json<RangeRequest>,
) -> Result<Response, ApiError> {
    let (start, end) = req.dates()?;
    let entries = state
        .generate_range_handler()
        .handle(GenerateRangeCommand {
            profile: req.profile,
            start,
            end,
        })
        .await?;
    Ok((StatusCode::OK, Json(entries)).into_response())
}

/// POST /api/export/:format - Download a range as csv, excel, pdf, json or markdown
pub async fn export_report(
    State(state): State<AppState>,
    Path(format): Path<String>,
    Json(req): Json<RangeRequest>,
) -> Result<Response, ApiError> {
    let format: ExportFormat = format.parse().map_err(DomainError::from)?;
    let (start, end) = req.dates()?;

    let document = state
        .export_report_handler()
        .handle(ExportReportCommand {
            profile: req.profile,
            start,
            end,
            format,
        })
        .await?;

    let disposition = document.content_disposition();
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, document.content_type),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        document.content,
    )
        .into_response())
}
