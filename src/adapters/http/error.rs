//! Domain error to HTTP response mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode};

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }
}

impl From<&DomainError> for ErrorResponse {
    fn from(error: &DomainError) -> Self {
        let details = if error.details.is_empty() {
            None
        } else {
            serde_json::to_value(&error.details).ok()
        };
        Self {
            code: error.code().to_string(),
            message: error.message().to_string(),
            details,
        }
    }
}

/// Status code for a domain error code.
pub fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::NotFound | ErrorCode::ProfileNotFound => StatusCode::NOT_FOUND,
        ErrorCode::Conflict => StatusCode::CONFLICT,
        ErrorCode::ValidationFailed
        | ErrorCode::EmptyField
        | ErrorCode::OutOfRange
        | ErrorCode::InvalidFormat
        | ErrorCode::InvalidDateRange => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorCode::StorageError | ErrorCode::ExportFailed | ErrorCode::InternalError => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Wrapper that lets handlers return `DomainError` with `?`.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl From<crate::domain::foundation::ValidationError> for ApiError {
    fn from(err: crate::domain::foundation::ValidationError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_for(self.0.code());
        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        }
        (status, Json(ErrorResponse::from(&self.0))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let response = ApiError(DomainError::profile_not_found("x")).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn conflict_maps_to_409() {
        let response = ApiError(DomainError::conflict("dup")).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn validation_family_maps_to_422() {
        for code in [
            ErrorCode::ValidationFailed,
            ErrorCode::InvalidFormat,
            ErrorCode::OutOfRange,
            ErrorCode::InvalidDateRange,
        ] {
            assert_eq!(status_for(code), StatusCode::UNPROCESSABLE_ENTITY);
        }
    }

    #[test]
    fn infrastructure_maps_to_500() {
        assert_eq!(
            status_for(ErrorCode::StorageError),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_for(ErrorCode::ExportFailed),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn error_response_carries_details() {
        let err = DomainError::validation("end_date", "bad");
        let body = ErrorResponse::from(&err);
        assert_eq!(body.code, "VALIDATION_FAILED");
        assert_eq!(body.details.unwrap()["field"], "end_date");
    }
}
