//! Report Exporter Port - renders daily reports into downloadable formats.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::daily::DailyPreparation;
use crate::domain::foundation::{DomainError, ErrorCode};

/// Port for rendering a run of daily reports.
///
/// # Contract
///
/// Implementations must:
/// - Emit entries in the order given
/// - Produce a complete document even for an empty slice
/// - Be deterministic for identical input
pub trait ReportExporter: Send + Sync {
    /// Format this exporter produces.
    fn format(&self) -> ExportFormat;

    /// Renders `entries` into the exporter's format.
    ///
    /// `title` heads formats that carry one and is ignored by the rest.
    fn export(&self, entries: &[DailyPreparation], title: &str) -> Result<Vec<u8>, ExportError>;
}

/// Export formats for calendars and reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    Csv,
    Excel,
    Pdf,
    Json,
    Markdown,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 5] = [
        ExportFormat::Csv,
        ExportFormat::Excel,
        ExportFormat::Pdf,
        ExportFormat::Json,
        ExportFormat::Markdown,
    ];

    /// Get the MIME content type for this format.
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv; charset=utf-8",
            ExportFormat::Excel => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
            ExportFormat::Pdf => "application/pdf",
            ExportFormat::Json => "application/json",
            ExportFormat::Markdown => "text/markdown; charset=utf-8",
        }
    }

    /// Get the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Excel => "xlsx",
            ExportFormat::Pdf => "pdf",
            ExportFormat::Json => "json",
            ExportFormat::Markdown => "md",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::Excel => write!(f, "excel"),
            ExportFormat::Pdf => write!(f, "pdf"),
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Markdown => write!(f, "markdown"),
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "excel" | "xlsx" => Ok(ExportFormat::Excel),
            "pdf" => Ok(ExportFormat::Pdf),
            "json" => Ok(ExportFormat::Json),
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Exported document with content and metadata.
#[derive(Debug, Clone)]
pub struct ExportedDocument {
    /// The exported content as bytes.
    pub content: Vec<u8>,
    /// The MIME content type.
    pub content_type: String,
    /// Suggested filename for download.
    pub filename: String,
    /// The format that was used.
    pub format: ExportFormat,
}

impl ExportedDocument {
    /// Create a new exported document.
    ///
    /// `base_filename` is reduced to ASCII letters, digits, `-`, `_` and `.`
    /// so the name is always a valid quoted header parameter.
    pub fn new(content: Vec<u8>, format: ExportFormat, base_filename: &str) -> Self {
        Self {
            content,
            content_type: format.content_type().to_string(),
            filename: format!("{}.{}", safe_file_stem(base_filename), format.extension()),
            format,
        }
    }

    /// `Content-Disposition` header value for downloads.
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.filename)
    }
}

fn safe_file_stem(stem: &str) -> String {
    stem.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Errors that can occur during report export.
#[derive(Debug, Clone, Error)]
pub enum ExportError {
    /// Unsupported export format requested.
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    #[error("CSV export failed: {0}")]
    Csv(String),

    #[error("Spreadsheet export failed: {0}")]
    Spreadsheet(String),

    #[error("PDF export failed: {0}")]
    Pdf(String),

    #[error("Serialization failed: {0}")]
    Serialization(String),

    /// I/O error during export.
    #[error("I/O error during export: {0}")]
    Io(String),
}

impl From<ExportError> for DomainError {
    fn from(err: ExportError) -> Self {
        let code = match &err {
            ExportError::UnsupportedFormat(_) => ErrorCode::InvalidFormat,
            _ => ErrorCode::ExportFailed,
        };
        DomainError::new(code, err.to_string())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
