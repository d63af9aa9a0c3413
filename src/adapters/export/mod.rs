//! Report exporters.
//!
//! One [`ReportExporter`] per [`ExportFormat`]; the terminal text view is
//! a plain function since it is never offered as a download.

mod csv;
mod excel;
mod json;
mod markdown;
mod pdf;
mod text;

pub use self::csv::{CsvExporter, CSV_COLUMNS};
pub use excel::{ExcelExporter, SHEET_NAMES};
pub use json::JsonExporter;
pub use markdown::{daily_markdown, MarkdownExporter};
pub use pdf::PdfExporter;
pub use text::render_text;

use crate::ports::{ExportFormat, ReportExporter};

/// Exporter for `format`.
pub fn exporter_for(format: ExportFormat) -> Box<dyn ReportExporter> {
    match format {
        ExportFormat::Csv => Box::new(CsvExporter),
        ExportFormat::Excel => Box::new(ExcelExporter),
        ExportFormat::Pdf => Box::new(PdfExporter),
        ExportFormat::Json => Box::new(JsonExporter),
        ExportFormat::Markdown => Box::new(MarkdownExporter),
    }
}
