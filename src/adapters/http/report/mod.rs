//! HTTP adapter for report generation and export.
//!
//! - `POST /api/generate/daily` - One day's full report as JSON
//! - `POST /api/generate/range` - Every day of an inclusive range as a JSON array
//! - `POST /api/export/:format` - A range as a downloadable file

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{DailyRequest, RangeRequest};
pub use routes::report_routes;
