//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `MoonEngine` - Sun and Moon positions for a Julian Day
//! - `ProfileRepository` - Profile persistence keyed by name
//! - `ReportExporter` - Rendering of daily reports to download formats

mod moon_engine;
mod profile_repository;
mod report_exporter;

pub use moon_engine::MoonEngine;
pub use profile_repository::{ProfileRepository, StorageError};
pub use report_exporter::{ExportError, ExportFormat, ExportedDocument, ReportExporter};
