//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `lunar` - Moon engines (simplified and ephemeris)
//! - `profile` - YAML profile storage on the filesystem
//! - `export` - CSV, spreadsheet, PDF, JSON and markdown renderers
//! - `http` - REST API
//! - `schedule` - Host job scheduler integration for daily reports

pub mod export;
pub mod http;
pub mod lunar;
pub mod profile;
pub mod schedule;

pub use export::exporter_for;
pub use lunar::moon_engine_for;
pub use profile::FsProfileRepository;
