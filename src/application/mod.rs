//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers change stored profiles; query handlers and report
//! generation only read them, apart from best-effort cache persistence.

pub mod handlers;

pub use handlers::{
    // Profile handlers
    CreateProfileCommand, CreateProfileHandler, DeleteProfileCommand, DeleteProfileHandler,
    GetProfileHandler, GetProfileQuery, ListProfilesHandler, UpdateProfileCommand,
    UpdateProfileHandler,
    // Report handlers
    ExportReportCommand, ExportReportHandler, GenerateDailyCommand, GenerateDailyHandler,
    GenerateRangeCommand, GenerateRangeHandler,
};
