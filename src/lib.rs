//! Skyforge - Daily Sovereign Alignment
//!
//! This crate turns a person's birth data into daily guidance reports built
//! from lunar position, numerology, biorhythm cycles and a set of derived
//! wellness recommendations, and exports them as CSV, spreadsheet, PDF,
//! JSON or markdown.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
