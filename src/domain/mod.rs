//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (timestamp, errors)
//! - `zodiac` - Signs, elements and modalities
//! - `lunar` - Moon phase, illumination and sign derivation
//! - `numerology` - Life path and personal cycle numbers
//! - `biorhythm` - Physical, emotional and intellectual cycles
//! - `calendar` - Solar transit, Human Design and I Ching placeholders
//! - `profile` - User profiles and birth data
//! - `risk` - Risk scoring over the day's inputs
//! - `wellness` - Exercise, nourishment, rituals and practices
//! - `daily` - The daily report aggregate and its generator

pub mod biorhythm;
pub mod calendar;
pub mod daily;
pub mod foundation;
pub mod lunar;
pub mod numerology;
pub mod profile;
pub mod risk;
pub mod wellness;
pub mod zodiac;
