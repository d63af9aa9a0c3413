//! Calendar-driven placeholders for solar transits, Human Design and the I Ching.
//!
//! These are deterministic table lookups keyed on the day of year, not
//! ephemeris-based astrology. The arithmetic is kept stable so outputs stay
//! comparable across releases.

pub mod human_design;
pub mod i_ching;
pub mod solar;

pub use human_design::{human_design_for, GateData, HumanDesignData, HumanDesignType};
pub use i_ching::{i_ching_for, IChingData};
pub use solar::{solar_transit_for, SolarTransitData};
