//! MoonEngine port - source of Sun and Moon positions.

use chrono::NaiveDate;

use crate::domain::lunar::{julian_day, EclipticPositions, MoonData};

/// Computes geocentric ecliptic longitudes for a Julian Day.
///
/// # Contract
///
/// Implementations must:
/// - Return longitudes normalized to `[0, 360)`
/// - Be pure: the same Julian Day always yields the same positions
///
/// Phase, sign and theme derivation is shared through [`MoonEngine::moon_data`],
/// so callers cannot tell engines apart by record shape.
pub trait MoonEngine: Send + Sync {
    /// Short identifier used in configuration and logs.
    fn name(&self) -> &'static str;

    fn positions(&self, jd: f64) -> EclipticPositions;

    /// Moon record for a calendar date, evaluated at 12:00 UTC.
    fn moon_data(&self, date: NaiveDate) -> MoonData {
        MoonData::from_positions(self.positions(julian_day(date)))
    }
}
