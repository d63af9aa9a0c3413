//! Lunar position - phase, illumination and sign from ecliptic longitudes.
//!
//! Engines (see [`crate::ports::MoonEngine`]) only supply the Sun and Moon
//! longitudes for a Julian Day; everything else is derived here so every
//! engine yields the same record shape.

mod themes;

pub use themes::{moon_sign_theme, MoonSignTheme};

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::biorhythm::round1;
use crate::domain::zodiac::{Element, Modality, ZodiacSign};

/// Julian Day of the J2000.0 epoch.
pub const J2000: f64 = 2_451_545.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoonPhase {
    #[serde(rename = "New Moon")]
    NewMoon,
    #[serde(rename = "Waxing Crescent")]
    WaxingCrescent,
    #[serde(rename = "First Quarter")]
    FirstQuarter,
    #[serde(rename = "Waxing Gibbous")]
    WaxingGibbous,
    #[serde(rename = "Full Moon")]
    FullMoon,
    #[serde(rename = "Waning Gibbous")]
    WaningGibbous,
    #[serde(rename = "Last Quarter")]
    LastQuarter,
    #[serde(rename = "Waning Crescent")]
    WaningCrescent,
}

impl MoonPhase {
    pub fn name(&self) -> &'static str {
        match self {
            MoonPhase::NewMoon => "New Moon",
            MoonPhase::WaxingCrescent => "Waxing Crescent",
            MoonPhase::FirstQuarter => "First Quarter",
            MoonPhase::WaxingGibbous => "Waxing Gibbous",
            MoonPhase::FullMoon => "Full Moon",
            MoonPhase::WaningGibbous => "Waning Gibbous",
            MoonPhase::LastQuarter => "Last Quarter",
            MoonPhase::WaningCrescent => "Waning Crescent",
        }
    }

    /// Phase for an elongation angle; 45° bands centred on the principal phases.
    pub fn from_angle(angle: f64) -> Self {
        let angle = angle.rem_euclid(360.0);
        match angle {
            a if a < 22.5 => MoonPhase::NewMoon,
            a if a < 67.5 => MoonPhase::WaxingCrescent,
            a if a < 112.5 => MoonPhase::FirstQuarter,
            a if a < 157.5 => MoonPhase::WaxingGibbous,
            a if a < 202.5 => MoonPhase::FullMoon,
            a if a < 247.5 => MoonPhase::WaningGibbous,
            a if a < 292.5 => MoonPhase::LastQuarter,
            a if a < 337.5 => MoonPhase::WaningCrescent,
            _ => MoonPhase::NewMoon,
        }
    }
}

impl std::fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Apparent geocentric ecliptic longitudes in degrees, `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipticPositions {
    pub sun_longitude: f64,
    pub moon_longitude: f64,
}

/// Moon state for one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoonData {
    pub phase: MoonPhase,
    pub phase_percentage: f64,
    pub zodiac_sign: ZodiacSign,
    pub sign_element: Element,
    pub sign_modality: Modality,
    pub moon_void_of_course: bool,
    pub voc_start: Option<NaiveDateTime>,
    pub voc_end: Option<NaiveDateTime>,
    pub energy_theme: String,
    pub optimal_activities: Vec<String>,
    pub avoid_activities: Vec<String>,
}

/// Gregorian calendar date at 12:00 UTC to Julian Day.
pub fn julian_day(date: NaiveDate) -> f64 {
    julian_day_at(date, 12.0)
}

/// Julian Day for a date and a UTC hour of day.
pub fn julian_day_at(date: NaiveDate, hour: f64) -> f64 {
    let mut year = f64::from(date.year());
    let mut month = f64::from(date.month());
    let day = f64::from(date.day()) + hour / 24.0;

    if month <= 2.0 {
        year -= 1.0;
        month += 12.0;
    }

    let a = (year / 100.0).trunc();
    let b = 2.0 - a + (a / 4.0).trunc();

    (365.25 * (year + 4716.0)).trunc() + (30.6001 * (month + 1.0)).trunc() + day + b - 1524.5
}

/// Phase name and illumination percentage (one decimal) for an elongation.
pub fn phase_from_angle(angle: f64) -> (MoonPhase, f64) {
    let angle = angle.rem_euclid(360.0);
    let illumination = (1.0 - (180.0 - angle).abs() / 180.0) * 100.0;
    (MoonPhase::from_angle(angle), round1(illumination))
}

impl MoonData {
    /// Derives the full record from engine-supplied longitudes.
    pub fn from_positions(positions: EclipticPositions) -> Self {
        let elongation = (positions.moon_longitude - positions.sun_longitude).rem_euclid(360.0);
        let (phase, phase_percentage) = phase_from_angle(elongation);
        let sign = ZodiacSign::from_longitude(positions.moon_longitude);
        let theme = moon_sign_theme(sign);

        // TODO: derive void-of-course windows from the Moon's last major
        // aspect before each ingress; both engines report false until then.
        MoonData {
            phase,
            phase_percentage,
            zodiac_sign: sign,
            sign_element: sign.element(),
            sign_modality: sign.modality(),
            moon_void_of_course: false,
            voc_start: None,
            voc_end: None,
            energy_theme: theme.theme.to_string(),
            optimal_activities: theme.optimal.iter().map(|s| s.to_string()).collect(),
            avoid_activities: theme.avoid.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn julian_day_known_values() {
        let jan1 = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        assert_eq!(julian_day_at(jan1, 0.0), 2_461_041.5);
        assert_eq!(julian_day(jan1), 2_461_042.0);

        let epoch = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        assert_eq!(julian_day(epoch), J2000);
    }

    #[test]
    fn phase_from_angle_extremes() {
        assert_eq!(phase_from_angle(0.0), (MoonPhase::NewMoon, 0.0));
        assert_eq!(phase_from_angle(180.0), (MoonPhase::FullMoon, 100.0));
        assert_eq!(phase_from_angle(90.0), (MoonPhase::FirstQuarter, 50.0));
    }

    #[test]
    fn new_moon_covers_both_ends() {
        assert_eq!(MoonPhase::from_angle(22.4), MoonPhase::NewMoon);
        assert_eq!(MoonPhase::from_angle(22.5), MoonPhase::WaxingCrescent);
        assert_eq!(MoonPhase::from_angle(337.4), MoonPhase::WaningCrescent);
        assert_eq!(MoonPhase::from_angle(337.5), MoonPhase::NewMoon);
        assert_eq!(MoonPhase::from_angle(359.9), MoonPhase::NewMoon);
    }

    #[test]
    fn illumination_uses_normalized_angle() {
        let (_, wrapped) = phase_from_angle(540.0);
        assert_eq!(wrapped, 100.0);
    }

    #[test]
    fn record_from_positions() {
        let moon = MoonData::from_positions(EclipticPositions {
            sun_longitude: 10.0,
            moon_longitude: 190.0,
        });
        assert_eq!(moon.phase, MoonPhase::FullMoon);
        assert_eq!(moon.phase_percentage, 100.0);
        assert_eq!(moon.zodiac_sign, ZodiacSign::Libra);
        assert_eq!(moon.sign_element, Element::Air);
        assert_eq!(moon.sign_modality, Modality::Cardinal);
        assert_eq!(moon.energy_theme, "Harmony & Partnership");
        assert!(!moon.moon_void_of_course);
    }

    #[test]
    fn phase_serializes_as_display_name() {
        let json = serde_json::to_string(&MoonPhase::WaxingGibbous).unwrap();
        assert_eq!(json, "\"Waxing Gibbous\"");
    }
}
