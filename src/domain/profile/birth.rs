//! Birth data value objects.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Approximate birth window used when the exact time is unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BirthTimeRange {
    Exact,
    Morning,
    Afternoon,
    Evening,
    Night,
    #[default]
    Unknown,
}

impl BirthTimeRange {
    /// Clock time standing in for the whole window.
    pub fn midpoint(&self) -> NaiveTime {
        let hour = match self {
            BirthTimeRange::Exact | BirthTimeRange::Unknown => 12,
            BirthTimeRange::Morning => 9,
            BirthTimeRange::Afternoon => 15,
            BirthTimeRange::Evening => 20,
            BirthTimeRange::Night => 2,
        };
        NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or(NaiveTime::MIN)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BirthTimeRange::Exact => "exact",
            BirthTimeRange::Morning => "morning",
            BirthTimeRange::Afternoon => "afternoon",
            BirthTimeRange::Evening => "evening",
            BirthTimeRange::Night => "night",
            BirthTimeRange::Unknown => "unknown",
        }
    }
}

impl fmt::Display for BirthTimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BirthTimeRange {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exact" => Ok(BirthTimeRange::Exact),
            "morning" => Ok(BirthTimeRange::Morning),
            "afternoon" => Ok(BirthTimeRange::Afternoon),
            "evening" => Ok(BirthTimeRange::Evening),
            "night" => Ok(BirthTimeRange::Night),
            "unknown" => Ok(BirthTimeRange::Unknown),
            other => Err(ValidationError::invalid_format(
                "time_range",
                format!(
                    "'{}' is not one of exact, morning, afternoon, evening, night, unknown",
                    other
                ),
            )),
        }
    }
}

/// Geographic location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

fn default_timezone() -> String {
    "UTC".to_string()
}

impl Location {
    /// Creates a validated location.
    pub fn new(
        city: Option<String>,
        latitude: Option<f64>,
        longitude: Option<f64>,
        timezone: Option<String>,
    ) -> Result<Self, ValidationError> {
        let location = Self {
            city,
            latitude,
            longitude,
            timezone: timezone.unwrap_or_else(default_timezone),
        };
        location.validate()?;
        Ok(location)
    }

    /// Location known only by name.
    pub fn from_city(city: impl Into<String>) -> Self {
        Self {
            city: Some(city.into()),
            latitude: None,
            longitude: None,
            timezone: default_timezone(),
        }
    }

    /// Checks coordinate bounds and that a timezone is present.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(lat) = self.latitude {
            if !(-90.0..=90.0).contains(&lat) {
                return Err(ValidationError::out_of_range("latitude", -90.0, 90.0, lat));
            }
        }
        if let Some(lon) = self.longitude {
            if !(-180.0..=180.0).contains(&lon) {
                return Err(ValidationError::out_of_range("longitude", -180.0, 180.0, lon));
            }
        }
        if self.timezone.trim().is_empty() {
            return Err(ValidationError::empty_field("timezone"));
        }
        Ok(())
    }

    pub fn has_coordinates(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.city, self.latitude, self.longitude) {
            (Some(city), _, _) => f.write_str(city),
            (None, Some(lat), Some(lon)) => write!(f, "{:.4}, {:.4}", lat, lon),
            _ => f.write_str("Unknown Location"),
        }
    }
}

/// Confidence in time-sensitive calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeConfidence {
    High,
    Medium,
    Low,
}

impl fmt::Display for TimeConfidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeConfidence::High => write!(f, "high"),
            TimeConfidence::Medium => write!(f, "medium"),
            TimeConfidence::Low => write!(f, "low"),
        }
    }
}

/// A person's birth information.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthData {
    pub date: NaiveDate,
    #[serde(default)]
    pub time: Option<NaiveTime>,
    #[serde(default)]
    pub time_range: BirthTimeRange,
    #[serde(default)]
    pub location: Option<Location>,
}

impl BirthData {
    /// Birth date only; time unknown.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            time: None,
            time_range: BirthTimeRange::Unknown,
            location: None,
        }
    }

    /// Sets an exact time, which forces the range to `Exact`.
    pub fn with_time(mut self, time: NaiveTime) -> Self {
        self.time = Some(time);
        self.time_range = BirthTimeRange::Exact;
        self
    }

    /// Sets an approximate window. Ignored once an exact time is present.
    pub fn with_time_range(mut self, range: BirthTimeRange) -> Self {
        if self.time.is_none() {
            self.time_range = range;
        }
        self
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Exact time if known, else the midpoint of the range.
    pub fn effective_time(&self) -> NaiveTime {
        self.time.unwrap_or_else(|| self.time_range.midpoint())
    }

    pub fn effective_datetime(&self) -> NaiveDateTime {
        self.date.and_time(self.effective_time())
    }

    pub fn has_exact_time(&self) -> bool {
        self.time.is_some() || self.time_range == BirthTimeRange::Exact
    }

    pub fn time_confidence(&self) -> TimeConfidence {
        if self.has_exact_time() {
            TimeConfidence::High
        } else if self.time_range != BirthTimeRange::Unknown {
            TimeConfidence::Medium
        } else {
            TimeConfidence::Low
        }
    }

    /// Validates the nested location, if any.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.location {
            Some(location) => location.validate(),
            None => Ok(()),
        }
    }
}

/// Parses a `YYYY-MM-DD` calendar date.
pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| ValidationError::invalid_format(field, "Use YYYY-MM-DD"))
}

/// Parses a 24-hour `HH:MM` clock time.
pub fn parse_time(field: &str, value: &str) -> Result<NaiveTime, ValidationError> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M")
        .map_err(|_| ValidationError::invalid_format(field, "Use HH:MM"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn birth() -> BirthData {
        BirthData::new(NaiveDate::from_ymd_opt(1990, 6, 15).unwrap())
    }

    #[test]
    fn range_midpoints() {
        assert_eq!(BirthTimeRange::Morning.midpoint(), hm(9, 0));
        assert_eq!(BirthTimeRange::Afternoon.midpoint(), hm(15, 0));
        assert_eq!(BirthTimeRange::Evening.midpoint(), hm(20, 0));
        assert_eq!(BirthTimeRange::Night.midpoint(), hm(2, 0));
        assert_eq!(BirthTimeRange::Unknown.midpoint(), hm(12, 0));
        assert_eq!(BirthTimeRange::Exact.midpoint(), hm(12, 0));
    }

    #[test]
    fn exact_time_wins_over_range() {
        let data = birth().with_time(hm(6, 45)).with_time_range(BirthTimeRange::Night);
        assert_eq!(data.time_range, BirthTimeRange::Exact);
        assert_eq!(data.effective_time(), hm(6, 45));
        assert_eq!(data.time_confidence(), TimeConfidence::High);
    }

    #[test]
    fn range_only_gives_medium_confidence() {
        let data = birth().with_time_range(BirthTimeRange::Evening);
        assert_eq!(data.effective_time(), hm(20, 0));
        assert!(!data.has_exact_time());
        assert_eq!(data.time_confidence(), TimeConfidence::Medium);
        assert_eq!(birth().time_confidence(), TimeConfidence::Low);
    }

    #[test]
    fn effective_datetime_combines_date_and_time() {
        let data = birth().with_time_range(BirthTimeRange::Morning);
        assert_eq!(data.effective_datetime().to_string(), "1990-06-15 09:00:00");
    }

    #[test]
    fn parses_time_range_case_insensitively() {
        assert_eq!("Morning".parse::<BirthTimeRange>().unwrap(), BirthTimeRange::Morning);
        assert!("dawn".parse::<BirthTimeRange>().is_err());
    }

    #[test]
    fn location_bounds_are_validated() {
        assert!(Location::new(None, Some(91.0), Some(0.0), None).is_err());
        assert!(Location::new(None, Some(0.0), Some(-180.5), None).is_err());
        assert!(Location::new(None, Some(-90.0), Some(180.0), None).is_ok());
    }

    #[test]
    fn location_display_variants() {
        assert_eq!(Location::from_city("Austin, TX").to_string(), "Austin, TX");
        let coords = Location::new(None, Some(30.2672), Some(-97.74306), None).unwrap();
        assert_eq!(coords.to_string(), "30.2672, -97.7431");
        let empty = Location::new(None, None, None, None).unwrap();
        assert_eq!(empty.to_string(), "Unknown Location");
        assert_eq!(empty.timezone, "UTC");
    }

    #[test]
    fn date_and_time_parsing() {
        assert_eq!(
            parse_date("date", "2026-01-15").unwrap(),
            NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
        );
        let err = parse_date("date", "15/01/2026").unwrap_err();
        assert_eq!(err.field(), "date");
        assert!(parse_date("date", "2026-02-30").is_err());

        assert_eq!(parse_time("time", "14:30").unwrap(), hm(14, 30));
        assert!(parse_time("time", "2pm").is_err());
    }
}
