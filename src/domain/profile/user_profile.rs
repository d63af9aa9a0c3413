//! UserProfile aggregate.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{BirthData, Location};
use crate::domain::calendar::HumanDesignType;
use crate::domain::foundation::{Timestamp, ValidationError};
use crate::domain::numerology;

/// Bookkeeping stamped on every save.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileMetadata {
    #[serde(default)]
    pub created_at: Option<Timestamp>,
    #[serde(default)]
    pub updated_at: Option<Timestamp>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// A person's birth data plus lazily computed values.
///
/// `life_path_number` and `personal_year_cache` are filled on first use and
/// persisted with the profile. Recomputing either yields the same value, so
/// filling them is idempotent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub birth_data: BirthData,
    #[serde(default)]
    pub current_location: Option<Location>,
    #[serde(default)]
    pub life_path_number: Option<u32>,
    #[serde(default)]
    pub human_design_type: Option<HumanDesignType>,
    #[serde(default)]
    pub human_design_strategy: Option<String>,
    #[serde(default)]
    pub human_design_authority: Option<String>,
    #[serde(default)]
    pub personal_year_cache: BTreeMap<i32, u32>,
    #[serde(default)]
    pub metadata: ProfileMetadata,
}

/// Profile names double as file stems.
pub fn validate_profile_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::empty_field("name"));
    }
    if name.contains('/') || name.contains('\\') || name.contains('\0') {
        return Err(ValidationError::invalid_format(
            "name",
            "must not contain path separators",
        ));
    }
    if name.starts_with('.') {
        return Err(ValidationError::invalid_format("name", "must not start with '.'"));
    }
    Ok(())
}

impl UserProfile {
    /// Creates a profile after validating the name and birth data.
    pub fn new(name: impl Into<String>, birth_data: BirthData) -> Result<Self, ValidationError> {
        let name = name.into();
        validate_profile_name(&name)?;
        birth_data.validate()?;

        Ok(Self {
            name,
            birth_data,
            current_location: None,
            life_path_number: None,
            human_design_type: None,
            human_design_strategy: None,
            human_design_authority: None,
            personal_year_cache: BTreeMap::new(),
            metadata: ProfileMetadata::default(),
        })
    }

    /// Re-checks invariants on a record loaded from storage or a request.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_profile_name(&self.name)?;
        self.birth_data.validate()?;
        if let Some(location) = &self.current_location {
            location.validate()?;
        }
        Ok(())
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_data.date
    }

    /// Life path number, computing and caching it if absent.
    pub fn ensure_life_path(&mut self) -> u32 {
        match self.life_path_number {
            Some(value) => value,
            None => {
                let value = numerology::life_path(self.birth_data.date);
                self.life_path_number = Some(value);
                value
            }
        }
    }

    /// Personal year number for `year`, computing and caching it if absent.
    pub fn personal_year(&mut self, year: i32) -> u32 {
        let birth = self.birth_data.date;
        *self
            .personal_year_cache
            .entry(year)
            .or_insert_with(|| numerology::personal_year(birth, year))
    }

    /// Drops derived values after the birth date changes.
    pub fn clear_derived(&mut self) {
        self.life_path_number = None;
        self.personal_year_cache.clear();
    }

    /// Stamps `created_at` once and bumps `updated_at` on every call.
    pub fn touch(&mut self) {
        let now = Timestamp::now();
        if self.metadata.created_at.is_none() {
            self.metadata.created_at = Some(now);
        }
        self.metadata.updated_at = Some(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> UserProfile {
        UserProfile::new(
            "alice",
            BirthData::new(NaiveDate::from_ymd_opt(1985, 3, 15).unwrap()),
        )
        .unwrap()
    }

    #[test]
    fn rejects_bad_names() {
        let birth = BirthData::new(NaiveDate::from_ymd_opt(1990, 1, 1).unwrap());
        assert!(UserProfile::new("", birth.clone()).is_err());
        assert!(UserProfile::new("   ", birth.clone()).is_err());
        assert!(UserProfile::new("../etc", birth.clone()).is_err());
        assert!(UserProfile::new("a\\b", birth.clone()).is_err());
        assert!(UserProfile::new(".hidden", birth.clone()).is_err());
        assert!(UserProfile::new("chef bob", birth).is_ok());
    }

    #[test]
    fn life_path_is_computed_once() {
        let mut p = profile();
        assert_eq!(p.life_path_number, None);
        assert_eq!(p.ensure_life_path(), 5);
        assert_eq!(p.life_path_number, Some(5));

        p.life_path_number = Some(7);
        assert_eq!(p.ensure_life_path(), 7);
    }

    #[test]
    fn personal_year_is_cached() {
        let mut p = profile();
        let value = p.personal_year(2026);
        assert_eq!(value, numerology::personal_year(p.birth_date(), 2026));
        assert_eq!(p.personal_year_cache.get(&2026), Some(&value));
    }

    #[test]
    fn clear_derived_empties_caches() {
        let mut p = profile();
        p.ensure_life_path();
        p.personal_year(2026);
        p.clear_derived();
        assert!(p.life_path_number.is_none());
        assert!(p.personal_year_cache.is_empty());
    }

    #[test]
    fn touch_keeps_created_at() {
        let mut p = profile();
        p.touch();
        let created = p.metadata.created_at;
        assert!(created.is_some());
        p.touch();
        assert_eq!(p.metadata.created_at, created);
        assert!(p.metadata.updated_at.is_some());
    }

    #[test]
    fn yaml_round_trip_keeps_nested_fields() {
        let mut p = profile();
        p.birth_data = p
            .birth_data
            .clone()
            .with_time_range(super::super::BirthTimeRange::Night)
            .with_location(Location::from_city("Lisbon"));
        p.human_design_type = Some(HumanDesignType::Projector);
        p.personal_year(2026);
        p.touch();

        let yaml = serde_yaml::to_string(&p).unwrap();
        let back: UserProfile = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn minimal_yaml_loads_with_defaults() {
        let yaml = "name: bob\nbirth_data:\n  date: 1990-06-15\n";
        let p: UserProfile = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(p.name, "bob");
        assert_eq!(p.birth_data.time_range, super::super::BirthTimeRange::Unknown);
        assert!(p.personal_year_cache.is_empty());
    }
}
