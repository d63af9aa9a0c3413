//! Request and response bodies for profile endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::calendar::HumanDesignType;
use crate::domain::foundation::{DomainError, ValidationError};
use crate::domain::profile::{
    parse_date, parse_time, BirthData, BirthTimeRange, Location, UserProfile,
};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LocationRequest {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub timezone: Option<String>,
}

impl LocationRequest {
    fn into_location(self) -> Result<Location, ValidationError> {
        Location::new(self.city, self.latitude, self.longitude, self.timezone)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BirthDataRequest {
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`, 24-hour
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub time_range: Option<String>,
    #[serde(default)]
    pub location: Option<LocationRequest>,
}

/// Body of `POST /profiles` and `PUT /profiles/:name`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProfileRequest {
    pub name: String,
    pub birth_data: BirthDataRequest,
    #[serde(default)]
    pub current_location: Option<LocationRequest>,
    #[serde(default)]
    pub human_design_type: Option<String>,
    #[serde(default)]
    pub human_design_strategy: Option<String>,
    #[serde(default)]
    pub human_design_authority: Option<String>,
}

impl ProfileRequest {
    /// Parses and validates into a fresh, uncached profile.
    pub fn into_profile(self) -> Result<UserProfile, DomainError> {
        let birth = self.birth_data;
        let mut birth_data = BirthData::new(parse_date("birth_data.date", &birth.date)?);

        if let Some(range) = birth.time_range.as_deref() {
            birth_data = birth_data.with_time_range(range.parse::<BirthTimeRange>()?);
        }
        if let Some(time) = birth.time.as_deref().filter(|t| !t.trim().is_empty()) {
            birth_data = birth_data.with_time(parse_time("birth_data.time", time)?);
        }
        if let Some(location) = birth.location {
            birth_data = birth_data.with_location(location.into_location()?);
        }

        let mut profile = UserProfile::new(self.name, birth_data)?;
        profile.current_location = self
            .current_location
            .map(LocationRequest::into_location)
            .transpose()?;
        profile.human_design_type = self
            .human_design_type
            .as_deref()
            .map(|t| {
                t.parse::<HumanDesignType>()
                    .map_err(|e| DomainError::validation("human_design_type", e))
            })
            .transpose()?;
        profile.human_design_strategy = self.human_design_strategy;
        profile.human_design_authority = self.human_design_authority;
        Ok(profile)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub name: String,
    pub birth_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_time: Option<String>,
    pub time_range: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_location: Option<Location>,
    pub life_path_number: Option<u32>,
    pub human_design_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub human_design_strategy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub human_design_authority: Option<String>,
}

impl From<&UserProfile> for ProfileResponse {
    fn from(profile: &UserProfile) -> Self {
        let birth = &profile.birth_data;
        Self {
            name: profile.name.clone(),
            birth_date: birth.date.to_string(),
            birth_time: birth.time.map(|t| t.format("%H:%M").to_string()),
            time_range: birth.time_range.to_string(),
            location: birth.location.clone(),
            current_location: profile.current_location.clone(),
            life_path_number: profile.life_path_number,
            human_design_type: profile.human_design_type.map(|t| t.name().to_string()),
            human_design_strategy: profile.human_design_strategy.clone(),
            human_design_authority: profile.human_design_authority.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;
    use chrono::{NaiveDate, NaiveTime};

    fn request(json: &str) -> ProfileRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn minimal_request_builds_profile() {
        let profile = request(r#"{"name": "ann", "birth_data": {"date": "1990-06-15"}}"#)
            .into_profile()
            .unwrap();
        assert_eq!(profile.name, "ann");
        assert_eq!(profile.birth_date(), NaiveDate::from_ymd_opt(1990, 6, 15).unwrap());
        assert_eq!(profile.birth_data.time_range, BirthTimeRange::Unknown);
        assert!(profile.life_path_number.is_none());
    }

    #[test]
    fn full_request_builds_profile() {
        let profile = request(
            r#"{
                "name": "ben",
                "birth_data": {
                    "date": "1985-03-15",
                    "time": "06:45",
                    "location": {"city": "Lisbon", "latitude": 38.72, "longitude": -9.14}
                },
                "human_design_type": "manifesting generator",
                "human_design_authority": "Sacral"
            }"#,
        )
        .into_profile()
        .unwrap();

        assert_eq!(profile.birth_data.time, NaiveTime::from_hms_opt(6, 45, 0));
        assert_eq!(profile.birth_data.time_range, BirthTimeRange::Exact);
        assert_eq!(
            profile.human_design_type,
            Some(HumanDesignType::ManifestingGenerator)
        );
        assert_eq!(profile.human_design_authority.as_deref(), Some("Sacral"));
    }

    #[test]
    fn bad_fields_are_validation_errors() {
        let err = request(r#"{"name": "c", "birth_data": {"date": "15-03-1985"}}"#)
            .into_profile()
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidFormat);

        let err = request(
            r#"{"name": "c", "birth_data": {"date": "1985-03-15", "location": {"latitude": 95.0}}}"#,
        )
        .into_profile()
        .unwrap_err();
        assert_eq!(err.code(), ErrorCode::OutOfRange);

        let err = request(
            r#"{"name": "c", "birth_data": {"date": "1985-03-15"}, "human_design_type": "wizard"}"#,
        )
        .into_profile()
        .unwrap_err();
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
    }

    #[test]
    fn response_flattens_profile() {
        let mut profile = request(
            r#"{"name": "dee", "birth_data": {"date": "1990-06-15", "time_range": "evening"}}"#,
        )
        .into_profile()
        .unwrap();
        profile.ensure_life_path();

        let response = ProfileResponse::from(&profile);
        assert_eq!(response.birth_date, "1990-06-15");
        assert_eq!(response.time_range, "evening");
        assert!(response.birth_time.is_none());
        assert_eq!(response.life_path_number, Some(4));
        assert!(response.location.is_none());
    }

    #[test]
    fn response_keeps_location_structured() {
        let profile = request(
            r#"{
                "name": "eve",
                "birth_data": {
                    "date": "1990-06-15",
                    "location": {"city": "Lisbon", "latitude": 38.72, "longitude": -9.14}
                }
            }"#,
        )
        .into_profile()
        .unwrap();

        let json = serde_json::to_value(ProfileResponse::from(&profile)).unwrap();
        assert_eq!(json["location"]["city"], "Lisbon");
        assert_eq!(json["location"]["latitude"], 38.72);
        assert_eq!(json["location"]["longitude"], -9.14);
        assert_eq!(json["location"]["timezone"], "UTC");
        assert!(json.get("current_location").is_none());
    }
}
