//! Request bodies for report endpoints.
//!
//! Responses are the domain records themselves: one `DailyPreparation` for
//! a day, a bare array of them for a range.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::DomainError;
use crate::domain::profile::parse_date;

/// Body of `POST /generate/daily`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DailyRequest {
    #[serde(rename = "profile_name", alias = "profile")]
    pub profile: String,
    /// `YYYY-MM-DD`
    pub date: String,
}

impl DailyRequest {
    pub fn date(&self) -> Result<NaiveDate, DomainError> {
        Ok(parse_date("date", &self.date)?)
    }
}

/// Body of `POST /generate/range` and `POST /export/:format`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RangeRequest {
    #[serde(rename = "profile_name", alias = "profile")]
    pub profile: String,
    pub start_date: String,
    pub end_date: String,
}

impl RangeRequest {
    pub fn dates(&self) -> Result<(NaiveDate, NaiveDate), DomainError> {
        Ok((
            parse_date("start_date", &self.start_date)?,
            parse_date("end_date", &self.end_date)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_name_is_required() {
        let missing = serde_json::from_str::<DailyRequest>(r#"{"date": "2026-01-15"}"#);
        assert!(missing.is_err());

        let missing = serde_json::from_str::<RangeRequest>(
            r#"{"start_date": "2026-01-01", "end_date": "2026-01-02"}"#,
        );
        assert!(missing.is_err());
    }

    #[test]
    fn accepts_profile_name_and_short_alias() {
        let req: DailyRequest =
            serde_json::from_str(r#"{"profile_name": "ana", "date": "2026-01-15"}"#).unwrap();
        assert_eq!(req.profile, "ana");
        assert_eq!(req.date().unwrap(), NaiveDate::from_ymd_opt(2026, 1, 15).unwrap());

        let req: DailyRequest =
            serde_json::from_str(r#"{"profile": "ana", "date": "2026-01-15"}"#).unwrap();
        assert_eq!(req.profile, "ana");
        assert!(serde_json::to_string(&req).unwrap().contains("\"profile_name\""));
    }

    #[test]
    fn bad_range_dates_name_the_field() {
        let req: RangeRequest = serde_json::from_str(
            r#"{"profile_name": "p", "start_date": "2026-01-01", "end_date": "soon"}"#,
        )
        .unwrap();
        let err = req.dates().unwrap_err();
        assert_eq!(err.details.get("field").map(String::as_str), Some("end_date"));
    }
}
