//! Date ranges for multi-day reports.

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use super::DailyPreparation;
use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, ValidationError};

/// Longest range a single request may cover, in days.
pub const MAX_SPAN_DAYS: i64 = 366;

pub const MIN_YEAR: i32 = 1900;
pub const MAX_YEAR: i32 = 2100;

/// Inclusive range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSpan {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateSpan {
    /// Rejects reversed ranges and ranges longer than [`MAX_SPAN_DAYS`].
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DomainError> {
        if end < start {
            return Err(DomainError::new(
                ErrorCode::InvalidDateRange,
                "end_date must be >= start_date",
            )
            .with_detail("start_date", start.to_string())
            .with_detail("end_date", end.to_string()));
        }
        let days = (end - start).num_days() + 1;
        if days > MAX_SPAN_DAYS {
            return Err(DomainError::new(
                ErrorCode::InvalidDateRange,
                format!("Range must not exceed {} days", MAX_SPAN_DAYS),
            )
            .with_detail("days", days.to_string()));
        }
        Ok(Self { start, end })
    }

    pub fn single(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// Whole year, or one month of it.
    pub fn for_year(year: i32, month: Option<u32>) -> Result<Self, DomainError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(ValidationError::out_of_range(
                "year",
                f64::from(MIN_YEAR),
                f64::from(MAX_YEAR),
                f64::from(year),
            )
            .into());
        }

        let (start, end) = match month {
            Some(m) => {
                let start = NaiveDate::from_ymd_opt(year, m, 1).ok_or_else(|| {
                    DomainError::from(ValidationError::out_of_range("month", 1.0, 12.0, f64::from(m)))
                })?;
                let end = start
                    .checked_add_months(Months::new(1))
                    .and_then(|next| next.pred_opt())
                    .ok_or_else(|| DomainError::internal("month end out of range"))?;
                (start, end)
            }
            None => {
                let start = NaiveDate::from_ymd_opt(year, 1, 1);
                let end = NaiveDate::from_ymd_opt(year, 12, 31);
                start
                    .zip(end)
                    .ok_or_else(|| DomainError::internal("year bounds out of range"))?
            }
        };

        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn day_count(&self) -> usize {
        ((self.end - self.start).num_days() + 1) as usize
    }

    /// Every day from start to end, in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        self.start.iter_days().take(self.day_count())
    }
}

/// Display name for a calendar period: `"2026"` or `"January 2026"`.
pub fn period_name(year: i32, month: Option<u32>) -> String {
    match month.and_then(|m| NaiveDate::from_ymd_opt(year, m, 1)) {
        Some(first) => first.format("%B %Y").to_string(),
        None => year.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarMetadata {
    pub profile: String,
    pub year: i32,
    pub month: Option<u32>,
    pub generated_at: Timestamp,
    pub total_days: usize,
}

/// JSON calendar file: metadata plus one entry per day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarDocument {
    pub metadata: CalendarMetadata,
    pub entries: Vec<DailyPreparation>,
}

impl CalendarDocument {
    pub fn new(
        profile: impl Into<String>,
        year: i32,
        month: Option<u32>,
        entries: Vec<DailyPreparation>,
    ) -> Self {
        Self {
            metadata: CalendarMetadata {
                profile: profile.into(),
                year,
                month,
                generated_at: Timestamp::now(),
                total_days: entries.len(),
            },
            entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn reversed_range_is_rejected() {
        let err = DateSpan::new(d(2026, 2, 1), d(2026, 1, 1)).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidDateRange);
    }

    #[test]
    fn span_limit_is_inclusive() {
        // 2024 is a leap year: 366 days inclusive is accepted.
        assert_eq!(DateSpan::new(d(2024, 1, 1), d(2024, 12, 31)).unwrap().day_count(), 366);
        assert!(DateSpan::new(d(2024, 1, 1), d(2025, 1, 1)).is_err());
        assert!(DateSpan::new(d(2026, 1, 1), d(2028, 1, 1)).is_err());
    }

    #[test]
    fn single_day_span() {
        let span = DateSpan::new(d(2026, 1, 15), d(2026, 1, 15)).unwrap();
        assert_eq!(span.days().collect::<Vec<_>>(), vec![d(2026, 1, 15)]);
        assert_eq!(DateSpan::single(d(2026, 1, 15)), span);
    }

    #[test]
    fn for_year_and_month() {
        let year = DateSpan::for_year(2026, None).unwrap();
        assert_eq!((year.start(), year.end()), (d(2026, 1, 1), d(2026, 12, 31)));
        assert_eq!(year.day_count(), 365);

        let feb = DateSpan::for_year(2028, Some(2)).unwrap();
        assert_eq!(feb.end(), d(2028, 2, 29));

        let dec = DateSpan::for_year(2026, Some(12)).unwrap();
        assert_eq!(dec.end(), d(2026, 12, 31));
    }

    #[test]
    fn for_year_validates_bounds() {
        assert!(DateSpan::for_year(1899, None).is_err());
        assert!(DateSpan::for_year(2101, None).is_err());
        assert!(DateSpan::for_year(2026, Some(13)).is_err());
        assert!(DateSpan::for_year(2026, Some(0)).is_err());
    }

    #[test]
    fn days_are_ascending() {
        let span = DateSpan::new(d(2025, 12, 30), d(2026, 1, 2)).unwrap();
        let days: Vec<_> = span.days().collect();
        assert_eq!(days.len(), 4);
        assert!(days.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn period_names() {
        assert_eq!(period_name(2026, None), "2026");
        assert_eq!(period_name(2026, Some(1)), "January 2026");
    }
}
