//! Daily pipeline through both moon engines.

use std::sync::Arc;

use chrono::NaiveDate;

use skyforge::adapters::lunar::{EphemerisMoonEngine, SimplifiedMoonEngine};
use skyforge::domain::daily::{DailyEntryGenerator, DateSpan};
use skyforge::domain::profile::{BirthData, UserProfile};
use skyforge::ports::MoonEngine;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn profile() -> UserProfile {
    UserProfile::new("kai", BirthData::new(date(1990, 6, 15))).unwrap()
}

fn engines() -> Vec<Arc<dyn MoonEngine>> {
    vec![
        Arc::new(SimplifiedMoonEngine::new()),
        Arc::new(EphemerisMoonEngine::new()),
    ]
}

#[test]
fn known_day_has_calendar_and_numerology_fields() {
    for engine in engines() {
        let generator = DailyEntryGenerator::new(engine);
        let mut profile = profile();
        let entry = generator.generate(date(2026, 1, 15), &mut profile);

        assert_eq!(entry.date, date(2026, 1, 15));
        assert_eq!(entry.day_of_week, "Thursday");
        assert_eq!(entry.day_of_year, 15);
        assert_eq!(entry.numerology.life_path, 4);
        assert_eq!(entry.numerology.universal_day, 8);
        assert!((0.0..=100.0).contains(&entry.moon.phase_percentage));
        for value in [
            entry.biorhythm.physical,
            entry.biorhythm.emotional,
            entry.biorhythm.intellectual,
        ] {
            assert!((-100.0..=100.0).contains(&value));
        }
        assert_eq!(profile.life_path_number, Some(4));
    }
}

#[test]
fn generation_is_deterministic() {
    for engine in engines() {
        let generator = DailyEntryGenerator::new(engine);
        let first = generator.generate(date(2026, 7, 4), &mut profile());
        let second = generator.generate(date(2026, 7, 4), &mut profile());
        assert_eq!(first, second);
    }
}

#[test]
fn cached_profile_matches_fresh_profile() {
    let generator = DailyEntryGenerator::new(Arc::new(SimplifiedMoonEngine::new()));
    let mut warmed = profile();
    generator.generate(date(2026, 3, 1), &mut warmed);
    assert_eq!(warmed.life_path_number, Some(4));

    let cached = generator.generate(date(2026, 3, 2), &mut warmed);
    let fresh = generator.generate(date(2026, 3, 2), &mut profile());
    assert_eq!(cached, fresh);
}

#[test]
fn leap_year_span_covers_every_day() {
    let generator = DailyEntryGenerator::new(Arc::new(SimplifiedMoonEngine::new()));
    let span = DateSpan::for_year(2028, None).unwrap();
    let entries = generator.generate_days(span.days(), &mut profile());

    assert_eq!(entries.len(), 366);
    assert_eq!(entries[0].date, date(2028, 1, 1));
    assert_eq!(entries[365].date, date(2028, 12, 31));
    assert_eq!(entries[365].day_of_year, 366);
    assert!(entries.windows(2).all(|w| w[0].date < w[1].date));
}

#[test]
fn month_span_follows_calendar() {
    let span = DateSpan::for_year(2026, Some(2)).unwrap();
    assert_eq!(span.day_count(), 28);
    assert_eq!(span.end(), date(2026, 2, 28));
    assert!(DateSpan::for_year(2026, Some(13)).is_err());
}
