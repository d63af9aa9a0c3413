//! Biorhythm - Three sinusoidal cycles counted from the birth date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

pub const PHYSICAL_CYCLE: u32 = 23;
pub const EMOTIONAL_CYCLE: u32 = 28;
pub const INTELLECTUAL_CYCLE: u32 = 33;

/// A cycle within this distance of zero is critical.
pub const CRITICAL_THRESHOLD: f64 = 5.0;

const MAX_LISTED_ACTIVITIES: usize = 4;

/// Position of a cycle within its wave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CyclePhase {
    Critical,
    Peak,
    High,
    Rising,
    Falling,
    Low,
    Valley,
}

impl CyclePhase {
    pub fn label(&self) -> &'static str {
        match self {
            CyclePhase::Critical => "Critical",
            CyclePhase::Peak => "Peak",
            CyclePhase::High => "High",
            CyclePhase::Rising => "Rising",
            CyclePhase::Falling => "Falling",
            CyclePhase::Low => "Low",
            CyclePhase::Valley => "Valley",
        }
    }
}

impl std::fmt::Display for CyclePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Composite energy across all three cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OverallEnergy {
    High,
    Moderate,
    Low,
    Mixed,
}

impl OverallEnergy {
    pub fn label(&self) -> &'static str {
        match self {
            OverallEnergy::High => "High",
            OverallEnergy::Moderate => "Moderate",
            OverallEnergy::Low => "Low",
            OverallEnergy::Mixed => "Mixed",
        }
    }
}

impl std::fmt::Display for OverallEnergy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Biorhythm readings and derived guidance for one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiorhythmData {
    pub physical: f64,
    pub emotional: f64,
    pub intellectual: f64,
    pub physical_phase: CyclePhase,
    pub emotional_phase: CyclePhase,
    pub intellectual_phase: CyclePhase,
    pub physical_critical: bool,
    pub emotional_critical: bool,
    pub intellectual_critical: bool,
    pub overall_energy: OverallEnergy,
    pub best_for: Vec<String>,
    pub challenging_for: Vec<String>,
    pub peak_physical_hours: String,
    pub peak_mental_hours: String,
    pub rest_recommended: String,
}

impl BiorhythmData {
    pub fn any_critical(&self) -> bool {
        self.physical_critical || self.emotional_critical || self.intellectual_critical
    }
}

/// `sin(2π · days_alive / cycle_length) × 100`.
pub fn cycle_value(days_alive: i64, cycle_length: u32) -> f64 {
    let radians = 2.0 * PI * days_alive as f64 / f64::from(cycle_length);
    radians.sin() * 100.0
}

pub fn cycle_phase(value: f64) -> CyclePhase {
    if value.abs() <= CRITICAL_THRESHOLD {
        CyclePhase::Critical
    } else if value > 80.0 {
        CyclePhase::Peak
    } else if value > 50.0 {
        CyclePhase::High
    } else if value > 0.0 {
        CyclePhase::Rising
    } else if value > -50.0 {
        CyclePhase::Falling
    } else if value > -80.0 {
        CyclePhase::Low
    } else {
        CyclePhase::Valley
    }
}

/// Critical days sit near a zero crossing, ascending or descending.
pub fn is_critical_day(days_alive: i64, cycle_length: u32) -> bool {
    cycle_value(days_alive, cycle_length).abs() <= CRITICAL_THRESHOLD
}

pub fn overall_energy(physical: f64, emotional: f64, intellectual: f64) -> OverallEnergy {
    let values = [physical, emotional, intellectual];
    let average = values.iter().sum::<f64>() / 3.0;
    let positive = values.iter().filter(|v| **v > 20.0).count();
    let negative = values.iter().filter(|v| **v < -20.0).count();

    if (positive >= 2 && negative >= 1) || (negative >= 2 && positive >= 1) {
        OverallEnergy::Mixed
    } else if average > 40.0 {
        OverallEnergy::High
    } else if average > -20.0 {
        OverallEnergy::Moderate
    } else {
        OverallEnergy::Low
    }
}

pub fn best_activities(physical: f64, emotional: f64, intellectual: f64) -> Vec<String> {
    let mut activities: Vec<&str> = Vec::new();

    if physical > 50.0 {
        activities.extend(["Exercise", "Physical labor", "Sports", "Active tasks"]);
    } else if physical > 0.0 {
        activities.extend(["Moderate activity", "Walking", "Light exercise"]);
    }

    if emotional > 50.0 {
        activities.extend(["Social events", "Creative expression", "Relationships"]);
    } else if emotional > 0.0 {
        activities.extend(["Connecting with friends", "Artistic pursuits"]);
    }

    if intellectual > 50.0 {
        activities.extend(["Complex problem-solving", "Learning", "Strategic planning"]);
    } else if intellectual > 0.0 {
        activities.extend(["Reading", "Research", "Mental tasks"]);
    }

    if activities.is_empty() {
        activities.extend(["Rest", "Routine tasks", "Self-care"]);
    }

    activities
        .into_iter()
        .take(MAX_LISTED_ACTIVITIES)
        .map(String::from)
        .collect()
}

pub fn challenging_activities(physical: f64, emotional: f64, intellectual: f64) -> Vec<String> {
    let mut challenges: Vec<&str> = Vec::new();

    if physical < -30.0 {
        challenges.extend(["Strenuous exercise", "Physical competitions"]);
    }
    if physical.abs() <= CRITICAL_THRESHOLD {
        challenges.push("High-risk physical activities");
    }
    if emotional < -30.0 {
        challenges.extend(["Difficult conversations", "Emotional decisions"]);
    }
    if emotional.abs() <= CRITICAL_THRESHOLD {
        challenges.push("Relationship confrontations");
    }
    if intellectual < -30.0 {
        challenges.extend(["Complex analysis", "Important decisions"]);
    }
    if intellectual.abs() <= CRITICAL_THRESHOLD {
        challenges.push("Strategic planning");
    }

    if challenges.is_empty() {
        return vec!["No specific challenges today".to_string()];
    }
    challenges
        .into_iter()
        .take(MAX_LISTED_ACTIVITIES)
        .map(String::from)
        .collect()
}

/// Returns `(peak_physical_hours, peak_mental_hours)`.
pub fn peak_hours(physical: f64, intellectual: f64) -> (&'static str, &'static str) {
    let physical_hours = if physical > 30.0 {
        "Morning (6-10 AM) - Physical energy peak"
    } else if physical > 0.0 {
        "Late morning (9-11 AM)"
    } else {
        "Gentle movement anytime, avoid strenuous activity"
    };

    let mental_hours = if intellectual > 30.0 {
        "Late morning to early afternoon (10 AM - 2 PM)"
    } else if intellectual > 0.0 {
        "Mid-morning (9-11 AM)"
    } else {
        "Routine mental tasks only, avoid complex decisions"
    };

    (physical_hours, mental_hours)
}

/// Rounds to one decimal place, halves away from zero.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Computes the complete biorhythm record for `target_date`.
pub fn biorhythm_for_day(birth_date: NaiveDate, target_date: NaiveDate) -> BiorhythmData {
    let days_alive = target_date.signed_duration_since(birth_date).num_days();

    let physical = round1(cycle_value(days_alive, PHYSICAL_CYCLE));
    let emotional = round1(cycle_value(days_alive, EMOTIONAL_CYCLE));
    let intellectual = round1(cycle_value(days_alive, INTELLECTUAL_CYCLE));

    let physical_critical = is_critical_day(days_alive, PHYSICAL_CYCLE);
    let emotional_critical = is_critical_day(days_alive, EMOTIONAL_CYCLE);
    let intellectual_critical = is_critical_day(days_alive, INTELLECTUAL_CYCLE);

    let energy = overall_energy(physical, emotional, intellectual);
    let (peak_physical, peak_mental) = peak_hours(physical, intellectual);

    let rest_recommended = if energy == OverallEnergy::Low {
        "Extra rest needed - early bedtime recommended"
    } else if physical_critical || emotional_critical || intellectual_critical {
        "Critical day - additional rest and self-care important"
    } else if energy == OverallEnergy::High {
        "Normal rest schedule, energy levels good"
    } else {
        "Standard rest, wind down by 10 PM"
    };

    BiorhythmData {
        physical,
        emotional,
        intellectual,
        physical_phase: cycle_phase(physical),
        emotional_phase: cycle_phase(emotional),
        intellectual_phase: cycle_phase(intellectual),
        physical_critical,
        emotional_critical,
        intellectual_critical,
        overall_energy: energy,
        best_for: best_activities(physical, emotional, intellectual),
        challenging_for: challenging_activities(physical, emotional, intellectual),
        peak_physical_hours: peak_physical.to_string(),
        peak_mental_hours: peak_mental.to_string(),
        rest_recommended: rest_recommended.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn birth_day_is_zero_on_every_cycle() {
        for length in [PHYSICAL_CYCLE, EMOTIONAL_CYCLE, INTELLECTUAL_CYCLE] {
            assert_eq!(cycle_value(0, length), 0.0);
            assert!(is_critical_day(0, length));
        }
    }

    #[test]
    fn quarter_cycle_peaks_at_one_hundred() {
        // 7 of 28 days is a quarter turn
        assert!((cycle_value(7, EMOTIONAL_CYCLE) - 100.0).abs() < 1e-9);
        assert!((cycle_value(21, EMOTIONAL_CYCLE) + 100.0).abs() < 1e-9);
    }

    #[test]
    fn phase_examples() {
        assert_eq!(cycle_phase(85.0), CyclePhase::Peak);
        assert_eq!(cycle_phase(60.0), CyclePhase::High);
        assert_eq!(cycle_phase(3.0), CyclePhase::Critical);
        assert_eq!(cycle_phase(-85.0), CyclePhase::Valley);
    }

    #[test]
    fn phase_thresholds_on_both_sides() {
        assert_eq!(cycle_phase(80.0), CyclePhase::High);
        assert_eq!(cycle_phase(80.1), CyclePhase::Peak);
        assert_eq!(cycle_phase(50.0), CyclePhase::Rising);
        assert_eq!(cycle_phase(50.1), CyclePhase::High);
        assert_eq!(cycle_phase(5.0), CyclePhase::Critical);
        assert_eq!(cycle_phase(5.1), CyclePhase::Rising);
        assert_eq!(cycle_phase(-5.0), CyclePhase::Critical);
        assert_eq!(cycle_phase(-5.1), CyclePhase::Falling);
        assert_eq!(cycle_phase(-50.0), CyclePhase::Low);
        assert_eq!(cycle_phase(-49.9), CyclePhase::Falling);
        assert_eq!(cycle_phase(-80.0), CyclePhase::Valley);
        assert_eq!(cycle_phase(-79.9), CyclePhase::Low);
    }

    #[test]
    fn overall_energy_classification() {
        assert_eq!(overall_energy(80.0, 70.0, 60.0), OverallEnergy::High);
        assert_eq!(overall_energy(10.0, 0.0, -10.0), OverallEnergy::Moderate);
        assert_eq!(overall_energy(-80.0, -70.0, -60.0), OverallEnergy::Low);
        assert_eq!(overall_energy(50.0, 50.0, -50.0), OverallEnergy::Mixed);
        assert_eq!(overall_energy(-50.0, -50.0, 50.0), OverallEnergy::Mixed);
    }

    #[test]
    fn best_activities_cap_and_default() {
        let high = best_activities(60.0, 60.0, 60.0);
        assert_eq!(high, vec!["Exercise", "Physical labor", "Sports", "Active tasks"]);

        let low = best_activities(-10.0, -10.0, -10.0);
        assert_eq!(low, vec!["Rest", "Routine tasks", "Self-care"]);
    }

    #[test]
    fn challenging_activities_default_and_critical() {
        assert_eq!(
            challenging_activities(40.0, 40.0, 40.0),
            vec!["No specific challenges today"]
        );
        let critical = challenging_activities(2.0, 40.0, 40.0);
        assert_eq!(critical, vec!["High-risk physical activities"]);
    }

    #[test]
    fn full_day_stays_in_range_and_is_consistent() {
        let data = biorhythm_for_day(date(1990, 6, 15), date(2026, 1, 15));
        for v in [data.physical, data.emotional, data.intellectual] {
            assert!((-100.0..=100.0).contains(&v));
        }
        assert_eq!(data.physical_phase, cycle_phase(data.physical));
        assert!(data.best_for.len() <= 4);
        assert!(!data.challenging_for.is_empty());
    }

    #[test]
    fn dates_before_birth_are_allowed() {
        let data = biorhythm_for_day(date(2000, 1, 10), date(2000, 1, 3));
        // -7 days on the 28-day cycle is a negative quarter turn
        assert_eq!(data.emotional, -100.0);
    }

    proptest! {
        #[test]
        fn cycle_values_are_bounded(days in -100_000i64..100_000, length in 1u32..100) {
            let v = cycle_value(days, length);
            prop_assert!((-100.0..=100.0).contains(&v));
        }
    }
}
