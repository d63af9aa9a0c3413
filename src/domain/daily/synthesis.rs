//! Cross-domain synthesis: theme, affirmation, mantra and time windows.

use crate::domain::biorhythm::BiorhythmData;
use crate::domain::calendar::IChingData;
use crate::domain::lunar::MoonData;
use crate::domain::numerology::NumerologyData;
use crate::domain::zodiac::Element;

use super::{CautionPeriod, PowerHour};

pub const TOMORROW_PREVIEW: &str = "New energies await tomorrow - trust the unfolding";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Moon theme joined with the first half of the numerology theme.
pub fn daily_theme(moon: &MoonData, numerology: &NumerologyData) -> String {
    let number_theme = numerology
        .day_theme
        .split(" & ")
        .next()
        .unwrap_or(&numerology.day_theme);
    format!("{} with {}", moon.energy_theme, number_theme)
}

pub fn power_hours(biorhythm: &BiorhythmData) -> Vec<PowerHour> {
    let mut hours = Vec::new();

    if biorhythm.physical > 30.0 {
        hours.push(PowerHour {
            time_range: "7:00 AM - 10:00 AM".to_string(),
            optimal_for: strings(&["Exercise", "Physical tasks", "Active work"]),
            energy_type: "Physical energy peak".to_string(),
        });
    }
    if biorhythm.intellectual > 30.0 {
        hours.push(PowerHour {
            time_range: "10:00 AM - 1:00 PM".to_string(),
            optimal_for: strings(&["Complex thinking", "Important decisions", "Learning"]),
            energy_type: "Mental clarity peak".to_string(),
        });
    }
    if biorhythm.emotional > 20.0 && biorhythm.intellectual > 20.0 {
        hours.push(PowerHour {
            time_range: "3:00 PM - 6:00 PM".to_string(),
            optimal_for: strings(&["Creative projects", "Collaboration", "Expression"]),
            energy_type: "Creative synthesis".to_string(),
        });
    }

    if hours.is_empty() {
        hours.push(PowerHour {
            time_range: "When energy feels best".to_string(),
            optimal_for: strings(&["Routine tasks", "Self-paced work"]),
            energy_type: "Moderate energy day".to_string(),
        });
    }
    hours
}

pub fn caution_periods(moon: &MoonData, biorhythm: &BiorhythmData) -> Vec<CautionPeriod> {
    let mut periods = Vec::new();

    if let (true, Some(start)) = (moon.moon_void_of_course, moon.voc_start) {
        let end = moon
            .voc_end
            .map(|e| e.format("%I:%M %p").to_string())
            .unwrap_or_else(|| "end of day".to_string());
        periods.push(CautionPeriod {
            time_range: format!("VOC: {} - {}", start.format("%I:%M %p"), end),
            reason: "Moon Void of Course".to_string(),
            avoid: strings(&["Starting new projects", "Major purchases", "Important decisions"]),
            instead_do: strings(&["Routine tasks", "Review work", "Rest"]),
        });
    }

    if biorhythm.intellectual < -20.0 {
        periods.push(CautionPeriod {
            time_range: "Afternoon (1:00 PM - 4:00 PM)".to_string(),
            reason: "Mental energy low".to_string(),
            avoid: strings(&["Complex analysis", "Important negotiations"]),
            instead_do: strings(&["Physical tasks", "Routine work"]),
        });
    }
    periods
}

pub fn affirmation(moon: &MoonData) -> String {
    match moon.sign_element {
        Element::Fire => "I embrace my power and shine brightly",
        Element::Earth => "I build my dreams with patient, steady hands",
        Element::Air => "I welcome new ideas and connections with an open mind",
        Element::Water => "I flow with life's currents and trust my intuition",
    }
    .to_string()
}

pub fn mantra(i_ching: &IChingData) -> String {
    format!("I embody the wisdom of {}", i_ching.hexagram_name)
}

pub fn closing_reflection(moon: &MoonData) -> String {
    format!(
        "Rest well knowing you honored {} today",
        moon.energy_theme.to_lowercase()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::risk::tests::{biorhythm, neutral_moon};
    use chrono::NaiveDate;

    #[test]
    fn power_hours_accumulate_in_order() {
        let hours = power_hours(&biorhythm(50.0, 50.0, 50.0));
        let kinds: Vec<_> = hours.iter().map(|h| h.energy_type.as_str()).collect();
        assert_eq!(
            kinds,
            vec!["Physical energy peak", "Mental clarity peak", "Creative synthesis"]
        );
    }

    #[test]
    fn power_hours_default_when_nothing_peaks() {
        let hours = power_hours(&biorhythm(-10.0, -10.0, -10.0));
        assert_eq!(hours.len(), 1);
        assert_eq!(hours[0].energy_type, "Moderate energy day");
    }

    #[test]
    fn caution_for_low_intellect_only_without_voc() {
        let moon = neutral_moon();
        assert!(caution_periods(&moon, &biorhythm(0.0, 0.0, 10.0)).is_empty());
        let periods = caution_periods(&moon, &biorhythm(0.0, 0.0, -30.0));
        assert_eq!(periods.len(), 1);
        assert_eq!(periods[0].reason, "Mental energy low");
    }

    #[test]
    fn voc_window_is_listed_when_present() {
        let mut moon = neutral_moon();
        moon.moon_void_of_course = true;
        moon.voc_start = NaiveDate::from_ymd_opt(2026, 1, 15)
            .unwrap()
            .and_hms_opt(14, 5, 0);
        let periods = caution_periods(&moon, &biorhythm(0.0, 0.0, 10.0));
        assert_eq!(periods[0].time_range, "VOC: 02:05 PM - end of day");
    }

    #[test]
    fn theme_takes_first_half_of_number_theme() {
        let moon = neutral_moon();
        let birth = NaiveDate::from_ymd_opt(1990, 6, 15).unwrap();
        let target = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        let mut numerology = crate::domain::numerology::numerology_for_day(birth, target, None);
        numerology.day_theme = "Partnership & Balance".to_string();
        assert_eq!(
            daily_theme(&moon, &numerology),
            format!("{} with Partnership", moon.energy_theme)
        );
    }
}
