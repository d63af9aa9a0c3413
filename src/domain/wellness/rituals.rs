use serde::{Deserialize, Serialize};

use crate::domain::biorhythm::{BiorhythmData, OverallEnergy};
use crate::domain::lunar::MoonData;
use crate::domain::zodiac::Element;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MorningRitualData {
    pub wake_time_suggestion: String,
    pub intention_setting: String,
    pub breathwork: String,
    pub movement: String,
    pub duration_minutes: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EveningRitualData {
    pub wind_down_time: String,
    pub screen_cutoff: String,
    pub reflection_practice: String,
    pub sleep_preparation: String,
    pub optimal_sleep_time: String,
}

const MORNING_RITUAL_MINUTES: u32 = 20;

pub fn morning_ritual(moon: &MoonData, biorhythm: &BiorhythmData) -> MorningRitualData {
    let wake_time = match biorhythm.overall_energy {
        OverallEnergy::High => "6:00 AM - Rise with energy",
        OverallEnergy::Low => "7:00 AM - Gentle awakening",
        OverallEnergy::Moderate | OverallEnergy::Mixed => "6:30 AM - Balanced start",
    };

    let (breathwork, movement) = match moon.sign_element {
        Element::Fire => (
            "Breath of Fire (Kapalabhati) - 3 minutes",
            "Sun salutations - energizing flow",
        ),
        Element::Earth => (
            "4-7-8 Breathing for grounding - 5 minutes",
            "Grounding yoga poses - stability focus",
        ),
        Element::Air => (
            "Alternate nostril breathing - 5 minutes",
            "Dynamic stretching - varied movement",
        ),
        Element::Water => (
            "Ocean breath (Ujjayi) - 5 minutes",
            "Gentle flowing yoga - fluid motion",
        ),
    };

    MorningRitualData {
        wake_time_suggestion: wake_time.to_string(),
        intention_setting: format!("I embrace {} today", moon.energy_theme.to_lowercase()),
        breathwork: breathwork.to_string(),
        movement: movement.to_string(),
        duration_minutes: MORNING_RITUAL_MINUTES,
    }
}

/// Wind-down, screen-off and sleep times shift with overall energy.
pub fn evening_ritual(biorhythm: &BiorhythmData) -> EveningRitualData {
    let (wind_down, screen_off, sleep) = match biorhythm.overall_energy {
        OverallEnergy::Low => ("8:00 PM", "8:30 PM", "9:30 PM"),
        OverallEnergy::High => ("9:00 PM", "9:30 PM", "10:30 PM"),
        OverallEnergy::Moderate | OverallEnergy::Mixed => ("8:30 PM", "9:00 PM", "10:00 PM"),
    };

    EveningRitualData {
        wind_down_time: wind_down.to_string(),
        screen_cutoff: screen_off.to_string(),
        reflection_practice: "Review three wins from today".to_string(),
        sleep_preparation: "Warm bath or shower, dim lights, gratitude practice".to_string(),
        optimal_sleep_time: sleep.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::risk::tests::{biorhythm, neutral_moon};

    #[test]
    fn morning_ritual_uses_theme_and_element() {
        let moon = neutral_moon();
        let ritual = morning_ritual(&moon, &biorhythm(20.0, 20.0, 20.0));
        assert_eq!(ritual.wake_time_suggestion, "6:30 AM - Balanced start");
        assert_eq!(ritual.breathwork, "Ocean breath (Ujjayi) - 5 minutes");
        assert_eq!(
            ritual.intention_setting,
            format!("I embrace {} today", moon.energy_theme.to_lowercase())
        );
        assert_eq!(ritual.duration_minutes, 20);
    }

    #[test]
    fn evening_times_follow_energy() {
        let mut low = biorhythm(-60.0, -60.0, -60.0);
        low.overall_energy = OverallEnergy::Low;
        let ritual = evening_ritual(&low);
        assert_eq!(
            (ritual.wind_down_time.as_str(), ritual.screen_cutoff.as_str(), ritual.optimal_sleep_time.as_str()),
            ("8:00 PM", "8:30 PM", "9:30 PM")
        );

        let mut high = biorhythm(60.0, 60.0, 60.0);
        high.overall_energy = OverallEnergy::High;
        assert_eq!(evening_ritual(&high).optimal_sleep_time, "10:30 PM");
    }
}
