use serde::{Deserialize, Serialize};

use crate::domain::biorhythm::BiorhythmData;
use crate::domain::lunar::MoonData;
use crate::domain::zodiac::Element;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseRecommendation {
    pub exercise_type: String,
    pub intensity: String,
    pub optimal_time: String,
    pub duration_minutes: u32,
    pub specific_activities: Vec<String>,
    pub avoid_today: Vec<String>,
    pub rationale: String,
}

fn element_activities(element: Element) -> [&'static str; 5] {
    match element {
        Element::Fire => ["HIIT", "Running", "Power yoga", "Boxing", "Dancing"],
        Element::Earth => ["Weight training", "Hiking", "Pilates", "Gardening", "Walking"],
        Element::Air => ["Dance", "Cycling", "Varied circuits", "Tennis", "Jump rope"],
        Element::Water => ["Swimming", "Flow yoga", "Tai chi", "Aqua aerobics", "Surfing"],
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Picks intensity from the physical cycle and activities from the moon element.
pub fn recommend_exercise(biorhythm: &BiorhythmData, moon: &MoonData) -> ExerciseRecommendation {
    if biorhythm.physical_critical {
        return ExerciseRecommendation {
            exercise_type: "Rest/Gentle Movement".to_string(),
            intensity: "Recovery".to_string(),
            optimal_time: "Listen to your body".to_string(),
            duration_minutes: 20,
            specific_activities: strings(&["Gentle stretching", "Short walk", "Restorative yoga"]),
            avoid_today: strings(&["High intensity", "Heavy lifting", "Competitive sports"]),
            rationale: "Physical biorhythm at critical point - prioritize recovery".to_string(),
        };
    }

    let physical = biorhythm.physical;
    let (exercise_type, intensity, duration_minutes, optimal_time) = if physical > 70.0 {
        ("High Intensity Training", "High", 45, "Morning (7-9 AM)")
    } else if physical > 40.0 {
        ("Strength Training", "Moderate-High", 40, "Morning (8-10 AM)")
    } else if physical > 0.0 {
        ("Moderate Cardio", "Moderate", 30, "Mid-morning (9-11 AM)")
    } else if physical > -40.0 {
        ("Light Activity", "Low-Moderate", 25, "Late morning or early evening")
    } else {
        ("Gentle Movement", "Low", 20, "When energy feels best")
    };

    let mut avoid = Vec::new();
    if physical < -30.0 {
        avoid.extend(["High-intensity cardio", "Heavy weights"]);
    }
    if biorhythm.emotional < -30.0 {
        avoid.push("Competitive sports");
    }
    if biorhythm.intellectual < -30.0 {
        avoid.push("Complex new routines");
    }
    if avoid.is_empty() {
        avoid.push("Overexertion beyond energy levels");
    }
    avoid.truncate(3);

    let element = moon.sign_element;
    ExerciseRecommendation {
        exercise_type: exercise_type.to_string(),
        intensity: intensity.to_string(),
        optimal_time: optimal_time.to_string(),
        duration_minutes,
        specific_activities: strings(&element_activities(element)[..3]),
        avoid_today: strings(&avoid),
        rationale: format!(
            "Physical biorhythm at {:.0}%, {} moon energy favors {}-aligned activities",
            physical,
            element,
            element.name().to_lowercase()
        ),
    }
}
