//! Meditation, journaling and the daily reading.

use serde::{Deserialize, Serialize};

use crate::domain::biorhythm::{BiorhythmData, OverallEnergy};
use crate::domain::lunar::MoonData;
use crate::domain::zodiac::{Element, ZodiacSign};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeditationPractice {
    pub technique: String,
    pub duration_minutes: u32,
    pub optimal_time: String,
    pub focus_theme: String,
    pub mantra: Option<String>,
    pub visualization: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalingPrompt {
    pub morning_prompt: String,
    pub evening_prompt: String,
    pub theme_exploration: String,
    pub gratitude_focus: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpiritualReading {
    pub source_type: String,
    pub tradition: String,
    pub source_title: String,
    pub source_author: String,
    pub chapter_or_verse: String,
    pub reading_text: String,
    pub daily_relevance: String,
    pub contemplation_question: String,
    pub embodiment_practice: String,
}

pub fn meditation_practice(moon: &MoonData, biorhythm: &BiorhythmData) -> MeditationPractice {
    let (technique, mantra) = match moon.sign_element {
        Element::Fire => ("Candle gazing (Trataka)", "I am powerful and radiant"),
        Element::Earth => ("Body scan meditation", "I am grounded and secure"),
        Element::Air => ("Mindfulness of thoughts", "I am clear and free"),
        Element::Water => ("Loving-kindness meditation", "I flow with life's currents"),
    };

    let (duration_minutes, optimal_time) = if biorhythm.intellectual > 50.0 {
        (25, "Morning or midday")
    } else if biorhythm.intellectual > 0.0 {
        (20, "Midday")
    } else {
        (15, "Evening (shorter, gentler)")
    };

    MeditationPractice {
        technique: technique.to_string(),
        duration_minutes,
        optimal_time: optimal_time.to_string(),
        focus_theme: moon.energy_theme.clone(),
        mantra: Some(mantra.to_string()),
        visualization: None,
    }
}

fn sign_inquiry(sign: ZodiacSign) -> &'static str {
    match sign {
        ZodiacSign::Aries => "Where am I holding back from starting something new?",
        ZodiacSign::Taurus => "What do I truly value and how am I honoring that?",
        ZodiacSign::Gemini => "What am I curious about that I haven't explored?",
        ZodiacSign::Cancer => "What does my inner child need right now?",
        ZodiacSign::Leo => "How can I express my creativity more fully?",
        ZodiacSign::Virgo => "What small improvement would make a big difference?",
        ZodiacSign::Libra => "Where do I need more balance in my life?",
        ZodiacSign::Scorpio => "What am I ready to release and transform?",
        ZodiacSign::Sagittarius => "What adventure is calling to me?",
        ZodiacSign::Capricorn => "What legacy am I building?",
        ZodiacSign::Aquarius => "How can I contribute to something larger than myself?",
        ZodiacSign::Pisces => "What does my intuition want me to know?",
    }
}

pub fn journaling_prompts(moon: &MoonData, biorhythm: &BiorhythmData) -> JournalingPrompt {
    let (morning, evening) = match moon.sign_element {
        Element::Fire => (
            "What bold action can I take today?",
            "Where did I express my authentic power today?",
        ),
        Element::Earth => (
            "What practical step can I take toward my goals?",
            "What did I build or accomplish today?",
        ),
        Element::Air => (
            "What new perspective can I explore today?",
            "What new idea or connection emerged today?",
        ),
        Element::Water => (
            "What emotional truth wants to be acknowledged?",
            "What feelings flowed through me today?",
        ),
    };

    let gratitude = match biorhythm.overall_energy {
        OverallEnergy::Low => "Simple blessings and basic comforts",
        OverallEnergy::High => "Opportunities and energy for action",
        OverallEnergy::Moderate | OverallEnergy::Mixed => "Balance and present moment awareness",
    };

    JournalingPrompt {
        morning_prompt: morning.to_string(),
        evening_prompt: evening.to_string(),
        theme_exploration: sign_inquiry(moon.zodiac_sign).to_string(),
        gratitude_focus: gratitude.to_string(),
    }
}

/// Reading source by moon element, labelled with the day of year.
pub fn spiritual_reading(moon: &MoonData, day_of_year: u32) -> SpiritualReading {
    let element = moon.sign_element;
    let (title, author, tradition, source_type, text) = match element {
        Element::Fire => (
            "Meditations",
            "Marcus Aurelius",
            "Stoic",
            "book",
            "\"Begin each day by telling yourself: Today I shall meet people who are meddling, ungrateful, arrogant, dishonest, jealous, and surly.\"",
        ),
        Element::Earth => (
            "Tao Te Ching",
            "Lao Tzu",
            "Taoist",
            "book",
            "\"The Tao that can be told is not the eternal Tao. The name that can be named is not the eternal name.\"",
        ),
        Element::Air => (
            "Dhammapada",
            "Buddha",
            "Buddhist",
            "scripture",
            "\"Mind is the forerunner of all actions. All deeds are led by mind, created by mind.\"",
        ),
        Element::Water => (
            "Poetry Collection",
            "Rumi",
            "Sufi",
            "poetry",
            "\"Out beyond ideas of wrongdoing and rightdoing, there is a field. I will meet you there.\"",
        ),
    };

    SpiritualReading {
        source_type: source_type.to_string(),
        tradition: tradition.to_string(),
        source_title: title.to_string(),
        source_author: author.to_string(),
        chapter_or_verse: format!("Day {} selection", day_of_year),
        reading_text: text.to_string(),
        daily_relevance: format!("This {} wisdom aligns with today's {} energy", tradition, element),
        contemplation_question: format!(
            "How does this ancient wisdom apply to {}?",
            moon.energy_theme.to_lowercase()
        ),
        embodiment_practice: "Pause three times today to recall this wisdom".to_string(),
    }
}
