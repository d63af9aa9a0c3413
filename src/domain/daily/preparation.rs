//! DailyPreparation aggregate: one complete report for a date and profile.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::biorhythm::{BiorhythmData, OverallEnergy};
use crate::domain::calendar::{HumanDesignData, IChingData, SolarTransitData};
use crate::domain::lunar::{MoonData, MoonPhase};
use crate::domain::numerology::NumerologyData;
use crate::domain::risk::{RiskAnalysisData, RiskLevel};
use crate::domain::wellness::{
    EveningRitualData, ExerciseRecommendation, JournalingPrompt, MeditationPractice,
    MorningRitualData, NourishmentGuidance, SpiritualReading,
};
use crate::domain::zodiac::ZodiacSign;

/// A window of the day suited to a kind of work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerHour {
    pub time_range: String,
    pub optimal_for: Vec<String>,
    pub energy_type: String,
}

/// A window of the day to approach carefully.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CautionPeriod {
    pub time_range: String,
    pub reason: String,
    pub avoid: Vec<String>,
    pub instead_do: Vec<String>,
}

/// The full daily report.
///
/// Built once by the generator and never mutated afterwards, so it can be
/// handed to any exporter as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPreparation {
    pub date: NaiveDate,
    pub day_of_week: String,
    pub day_of_year: u32,

    pub moon: MoonData,
    pub solar_transit: SolarTransitData,
    pub numerology: NumerologyData,
    pub human_design: HumanDesignData,
    pub i_ching: IChingData,
    pub biorhythm: BiorhythmData,

    pub risk_analysis: RiskAnalysisData,

    pub morning_ritual: MorningRitualData,
    pub exercise: ExerciseRecommendation,
    pub nourishment: NourishmentGuidance,
    pub meditation: MeditationPractice,
    pub journaling: JournalingPrompt,
    pub spiritual_reading: SpiritualReading,
    pub evening_ritual: EveningRitualData,

    pub daily_theme: String,
    pub theme_keywords: Vec<String>,
    pub power_hours: Vec<PowerHour>,
    pub caution_periods: Vec<CautionPeriod>,
    pub affirmation: String,
    pub daily_mantra: String,
    pub closing_reflection: String,
    pub tomorrow_preview: String,
}

/// Headline values for listings and previews.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub day_of_week: String,
    pub daily_theme: String,
    pub moon_phase: MoonPhase,
    pub moon_sign: ZodiacSign,
    pub personal_day: u32,
    pub overall_energy: OverallEnergy,
    pub risk_level: RiskLevel,
    pub affirmation: String,
}

impl DailyPreparation {
    pub fn overall_energy(&self) -> OverallEnergy {
        self.biorhythm.overall_energy
    }

    pub fn risk_level(&self) -> RiskLevel {
        self.risk_analysis.overall_risk_level
    }

    pub fn has_critical_biorhythm(&self) -> bool {
        self.biorhythm.any_critical()
    }

    pub fn has_moon_voc(&self) -> bool {
        self.moon.moon_void_of_course
    }

    pub fn summary(&self) -> DaySummary {
        DaySummary {
            date: self.date,
            day_of_week: self.day_of_week.clone(),
            daily_theme: self.daily_theme.clone(),
            moon_phase: self.moon.phase,
            moon_sign: self.moon.zodiac_sign,
            personal_day: self.numerology.personal_day,
            overall_energy: self.overall_energy(),
            risk_level: self.risk_level(),
            affirmation: self.affirmation.clone(),
        }
    }
}
