//! Daily entry generator: runs every engine in order and assembles the report.

use chrono::{Datelike, NaiveDate};
use std::sync::Arc;

use super::synthesis;
use super::DailyPreparation;
use crate::domain::biorhythm::biorhythm_for_day;
use crate::domain::calendar::{human_design_for, i_ching_for, solar_transit_for};
use crate::domain::numerology::numerology_for_day;
use crate::domain::profile::UserProfile;
use crate::domain::risk::analyze_risk;
use crate::domain::wellness::{
    evening_ritual, journaling_prompts, meditation_practice, morning_ritual, nourishment_guidance,
    recommend_exercise, spiritual_reading,
};
use crate::ports::MoonEngine;

/// Produces [`DailyPreparation`] records using the configured moon engine.
#[derive(Clone)]
pub struct DailyEntryGenerator {
    moon_engine: Arc<dyn MoonEngine>,
}

impl DailyEntryGenerator {
    pub fn new(moon_engine: Arc<dyn MoonEngine>) -> Self {
        Self { moon_engine }
    }

    pub fn engine_name(&self) -> &'static str {
        self.moon_engine.name()
    }

    /// Builds the report for `date`.
    ///
    /// The only side effect is filling `profile.life_path_number` when it is
    /// absent; callers decide whether to persist that.
    pub fn generate(&self, date: NaiveDate, profile: &mut UserProfile) -> DailyPreparation {
        // 1. Life path cache
        let life_path = profile.ensure_life_path();
        let birth = profile.birth_date();
        let day_of_year = date.ordinal();

        // 2. Independent engines
        let moon = self.moon_engine.moon_data(date);
        let numerology = numerology_for_day(birth, date, Some(life_path));
        let biorhythm = biorhythm_for_day(birth, date);
        let solar_transit = solar_transit_for(date);
        let human_design = human_design_for(
            date,
            profile.human_design_type,
            profile.human_design_authority.as_deref(),
        );

        // 3. I Ching from the Sun gate
        let i_ching = i_ching_for(&human_design);

        // 4. Risk
        let risk_analysis = analyze_risk(&moon, &biorhythm, &numerology);

        // 5. Wellness
        let exercise = recommend_exercise(&biorhythm, &moon);
        let nourishment = nourishment_guidance(&moon, &biorhythm);
        let morning_ritual = morning_ritual(&moon, &biorhythm);
        let meditation = meditation_practice(&moon, &biorhythm);
        let journaling = journaling_prompts(&moon, &biorhythm);
        let spiritual_reading = spiritual_reading(&moon, day_of_year);
        let evening_ritual = evening_ritual(&biorhythm);

        // 6. Synthesis
        let daily_theme = synthesis::daily_theme(&moon, &numerology);
        let theme_keywords = vec![
            moon.sign_element.to_string(),
            numerology.energy_quality.clone(),
            human_design.signature_theme.clone(),
        ];
        let power_hours = synthesis::power_hours(&biorhythm);
        let caution_periods = synthesis::caution_periods(&moon, &biorhythm);
        let affirmation = synthesis::affirmation(&moon);
        let daily_mantra = synthesis::mantra(&i_ching);
        let closing_reflection = synthesis::closing_reflection(&moon);

        // 7. Assemble
        DailyPreparation {
            date,
            day_of_week: date.format("%A").to_string(),
            day_of_year,
            moon,
            solar_transit,
            numerology,
            human_design,
            i_ching,
            biorhythm,
            risk_analysis,
            morning_ritual,
            exercise,
            nourishment,
            meditation,
            journaling,
            spiritual_reading,
            evening_ritual,
            daily_theme,
            theme_keywords,
            power_hours,
            caution_periods,
            affirmation,
            daily_mantra,
            closing_reflection,
            tomorrow_preview: synthesis::TOMORROW_PREVIEW.to_string(),
        }
    }

    /// One report per day of `days`, in input order.
    pub fn generate_days(
        &self,
        days: impl IntoIterator<Item = NaiveDate>,
        profile: &mut UserProfile,
    ) -> Vec<DailyPreparation> {
        days.into_iter()
            .map(|day| {
                tracing::debug!(date = %day, profile = %profile.name, "generating daily entry");
                self.generate(day, profile)
            })
            .collect()
    }
}
