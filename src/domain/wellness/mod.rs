//! Wellness and ritual guidance derived from the day's moon and biorhythm.
//!
//! Every function here branches on values already computed by the lunar and
//! biorhythm engines; nothing re-derives astronomical data.

mod exercise;
mod nourishment;
mod practice;
mod rituals;

pub use exercise::{recommend_exercise, ExerciseRecommendation};
pub use nourishment::{nourishment_guidance, NourishmentGuidance};
pub use practice::{
    journaling_prompts, meditation_practice, spiritual_reading, JournalingPrompt,
    MeditationPractice, SpiritualReading,
};
pub use rituals::{evening_ritual, morning_ritual, EveningRitualData, MorningRitualData};
