//! Plain-text rendering for terminal previews.

use std::fmt::Write as _;

use crate::domain::daily::DailyPreparation;

const RULE: &str = "============================================================";
const READING_PREVIEW_CHARS: usize = 100;

/// Multi-line summary of one day for a terminal.
pub fn render_text(entry: &DailyPreparation) -> String {
    let moon = &entry.moon;
    let num = &entry.numerology;
    let bio = &entry.biorhythm;
    let ex = &entry.exercise;
    let reading = &entry.spiritual_reading;
    let days_in_year = if entry.date.leap_year() { 366 } else { 365 };

    let mut out = String::new();
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "SKYFORGE DAILY SOVEREIGN ALIGNMENT");
    let _ = writeln!(
        out,
        "{}, {} (Day {} of {})",
        entry.day_of_week,
        entry.date.format("%B %d, %Y"),
        entry.day_of_year,
        days_in_year
    );
    let _ = writeln!(out, "{}\n", RULE);

    let _ = writeln!(out, "DAILY THEME: {}", entry.daily_theme);
    let _ = writeln!(
        out,
        "OVERALL ENERGY: {} | RISK LEVEL: {}\n",
        bio.overall_energy, entry.risk_analysis.overall_risk_level
    );

    let _ = writeln!(
        out,
        "MOON: {} ({:.0}%) in {}",
        moon.phase, moon.phase_percentage, moon.zodiac_sign
    );
    let _ = writeln!(
        out,
        "  Element: {} | Modality: {}",
        moon.sign_element, moon.sign_modality
    );
    let _ = writeln!(out, "  Energy: {}", moon.energy_theme);
    if moon.moon_void_of_course {
        let _ = writeln!(out, "  Void of course: avoid starting new ventures");
    }
    out.push('\n');

    let _ = writeln!(out, "NUMEROLOGY:");
    let _ = writeln!(
        out,
        "  Life Path {} | Personal Year {} | Personal Day {}",
        num.life_path, num.personal_year, num.personal_day
    );
    let _ = writeln!(out, "  Theme: {}", num.day_theme);
    if let Some(message) = &num.master_number_message {
        let _ = writeln!(out, "  {}", message);
    }
    out.push('\n');

    let _ = writeln!(out, "BIORHYTHM:");
    let _ = writeln!(out, "  Physical:     {:+.0}% ({})", bio.physical, bio.physical_phase);
    let _ = writeln!(out, "  Emotional:    {:+.0}% ({})", bio.emotional, bio.emotional_phase);
    let _ = writeln!(
        out,
        "  Intellectual: {:+.0}% ({})\n",
        bio.intellectual, bio.intellectual_phase
    );

    let _ = writeln!(out, "EXERCISE:");
    let _ = writeln!(out, "  {} ({})", ex.exercise_type, ex.intensity);
    let _ = writeln!(
        out,
        "  Time: {} | Duration: {} min\n",
        ex.optimal_time, ex.duration_minutes
    );

    let _ = writeln!(out, "SPIRITUAL READING: {}", reading.source_title);
    let preview: String = reading.reading_text.chars().take(READING_PREVIEW_CHARS).collect();
    let _ = writeln!(out, "  \"{}...\"\n", preview);

    let _ = writeln!(out, "TODAY'S AFFIRMATION:");
    let _ = writeln!(out, "  \"{}\"", entry.affirmation);
    let _ = writeln!(out, "{}", RULE);
    out
}
