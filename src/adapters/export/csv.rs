//! Flat CSV export: one row per day.

use serde::Serialize;

use crate::domain::daily::DailyPreparation;
use crate::ports::{ExportError, ExportFormat, ReportExporter};

/// Fixed column set; header names come from the field names.
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    date: String,
    day_of_week: &'a str,
    day_of_year: u32,
    daily_theme: &'a str,
    moon_phase: &'static str,
    moon_illumination: f64,
    moon_sign: &'static str,
    moon_element: &'static str,
    moon_modality: String,
    moon_voc: bool,
    moon_energy_theme: &'a str,
    sun_sign: &'static str,
    house_focus: u32,
    house_theme: &'a str,
    planetary_aspects: String,
    life_path: u32,
    personal_year: u32,
    personal_month: u32,
    personal_day: u32,
    universal_day: u32,
    num_day_theme: &'a str,
    energy_quality: &'a str,
    hd_type: &'static str,
    hd_strategy: &'a str,
    hd_authority: &'a str,
    hd_gates: String,
    hd_signature: &'a str,
    hexagram_number: u32,
    hexagram_name: &'a str,
    bio_physical: f64,
    bio_emotional: f64,
    bio_intellectual: f64,
    bio_overall_energy: &'static str,
    risk_level: &'static str,
    affirmation: &'a str,
    mantra: &'a str,
}

impl<'a> From<&'a DailyPreparation> for CsvRow<'a> {
    fn from(entry: &'a DailyPreparation) -> Self {
        let gates = entry
            .human_design
            .active_gates
            .iter()
            .map(|g| format!("{}:G{}L{}", g.planet, g.gate_number, g.line))
            .collect::<Vec<_>>()
            .join("; ");

        CsvRow {
            date: entry.date.to_string(),
            day_of_week: &entry.day_of_week,
            day_of_year: entry.day_of_year,
            daily_theme: &entry.daily_theme,
            moon_phase: entry.moon.phase.name(),
            moon_illumination: entry.moon.phase_percentage,
            moon_sign: entry.moon.zodiac_sign.name(),
            moon_element: entry.moon.sign_element.name(),
            moon_modality: entry.moon.sign_modality.to_string(),
            moon_voc: entry.moon.moon_void_of_course,
            moon_energy_theme: &entry.moon.energy_theme,
            sun_sign: entry.solar_transit.sun_sign.name(),
            house_focus: entry.solar_transit.house_focus,
            house_theme: &entry.solar_transit.house_theme,
            planetary_aspects: entry.solar_transit.planetary_aspects.join("; "),
            life_path: entry.numerology.life_path,
            personal_year: entry.numerology.personal_year,
            personal_month: entry.numerology.personal_month,
            personal_day: entry.numerology.personal_day,
            universal_day: entry.numerology.universal_day,
            num_day_theme: &entry.numerology.day_theme,
            energy_quality: &entry.numerology.energy_quality,
            hd_type: entry.human_design.hd_type.name(),
            hd_strategy: &entry.human_design.strategy,
            hd_authority: &entry.human_design.authority,
            hd_gates: gates,
            hd_signature: &entry.human_design.signature_theme,
            hexagram_number: entry.i_ching.hexagram_number,
            hexagram_name: &entry.i_ching.hexagram_name,
            bio_physical: entry.biorhythm.physical,
            bio_emotional: entry.biorhythm.emotional,
            bio_intellectual: entry.biorhythm.intellectual,
            bio_overall_energy: entry.biorhythm.overall_energy.label(),
            risk_level: entry.risk_analysis.overall_risk_level.label(),
            affirmation: &entry.affirmation,
            mantra: &entry.daily_mantra,
        }
    }
}

/// Column names in output order.
pub const CSV_COLUMNS: [&str; 36] = [
    "date",
    "day_of_week",
    "day_of_year",
    "daily_theme",
    "moon_phase",
    "moon_illumination",
    "moon_sign",
    "moon_element",
    "moon_modality",
    "moon_voc",
    "moon_energy_theme",
    "sun_sign",
    "house_focus",
    "house_theme",
    "planetary_aspects",
    "life_path",
    "personal_year",
    "personal_month",
    "personal_day",
    "universal_day",
    "num_day_theme",
    "energy_quality",
    "hd_type",
    "hd_strategy",
    "hd_authority",
    "hd_gates",
    "hd_signature",
    "hexagram_number",
    "hexagram_name",
    "bio_physical",
    "bio_emotional",
    "bio_intellectual",
    "bio_overall_energy",
    "risk_level",
    "affirmation",
    "mantra",
];

#[derive(Debug, Default, Clone, Copy)]
pub struct CsvExporter;

impl ReportExporter for CsvExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Csv
    }

    fn export(&self, entries: &[DailyPreparation], _title: &str) -> Result<Vec<u8>, ExportError> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());

        writer
            .write_record(CSV_COLUMNS)
            .map_err(|e| ExportError::Csv(e.to_string()))?;
        for entry in entries {
            writer
                .serialize(CsvRow::from(entry))
                .map_err(|e| ExportError::Csv(e.to_string()))?;
        }

        writer
            .into_inner()
            .map_err(|e| ExportError::Io(e.to_string()))
    }
}
