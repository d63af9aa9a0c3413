//! Markdown rendering for single days and multi-day reports.

use std::fmt::Write as _;

use crate::domain::daily::DailyPreparation;
use crate::ports::{ExportError, ExportFormat, ReportExporter};

const FOOTER: &str = "*Generated by Skyforge*";
const READING_EXCERPT_CHARS: usize = 200;

fn excerpt(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// One day's section, starting at a level-two heading.
fn day_section(out: &mut String, entry: &DailyPreparation) {
    let moon = &entry.moon;
    let num = &entry.numerology;
    let bio = &entry.biorhythm;
    let ex = &entry.exercise;
    let reading = &entry.spiritual_reading;

    let _ = writeln!(
        out,
        "## {}, {} (Day {})\n",
        entry.day_of_week,
        entry.date.format("%B %d, %Y"),
        entry.day_of_year
    );
    let _ = writeln!(out, "**Daily Theme:** {}", entry.daily_theme);
    let _ = writeln!(
        out,
        "**Overall Energy:** {} | **Risk Level:** {}\n",
        bio.overall_energy, entry.risk_analysis.overall_risk_level
    );

    let _ = writeln!(out, "### Moon");
    let _ = writeln!(
        out,
        "- Phase: {} ({:.0}%) in {}",
        moon.phase, moon.phase_percentage, moon.zodiac_sign
    );
    let _ = writeln!(
        out,
        "- Element: {} | Modality: {}",
        moon.sign_element, moon.sign_modality
    );
    let _ = writeln!(out, "- Energy: {}\n", moon.energy_theme);

    let _ = writeln!(out, "### Numerology");
    let _ = writeln!(
        out,
        "- Personal Day {} (Universal Day {})",
        num.personal_day, num.universal_day
    );
    let _ = writeln!(out, "- Theme: {}\n", num.day_theme);

    let _ = writeln!(out, "### Biorhythm");
    let _ = writeln!(out, "- Physical: {:+.0}% ({})", bio.physical, bio.physical_phase);
    let _ = writeln!(out, "- Emotional: {:+.0}% ({})", bio.emotional, bio.emotional_phase);
    let _ = writeln!(
        out,
        "- Intellectual: {:+.0}% ({})\n",
        bio.intellectual, bio.intellectual_phase
    );

    let _ = writeln!(out, "### Exercise");
    let _ = writeln!(out, "- {} ({})", ex.exercise_type, ex.intensity);
    let _ = writeln!(
        out,
        "- Time: {} | Duration: {} min\n",
        ex.optimal_time, ex.duration_minutes
    );

    let _ = writeln!(out, "### Spiritual Reading");
    let _ = writeln!(out, "- {}", reading.source_title);
    let _ = writeln!(
        out,
        "- \"{}\"\n",
        excerpt(&reading.reading_text, READING_EXCERPT_CHARS)
    );

    let _ = writeln!(out, "### Affirmation");
    let _ = writeln!(out, "> \"{}\"\n", entry.affirmation);
    let _ = writeln!(out, "---\n");
}

/// Stand-alone document for one day.
pub fn daily_markdown(entry: &DailyPreparation) -> String {
    let mut out = String::from("# Skyforge Daily Sovereign Alignment\n\n");
    day_section(&mut out, entry);
    out.push_str(FOOTER);
    out.push('\n');
    out
}

#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownExporter;

impl ReportExporter for MarkdownExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Markdown
    }

    fn export(&self, entries: &[DailyPreparation], title: &str) -> Result<Vec<u8>, ExportError> {
        let mut out = format!("# {}\n\n", title);
        for entry in entries {
            day_section(&mut out, entry);
        }
        out.push_str(FOOTER);
        out.push('\n');
        Ok(out.into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::export::test_support::sample_entries;

    #[test]
    fn daily_document_layout() {
        let entry = &sample_entries(1)[0];
        let md = daily_markdown(entry);
        assert!(md.starts_with("# Skyforge Daily Sovereign Alignment\n\n## Thursday, January 01, 2026 (Day 1)"));
        for heading in [
            "### Moon",
            "### Numerology",
            "### Biorhythm",
            "### Exercise",
            "### Spiritual Reading",
            "### Affirmation",
        ] {
            assert!(md.contains(heading), "missing {}", heading);
        }
        assert!(md.contains(&format!("> \"{}\"", entry.affirmation)));
        assert!(md.trim_end().ends_with(FOOTER));
    }

    #[test]
    fn reading_excerpt_is_bounded() {
        let long = "x".repeat(500);
        assert_eq!(excerpt(&long, READING_EXCERPT_CHARS).len(), 200);
        assert_eq!(excerpt("short", READING_EXCERPT_CHARS), "short");
    }

    #[test]
    fn multi_day_export_has_one_section_per_day() {
        let bytes = MarkdownExporter
            .export(&sample_entries(3), "Alignment for test")
            .unwrap();
        let md = String::from_utf8(bytes).unwrap();
        assert!(md.starts_with("# Alignment for test\n"));
        assert_eq!(md.matches("\n## ").count(), 3);
    }
}
