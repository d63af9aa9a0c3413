//! Printable guide as a minimal PDF 1.4 document.
//!
//! Only the standard Helvetica faces are used so no fonts are embedded.
//! Text outside Latin-1 is folded to ASCII look-alikes or `?`.

use std::fmt::Write as _;

use crate::domain::daily::DailyPreparation;
use crate::ports::{ExportError, ExportFormat, ReportExporter};

const PAGE_WIDTH: f64 = 595.0;
const PAGE_HEIGHT: f64 = 842.0;
const MARGIN: f64 = 42.0;
const LEADING: f64 = 1.4;

const BODY: f64 = 10.0;
const HEADING: f64 = 13.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Font {
    Regular,
    Bold,
}

impl Font {
    fn resource(&self) -> &'static str {
        match self {
            Font::Regular => "F1",
            Font::Bold => "F2",
        }
    }
}

/// Escapes a string for a PDF literal, folding to WinAnsi-safe bytes.
fn pdf_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        let ch = match ch {
            '\u{2014}' | '\u{2013}' => '-',
            '\u{2018}' | '\u{2019}' => '\'',
            '\u{201C}' | '\u{201D}' => '"',
            '\u{2022}' => '*',
            c if (c as u32) > 0xFF => '?',
            c => c,
        };
        match ch {
            '(' | ')' | '\\' => {
                out.push('\\');
                out.push(ch);
            }
            c if c.is_ascii() && !c.is_ascii_control() => out.push(c),
            c => {
                let _ = write!(out, "\\{:03o}", c as u32);
            }
        }
    }
    out
}

/// Greedy word wrap using an average glyph width.
fn wrap(text: &str, size: f64, width: f64) -> Vec<String> {
    let max_chars = ((width / (size * 0.5)).floor() as usize).max(1);
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let needed = if line.is_empty() {
            word.chars().count()
        } else {
            line.chars().count() + 1 + word.chars().count()
        };
        if needed > max_chars && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Page-flowing text layout.
struct Layout {
    pages: Vec<String>,
    current: String,
    y: f64,
}

impl Layout {
    fn new() -> Self {
        Self {
            pages: Vec::new(),
            current: String::new(),
            y: PAGE_HEIGHT - MARGIN,
        }
    }

    fn new_page(&mut self) {
        let done = std::mem::take(&mut self.current);
        self.pages.push(done);
        self.y = PAGE_HEIGHT - MARGIN;
    }

    fn ensure_room(&mut self, height: f64) {
        if self.y - height < MARGIN {
            self.new_page();
        }
    }

    fn line(&mut self, font: Font, size: f64, indent: f64, text: &str) {
        let height = size * LEADING;
        self.ensure_room(height);
        self.y -= height;
        let _ = writeln!(
            self.current,
            "BT /{} {} Tf {:.2} {:.2} Td ({}) Tj ET",
            font.resource(),
            size,
            MARGIN + indent,
            self.y,
            pdf_string(text)
        );
    }

    fn paragraph(&mut self, font: Font, size: f64, indent: f64, text: &str) {
        let width = PAGE_WIDTH - 2.0 * MARGIN - indent;
        for line in wrap(text, size, width) {
            self.line(font, size, indent, &line);
        }
    }

    fn gap(&mut self, height: f64) {
        self.y -= height;
    }

    fn finish(mut self) -> Vec<String> {
        if !self.current.is_empty() || self.pages.is_empty() {
            self.new_page();
        }
        self.pages
    }
}

/// Serializes page content streams into a complete file.
fn assemble(pages: &[String], title: &str) -> Vec<u8> {
    let first_page_obj = 6;
    let kids = (0..pages.len())
        .map(|i| format!("{} 0 R", first_page_obj + 2 * i))
        .collect::<Vec<_>>()
        .join(" ");

    let mut objects = vec![
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        format!("<< /Type /Pages /Kids [{}] /Count {} >>", kids, pages.len()),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
            .to_string(),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica-Bold /Encoding /WinAnsiEncoding >>"
            .to_string(),
        format!("<< /Title ({}) /Producer (Skyforge) >>", pdf_string(title)),
    ];
    for (i, content) in pages.iter().enumerate() {
        objects.push(format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {} {}] \
             /Resources << /Font << /F1 3 0 R /F2 4 0 R >> >> /Contents {} 0 R >>",
            PAGE_WIDTH,
            PAGE_HEIGHT,
            first_page_obj + 2 * i + 1
        ));
        objects.push(format!(
            "<< /Length {} >>\nstream\n{}endstream",
            content.len(),
            content
        ));
    }

    let mut out = String::from("%PDF-1.4\n");
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(out.len());
        let _ = write!(out, "{} 0 obj\n{}\nendobj\n", i + 1, body);
    }

    let xref_at = out.len();
    let _ = write!(out, "xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
    for offset in offsets {
        let _ = write!(out, "{:010} 00000 n \n", offset);
    }
    let _ = write!(
        out,
        "trailer\n<< /Size {} /Root 1 0 R /Info 5 0 R >>\nstartxref\n{}\n%%EOF\n",
        objects.len() + 1,
        xref_at
    );
    out.into_bytes()
}

fn render_day(layout: &mut Layout, entry: &DailyPreparation) {
    layout.ensure_room(HEADING * LEADING * 6.0);
    layout.line(
        Font::Bold,
        HEADING,
        0.0,
        &format!(
            "{}, {} (Day {})",
            entry.day_of_week,
            entry.date.format("%B %d, %Y"),
            entry.day_of_year
        ),
    );
    layout.paragraph(Font::Regular, BODY, 0.0, &format!("Theme: {}", entry.daily_theme));
    layout.gap(4.0);

    let moon = &entry.moon;
    let sun = &entry.solar_transit;
    let num = &entry.numerology;
    let bio = &entry.biorhythm;
    let rows = [
        (
            "Moon",
            format!("{} in {} ({})", moon.phase, moon.zodiac_sign, moon.sign_element),
        ),
        (
            "Sun",
            format!("{} - House {}: {}", sun.sun_sign, sun.house_focus, sun.house_theme),
        ),
        (
            "Numerology",
            format!("Personal Day {} - {}", num.personal_day, num.day_theme),
        ),
        (
            "Biorhythm",
            format!(
                "P:{:+.0} E:{:+.0} I:{:+.0} ({})",
                bio.physical, bio.emotional, bio.intellectual, bio.overall_energy
            ),
        ),
        (
            "I Ching",
            format!(
                "Hexagram {}: {}",
                entry.i_ching.hexagram_number, entry.i_ching.hexagram_name
            ),
        ),
        ("Risk", entry.risk_analysis.overall_risk_level.to_string()),
    ];
    for (label, value) in rows {
        layout.paragraph(Font::Regular, BODY, 12.0, &format!("{}: {}", label, value));
    }

    layout.gap(4.0);
    layout.line(Font::Bold, BODY, 0.0, "Human Design Gates");
    for gate in &entry.human_design.active_gates {
        layout.line(
            Font::Regular,
            BODY,
            12.0,
            &format!("{}: Gate {}.{}", gate.planet, gate.gate_number, gate.line),
        );
    }

    layout.gap(4.0);
    layout.line(Font::Bold, BODY, 0.0, "Daily Affirmation");
    layout.paragraph(Font::Regular, BODY, 12.0, &format!("\"{}\"", entry.affirmation));
    layout.paragraph(
        Font::Regular,
        BODY,
        12.0,
        &format!("Mantra: {}", entry.daily_mantra),
    );
    layout.gap(HEADING);
}

/// Period label such as "January 01 - January 31, 2026".
fn period_label(entries: &[DailyPreparation]) -> Option<String> {
    let first = entries.first()?;
    let last = entries.last()?;
    Some(format!(
        "{} - {}",
        first.date.format("%B %d"),
        last.date.format("%B %d, %Y")
    ))
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PdfExporter;

impl ReportExporter for PdfExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Pdf
    }

    fn export(&self, entries: &[DailyPreparation], title: &str) -> Result<Vec<u8>, ExportError> {
        let mut layout = Layout::new();
        layout.line(Font::Bold, 24.0, 0.0, "Skyforge");
        layout.line(Font::Regular, 16.0, 0.0, "Sovereign Alignment Guide");
        if !title.is_empty() {
            layout.paragraph(Font::Regular, BODY, 0.0, title);
        }
        if let Some(period) = period_label(entries) {
            layout.line(Font::Regular, BODY, 0.0, &period);
        }
        layout.gap(HEADING);

        for entry in entries {
            render_day(&mut layout, entry);
        }

        let pages = layout.finish();
        tracing::debug!(pages = pages.len(), days = entries.len(), "pdf rendered");
        Ok(assemble(&pages, title))
    }
}
