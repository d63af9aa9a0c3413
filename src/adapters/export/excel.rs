//! Spreadsheet export: Overview, Moon, Numerology and Biorhythm sheets.

use rust_xlsxwriter::{Color, Format, FormatAlign, Workbook, Worksheet, XlsxError};

use crate::domain::biorhythm::round1;
use crate::domain::daily::DailyPreparation;
use crate::ports::{ExportError, ExportFormat, ReportExporter};

const OVERVIEW_HEADERS: [&str; 10] = [
    "Date",
    "Day",
    "Theme",
    "Moon Phase",
    "Moon Sign",
    "Sun Sign",
    "Personal Day",
    "Energy",
    "Risk",
    "Affirmation",
];
const MOON_HEADERS: [&str; 8] = [
    "Date",
    "Phase",
    "Illumination %",
    "Sign",
    "Element",
    "Modality",
    "VOC",
    "Energy Theme",
];
const NUMEROLOGY_HEADERS: [&str; 8] = [
    "Date",
    "Life Path",
    "Personal Year",
    "Personal Month",
    "Personal Day",
    "Universal Day",
    "Theme",
    "Energy Quality",
];
const BIORHYTHM_HEADERS: [&str; 5] = [
    "Date",
    "Physical",
    "Emotional",
    "Intellectual",
    "Overall Energy",
];

pub const SHEET_NAMES: [&str; 4] = ["Overview", "Moon", "Numerology", "Biorhythm"];

#[derive(Debug, Default, Clone, Copy)]
pub struct ExcelExporter;

struct Styles {
    header: Format,
    date: Format,
}

impl Styles {
    fn new() -> Self {
        Self {
            header: Format::new()
                .set_bold()
                .set_font_color(Color::RGB(0xA78BFA))
                .set_background_color(Color::RGB(0x1A1A35))
                .set_align(FormatAlign::Center)
                .set_text_wrap(),
            date: Format::new().set_bold(),
        }
    }
}

fn sheet<'a>(
    workbook: &'a mut Workbook,
    name: &str,
    headers: &[&str],
    styles: &Styles,
) -> Result<&'a mut Worksheet, XlsxError> {
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(name)?;
    for (col, header) in headers.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &styles.header)?;
    }
    worksheet.set_freeze_panes(1, 0)?;
    Ok(worksheet)
}

fn build(entries: &[DailyPreparation]) -> Result<Vec<u8>, XlsxError> {
    let styles = Styles::new();
    let mut workbook = Workbook::new();

    let ws = sheet(&mut workbook, SHEET_NAMES[0], &OVERVIEW_HEADERS, &styles)?;
    for (i, entry) in entries.iter().enumerate() {
        let row = i as u32 + 1;
        ws.write_string_with_format(row, 0, entry.date.to_string(), &styles.date)?;
        ws.write_string(row, 1, &entry.day_of_week)?;
        ws.write_string(row, 2, &entry.daily_theme)?;
        ws.write_string(row, 3, entry.moon.phase.name())?;
        ws.write_string(row, 4, entry.moon.zodiac_sign.name())?;
        ws.write_string(row, 5, entry.solar_transit.sun_sign.name())?;
        ws.write_number(row, 6, entry.numerology.personal_day)?;
        ws.write_string(row, 7, entry.biorhythm.overall_energy.label())?;
        ws.write_string(row, 8, entry.risk_analysis.overall_risk_level.label())?;
        ws.write_string(row, 9, &entry.affirmation)?;
    }
    ws.autofit();

    let ws = sheet(&mut workbook, SHEET_NAMES[1], &MOON_HEADERS, &styles)?;
    for (i, entry) in entries.iter().enumerate() {
        let row = i as u32 + 1;
        let moon = &entry.moon;
        ws.write_string_with_format(row, 0, entry.date.to_string(), &styles.date)?;
        ws.write_string(row, 1, moon.phase.name())?;
        ws.write_number(row, 2, moon.phase_percentage)?;
        ws.write_string(row, 3, moon.zodiac_sign.name())?;
        ws.write_string(row, 4, moon.sign_element.name())?;
        ws.write_string(row, 5, moon.sign_modality.to_string())?;
        ws.write_string(row, 6, if moon.moon_void_of_course { "Yes" } else { "" })?;
        ws.write_string(row, 7, &moon.energy_theme)?;
    }
    ws.autofit();

    let ws = sheet(&mut workbook, SHEET_NAMES[2], &NUMEROLOGY_HEADERS, &styles)?;
    for (i, entry) in entries.iter().enumerate() {
        let row = i as u32 + 1;
        let n = &entry.numerology;
        ws.write_string_with_format(row, 0, entry.date.to_string(), &styles.date)?;
        ws.write_number(row, 1, n.life_path)?;
        ws.write_number(row, 2, n.personal_year)?;
        ws.write_number(row, 3, n.personal_month)?;
        ws.write_number(row, 4, n.personal_day)?;
        ws.write_number(row, 5, n.universal_day)?;
        ws.write_string(row, 6, &n.day_theme)?;
        ws.write_string(row, 7, &n.energy_quality)?;
    }
    ws.autofit();

    let ws = sheet(&mut workbook, SHEET_NAMES[3], &BIORHYTHM_HEADERS, &styles)?;
    for (i, entry) in entries.iter().enumerate() {
        let row = i as u32 + 1;
        let b = &entry.biorhythm;
        ws.write_string_with_format(row, 0, entry.date.to_string(), &styles.date)?;
        ws.write_number(row, 1, round1(b.physical))?;
        ws.write_number(row, 2, round1(b.emotional))?;
        ws.write_number(row, 3, round1(b.intellectual))?;
        ws.write_string(row, 4, b.overall_energy.label())?;
    }
    ws.autofit();

    workbook.save_to_buffer()
}

impl ReportExporter for ExcelExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Excel
    }

    fn export(&self, entries: &[DailyPreparation], _title: &str) -> Result<Vec<u8>, ExportError> {
        build(entries).map_err(|e| ExportError::Spreadsheet(e.to_string()))
    }
}
