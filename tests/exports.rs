//! Export formats over a generated week.

use std::sync::Arc;

use chrono::NaiveDate;

use skyforge::adapters::export::{exporter_for, CSV_COLUMNS};
use skyforge::adapters::lunar::SimplifiedMoonEngine;
use skyforge::domain::daily::{DailyEntryGenerator, DailyPreparation, DateSpan};
use skyforge::domain::profile::{BirthData, UserProfile};
use skyforge::ports::ExportFormat;

fn week() -> Vec<DailyPreparation> {
    let generator = DailyEntryGenerator::new(Arc::new(SimplifiedMoonEngine::new()));
    let mut profile = UserProfile::new(
        "kai",
        BirthData::new(NaiveDate::from_ymd_opt(1990, 6, 15).unwrap()),
    )
    .unwrap();
    let span = DateSpan::new(
        NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2026, 1, 7).unwrap(),
    )
    .unwrap();
    generator.generate_days(span.days(), &mut profile)
}

#[test]
fn csv_has_header_plus_one_row_per_day() {
    let bytes = exporter_for(ExportFormat::Csv).export(&week(), "week").unwrap();
    let text = String::from_utf8(bytes).unwrap();
    let mut lines = text.lines();

    let header = lines.next().unwrap();
    assert_eq!(header.split(',').count(), CSV_COLUMNS.len());
    assert_eq!(lines.count(), 7);
}

#[test]
fn binary_formats_have_their_magic() {
    let entries = week();
    let pdf = exporter_for(ExportFormat::Pdf).export(&entries, "week").unwrap();
    assert!(pdf.starts_with(b"%PDF-"));
    assert!(pdf.ends_with(b"%%EOF\n"));

    let xlsx = exporter_for(ExportFormat::Excel).export(&entries, "week").unwrap();
    assert!(xlsx.starts_with(b"PK"));
}

#[test]
fn json_and_markdown_keep_day_order() {
    let entries = week();
    let json = exporter_for(ExportFormat::Json).export(&entries, "week").unwrap();
    let parsed: Vec<serde_json::Value> = serde_json::from_slice(&json).unwrap();
    let dates: Vec<&str> = parsed.iter().map(|e| e["date"].as_str().unwrap()).collect();
    assert_eq!(dates.len(), 7);
    assert_eq!(dates[0], "2026-01-01");
    assert_eq!(dates[6], "2026-01-07");

    let markdown =
        String::from_utf8(exporter_for(ExportFormat::Markdown).export(&entries, "week").unwrap())
            .unwrap();
    let first = markdown.find("January 01, 2026").unwrap();
    let last = markdown.find("January 07, 2026").unwrap();
    assert!(first < last);
}

#[test]
fn every_format_handles_an_empty_range() {
    for format in ExportFormat::ALL {
        let bytes = exporter_for(format).export(&[], "empty").unwrap();
        assert!(!bytes.is_empty(), "{} produced nothing", format);
    }
}
