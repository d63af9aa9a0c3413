use crate::domain::daily::DailyPreparation;
use crate::ports::{ExportError, ExportFormat, ReportExporter};

/// Pretty-printed JSON array of full daily records.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonExporter;

impl ReportExporter for JsonExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Json
    }

    fn export(&self, entries: &[DailyPreparation], _title: &str) -> Result<Vec<u8>, ExportError> {
        serde_json::to_vec_pretty(entries).map_err(|e| ExportError::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::export::test_support::sample_entries;

    #[test]
    fn records_survive_a_round_trip() {
        let entries = sample_entries(2);
        let bytes = JsonExporter.export(&entries, "").unwrap();
        let back: Vec<DailyPreparation> = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(back, entries);
    }

    #[test]
    fn uses_readable_enum_names() {
        let bytes = JsonExporter.export(&sample_entries(1), "").unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        let day = &value[0];
        assert_eq!(day["date"], "2026-01-01");
        assert!(day["human_design"]["type"].is_string());
        assert_eq!(day["moon"]["phase"], serde_json::json!(entries_phase()));
    }

    fn entries_phase() -> String {
        sample_entries(1)[0].moon.phase.name().to_string()
    }

    #[test]
    fn empty_input_is_empty_array() {
        let bytes = JsonExporter.export(&[], "").unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "[]");
    }
}
