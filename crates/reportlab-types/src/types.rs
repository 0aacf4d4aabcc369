use serde::{Deserialize, Serialize};

use crate::risk::RiskBand;

/// Structured record extracted from one spreadsheet report.
///
/// Wire keys are the service's column headers verbatim; do not rename
/// them without a coordinated service change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRecord {
    #[serde(rename = "ARCHIVO")]
    pub source_file: String,
    #[serde(rename = "Sede")]
    pub sede: String,
    #[serde(rename = "Fecha")]
    pub fecha: String,
    #[serde(rename = "NOMBRE PROFESIONALES QUE RECIBEN")]
    pub receiving_names: String,
    #[serde(rename = "CARGO PROFESIONALES QUE RECIBEN", default)]
    pub receiving_roles: String,
    #[serde(rename = "NOMBRE RESPONSABLE DE VISITA")]
    pub visitor_name: String,
    #[serde(rename = "CARGO RESPONSABLE DE VISITA", default)]
    pub visitor_role: String,
    #[serde(rename = "CALIFICACIÓN OBTENIDA")]
    pub score: String,
    #[serde(rename = "CLASIFICACIÓN POR RIESGO")]
    pub risk_classification: String,
}

impl ReportRecord {
    /// Display band for this record's risk classification
    pub fn risk_band(&self) -> RiskBand {
        RiskBand::from_classification(&self.risk_classification)
    }

    /// Receiving staff names, split out of the service's " | " joined string
    pub fn receiving_names_list(&self) -> Vec<&str> {
        self.receiving_names
            .split(" | ")
            .filter(|n| !n.is_empty() && *n != "N/A")
            .collect()
    }
}

/// Per-file failure descriptor inside a batch response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchFileError {
    pub file: String,
    pub error: String,
}

/// Aggregate accounting for one batch submission.
///
/// The service owns the accounting: `processed_count + errors.len()`
/// equals the number of files submitted. Clients consume these numbers
/// and never recompute them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchOutcome {
    pub results: Vec<ReportRecord>,
    pub processed_count: u32,
    #[serde(default)]
    pub total_count: u32,
    #[serde(default)]
    pub errors: Vec<BatchFileError>,
}

impl BatchOutcome {
    /// True when the service reported at least one per-file failure
    pub fn is_partial(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Response from exporting accepted results to persistent storage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportOutcome {
    pub ok: bool,
    #[serde(default)]
    pub inserted: u32,
    #[serde(default)]
    pub skipped: u32,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // Payload shape as emitted by /process-excel
    const SINGLE_PAYLOAD: &str = r#"{
        "ARCHIVO": "visita_norte.xlsx",
        "Sede": "Norte",
        "Fecha": "2025-03-14",
        "NOMBRE PROFESIONALES QUE RECIBEN": "Ana Díaz | Luis Mora",
        "CARGO PROFESIONALES QUE RECIBEN": "Bacteriologa | Enfermería",
        "NOMBRE RESPONSABLE DE VISITA": "Carla Ruiz",
        "CARGO RESPONSABLE DE VISITA": "Profesional",
        "CALIFICACIÓN OBTENIDA": "87",
        "CLASIFICACIÓN POR RIESGO": "RIESGO BAJO"
    }"#;

    #[test]
    fn test_deserializes_service_record() {
        let record: ReportRecord = serde_json::from_str(SINGLE_PAYLOAD).unwrap();
        assert_eq!(record.source_file, "visita_norte.xlsx");
        assert_eq!(record.sede, "Norte");
        assert_eq!(record.score, "87");
        assert_eq!(record.risk_band(), RiskBand::Low);
    }

    #[test]
    fn test_receiving_names_split() {
        let record: ReportRecord = serde_json::from_str(SINGLE_PAYLOAD).unwrap();
        assert_eq!(record.receiving_names_list(), vec!["Ana Díaz", "Luis Mora"]);
    }

    #[test]
    fn test_receiving_names_na_is_empty() {
        let mut record: ReportRecord = serde_json::from_str(SINGLE_PAYLOAD).unwrap();
        record.receiving_names = "N/A".to_string();
        assert!(record.receiving_names_list().is_empty());
    }

    #[test]
    fn test_serializes_with_wire_keys() {
        let record: ReportRecord = serde_json::from_str(SINGLE_PAYLOAD).unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("ARCHIVO").is_some());
        assert!(json.get("CLASIFICACIÓN POR RIESGO").is_some());
        assert!(json.get("source_file").is_none());
    }

    #[test]
    fn test_deserializes_batch_outcome() {
        let payload = format!(
            r#"{{
                "processed_count": 1,
                "total_count": 2,
                "results": [{}],
                "errors": [{{"file": "c.csv", "error": "bad format"}}]
            }}"#,
            SINGLE_PAYLOAD
        );
        let outcome: BatchOutcome = serde_json::from_str(&payload).unwrap();
        assert_eq!(outcome.processed_count, 1);
        assert_eq!(outcome.total_count, 2);
        assert_eq!(outcome.results.len(), 1);
        assert_eq!(outcome.errors.len(), 1);
        assert_eq!(outcome.errors[0].file, "c.csv");
        assert!(outcome.is_partial());
    }

    #[test]
    fn test_clean_batch_is_not_partial() {
        let payload = r#"{"processed_count": 0, "total_count": 0, "results": [], "errors": []}"#;
        let outcome: BatchOutcome = serde_json::from_str(payload).unwrap();
        assert!(!outcome.is_partial());
    }

    #[test]
    fn test_deserializes_export_outcome() {
        let payload = r#"{"ok": true, "inserted": 3, "skipped": 1, "message": "Se cargaron 3 nuevos registros."}"#;
        let outcome: ExportOutcome = serde_json::from_str(payload).unwrap();
        assert!(outcome.ok);
        assert_eq!(outcome.inserted, 3);
        assert_eq!(outcome.skipped, 1);
    }

    #[test]
    fn test_export_duplicate_response() {
        // 409 body when every record already exists
        let payload = r#"{"ok": false, "message": "Todos los archivos ya han sido cargados anteriormente.", "skipped": 2}"#;
        let outcome: ExportOutcome = serde_json::from_str(payload).unwrap();
        assert!(!outcome.ok);
        assert_eq!(outcome.inserted, 0);
        assert_eq!(outcome.skipped, 2);
    }
}
