use rips_model::{Record, RecordType, RecordVerdict};
use rips_standards::names;

use super::{RecordValidator, ValidatorCodes, run_validation};
use crate::checks::RuleContext;
use crate::context::ValidationContext;

const CODES: ValidatorCodes = ValidatorCodes {
    record_type: RecordType::Consultation,
    query_error: "ERR_AC_004",
    missing_beneficiary: Some("ERR_AC_003"),
};

/// CUPS consultation codes for which a copay may be collected.
const COPAY_CONSULTATIONS: [&str; 2] = ["890501", "890601"];

/// `conceptoRecaudo` value for a copay.
const COPAY: &str = "01";

/// AC: outpatient consultation.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsultationValidator;

impl RecordValidator for ConsultationValidator {
    fn record_type(&self) -> RecordType {
        CODES.record_type
    }

    fn validate(&self, key: &str, ctx: &ValidationContext<'_>) -> RecordVerdict {
        run_validation(&CODES, key, ctx, check_consultation)
    }
}

fn check_consultation(record: &Record, rules: &mut RuleContext<'_>) -> bool {
    let mut valid = true;
    valid &= rules.text(record, "codPrestador", 12);
    valid &= rules.text(record, "numDocumentoIdentificacion", 20);
    valid &= rules.date(record, "fechaConsulta");
    valid &= rules.text(record, "codConsulta", 6);
    valid &= rules.text(record, "codDiagnosticoPrincipal", 25);
    valid &= rules.optional_text(record, "conceptoRecaudo", 2);

    if let Some(consultation) = record.get("codConsulta").trimmed() {
        rules.catalog(record, "codConsulta", names::CUPS);
        let copay = record
            .get("conceptoRecaudo")
            .trimmed()
            .is_some_and(|concept| concept == COPAY);
        if copay {
            if COPAY_CONSULTATIONS.contains(&consultation.as_str()) {
                rules.notify(
                    "INFO_AC_001",
                    format!("copay allowed for CUPS {consultation}"),
                    Some("conceptoRecaudo"),
                );
            } else {
                rules.reject(
                    "ERR_AC_002",
                    format!("copay not allowed for CUPS {consultation}"),
                    Some("conceptoRecaudo"),
                );
                valid = false;
            }
        }
    }
    rules.catalog(record, "codDiagnosticoPrincipal", names::CIE10);
    valid
}

#[cfg(test)]
mod tests {
    use rips_store::MemoryStore;

    use super::super::test_support::{PATIENT, codes, run, store_with};
    use super::*;

    fn consultation() -> Record {
        Record::new()
            .with("codPrestador", "110010000001")
            .with("consecutivo", "CONS_001")
            .with("numDocumentoIdentificacion", PATIENT)
            .with("fechaConsulta", "2024-01-15 10:30:00")
            .with("codConsulta", "890501")
            .with("codDiagnosticoPrincipal", "E119")
            .with("conceptoRecaudo", "02")
    }

    #[test]
    fn test_clean_consultation() {
        let store = store_with(RecordType::Consultation, consultation());
        let verdict = run(&ConsultationValidator, &store, "CONS_001");
        assert!(verdict.valid);
        assert!(verdict.ledger.is_empty());
    }

    #[test]
    fn test_copay_allowed() {
        let store = store_with(
            RecordType::Consultation,
            consultation().with("conceptoRecaudo", "01"),
        );
        let verdict = run(&ConsultationValidator, &store, "CONS_001");
        assert!(verdict.valid);
        assert_eq!(codes(&verdict), vec!["INFO_AC_001"]);
    }

    #[test]
    fn test_copay_not_allowed() {
        let store = store_with(
            RecordType::Consultation,
            consultation()
                .with("codConsulta", "890201")
                .with("conceptoRecaudo", "01"),
        );
        let verdict = run(&ConsultationValidator, &store, "CONS_001");
        assert!(!verdict.valid);
        assert_eq!(codes(&verdict), vec!["WARN_codConsulta_001", "ERR_AC_002"]);
    }

    #[test]
    fn test_missing_beneficiary() {
        let store = MemoryStore::new().with_record(RecordType::Consultation, consultation());
        let verdict = run(&ConsultationValidator, &store, "CONS_001");
        assert!(!verdict.valid);
        assert_eq!(codes(&verdict), vec!["ERR_AC_003"]);
        assert_eq!(verdict.records.len(), 1);
    }

    #[test]
    fn test_not_found() {
        let store = store_with(RecordType::Consultation, consultation());
        let verdict = run(&ConsultationValidator, &store, "CONS_404");
        assert!(!verdict.valid);
        assert!(verdict.records.is_empty());
        assert_eq!(codes(&verdict), vec!["ERR_AC_001"]);
        assert_eq!(
            verdict.ledger.outcomes()[0].description(),
            "no consultation found with key CONS_404"
        );
    }

    #[test]
    fn test_storage_failure() {
        let store = MemoryStore::new().with_unavailable(RecordType::Consultation);
        let verdict = run(&ConsultationValidator, &store, "CONS_001");
        assert!(!verdict.valid);
        assert_eq!(codes(&verdict), vec!["ERR_AC_004"]);
        assert!(
            verdict.ledger.outcomes()[0]
                .description()
                .starts_with("query error: ")
        );
    }
}
