use rips_model::{Record, RecordType, RecordVerdict};
use rips_standards::names;

use super::{RecordValidator, ValidatorCodes, run_validation};
use crate::checks::RuleContext;
use crate::context::ValidationContext;

const CODES: ValidatorCodes = ValidatorCodes {
    record_type: RecordType::Emergency,
    query_error: "ERR_AU_003",
    missing_beneficiary: Some("ERR_AU_002"),
};

/// AU: emergency visit.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmergencyValidator;

impl RecordValidator for EmergencyValidator {
    fn record_type(&self) -> RecordType {
        CODES.record_type
    }

    fn validate(&self, key: &str, ctx: &ValidationContext<'_>) -> RecordVerdict {
        run_validation(&CODES, key, ctx, check_emergency)
    }
}

fn check_emergency(record: &Record, rules: &mut RuleContext<'_>) -> bool {
    let mut valid = true;
    valid &= rules.text(record, "codPrestador", 12);
    valid &= rules.text(record, "numDocumentoIdentificacion", 20);
    valid &= rules.date(record, "fechaInicioAtencion");
    valid &= rules.text(record, "causaExterna", 2);
    valid &= rules.text(record, "codDiagnosticoPrincipal", 25);
    valid &= rules.text(record, "condicionDestinoUsuarioEgreso", 2);

    rules.catalog(record, "causaExterna", names::CAUSA_EXTERNA);
    rules.catalog(record, "codDiagnosticoPrincipal", names::CIE10);
    valid
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{PATIENT, codes, run, store_with};
    use super::*;

    fn emergency() -> Record {
        Record::new()
            .with("codPrestador", "110010000001")
            .with("consecutivo", "URG_001")
            .with("numDocumentoIdentificacion", PATIENT)
            .with("fechaInicioAtencion", "2024-04-02 23:10:00")
            .with("causaExterna", "15")
            .with("codDiagnosticoPrincipal", "J459")
            .with("condicionDestinoUsuarioEgreso", "01")
    }

    #[test]
    fn test_clean_emergency() {
        let store = store_with(RecordType::Emergency, emergency());
        let verdict = run(&EmergencyValidator, &store, "URG_001");
        assert!(verdict.valid);
        assert!(verdict.ledger.is_empty());
    }

    #[test]
    fn test_catalog_misses_keep_verdict() {
        let store = store_with(
            RecordType::Emergency,
            emergency()
                .with("causaExterna", "99")
                .with("codDiagnosticoPrincipal", "Z000"),
        );
        let verdict = run(&EmergencyValidator, &store, "URG_001");
        assert!(verdict.valid);
        assert_eq!(
            codes(&verdict),
            vec!["WARN_causaExterna_001", "WARN_codDiagnosticoPrincipal_001"]
        );
    }

    #[test]
    fn test_missing_discharge_condition() {
        let store = store_with(
            RecordType::Emergency,
            emergency().with("condicionDestinoUsuarioEgreso", " "),
        );
        let verdict = run(&EmergencyValidator, &store, "URG_001");
        assert!(!verdict.valid);
        assert_eq!(codes(&verdict), vec!["ERR_condicionDestinoUsuarioEgreso_001"]);
    }
}
