use rips_model::{Record, RecordType, RecordVerdict};
use rips_standards::names;

use super::{RecordValidator, ValidatorCodes, run_validation};
use crate::checks::RuleContext;
use crate::context::ValidationContext;

const CODES: ValidatorCodes = ValidatorCodes {
    record_type: RecordType::Procedure,
    query_error: "ERR_AP_003",
    missing_beneficiary: Some("ERR_AP_002"),
};

/// AP: procedure.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcedureValidator;

impl RecordValidator for ProcedureValidator {
    fn record_type(&self) -> RecordType {
        CODES.record_type
    }

    fn validate(&self, key: &str, ctx: &ValidationContext<'_>) -> RecordVerdict {
        run_validation(&CODES, key, ctx, check_procedure)
    }
}

fn check_procedure(record: &Record, rules: &mut RuleContext<'_>) -> bool {
    let mut valid = true;
    valid &= rules.text(record, "codPrestador", 12);
    valid &= rules.text(record, "numDocumentoIdentificacion", 20);
    valid &= rules.date(record, "fechaInicioAtencion");
    valid &= rules.optional_text(record, "numAutorizacion", 30);
    valid &= rules.text(record, "codProcedimiento", 6);
    valid &= rules.text(record, "viaIngreso", 2);

    rules.catalog(record, "codProcedimiento", names::CUPS);
    rules.catalog(record, "viaIngreso", names::VIA_INGRESO);

    if record.get("numAutorizacion").is_blank() {
        rules.notify(
            "INFO_AP_001",
            "authorization not required for this procedure",
            Some("numAutorizacion"),
        );
    }
    valid
}

#[cfg(test)]
mod tests {
    use rips_model::FieldValue;

    use super::super::test_support::{PATIENT, codes, run, store_with};
    use super::*;

    fn procedure() -> Record {
        Record::new()
            .with("codPrestador", "110010000001")
            .with("consecutivo", "PROC_001")
            .with("numDocumentoIdentificacion", PATIENT)
            .with("fechaInicioAtencion", "2024-03-01 07:45:00")
            .with("numAutorizacion", "AUT-778")
            .with("codProcedimiento", "890601")
            .with("viaIngreso", "02")
    }

    #[test]
    fn test_clean_procedure() {
        let store = store_with(RecordType::Procedure, procedure());
        let verdict = run(&ProcedureValidator, &store, "PROC_001");
        assert!(verdict.valid);
        assert!(verdict.ledger.is_empty());
    }

    #[test]
    fn test_missing_authorization_is_notified() {
        let store = store_with(
            RecordType::Procedure,
            procedure().with("numAutorizacion", FieldValue::Null),
        );
        let verdict = run(&ProcedureValidator, &store, "PROC_001");
        assert!(verdict.valid);
        assert_eq!(codes(&verdict), vec!["INFO_AP_001"]);
    }

    #[test]
    fn test_bad_start_date() {
        let store = store_with(
            RecordType::Procedure,
            procedure().with("fechaInicioAtencion", "01/03/2024"),
        );
        let verdict = run(&ProcedureValidator, &store, "PROC_001");
        assert!(!verdict.valid);
        assert_eq!(codes(&verdict), vec!["ERR_fechaInicioAtencion_004"]);
    }
}
