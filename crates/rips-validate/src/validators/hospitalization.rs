use rips_model::{Record, RecordType, RecordVerdict};
use rips_standards::names;

use super::{RecordValidator, ValidatorCodes, run_validation};
use crate::checks::{RuleContext, parse_timestamp};
use crate::context::ValidationContext;

const CODES: ValidatorCodes = ValidatorCodes {
    record_type: RecordType::Hospitalization,
    query_error: "ERR_AH_004",
    missing_beneficiary: Some("ERR_AH_003"),
};

/// AH: hospital stay.
#[derive(Debug, Clone, Copy, Default)]
pub struct HospitalizationValidator;

impl RecordValidator for HospitalizationValidator {
    fn record_type(&self) -> RecordType {
        CODES.record_type
    }

    fn validate(&self, key: &str, ctx: &ValidationContext<'_>) -> RecordVerdict {
        run_validation(&CODES, key, ctx, check_hospitalization)
    }
}

fn check_hospitalization(record: &Record, rules: &mut RuleContext<'_>) -> bool {
    let mut valid = true;
    valid &= rules.text(record, "codPrestador", 12);
    valid &= rules.text(record, "numDocumentoIdentificacion", 20);
    valid &= rules.date(record, "fechaIngreso");
    valid &= rules.text(record, "codDiagnosticoPrincipal", 25);
    valid &= rules.date(record, "fechaEgreso");
    valid &= rules.optional_text(record, "codDiagnosticoCausaMuerte", 25);

    rules.catalog(record, "codDiagnosticoPrincipal", names::CIE10);
    rules.catalog(record, "codDiagnosticoCausaMuerte", names::CIE10);

    // Malformed dates were already rejected above.
    if let (Some(admission), Some(discharge)) = (
        parse_timestamp(record.get("fechaIngreso")),
        parse_timestamp(record.get("fechaEgreso")),
    ) && discharge < admission
    {
        rules.reject(
            "ERR_AH_002",
            "discharge date is earlier than admission date",
            Some("fechaEgreso"),
        );
        valid = false;
    }
    valid
}
