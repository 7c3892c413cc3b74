use rips_model::{Record, RecordType, RecordVerdict};
use rips_standards::names;

use super::{RecordValidator, ValidatorCodes, run_validation};
use crate::checks::RuleContext;
use crate::context::ValidationContext;

const CODES: ValidatorCodes = ValidatorCodes {
    record_type: RecordType::OtherService,
    query_error: "ERR_AT_003",
    missing_beneficiary: Some("ERR_AT_002"),
};

/// AT: other services (supplies, transport, lodging).
#[derive(Debug, Clone, Copy, Default)]
pub struct OtherServiceValidator;

impl RecordValidator for OtherServiceValidator {
    fn record_type(&self) -> RecordType {
        CODES.record_type
    }

    fn validate(&self, key: &str, ctx: &ValidationContext<'_>) -> RecordVerdict {
        run_validation(&CODES, key, ctx, check_other_service)
    }
}

fn check_other_service(record: &Record, rules: &mut RuleContext<'_>) -> bool {
    let mut valid = true;
    valid &= rules.text(record, "codPrestador", 12);
    valid &= rules.text(record, "numDocumentoIdentificacion", 20);
    valid &= rules.text(record, "tipoOS", 2);
    valid &= rules.text(record, "codTecnologiaSalud", 7);
    valid &= rules.number(record, "cantidadOS", Some(1.0), None);

    rules.catalog(record, "tipoOS", names::TIPO_OS);
    valid
}
