use rips_model::{Record, RecordType, RecordVerdict};
use rips_standards::names;

use super::{RecordValidator, ValidatorCodes, run_validation};
use crate::checks::RuleContext;
use crate::context::ValidationContext;

const CODES: ValidatorCodes = ValidatorCodes {
    record_type: RecordType::Beneficiary,
    query_error: "ERR_US_002",
    missing_beneficiary: None,
};

/// US: beneficiary registry entry, keyed by document number.
#[derive(Debug, Clone, Copy, Default)]
pub struct BeneficiaryValidator;

impl RecordValidator for BeneficiaryValidator {
    fn record_type(&self) -> RecordType {
        CODES.record_type
    }

    fn validate(&self, key: &str, ctx: &ValidationContext<'_>) -> RecordVerdict {
        run_validation(&CODES, key, ctx, check_beneficiary)
    }
}

fn check_beneficiary(record: &Record, rules: &mut RuleContext<'_>) -> bool {
    let mut valid = true;
    valid &= rules.text(record, "tipoDocumentoIdentificacion", 2);
    valid &= rules.text(record, "numDocumentoIdentificacion", 20);
    valid &= rules.text(record, "codPaisOrigen", 3);
    rules.catalog(record, "tipoDocumentoIdentificacion", names::TIPO_DOCUMENTO);
    valid
}
