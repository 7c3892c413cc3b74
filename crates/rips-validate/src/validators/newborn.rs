use rips_model::{Record, RecordType, RecordVerdict};

use super::{RecordValidator, ValidatorCodes, run_validation};
use crate::checks::RuleContext;
use crate::context::ValidationContext;

const CODES: ValidatorCodes = ValidatorCodes {
    record_type: RecordType::Newborn,
    query_error: "ERR_AN_004",
    missing_beneficiary: Some("ERR_AN_003"),
};

const SEXES: [&str; 2] = ["M", "F"];

/// Minimum plausible birth weight.
const MIN_WEIGHT: f64 = 0.1;

/// AN: newborn.
#[derive(Debug, Clone, Copy, Default)]
pub struct NewbornValidator;

impl RecordValidator for NewbornValidator {
    fn record_type(&self) -> RecordType {
        CODES.record_type
    }

    fn validate(&self, key: &str, ctx: &ValidationContext<'_>) -> RecordVerdict {
        run_validation(&CODES, key, ctx, check_newborn)
    }
}

fn check_newborn(record: &Record, rules: &mut RuleContext<'_>) -> bool {
    let mut valid = true;
    valid &= rules.text(record, "codPrestador", 12);
    valid &= rules.text(record, "numDocumentoIdentificacion", 20);
    valid &= rules.date(record, "fechaNacimiento");
    valid &= rules.text(record, "sexoRecienNacido", 1);
    valid &= rules.number(record, "pesoRecienNacido", Some(MIN_WEIGHT), None);

    let sex = record.get("sexoRecienNacido").trimmed();
    if !sex.as_deref().is_some_and(|sex| SEXES.contains(&sex)) {
        rules.reject(
            "ERR_AN_002",
            "sexoRecienNacido must be M or F",
            Some("sexoRecienNacido"),
        );
        valid = false;
    }
    valid
}
