use rips_model::{FieldValue, Record, RecordType, RecordVerdict};
use rips_standards::names;

use super::{RecordValidator, ValidatorCodes, run_validation};
use crate::checks::RuleContext;
use crate::context::ValidationContext;

const CODES: ValidatorCodes = ValidatorCodes {
    record_type: RecordType::Medication,
    query_error: "ERR_AM_004",
    missing_beneficiary: Some("ERR_AM_003"),
};

/// AM: dispensed medication.
#[derive(Debug, Clone, Copy, Default)]
pub struct MedicationValidator;

impl RecordValidator for MedicationValidator {
    fn record_type(&self) -> RecordType {
        CODES.record_type
    }

    fn validate(&self, key: &str, ctx: &ValidationContext<'_>) -> RecordVerdict {
        run_validation(&CODES, key, ctx, check_medication)
    }
}

fn check_medication(record: &Record, rules: &mut RuleContext<'_>) -> bool {
    let mut valid = true;
    valid &= rules.text(record, "codPrestador", 12);
    valid &= rules.text(record, "numDocumentoIdentificacion", 20);
    valid &= rules.text(record, "codTecnologiaSalud", 7);
    valid &= rules.text(record, "nomTecnologiaSalud", 150);
    valid &= rules.optional_text(record, "concentracionMedicamento", 3);
    valid &= rules.optional_text(record, "formaFarmaceutica", 20);

    rules.catalog(record, "codTecnologiaSalud", names::ATC);

    let compounded = record
        .get("nomTecnologiaSalud")
        .as_text()
        .is_some_and(|name| name.to_lowercase().contains("magistral"));
    if compounded {
        rules.notify(
            "INFO_AM_001",
            "compounded (magistral) preparation",
            Some("nomTecnologiaSalud"),
        );
        if has_decimal_point(record.get("concentracionMedicamento")) {
            rules.notify(
                "WARN_AM_002",
                "decimal precision in concentracionMedicamento is not supported for compounded preparations",
                Some("concentracionMedicamento"),
            );
        }
    }
    valid
}

/// REAL values are stored with a decimal point, even `5.0`.
fn has_decimal_point(value: &FieldValue) -> bool {
    match value {
        FieldValue::Real(_) => true,
        other => other.as_text().is_some_and(|text| text.contains('.')),
    }
}
