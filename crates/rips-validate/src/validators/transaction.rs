use rips_model::{Record, RecordType, RecordVerdict};
use rips_standards::names;

use super::{RecordValidator, ValidatorCodes, run_validation};
use crate::checks::RuleContext;
use crate::context::ValidationContext;

const CODES: ValidatorCodes = ValidatorCodes {
    record_type: RecordType::Transaction,
    query_error: "ERR_AF_002",
    missing_beneficiary: None,
};

/// AF: invoice-level transaction header.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransactionValidator;

impl RecordValidator for TransactionValidator {
    fn record_type(&self) -> RecordType {
        CODES.record_type
    }

    fn validate(&self, key: &str, ctx: &ValidationContext<'_>) -> RecordVerdict {
        run_validation(&CODES, key, ctx, check_transaction)
    }
}

fn check_transaction(record: &Record, rules: &mut RuleContext<'_>) -> bool {
    let mut valid = true;
    valid &= rules.text(record, "codPrestador", 12);
    valid &= rules.text(record, "numDocumentoIdObligado", 20);
    valid &= rules.optional_text(record, "numFactura", 20);
    valid &= rules.optional_text(record, "tipoNota", 2);
    valid &= rules.optional_text(record, "numNota", 20);

    if let Some(note_type) = record.get("tipoNota").trimmed() {
        rules.catalog(record, "tipoNota", names::TIPO_NOTA);
        // RS notes may be submitted without an invoice.
        if note_type == "RS" && record.get("numFactura").is_blank() {
            rules.notify(
                "INFO_AF_001",
                "submission without invoice allowed for tipoNota RS",
                Some("tipoNota"),
            );
        }
    }
    valid
}
