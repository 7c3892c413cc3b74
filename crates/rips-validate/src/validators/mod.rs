//! Per-record-type validators.
//!
//! Every validator follows the same flow: fetch the record by key, run the
//! field and catalog checks on the first row, apply the type-specific rules
//! and finally confirm the referenced beneficiary exists. The type-specific
//! parts live in one module per record type; the flow is [`run_validation`].

mod beneficiary;
mod consultation;
mod emergency;
mod hospitalization;
mod medication;
mod newborn;
mod other_service;
mod procedure;
mod transaction;

pub use beneficiary::BeneficiaryValidator;
pub use consultation::ConsultationValidator;
pub use emergency::EmergencyValidator;
pub use hospitalization::HospitalizationValidator;
pub use medication::MedicationValidator;
pub use newborn::NewbornValidator;
pub use other_service::OtherServiceValidator;
pub use procedure::ProcedureValidator;
pub use transaction::TransactionValidator;

use tracing::{debug, warn};

use rips_model::{BENEFICIARY_REF_COLUMN, Record, RecordType, RecordVerdict};
use rips_store::StoreError;

use crate::checks::RuleContext;
use crate::context::ValidationContext;

/// Validation of one record type.
pub trait RecordValidator: Send + Sync {
    fn record_type(&self) -> RecordType;

    /// Validate the record stored under `key`. Never fails: storage errors
    /// become rejections in the returned ledger.
    fn validate(&self, key: &str, ctx: &ValidationContext<'_>) -> RecordVerdict;
}

/// Outcome codes that differ between record types.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ValidatorCodes {
    pub record_type: RecordType,
    /// Reported when a storage call fails.
    pub query_error: &'static str,
    /// Reported when the referenced beneficiary is missing; `None` skips the
    /// cross-reference.
    pub missing_beneficiary: Option<&'static str>,
}

impl ValidatorCodes {
    fn not_found(&self) -> String {
        format!("ERR_{}_001", self.record_type.code())
    }
}

/// Shared fetch / check / cross-reference flow.
///
/// `rules` receives the first fetched row and returns the running AND of its
/// field checks.
pub(crate) fn run_validation<F>(
    codes: &ValidatorCodes,
    key: &str,
    ctx: &ValidationContext<'_>,
    rules: F,
) -> RecordVerdict
where
    F: FnOnce(&Record, &mut RuleContext<'_>) -> bool,
{
    let record_type = codes.record_type;
    let schema = record_type.schema();
    let mut rule_ctx = RuleContext::new(ctx.catalogs);

    let records = match ctx.store.fetch(schema, key) {
        Ok(records) => records,
        Err(error) => return query_failure(codes, rule_ctx, key, &error),
    };
    let Some(record) = records.first() else {
        debug!(record_type = %record_type, key, "record not found");
        rule_ctx.reject(
            codes.not_found(),
            format!("no {} found with key {key}", record_type.label()),
            None,
        );
        return RecordVerdict::rejected(rule_ctx.into_ledger());
    };

    let mut valid = rules(record, &mut rule_ctx);

    if let Some(code) = codes.missing_beneficiary {
        let beneficiary = record.get(BENEFICIARY_REF_COLUMN);
        let count = match beneficiary.as_text() {
            Some(id) if !id.trim().is_empty() => {
                match ctx.store.count(RecordType::Beneficiary.schema(), &id) {
                    Ok(count) => count,
                    Err(error) => return query_failure(codes, rule_ctx, key, &error),
                }
            }
            _ => 0,
        };
        if count == 0 {
            let id = beneficiary.as_text().unwrap_or_default();
            rule_ctx.reject(
                code,
                format!("beneficiary {id} is not registered"),
                Some(BENEFICIARY_REF_COLUMN),
            );
            valid = false;
        }
    }

    let ledger = rule_ctx.into_ledger();
    RecordVerdict {
        valid: valid && !ledger.has_rejections(),
        records,
        ledger,
    }
}

fn query_failure(
    codes: &ValidatorCodes,
    mut rule_ctx: RuleContext<'_>,
    key: &str,
    error: &StoreError,
) -> RecordVerdict {
    warn!(
        record_type = %codes.record_type,
        key,
        error = %error,
        "record store query failed"
    );
    rule_ctx.reject(codes.query_error, format!("query error: {error}"), None);
    RecordVerdict::rejected(rule_ctx.into_ledger())
}

/// The nine standard validators, in submission order.
pub fn standard_validators() -> Vec<Box<dyn RecordValidator>> {
    vec![
        Box::new(TransactionValidator),
        Box::new(BeneficiaryValidator),
        Box::new(ConsultationValidator),
        Box::new(ProcedureValidator),
        Box::new(EmergencyValidator),
        Box::new(HospitalizationValidator),
        Box::new(NewbornValidator),
        Box::new(MedicationValidator),
        Box::new(OtherServiceValidator),
    ]
}
