//! RIPS validation engine.
//!
//! [`RipsProcessor`] resolves a record type tag to its [`RecordValidator`],
//! runs it against the record store and catalogs, applies the pass/fail
//! policy and hands accepted records to the export writer.
//!
//! ```text
//! process(tag, key)
//!   -> ValidatorRegistry::get(record_type)
//!   -> RecordValidator::validate(key, ctx)   fetch, field checks, cross rules
//!   -> valid = verdict.valid && no rejections
//!   -> ExportWriter::export(...)             only when valid
//! ```

pub mod checks;
mod context;
mod processor;
mod registry;
pub mod validators;

pub use checks::{RuleContext, StringRule, TIMESTAMP_FORMAT, parse_timestamp};
pub use context::ValidationContext;
pub use processor::RipsProcessor;
pub use registry::ValidatorRegistry;
pub use validators::{
    BeneficiaryValidator, ConsultationValidator, EmergencyValidator, HospitalizationValidator,
    MedicationValidator, NewbornValidator, OtherServiceValidator, ProcedureValidator,
    RecordValidator, TransactionValidator, standard_validators,
};
