//! Data model for RIPS record validation.
//!
//! Record types and their tables, fetched record values, validation
//! outcomes and the caller-facing response.

pub mod error;
pub mod outcome;
pub mod record;
pub mod record_type;
pub mod response;

pub use error::{Result, RipsError};
pub use outcome::{
    Classification, OutcomeLedger, RIPS_SOURCE, RecordVerdict, ValidationOutcome,
};
pub use record::{FieldValue, Record};
pub use record_type::{BENEFICIARY_REF_COLUMN, RecordSchema, RecordType};
pub use response::ValidationResponse;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ledger_counts() {
        let mut ledger = OutcomeLedger::new();
        ledger.reject(
            "ERR_codPrestador_001",
            "codPrestador is required",
            Some("codPrestador"),
        );
        ledger.notify(
            "WARN_codConsulta_001",
            "code 999999 is not in catalog CUPS",
            Some("codConsulta"),
        );
        assert_eq!(ledger.rejection_count(), 1);
        assert_eq!(ledger.notification_count(), 1);
        assert!(ledger.has_rejections());
    }

    #[test]
    fn response_serializes() {
        let mut ledger = OutcomeLedger::new();
        ledger.notify("INFO_AC_001", "copay allowed", Some("conceptoRecaudo"));
        let response = ValidationResponse::from_ledger("AC", "CONS_001", true, ledger);
        let json = serde_json::to_string(&response).expect("serialize response");
        let round: ValidationResponse =
            serde_json::from_str(&json).expect("deserialize response");
        assert_eq!(round, response);
        assert!(!json.contains("exportLocation"));
    }
}
