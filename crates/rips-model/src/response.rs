use serde::{Deserialize, Serialize};

use crate::outcome::{OutcomeLedger, ValidationOutcome};

/// Caller-facing result of processing one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResponse {
    /// Canonical record type tag; the caller's text when the tag is unsupported.
    pub record_type: String,
    pub key: String,
    pub valid: bool,
    pub validation_results: Vec<ValidationOutcome>,
    pub exported: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_location: Option<String>,
}

impl ValidationResponse {
    /// Response carrying the ledger outcomes, not yet exported.
    pub fn from_ledger(
        record_type: impl Into<String>,
        key: impl Into<String>,
        valid: bool,
        ledger: OutcomeLedger,
    ) -> Self {
        Self {
            record_type: record_type.into(),
            key: key.into(),
            valid,
            validation_results: ledger.into_outcomes(),
            exported: false,
            export_location: None,
        }
    }

    pub fn has_rejections(&self) -> bool {
        self.validation_results
            .iter()
            .any(ValidationOutcome::is_rejection)
    }

    pub fn rejection_count(&self) -> usize {
        self.validation_results
            .iter()
            .filter(|outcome| outcome.is_rejection())
            .count()
    }

    pub fn notification_count(&self) -> usize {
        self.validation_results.len() - self.rejection_count()
    }

    /// Outcome codes in encounter order.
    pub fn codes(&self) -> Vec<&str> {
        self.validation_results
            .iter()
            .map(ValidationOutcome::code)
            .collect()
    }
}
