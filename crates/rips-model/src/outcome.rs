use serde::{Deserialize, Serialize};

use crate::record::Record;

/// Provenance tag carried by every outcome.
pub const RIPS_SOURCE: &str = "RIPS";

/// Outcome classification.
///
/// Serialized with the RIPS labels (`RECHAZO` / `NOTIFICACION`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    /// Blocking: prevents export.
    #[serde(rename = "RECHAZO")]
    Rejection,
    /// Advisory: flagged for review, never blocking on its own.
    #[serde(rename = "NOTIFICACION")]
    Notification,
}

impl Classification {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Rejection => "Rejection",
            Self::Notification => "Notification",
        }
    }

    pub fn is_blocking(&self) -> bool {
        matches!(self, Self::Rejection)
    }
}

/// A single validation outcome. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    classification: Classification,
    /// Stable identifier, `PREFIX_FIELDGROUP_SEQ`.
    code: String,
    description: String,
    /// Offending attribute, when the outcome concerns one.
    field: Option<String>,
    source: String,
}

impl ValidationOutcome {
    pub fn new(
        classification: Classification,
        code: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            classification,
            code: code.into(),
            description: description.into(),
            field: None,
            source: RIPS_SOURCE.to_string(),
        }
    }

    pub fn rejection(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(Classification::Rejection, code, description)
    }

    pub fn notification(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(Classification::Notification, code, description)
    }

    #[must_use]
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn classification(&self) -> Classification {
        self.classification
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn is_rejection(&self) -> bool {
        self.classification.is_blocking()
    }
}

/// Ordered outcomes of one validation pass.
///
/// Created fresh for every validate call and handed back with the verdict;
/// order is execution order, not severity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutcomeLedger {
    outcomes: Vec<ValidationOutcome>,
}

impl OutcomeLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, outcome: ValidationOutcome) {
        self.outcomes.push(outcome);
    }

    /// Append a rejection.
    pub fn reject(
        &mut self,
        code: impl Into<String>,
        description: impl Into<String>,
        field: Option<&str>,
    ) {
        let mut outcome = ValidationOutcome::rejection(code, description);
        if let Some(field) = field {
            outcome = outcome.with_field(field);
        }
        self.push(outcome);
    }

    /// Append a notification.
    pub fn notify(
        &mut self,
        code: impl Into<String>,
        description: impl Into<String>,
        field: Option<&str>,
    ) {
        let mut outcome = ValidationOutcome::notification(code, description);
        if let Some(field) = field {
            outcome = outcome.with_field(field);
        }
        self.push(outcome);
    }

    pub fn extend(&mut self, other: OutcomeLedger) {
        self.outcomes.extend(other.outcomes);
    }

    pub fn outcomes(&self) -> &[ValidationOutcome] {
        &self.outcomes
    }

    pub fn into_outcomes(self) -> Vec<ValidationOutcome> {
        self.outcomes
    }

    pub fn has_rejections(&self) -> bool {
        self.outcomes.iter().any(ValidationOutcome::is_rejection)
    }

    pub fn rejection_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.is_rejection())
            .count()
    }

    pub fn notification_count(&self) -> usize {
        self.outcomes.len() - self.rejection_count()
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

/// What a record validator hands back for one key.
#[derive(Debug, Clone, Default)]
pub struct RecordVerdict {
    pub valid: bool,
    /// Fetched rows; empty when the record was not found or the fetch failed.
    pub records: Vec<Record>,
    pub ledger: OutcomeLedger,
}

impl RecordVerdict {
    /// Invalid verdict with no records.
    pub fn rejected(ledger: OutcomeLedger) -> Self {
        Self {
            valid: false,
            records: Vec::new(),
            ledger,
        }
    }
}
