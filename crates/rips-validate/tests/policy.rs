//! Pass/fail policy of the processor, independent of any record type's rules.

use std::sync::Mutex;

use proptest::prelude::*;

use rips_model::{OutcomeLedger, Record, RecordType, RecordVerdict};
use rips_output::{ExportError, ExportWriter};
use rips_standards::CatalogRegistry;
use rips_store::MemoryStore;
use rips_validate::{RecordValidator, RipsProcessor, ValidationContext, ValidatorRegistry};

/// Validator returning a fixed verdict.
struct Scripted {
    valid: bool,
    /// `true` entries become rejections, `false` entries notifications.
    outcomes: Vec<bool>,
}

impl RecordValidator for Scripted {
    fn record_type(&self) -> RecordType {
        RecordType::Consultation
    }

    fn validate(&self, _key: &str, _ctx: &ValidationContext<'_>) -> RecordVerdict {
        let mut ledger = OutcomeLedger::new();
        for (idx, rejection) in self.outcomes.iter().enumerate() {
            if *rejection {
                ledger.reject(format!("ERR_TEST_{idx:03}"), "scripted rejection", None);
            } else {
                ledger.notify(format!("INFO_TEST_{idx:03}"), "scripted notification", None);
            }
        }
        RecordVerdict {
            valid: self.valid,
            records: vec![Record::new().with("consecutivo", "K")],
            ledger,
        }
    }
}

/// Export writer that remembers what it was asked to write.
#[derive(Default)]
struct Recording {
    keys: Mutex<Vec<String>>,
}

impl ExportWriter for Recording {
    fn export(
        &self,
        record_type: RecordType,
        key: &str,
        _records: &[Record],
    ) -> Result<String, ExportError> {
        if let Ok(mut keys) = self.keys.lock() {
            keys.push(key.to_string());
        }
        Ok(format!("memory://{record_type}/{key}"))
    }
}

fn scripted_processor(valid: bool, outcomes: Vec<bool>) -> RipsProcessor {
    RipsProcessor::new(MemoryStore::new(), CatalogRegistry::builtin(), Recording::default())
        .with_registry(ValidatorRegistry::new().with(Box::new(Scripted { valid, outcomes })))
}

proptest! {
    #[test]
    fn valid_iff_verdict_valid_and_no_rejections(
        verdict_valid in any::<bool>(),
        outcomes in proptest::collection::vec(any::<bool>(), 0..8),
    ) {
        let has_rejection = outcomes.iter().any(|rejection| *rejection);
        let processor = scripted_processor(verdict_valid, outcomes.clone());
        let response = processor.process("AC", "K");

        prop_assert_eq!(response.valid, verdict_valid && !has_rejection);
        prop_assert_eq!(response.exported, response.valid);
        prop_assert_eq!(response.export_location.is_some(), response.valid);
        prop_assert_eq!(response.validation_results.len(), outcomes.len());
    }
}

#[test]
fn notifications_alone_keep_record_valid() {
    let processor = scripted_processor(true, vec![false, false, false]);
    let response = processor.process("AC", "K");
    assert!(response.valid);
    assert_eq!(response.export_location.as_deref(), Some("memory://AC/K"));
    assert_eq!(response.notification_count(), 3);
}

#[test]
fn unregistered_type_is_unsupported() {
    let processor = scripted_processor(true, Vec::new());
    let response = processor.process("AH", "K");
    assert_eq!(response.codes(), vec!["ERR_GEN_001"]);
}
