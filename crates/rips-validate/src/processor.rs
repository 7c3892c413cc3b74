//! Dispatch of validation requests to record validators.

use tracing::{debug, info, info_span, warn};

use rips_model::{OutcomeLedger, RecordType, RecordVerdict, ValidationResponse};
use rips_output::ExportWriter;
use rips_standards::CatalogSource;
use rips_store::RecordStore;

use crate::context::ValidationContext;
use crate::registry::ValidatorRegistry;

/// Entry point of the validation engine.
///
/// Owns the collaborators; each call gets a fresh ledger, so a processor can
/// be shared between threads.
pub struct RipsProcessor {
    registry: ValidatorRegistry,
    store: Box<dyn RecordStore>,
    catalogs: Box<dyn CatalogSource>,
    exporter: Box<dyn ExportWriter>,
}

impl RipsProcessor {
    pub fn new(
        store: impl RecordStore + 'static,
        catalogs: impl CatalogSource + 'static,
        exporter: impl ExportWriter + 'static,
    ) -> Self {
        Self {
            registry: ValidatorRegistry::standard(),
            store: Box::new(store),
            catalogs: Box::new(catalogs),
            exporter: Box::new(exporter),
        }
    }

    #[must_use]
    pub fn with_registry(mut self, registry: ValidatorRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn registry(&self) -> &ValidatorRegistry {
        &self.registry
    }

    /// Validate the record of type `tag` stored under `key` and export it
    /// when it is accepted. Failures are reported in the response, never
    /// raised.
    pub fn process(&self, tag: &str, key: &str) -> ValidationResponse {
        let span = info_span!("process", record_type = tag, key);
        let _guard = span.enter();

        let Some((record_type, validator)) = RecordType::parse(tag)
            .and_then(|record_type| Some((record_type, self.registry.get(record_type)?)))
        else {
            warn!("unsupported record type");
            let mut ledger = OutcomeLedger::new();
            ledger.reject(
                "ERR_GEN_001",
                format!("record type {tag} is not supported"),
                None,
            );
            return ValidationResponse::from_ledger(tag, key, false, ledger);
        };

        let ctx = ValidationContext::new(&*self.store, &*self.catalogs);
        let RecordVerdict {
            valid,
            records,
            mut ledger,
        } = validator.validate(key, &ctx);

        let has_rejections = ledger.has_rejections();
        if valid && has_rejections {
            warn!("validator accepted a record with rejections; treating it as invalid");
        }
        let mut valid = valid && !has_rejections;

        let mut export_location = None;
        if valid && self.exporter.enabled() {
            match self.exporter.export(record_type, key, &records) {
                Ok(location) => export_location = Some(location),
                Err(error) => {
                    warn!(error = %error, "export failed");
                    ledger.reject("ERR_GEN_002", format!("export failed: {error}"), None);
                    valid = false;
                }
            }
        }

        for outcome in ledger.outcomes().iter().filter(|outcome| outcome.is_rejection()) {
            debug!(code = outcome.code(), field = outcome.field(), "rejection");
        }
        info!(
            valid,
            rejections = ledger.rejection_count(),
            notifications = ledger.notification_count(),
            exported = export_location.is_some(),
            "record processed"
        );

        let mut response = ValidationResponse::from_ledger(record_type.code(), key, valid, ledger);
        response.exported = export_location.is_some();
        response.export_location = export_location;
        response
    }

    /// Process `(tag, key)` pairs in order.
    pub fn process_batch<I, T, K>(&self, items: I) -> Vec<ValidationResponse>
    where
        I: IntoIterator<Item = (T, K)>,
        T: AsRef<str>,
        K: AsRef<str>,
    {
        items
            .into_iter()
            .map(|(tag, key)| self.process(tag.as_ref(), key.as_ref()))
            .collect()
    }
}

impl std::fmt::Debug for RipsProcessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RipsProcessor")
            .field("registry", &self.registry)
            .field("exporter_enabled", &self.exporter.enabled())
            .finish_non_exhaustive()
    }
}
