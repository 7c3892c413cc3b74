use std::collections::BTreeMap;

use rips_model::RecordType;

use crate::validators::{RecordValidator, standard_validators};

/// Validators keyed by the record type they handle.
#[derive(Default)]
pub struct ValidatorRegistry {
    validators: BTreeMap<RecordType, Box<dyn RecordValidator>>,
}

impl ValidatorRegistry {
    /// Empty registry; every tag is unsupported until registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with a validator for every RIPS record type.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        for validator in standard_validators() {
            registry.register(validator);
        }
        registry
    }

    /// Register a validator, replacing any previous one for its record type.
    pub fn register(&mut self, validator: Box<dyn RecordValidator>) -> &mut Self {
        self.validators.insert(validator.record_type(), validator);
        self
    }

    #[must_use]
    pub fn with(mut self, validator: Box<dyn RecordValidator>) -> Self {
        self.register(validator);
        self
    }

    pub fn get(&self, record_type: RecordType) -> Option<&dyn RecordValidator> {
        self.validators.get(&record_type).map(Box::as_ref)
    }

    pub fn record_types(&self) -> impl Iterator<Item = RecordType> + '_ {
        self.validators.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}

impl std::fmt::Debug for ValidatorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.validators.keys()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_covers_every_type() {
        let registry = ValidatorRegistry::standard();
        assert_eq!(
            registry.record_types().collect::<Vec<_>>(),
            RecordType::all().to_vec()
        );
        for record_type in RecordType::all() {
            let validator = registry.get(*record_type).expect("registered");
            assert_eq!(validator.record_type(), *record_type);
        }
    }

    #[test]
    fn test_empty_registry() {
        let registry = ValidatorRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.get(RecordType::Consultation).is_none());
    }
}
