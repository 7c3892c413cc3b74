#![deny(unsafe_code)]

//! Code catalogs for coded RIPS fields.
//!
//! Rule logic only ever sees the [`CatalogSource`] capability, so the
//! backing source (built-in sample sets, a CSV export of the authoritative
//! tables, a remote service) can change without touching the validators.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

/// Catalog names used by the RIPS validators.
pub mod names {
    /// Procedure and consultation codes (CUPS).
    pub const CUPS: &str = "CUPS";
    /// Diagnosis codes (ICD-10).
    pub const CIE10: &str = "CIE10";
    /// Drug codes (ATC).
    pub const ATC: &str = "ATC";
    pub const TIPO_DOCUMENTO: &str = "TIPO_DOCUMENTO";
    pub const TIPO_NOTA: &str = "TIPO_NOTA";
    pub const CONCEPTO_RECAUDO: &str = "CONCEPTO_RECAUDO";
    pub const VIA_INGRESO: &str = "VIA_INGRESO";
    pub const CAUSA_EXTERNA: &str = "CAUSA_EXTERNA";
    pub const TIPO_OS: &str = "TIPO_OS";
}

/// Lookup of valid codes by catalog name. Read-only at validation time.
pub trait CatalogSource: Send + Sync {
    /// Codes of a catalog, `None` when the catalog is unknown.
    fn codes(&self, catalog: &str) -> Option<&BTreeSet<String>>;

    /// Exact membership test; unknown catalogs contain nothing.
    fn contains(&self, catalog: &str, code: &str) -> bool {
        self.codes(catalog).is_some_and(|codes| codes.contains(code))
    }
}

/// In-process catalog store.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CatalogRegistry {
    catalogs: BTreeMap<String, BTreeSet<String>>,
}

impl CatalogRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reference sample sets.
    ///
    /// These are small fixed samples; production deployments should merge an
    /// authoritative export on top (see [`crate::load_catalog_csv`]).
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.insert_catalog(names::CUPS, ["890501", "890601"]);
        registry.insert_catalog(names::CIE10, ["E119", "J459"]);
        registry.insert_catalog(names::ATC, ["A10BA02"]);
        registry.insert_catalog(names::TIPO_DOCUMENTO, ["CC", "TI", "CE", "PA"]);
        registry.insert_catalog(names::TIPO_NOTA, ["SF", "RS"]);
        registry.insert_catalog(names::CONCEPTO_RECAUDO, ["01", "02", "03"]);
        registry.insert_catalog(names::VIA_INGRESO, ["01", "02", "03"]);
        registry.insert_catalog(names::CAUSA_EXTERNA, ["01", "02", "15"]);
        registry.insert_catalog(names::TIPO_OS, ["01", "02", "03"]);
        registry
    }

    /// Replace a catalog with the given codes.
    pub fn insert_catalog<I, S>(&mut self, name: impl Into<String>, codes: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.catalogs
            .insert(name.into(), codes.into_iter().map(Into::into).collect());
    }

    /// Add one code, creating the catalog if needed.
    pub fn add_code(&mut self, name: impl Into<String>, code: impl Into<String>) {
        self.catalogs
            .entry(name.into())
            .or_default()
            .insert(code.into());
    }

    /// Overlay `other`: its catalogs replace same-named catalogs here.
    pub fn merge(&mut self, other: CatalogRegistry) {
        for (name, codes) in other.catalogs {
            tracing::debug!(catalog = %name, code_count = codes.len(), "catalog overridden");
            self.catalogs.insert(name, codes);
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.catalogs.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.catalogs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalogs.is_empty()
    }
}

impl CatalogSource for CatalogRegistry {
    fn codes(&self, catalog: &str) -> Option<&BTreeSet<String>> {
        self.catalogs.get(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalogs() {
        let registry = CatalogRegistry::builtin();
        assert_eq!(registry.len(), 9);
        assert!(registry.contains(names::CUPS, "890501"));
        assert!(registry.contains(names::TIPO_NOTA, "RS"));
        assert!(!registry.contains(names::CUPS, "999999"));
    }

    #[test]
    fn test_unknown_catalog_contains_nothing() {
        let registry = CatalogRegistry::builtin();
        assert!(registry.codes("NOPE").is_none());
        assert!(!registry.contains("NOPE", "01"));
    }

    #[test]
    fn test_lookup_is_exact() {
        let registry = CatalogRegistry::builtin();
        assert!(!registry.contains(names::TIPO_DOCUMENTO, "cc"));
        assert!(!registry.contains(names::TIPO_DOCUMENTO, " CC"));
    }

    #[test]
    fn test_merge_replaces_catalog() {
        let mut registry = CatalogRegistry::builtin();
        let mut loaded = CatalogRegistry::new();
        loaded.insert_catalog(names::CIE10, ["A000"]);
        loaded.add_code("EXTRA", "X1");
        registry.merge(loaded);
        assert!(registry.contains(names::CIE10, "A000"));
        assert!(!registry.contains(names::CIE10, "E119"));
        assert!(registry.contains("EXTRA", "X1"));
        assert!(registry.contains(names::CUPS, "890601"));
    }
}
