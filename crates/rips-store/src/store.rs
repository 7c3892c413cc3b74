use std::collections::BTreeMap;
use std::sync::Arc;

use rips_model::{Record, RecordSchema};

use crate::error::Result;

/// Keyed access to RIPS record tables.
///
/// Implementations must bind the key as a query parameter; it is never
/// spliced into query text.
pub trait RecordStore: Send + Sync {
    /// Rows of `schema.table` whose key column equals `key`.
    fn fetch(&self, schema: &RecordSchema, key: &str) -> Result<Vec<Record>>;

    /// Number of rows of `schema.table` whose key column equals `key`.
    fn count(&self, schema: &RecordSchema, key: &str) -> Result<u64>;
}

impl<T: RecordStore + ?Sized> RecordStore for Box<T> {
    fn fetch(&self, schema: &RecordSchema, key: &str) -> Result<Vec<Record>> {
        (**self).fetch(schema, key)
    }

    fn count(&self, schema: &RecordSchema, key: &str) -> Result<u64> {
        (**self).count(schema, key)
    }
}

impl<T: RecordStore + ?Sized> RecordStore for Arc<T> {
    fn fetch(&self, schema: &RecordSchema, key: &str) -> Result<Vec<Record>> {
        (**self).fetch(schema, key)
    }

    fn count(&self, schema: &RecordSchema, key: &str) -> Result<u64> {
        (**self).count(schema, key)
    }
}

/// Deployment-specific storage settings.
#[derive(Debug, Clone, Default)]
pub struct StoreConfig {
    /// Schema table name to actual table identifier.
    pub tables: BTreeMap<String, String>,
}

impl StoreConfig {
    pub fn with_table_alias(mut self, table: impl Into<String>, actual: impl Into<String>) -> Self {
        self.tables.insert(table.into(), actual.into());
        self
    }

    /// Table identifier to query for a schema.
    pub fn table_for<'a>(&'a self, schema: &'a RecordSchema) -> &'a str {
        self.tables
            .get(schema.table)
            .map_or(schema.table, String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use rips_model::RecordType;

    use super::*;

    #[test]
    fn test_alias_resolution() {
        let config = StoreConfig::default().with_table_alias("Hospitalizacion", "Hospitalización");
        assert_eq!(
            config.table_for(RecordType::Hospitalization.schema()),
            "Hospitalización"
        );
        assert_eq!(config.table_for(RecordType::Newborn.schema()), "Recien_Nacido");
    }
}
