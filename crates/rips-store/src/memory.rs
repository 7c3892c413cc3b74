//! In-process record store.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicUsize, Ordering};

use rips_model::{Record, RecordSchema, RecordType};

use crate::error::{Result, StoreError};
use crate::store::RecordStore;

/// Record store holding rows in memory, keyed by table name.
///
/// Tables can be marked unavailable to exercise storage failure paths.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: BTreeMap<String, Vec<Record>>,
    unavailable: BTreeSet<String>,
    queries: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert of one row into the record type's table.
    #[must_use]
    pub fn with_record(mut self, record_type: RecordType, record: Record) -> Self {
        self.insert(record_type, record);
        self
    }

    pub fn insert(&mut self, record_type: RecordType, record: Record) {
        self.tables
            .entry(record_type.schema().table.to_string())
            .or_default()
            .push(record);
    }

    /// Make every query against the record type's table fail.
    #[must_use]
    pub fn with_unavailable(mut self, record_type: RecordType) -> Self {
        self.unavailable
            .insert(record_type.schema().table.to_string());
        self
    }

    /// Number of fetch/count calls served so far.
    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::Relaxed)
    }

    fn matching<'a>(
        &'a self,
        schema: &'a RecordSchema,
        key: &'a str,
    ) -> Result<impl Iterator<Item = &'a Record> + 'a> {
        self.queries.fetch_add(1, Ordering::Relaxed);
        if self.unavailable.contains(schema.table) {
            return Err(StoreError::Unavailable(format!(
                "table {} is unavailable",
                schema.table
            )));
        }
        let key_column = schema.key_column;
        Ok(self
            .tables
            .get(schema.table)
            .into_iter()
            .flatten()
            .filter(move |record| record.get(key_column).as_text().as_deref() == Some(key)))
    }
}

impl RecordStore for MemoryStore {
    fn fetch(&self, schema: &RecordSchema, key: &str) -> Result<Vec<Record>> {
        let columns = schema.columns;
        Ok(self
            .matching(schema, key)?
            .map(|record| {
                columns
                    .iter()
                    .map(|column| (*column, record.get(column).clone()))
                    .collect::<Record>()
            })
            .collect())
    }

    fn count(&self, schema: &RecordSchema, key: &str) -> Result<u64> {
        Ok(self.matching(schema, key)?.count() as u64)
    }
}
