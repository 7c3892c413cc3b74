//! SQLite-backed record store.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::types::{Value, ValueRef};
use rusqlite::{Connection, OpenFlags, Row, params, params_from_iter};
use tracing::debug;

use rips_model::{FieldValue, Record, RecordSchema};

use crate::browse::{BrowseQuery, Page, like_pattern};
use crate::error::{Result, StoreError};
use crate::store::{RecordStore, StoreConfig};

/// Record store over a SQLite database.
///
/// Table and column identifiers come from the static record schemas; keys
/// and filter values are bound parameters.
pub struct SqliteStore {
    conn: Mutex<Connection>,
    config: StoreConfig,
}

impl SqliteStore {
    /// Open an existing database read-only.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        debug!(path = %path.display(), "opened record store (read-only)");
        Ok(Self::from_connection(conn))
    }

    /// Open (or create) a database for reading and writing.
    pub fn open_read_write(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        debug!(path = %path.display(), "opened record store (read-write)");
        Ok(Self::from_connection(conn))
    }

    pub fn from_connection(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
            config: StoreConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: StoreConfig) -> Self {
        self.config = config;
        self
    }

    /// Locked access to the underlying connection.
    pub fn connection(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| StoreError::Poisoned)
    }

    /// Read one filtered page of a record table.
    pub fn browse(&self, query: &BrowseQuery) -> Result<Page> {
        let schema = query.record_type.schema();
        let table = self.config.table_for(schema);

        let mut conditions = Vec::new();
        let mut values = Vec::new();
        for (column, text) in query.active_filters() {
            if !schema.has_column(column) {
                return Err(StoreError::UnknownColumn {
                    table: table.to_string(),
                    column: column.to_string(),
                });
            }
            values.push(Value::Text(like_pattern(text)));
            conditions.push(format!(
                "{} LIKE ?{} ESCAPE '\\'",
                quote_ident(column),
                values.len()
            ));
        }

        let mut sql = format!("SELECT {} FROM {}", select_list(schema), quote_ident(table));
        if !conditions.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&conditions.join(" AND "));
        }
        values.push(Value::Integer(to_i64(query.page_size)));
        let limit_idx = values.len();
        values.push(Value::Integer(to_i64(query.offset())));
        let offset_idx = values.len();
        sql.push_str(&format!(
            " ORDER BY {} LIMIT ?{limit_idx} OFFSET ?{offset_idx}",
            quote_ident(schema.key_column)
        ));

        let conn = self.connection()?;
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
            .query_map(params_from_iter(values.iter()), |row| row_to_record(row, schema))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        debug!(
            table,
            page = query.page,
            row_count = rows.len(),
            "browsed record table"
        );
        Ok(Page {
            has_more: rows.len() == query.page_size,
            rows,
            page: query.page,
            page_size: query.page_size,
        })
    }
}

impl RecordStore for SqliteStore {
    fn fetch(&self, schema: &RecordSchema, key: &str) -> Result<Vec<Record>> {
        let table = self.config.table_for(schema);
        let sql = format!(
            "SELECT {} FROM {} WHERE {} = ?1",
            select_list(schema),
            quote_ident(table),
            quote_ident(schema.key_column)
        );
        let conn = self.connection()?;
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
            .query_map(params![key], |row| row_to_record(row, schema))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
    }

    fn count(&self, schema: &RecordSchema, key: &str) -> Result<u64> {
        let table = self.config.table_for(schema);
        let sql = format!(
            "SELECT COUNT(*) FROM {} WHERE {} = ?1",
            quote_ident(table),
            quote_ident(schema.key_column)
        );
        let conn = self.connection()?;
        let count: i64 = conn.query_row(&sql, params![key], |row| row.get(0))?;
        Ok(u64::try_from(count).unwrap_or_default())
    }
}

/// Quote an SQL identifier.
fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

fn select_list(schema: &RecordSchema) -> String {
    schema
        .columns
        .iter()
        .map(|column| quote_ident(column))
        .collect::<Vec<_>>()
        .join(", ")
}

fn to_i64(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

fn row_to_record(row: &Row<'_>, schema: &RecordSchema) -> rusqlite::Result<Record> {
    let mut record = Record::new();
    for (idx, column) in schema.columns.iter().enumerate() {
        record.insert(*column, value_from_ref(row.get_ref(idx)?));
    }
    Ok(record)
}

fn value_from_ref(value: ValueRef<'_>) -> FieldValue {
    match value {
        ValueRef::Null => FieldValue::Null,
        ValueRef::Integer(value) => FieldValue::Integer(value),
        ValueRef::Real(value) => FieldValue::Real(value),
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
            FieldValue::Text(String::from_utf8_lossy(bytes).into_owned())
        }
    }
}
