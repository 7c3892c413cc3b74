//! Field-level rule primitives.
//!
//! Every primitive appends at most one outcome and reports whether the value
//! passed. [`RuleContext`] groups them around the ledger of a single call.

pub mod catalog;
pub mod date;
pub mod number;
pub mod string;

pub use date::{TIMESTAMP_FORMAT, parse_timestamp};
pub use string::StringRule;

use rips_model::{FieldValue, OutcomeLedger, Record};
use rips_standards::CatalogSource;

/// Per-call rule state: the ledger being filled and the catalogs to check
/// coded values against.
pub struct RuleContext<'a> {
    catalogs: &'a dyn CatalogSource,
    ledger: OutcomeLedger,
}

impl<'a> RuleContext<'a> {
    pub fn new(catalogs: &'a dyn CatalogSource) -> Self {
        Self {
            catalogs,
            ledger: OutcomeLedger::new(),
        }
    }

    pub fn required_string(&mut self, value: &FieldValue, rule: &StringRule<'_>) -> bool {
        string::check(&mut self.ledger, value, rule)
    }

    pub fn catalog_code(&mut self, value: &FieldValue, field: &str, catalog: &str) -> bool {
        catalog::check(&mut self.ledger, self.catalogs, value, field, catalog)
    }

    pub fn date_format(&mut self, value: &FieldValue, field: &str, required: bool) -> bool {
        date::check(&mut self.ledger, value, field, required)
    }

    pub fn number_range(
        &mut self,
        value: &FieldValue,
        field: &str,
        min: Option<f64>,
        max: Option<f64>,
    ) -> bool {
        number::check(&mut self.ledger, value, field, min, max)
    }

    /// Required text attribute of `record`.
    pub fn text(&mut self, record: &Record, field: &str, max_len: usize) -> bool {
        self.required_string(record.get(field), &StringRule::required(field, max_len))
    }

    pub fn optional_text(&mut self, record: &Record, field: &str, max_len: usize) -> bool {
        self.required_string(record.get(field), &StringRule::optional(field, max_len))
    }

    /// Catalog membership of a record attribute; blank values are skipped.
    pub fn catalog(&mut self, record: &Record, field: &str, catalog: &str) -> bool {
        self.catalog_code(record.get(field), field, catalog)
    }

    /// Required timestamp attribute of `record`.
    pub fn date(&mut self, record: &Record, field: &str) -> bool {
        self.date_format(record.get(field), field, true)
    }

    pub fn number(
        &mut self,
        record: &Record,
        field: &str,
        min: Option<f64>,
        max: Option<f64>,
    ) -> bool {
        self.number_range(record.get(field), field, min, max)
    }

    pub fn reject(
        &mut self,
        code: impl Into<String>,
        description: impl Into<String>,
        field: Option<&str>,
    ) {
        self.ledger.reject(code, description, field);
    }

    pub fn notify(
        &mut self,
        code: impl Into<String>,
        description: impl Into<String>,
        field: Option<&str>,
    ) {
        self.ledger.notify(code, description, field);
    }

    pub fn ledger(&self) -> &OutcomeLedger {
        &self.ledger
    }

    pub fn into_ledger(self) -> OutcomeLedger {
        self.ledger
    }
}
