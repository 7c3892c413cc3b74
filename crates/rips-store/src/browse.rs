//! Paginated, filtered reads of a record table.

use rips_model::{Record, RecordType};

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 1000;

/// A filtered page request against one record table.
///
/// Filters are substring matches (`LIKE %text%`) on schema columns; the text
/// is always bound as a parameter.
#[derive(Debug, Clone)]
pub struct BrowseQuery {
    pub record_type: RecordType,
    pub filters: Vec<(String, String)>,
    /// 1-based page number.
    pub page: usize,
    pub page_size: usize,
}

impl BrowseQuery {
    pub fn new(record_type: RecordType) -> Self {
        Self {
            record_type,
            filters: Vec::new(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    #[must_use]
    pub fn with_filter(mut self, column: impl Into<String>, text: impl Into<String>) -> Self {
        self.filters.push((column.into(), text.into()));
        self
    }

    #[must_use]
    pub fn with_page(mut self, page: usize, page_size: usize) -> Self {
        self.page = page.max(1);
        self.page_size = page_size.max(1);
        self
    }

    /// Rows skipped before this page, saturating for pages past any table.
    pub fn offset(&self) -> usize {
        (self.page.max(1) - 1).saturating_mul(self.page_size)
    }

    /// Filters with non-blank text.
    pub fn active_filters(&self) -> impl Iterator<Item = (&str, &str)> {
        self.filters
            .iter()
            .map(|(column, text)| (column.as_str(), text.trim()))
            .filter(|(_, text)| !text.is_empty())
    }
}

/// One page of rows.
#[derive(Debug, Clone)]
pub struct Page {
    pub rows: Vec<Record>,
    pub page: usize,
    pub page_size: usize,
    /// A full page was returned, so another one may follow.
    pub has_more: bool,
}

/// Escape `LIKE` wildcards so filter text matches literally.
pub(crate) fn like_pattern(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len() + 2);
    escaped.push('%');
    for ch in text.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push('%');
    escaped
}
