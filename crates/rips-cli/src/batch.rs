//! Batch request files: CSV with `type` and `key` columns.

use std::path::Path;

use anyhow::{Context, Result, bail};

/// One `(record type, key)` request of a batch file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchItem {
    pub record_type: String,
    pub key: String,
}

/// Read a batch file. Header names are case-insensitive; rows whose key is
/// blank are skipped.
pub fn read_batch_file(path: &Path) -> Result<Vec<BatchItem>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("open batch file {}", path.display()))?;
    read_batch(&mut reader).with_context(|| format!("read batch file {}", path.display()))
}

fn read_batch<R: std::io::Read>(reader: &mut csv::Reader<R>) -> Result<Vec<BatchItem>> {
    let headers = reader.headers()?.clone();
    let type_idx = header_index(&headers, "type")?;
    let key_idx = header_index(&headers, "key")?;

    let mut items = Vec::new();
    for record in reader.records() {
        let record = record?;
        let record_type = record.get(type_idx).unwrap_or_default();
        let key = record.get(key_idx).unwrap_or_default();
        if key.is_empty() {
            continue;
        }
        items.push(BatchItem {
            record_type: record_type.to_string(),
            key: key.to_string(),
        });
    }
    Ok(items)
}

fn header_index(headers: &csv::StringRecord, name: &str) -> Result<usize> {
    match headers
        .iter()
        .position(|header| header.trim_start_matches('\u{feff}').eq_ignore_ascii_case(name))
    {
        Some(idx) => Ok(idx),
        None => bail!("missing column `{name}`"),
    }
}
