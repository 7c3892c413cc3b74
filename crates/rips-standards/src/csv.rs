#![deny(unsafe_code)]

use std::path::Path;

use crate::catalog::CatalogRegistry;
use crate::error::StandardsError;

const CATALOG_COLUMN: &str = "catalog";
const CODE_COLUMN: &str = "code";

fn header_index(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|h| h.trim_matches('\u{feff}').trim().eq_ignore_ascii_case(name))
}

fn get_string(row: &csv::StringRecord, idx: usize) -> Option<String> {
    row.get(idx)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Load catalogs from a CSV export with `catalog` and `code` columns.
///
/// Extra columns (a `description`, for instance) are ignored, as are rows
/// missing either value.
pub fn load_catalog_csv(path: &Path) -> Result<CatalogRegistry, StandardsError> {
    let bytes = std::fs::read(path).map_err(|e| StandardsError::io(path, e))?;
    parse_catalog_csv(path, bytes.as_slice())
}

fn parse_catalog_csv(path: &Path, bytes: &[u8]) -> Result<CatalogRegistry, StandardsError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);
    let headers = reader
        .headers()
        .map_err(|e| StandardsError::csv(path, &e))?
        .clone();

    let missing = |column: &str| StandardsError::MissingColumn {
        path: path.to_path_buf(),
        column: column.to_string(),
    };
    let idx_catalog = header_index(&headers, CATALOG_COLUMN).ok_or_else(|| missing(CATALOG_COLUMN))?;
    let idx_code = header_index(&headers, CODE_COLUMN).ok_or_else(|| missing(CODE_COLUMN))?;

    let mut registry = CatalogRegistry::new();
    let mut code_count = 0usize;
    for row in reader.records() {
        let row = row.map_err(|e| StandardsError::csv(path, &e))?;
        let (Some(catalog), Some(code)) = (get_string(&row, idx_catalog), get_string(&row, idx_code))
        else {
            continue;
        };
        registry.add_code(catalog, code);
        code_count += 1;
    }

    tracing::info!(
        path = %path.display(),
        catalog_count = registry.len(),
        code_count,
        "catalogs loaded"
    );
    Ok(registry)
}
