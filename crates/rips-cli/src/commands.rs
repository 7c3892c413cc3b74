use std::path::PathBuf;

use anyhow::{Context, Result, anyhow, bail};
use comfy_table::Table;
use tracing::{debug, info, info_span};

use rips_model::{RecordType, ValidationResponse};
use rips_output::{JsonExportWriter, NoExport};
use rips_standards::CatalogSource;
use rips_store::{BrowseQuery, SqliteStore};
use rips_validate::RipsProcessor;
use rips_cli::batch::read_batch_file;
use rips_cli::config::RipsConfig;
use rips_cli::logging::redact_value;

use crate::cli::{BatchArgs, BrowseArgs, ExportArgs, ValidateArgs};
use crate::summary::{apply_table_style, print_batch, print_response, record_table};

/// Resolved global settings shared by the subcommands.
pub struct Settings {
    pub config: RipsConfig,
    pub database: Option<PathBuf>,
}

impl Settings {
    fn open_store(&self) -> Result<SqliteStore> {
        let path = self.database.as_deref().ok_or_else(|| {
            anyhow!("no database configured (use --database, the config file or RIPS_DATABASE)")
        })?;
        let store = SqliteStore::open(path)
            .with_context(|| format!("open database {}", path.display()))?;
        Ok(store.with_config(self.config.store_config()))
    }

    fn processor(&self, export: &ExportArgs) -> Result<RipsProcessor> {
        let store = self.open_store()?;
        let catalogs = self.config.catalog_registry()?;
        let processor = if export.no_export {
            RipsProcessor::new(store, catalogs, NoExport)
        } else {
            let export_dir = self.config.export_dir(export.export_dir.as_deref());
            debug!(export_dir = %export_dir.display(), "exports enabled");
            RipsProcessor::new(store, catalogs, JsonExportWriter::new(export_dir))
        };
        Ok(processor)
    }
}

/// Validate one record. Returns whether it was accepted.
pub fn run_validate(settings: &Settings, args: &ValidateArgs) -> Result<bool> {
    let processor = settings.processor(&args.export)?;
    let response = processor.process(&args.record_type, &args.key);
    report(std::slice::from_ref(&response), args.export.json, |responses| {
        responses.iter().for_each(print_response);
    })?;
    Ok(response.valid)
}

/// Validate every record of a batch file. Returns whether all were accepted.
pub fn run_batch(settings: &Settings, args: &BatchArgs) -> Result<bool> {
    let span = info_span!("batch", file = %args.file.display());
    let _guard = span.enter();
    let items = read_batch_file(&args.file)?;
    let processor = settings.processor(&args.export)?;
    let responses = processor.process_batch(
        items
            .iter()
            .map(|item| (item.record_type.as_str(), item.key.as_str())),
    );
    let accepted = responses.iter().filter(|response| response.valid).count();
    info!(
        records = responses.len(),
        accepted,
        rejected = responses.len() - accepted,
        "batch finished"
    );
    report(&responses, args.export.json, |responses| {
        print_batch(responses);
    })?;
    Ok(accepted == responses.len())
}

fn report<F>(responses: &[ValidationResponse], json: bool, print: F) -> Result<()>
where
    F: FnOnce(&[ValidationResponse]),
{
    if json {
        let text = match responses {
            [single] => serde_json::to_string_pretty(single),
            _ => serde_json::to_string_pretty(responses),
        }
        .context("serialize response")?;
        println!("{text}");
    } else {
        print(responses);
    }
    Ok(())
}

pub fn run_browse(settings: &Settings, args: &BrowseArgs) -> Result<()> {
    let record_type = parse_record_type(&args.record_type)?;
    if args.page == 0 || args.page_size == 0 {
        bail!("--page and --page-size must be at least 1");
    }
    let mut query = BrowseQuery::new(record_type).with_page(args.page, args.page_size);
    for filter in &args.filters {
        let (column, text) = parse_filter(filter)?;
        debug!(column, text = redact_value(text), "browse filter");
        query = query.with_filter(column, text);
    }

    let store = settings.open_store()?;
    let page = store
        .browse(&query)
        .with_context(|| format!("browse {record_type} records"))?;
    println!(
        "{} ({}), page {}: {} rows{}",
        record_type.label(),
        record_type,
        page.page,
        page.rows.len(),
        if page.has_more { ", more available" } else { "" }
    );
    if !page.rows.is_empty() {
        println!("{}", record_table(record_type.schema(), &page.rows));
    }
    Ok(())
}

pub fn run_types() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Type", "Record", "Table", "Key", "Columns"]);
    apply_table_style(&mut table);
    for record_type in RecordType::all() {
        let schema = record_type.schema();
        table.add_row(vec![
            record_type.code().to_string(),
            record_type.label().to_string(),
            schema.table.to_string(),
            schema.key_column.to_string(),
            schema.columns.join(", "),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_catalogs(settings: &Settings) -> Result<()> {
    let registry = settings.config.catalog_registry()?;
    let mut table = Table::new();
    table.set_header(vec!["Catalog", "Codes", "Values"]);
    apply_table_style(&mut table);
    for name in registry.names() {
        let codes: Vec<&str> = registry
            .codes(name)
            .map(|codes| codes.iter().map(String::as_str).collect())
            .unwrap_or_default();
        table.add_row(vec![
            name.to_string(),
            codes.len().to_string(),
            codes.join(", "),
        ]);
    }
    println!("{table}");
    Ok(())
}

fn parse_record_type(tag: &str) -> Result<RecordType> {
    RecordType::parse(tag).ok_or_else(|| anyhow!("record type {tag} is not supported"))
}

/// Split a `COLUMN=TEXT` filter argument.
fn parse_filter(filter: &str) -> Result<(&str, &str)> {
    let (column, text) = filter
        .split_once('=')
        .ok_or_else(|| anyhow!("invalid filter `{filter}` (expected COLUMN=TEXT)"))?;
    let column = column.trim();
    if column.is_empty() {
        bail!("invalid filter `{filter}` (empty column name)");
    }
    Ok((column, text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_filter() {
        assert_eq!(
            parse_filter("codPrestador=1100").unwrap(),
            ("codPrestador", "1100")
        );
        assert_eq!(parse_filter(" tipoOS =01=x").unwrap(), ("tipoOS", "01=x"));
        assert!(parse_filter("codPrestador").is_err());
        assert!(parse_filter("=x").is_err());
    }

    #[test]
    fn test_parse_record_type() {
        assert_eq!(parse_record_type("am").unwrap(), RecordType::Medication);
        assert!(parse_record_type("ZZ").is_err());
    }
}
