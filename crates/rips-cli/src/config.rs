//! `rips.toml` configuration.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use rips_standards::{CatalogRegistry, load_catalog_csv};
use rips_store::StoreConfig;

/// Configuration file looked up in the working directory when `--config`
/// is not given.
pub const DEFAULT_CONFIG_FILE: &str = "rips.toml";

/// Environment variable consulted for the database path.
pub const DATABASE_ENV: &str = "RIPS_DATABASE";

/// Settings read from the configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RipsConfig {
    /// SQLite database holding the RIPS tables.
    pub database: Option<PathBuf>,
    /// Directory accepted records are exported to.
    pub export_dir: PathBuf,
    /// Catalog CSV merged over the built-in catalogs.
    pub catalogs: Option<PathBuf>,
    /// Table name aliases, schema name to actual identifier.
    pub tables: BTreeMap<String, String>,
}

impl Default for RipsConfig {
    fn default() -> Self {
        Self {
            database: None,
            export_dir: PathBuf::from("exports"),
            catalogs: None,
            tables: BTreeMap::new(),
        }
    }
}

impl RipsConfig {
    /// Load `path`, or `./rips.toml` when no path is given and it exists.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    Self::from_file(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let mut config =
            Self::from_toml(&text).with_context(|| format!("parse config {}", path.display()))?;
        // Relative paths in the file are relative to the file itself.
        if let Some(base) = path.parent() {
            config.resolve_relative_to(base);
        }
        debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    fn resolve_relative_to(&mut self, base: &Path) {
        let resolve = |path: &mut PathBuf| {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        };
        if let Some(path) = self.database.as_mut() {
            resolve(path);
        }
        if let Some(path) = self.catalogs.as_mut() {
            resolve(path);
        }
        resolve(&mut self.export_dir);
    }

    /// Database path: command line first, then this file, then `env`.
    pub fn database_path(&self, cli: Option<&Path>, env: Option<PathBuf>) -> Option<PathBuf> {
        cli.map(Path::to_path_buf)
            .or_else(|| self.database.clone())
            .or(env)
    }

    /// Export directory: command line first, then this file.
    pub fn export_dir(&self, cli: Option<&Path>) -> PathBuf {
        cli.map_or_else(|| self.export_dir.clone(), Path::to_path_buf)
    }

    pub fn store_config(&self) -> StoreConfig {
        StoreConfig {
            tables: self.tables.clone(),
        }
    }

    /// Built-in catalogs, overlaid with the configured catalog file.
    pub fn catalog_registry(&self) -> Result<CatalogRegistry> {
        let mut registry = CatalogRegistry::builtin();
        if let Some(path) = &self.catalogs {
            let loaded = load_catalog_csv(path)
                .with_context(|| format!("load catalogs {}", path.display()))?;
            registry.merge(loaded);
        }
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = RipsConfig::from_toml("").unwrap();
        assert_eq!(config, RipsConfig::default());
        assert_eq!(config.export_dir, PathBuf::from("exports"));
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        assert!(RipsConfig::from_toml("databse = \"rips.db\"").is_err());
    }

    #[test]
    fn test_database_precedence() {
        let config = RipsConfig::from_toml("database = \"file.db\"").unwrap();
        let env = Some(PathBuf::from("env.db"));
        assert_eq!(
            config.database_path(Some(Path::new("cli.db")), env.clone()),
            Some(PathBuf::from("cli.db"))
        );
        assert_eq!(
            config.database_path(None, env.clone()),
            Some(PathBuf::from("file.db"))
        );
        assert_eq!(
            RipsConfig::default().database_path(None, env),
            Some(PathBuf::from("env.db"))
        );
        assert_eq!(RipsConfig::default().database_path(None, None), None);
    }
}
