//! JSON export of accepted records.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use rips_model::{Record, RecordType};

use crate::error::ExportError;
use crate::writer::{ExportWriter, export_file_name};

/// Writes each accepted record set to `<output_dir>/rips_<TAG>_<key>.json`.
#[derive(Debug, Clone)]
pub struct JsonExportWriter {
    output_dir: PathBuf,
}

impl JsonExportWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Path the export for `(record_type, key)` is written to.
    pub fn path_for(&self, record_type: RecordType, key: &str) -> PathBuf {
        self.output_dir.join(export_file_name(record_type, key))
    }
}

impl ExportWriter for JsonExportWriter {
    fn export(
        &self,
        record_type: RecordType,
        key: &str,
        records: &[Record],
    ) -> Result<String, ExportError> {
        fs::create_dir_all(&self.output_dir).map_err(|source| ExportError::Io {
            path: self.output_dir.clone(),
            source,
        })?;
        let path = self.path_for(record_type, key);
        let io_error = |source| ExportError::Io {
            path: path.clone(),
            source,
        };

        let file = File::create(&path).map_err(io_error)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, records)?;
        writer.write_all(b"\n").map_err(io_error)?;
        writer.flush().map_err(io_error)?;

        info!(
            record_type = %record_type,
            record_count = records.len(),
            path = %path.display(),
            "records exported"
        );
        Ok(path.display().to_string())
    }
}
