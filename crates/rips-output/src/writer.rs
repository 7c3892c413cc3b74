use std::fmt::Write as _;

use rips_model::{Record, RecordType};

use crate::error::ExportError;

/// Persists accepted records and reports where they went.
pub trait ExportWriter: Send + Sync {
    /// Write `records` for `(record_type, key)`; returns the location.
    fn export(
        &self,
        record_type: RecordType,
        key: &str,
        records: &[Record],
    ) -> Result<String, ExportError>;

    /// Whether this writer actually persists anything.
    fn enabled(&self) -> bool {
        true
    }
}

/// Writer used when exports are switched off.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoExport;

impl ExportWriter for NoExport {
    fn export(
        &self,
        _record_type: RecordType,
        _key: &str,
        _records: &[Record],
    ) -> Result<String, ExportError> {
        Ok(String::new())
    }

    fn enabled(&self) -> bool {
        false
    }
}

/// Deterministic export file name for `(record_type, key)`.
///
/// ASCII alphanumerics, `-` and `_` are kept; every other byte of the key is
/// written as `%XX`, so distinct keys never share a file.
pub fn export_file_name(record_type: RecordType, key: &str) -> String {
    let mut name = format!("rips_{}_", record_type.code());
    for byte in key.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_') {
            name.push(char::from(byte));
        } else {
            // Writing to a String cannot fail.
            let _ = write!(name, "%{byte:02X}");
        }
    }
    name.push_str(".json");
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_file_name() {
        assert_eq!(
            export_file_name(RecordType::Consultation, "CONS_001"),
            "rips_AC_CONS_001.json"
        );
        assert_eq!(
            export_file_name(RecordType::Beneficiary, "../12 34"),
            "rips_US_%2E%2E%2F12%2034.json"
        );
    }

    #[test]
    fn test_escaped_keys_do_not_collide() {
        let slash = export_file_name(RecordType::Consultation, "CONS/001");
        let underscore = export_file_name(RecordType::Consultation, "CONS_001");
        let accented = export_file_name(RecordType::Consultation, "CONSÉ001");
        let literal = export_file_name(RecordType::Consultation, "CONS%2F001");
        assert_eq!(slash, "rips_AC_CONS%2F001.json");
        assert_eq!(accented, "rips_AC_CONS%C3%89001.json");
        assert_eq!(literal, "rips_AC_CONS%252F001.json");
        assert_ne!(slash, underscore);
        assert_ne!(slash, literal);
        assert_ne!(
            export_file_name(RecordType::Consultation, " CONS_001"),
            underscore
        );
    }
}
