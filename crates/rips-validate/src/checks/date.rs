//! Timestamp format check (`YYYY-MM-DD HH:MM:SS`, timezone-naive).

use chrono::NaiveDateTime;

use rips_model::{FieldValue, OutcomeLedger};

/// Reference timestamp format of RIPS date fields.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse a RIPS timestamp; `None` for blank or malformed values.
pub fn parse_timestamp(value: &FieldValue) -> Option<NaiveDateTime> {
    let text = value.trimmed()?;
    NaiveDateTime::parse_from_str(&text, TIMESTAMP_FORMAT).ok()
}

pub fn check(ledger: &mut OutcomeLedger, value: &FieldValue, field: &str, required: bool) -> bool {
    if value.is_blank() {
        if required {
            ledger.reject(
                format!("ERR_{field}_001"),
                format!("field {field} is required"),
                Some(field),
            );
            return false;
        }
        return true;
    }

    if parse_timestamp(value).is_none() {
        ledger.reject(
            format!("ERR_{field}_004"),
            format!("field {field} is not a valid date (expected YYYY-MM-DD HH:MM:SS)"),
            Some(field),
        );
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_timestamp() {
        let mut ledger = OutcomeLedger::new();
        let value = FieldValue::text("2024-01-10 08:00:00");
        assert!(check(&mut ledger, &value, "fechaIngreso", true));
        assert!(ledger.is_empty());
        assert!(parse_timestamp(&value).is_some());
    }

    #[test]
    fn test_date_without_time_is_rejected() {
        let mut ledger = OutcomeLedger::new();
        assert!(!check(
            &mut ledger,
            &FieldValue::text("2024-01-10"),
            "fechaConsulta",
            true
        ));
        assert_eq!(ledger.outcomes()[0].code(), "ERR_fechaConsulta_004");
    }

    #[test]
    fn test_impossible_date_is_rejected() {
        let mut ledger = OutcomeLedger::new();
        assert!(!check(
            &mut ledger,
            &FieldValue::text("2024-02-30 08:00:00"),
            "fechaNacimiento",
            true
        ));
    }

    #[test]
    fn test_missing_required_date() {
        let mut ledger = OutcomeLedger::new();
        assert!(!check(&mut ledger, &FieldValue::Null, "fechaEgreso", true));
        assert_eq!(ledger.outcomes()[0].code(), "ERR_fechaEgreso_001");
        let mut optional = OutcomeLedger::new();
        assert!(check(&mut optional, &FieldValue::Null, "fechaEgreso", false));
        assert!(optional.is_empty());
    }
}
