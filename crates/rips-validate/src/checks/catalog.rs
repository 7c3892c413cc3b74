//! Catalog membership check for coded fields.
//!
//! Unknown codes are flagged for review, not rejected.

use rips_model::{FieldValue, OutcomeLedger};
use rips_standards::CatalogSource;

/// Returns false (with a notification) when a present value is not in the
/// catalog. Blank values pass.
pub fn check(
    ledger: &mut OutcomeLedger,
    catalogs: &dyn CatalogSource,
    value: &FieldValue,
    field: &str,
    catalog: &str,
) -> bool {
    let Some(code) = value.trimmed() else {
        return true;
    };
    if catalogs.contains(catalog, &code) {
        return true;
    }
    ledger.notify(
        format!("WARN_{field}_001"),
        format!("code {code} in {field} is not in catalog {catalog}"),
        Some(field),
    );
    false
}

#[cfg(test)]
mod tests {
    use rips_model::Classification;
    use rips_standards::{CatalogRegistry, names};

    use super::*;

    #[test]
    fn test_unknown_code_is_notification() {
        let catalogs = CatalogRegistry::builtin();
        let mut ledger = OutcomeLedger::new();
        let passed = check(
            &mut ledger,
            &catalogs,
            &FieldValue::text("999999"),
            "codConsulta",
            names::CUPS,
        );
        assert!(!passed);
        let outcome = &ledger.outcomes()[0];
        assert_eq!(outcome.code(), "WARN_codConsulta_001");
        assert_eq!(outcome.classification(), Classification::Notification);
        assert!(!ledger.has_rejections());
    }

    #[test]
    fn test_known_and_blank_codes_pass() {
        let catalogs = CatalogRegistry::builtin();
        let mut ledger = OutcomeLedger::new();
        assert!(check(
            &mut ledger,
            &catalogs,
            &FieldValue::text("890501"),
            "codConsulta",
            names::CUPS
        ));
        assert!(check(
            &mut ledger,
            &catalogs,
            &FieldValue::Null,
            "codConsulta",
            names::CUPS
        ));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_unknown_catalog_flags_every_value() {
        let catalogs = CatalogRegistry::builtin();
        let mut ledger = OutcomeLedger::new();
        assert!(!check(
            &mut ledger,
            &catalogs,
            &FieldValue::text("01"),
            "modalidad",
            "MODALIDAD"
        ));
        assert_eq!(ledger.notification_count(), 1);
    }
}
