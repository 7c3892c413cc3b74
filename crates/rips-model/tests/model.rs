//! Tests for rips-model types.

use proptest::prelude::*;

use rips_model::{
    Classification, FieldValue, OutcomeLedger, RecordType, ValidationOutcome, ValidationResponse,
};

#[test]
fn outcome_wire_shape() {
    let outcome = ValidationOutcome::rejection("ERR_AH_002", "discharge precedes admission")
        .with_field("fechaEgreso");
    let json = serde_json::to_value(&outcome).expect("serialize outcome");
    assert_eq!(
        json,
        serde_json::json!({
            "classification": "RECHAZO",
            "code": "ERR_AH_002",
            "description": "discharge precedes admission",
            "field": "fechaEgreso",
            "source": "RIPS"
        })
    );
}

#[test]
fn notification_without_field_serializes_null_field() {
    let outcome = ValidationOutcome::notification("INFO_AF_001", "invoice-less submission");
    let json = serde_json::to_value(&outcome).expect("serialize outcome");
    assert_eq!(json["classification"], "NOTIFICACION");
    assert!(json["field"].is_null());
    assert_eq!(outcome.classification(), Classification::Notification);
    assert!(!outcome.is_rejection());
}

#[test]
fn record_type_serializes_as_tag() {
    let json = serde_json::to_string(&RecordType::Newborn).expect("serialize type");
    assert_eq!(json, "\"AN\"");
    let parsed: RecordType = serde_json::from_str("\"AT\"").expect("deserialize type");
    assert_eq!(parsed, RecordType::OtherService);
}

#[test]
fn response_codes_keep_encounter_order() {
    let mut ledger = OutcomeLedger::new();
    ledger.notify("WARN_codConsulta_001", "not in catalog", Some("codConsulta"));
    ledger.reject("ERR_AC_002", "copay not allowed", Some("conceptoRecaudo"));
    ledger.reject("ERR_AC_003", "beneficiary not found", None);
    let response = ValidationResponse::from_ledger("AC", "CONS_009", false, ledger);
    assert_eq!(
        response.codes(),
        vec!["WARN_codConsulta_001", "ERR_AC_002", "ERR_AC_003"]
    );
    assert_eq!(response.rejection_count(), 2);
    assert_eq!(response.notification_count(), 1);
}

#[test]
fn integer_and_real_values_round_trip() {
    let values = vec![
        FieldValue::Null,
        FieldValue::Integer(4),
        FieldValue::Real(2.75),
        FieldValue::text("A10BA02"),
    ];
    let json = serde_json::to_string(&values).expect("serialize values");
    assert_eq!(json, r#"[null,4,2.75,"A10BA02"]"#);
    let round: Vec<FieldValue> = serde_json::from_str(&json).expect("deserialize values");
    assert_eq!(round, values);
}

proptest! {
    #[test]
    fn ledger_rejection_flag_matches_contents(kinds in proptest::collection::vec(any::<bool>(), 0..16)) {
        let mut ledger = OutcomeLedger::new();
        for (idx, is_rejection) in kinds.iter().enumerate() {
            if *is_rejection {
                ledger.reject(format!("ERR_X_{idx:03}"), "rejected", None);
            } else {
                ledger.notify(format!("INFO_X_{idx:03}"), "noted", None);
            }
        }
        prop_assert_eq!(ledger.has_rejections(), kinds.iter().any(|k| *k));
        prop_assert_eq!(ledger.len(), kinds.len());
        prop_assert_eq!(ledger.rejection_count() + ledger.notification_count(), kinds.len());
    }
}
