//! Shared fixtures for the engine integration tests.

#![allow(dead_code)]

use rips_model::{Record, RecordType};
use rips_store::MemoryStore;

pub const PATIENT: &str = "123456";
pub const PROVIDER: &str = "110010000001";

pub fn beneficiary() -> Record {
    Record::new()
        .with("tipoDocumentoIdentificacion", "CC")
        .with("numDocumentoIdentificacion", PATIENT)
        .with("codPaisOrigen", "170")
}

pub fn consultation(key: &str, code: &str, concept: &str) -> Record {
    Record::new()
        .with("codPrestador", PROVIDER)
        .with("consecutivo", key)
        .with("numDocumentoIdentificacion", PATIENT)
        .with("fechaConsulta", "2024-01-15 10:30:00")
        .with("codConsulta", code)
        .with("codDiagnosticoPrincipal", "E119")
        .with("conceptoRecaudo", concept)
}

pub fn hospitalization(key: &str, admission: &str, discharge: &str) -> Record {
    Record::new()
        .with("codPrestador", PROVIDER)
        .with("consecutivo", key)
        .with("numDocumentoIdentificacion", PATIENT)
        .with("fechaIngreso", admission)
        .with("codDiagnosticoPrincipal", "J459")
        .with("fechaEgreso", discharge)
        .with("codDiagnosticoCausaMuerte", rips_model::FieldValue::Null)
}

pub fn newborn(key: &str, sex: &str) -> Record {
    Record::new()
        .with("codPrestador", PROVIDER)
        .with("consecutivo", key)
        .with("numDocumentoIdentificacion", PATIENT)
        .with("fechaNacimiento", "2024-02-01 10:30:00")
        .with("sexoRecienNacido", sex)
        .with("pesoRecienNacido", 3.1)
}

/// Store seeded with the registered beneficiary and one record per scenario.
pub fn scenario_store() -> MemoryStore {
    MemoryStore::new()
        .with_record(RecordType::Beneficiary, beneficiary())
        .with_record(
            RecordType::Consultation,
            consultation("CONS_001", "890501", "01"),
        )
        .with_record(
            RecordType::Consultation,
            consultation("CONS_002", "890201", "01"),
        )
        .with_record(
            RecordType::Hospitalization,
            hospitalization("HOSP_001", "2024-01-10 08:00:00", "2024-01-09 08:00:00"),
        )
        .with_record(RecordType::Newborn, newborn("RN_001", "X"))
        .with_record(RecordType::Newborn, newborn("RN_002", "M"))
}
