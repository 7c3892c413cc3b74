//! RIPS record types and their storage layout.
//!
//! Each RIPS submission is validated record-type by record-type. The tag
//! vocabulary is fixed by the submission format; every tag maps to one
//! backing table with a natural key used for keyed lookups.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RipsError;

/// Record type tag of a RIPS submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RecordType {
    /// AF: transaction header (one per invoice).
    #[serde(rename = "AF")]
    Transaction,
    /// US: beneficiary (patient) registry.
    #[serde(rename = "US")]
    Beneficiary,
    /// AC: outpatient consultation.
    #[serde(rename = "AC")]
    Consultation,
    /// AP: procedure.
    #[serde(rename = "AP")]
    Procedure,
    /// AU: emergency visit.
    #[serde(rename = "AU")]
    Emergency,
    /// AH: hospitalization.
    #[serde(rename = "AH")]
    Hospitalization,
    /// AN: newborn.
    #[serde(rename = "AN")]
    Newborn,
    /// AM: medication.
    #[serde(rename = "AM")]
    Medication,
    /// AT: other services.
    #[serde(rename = "AT")]
    OtherService,
}

impl RecordType {
    /// All record types in submission order.
    pub const fn all() -> &'static [Self] {
        &[
            Self::Transaction,
            Self::Beneficiary,
            Self::Consultation,
            Self::Procedure,
            Self::Emergency,
            Self::Hospitalization,
            Self::Newborn,
            Self::Medication,
            Self::OtherService,
        ]
    }

    /// Two-letter RIPS tag.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Transaction => "AF",
            Self::Beneficiary => "US",
            Self::Consultation => "AC",
            Self::Procedure => "AP",
            Self::Emergency => "AU",
            Self::Hospitalization => "AH",
            Self::Newborn => "AN",
            Self::Medication => "AM",
            Self::OtherService => "AT",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Transaction => "transaction",
            Self::Beneficiary => "beneficiary",
            Self::Consultation => "consultation",
            Self::Procedure => "procedure",
            Self::Emergency => "emergency visit",
            Self::Hospitalization => "hospitalization",
            Self::Newborn => "newborn",
            Self::Medication => "medication",
            Self::OtherService => "other service",
        }
    }

    /// Parse a tag (case-insensitive, surrounding whitespace ignored).
    pub fn parse(tag: &str) -> Option<Self> {
        let tag = tag.trim();
        Self::all()
            .iter()
            .copied()
            .find(|record_type| record_type.code().eq_ignore_ascii_case(tag))
    }

    /// Storage layout for this record type.
    pub fn schema(&self) -> &'static RecordSchema {
        match self {
            Self::Transaction => &TRANSACTION_SCHEMA,
            Self::Beneficiary => &BENEFICIARY_SCHEMA,
            Self::Consultation => &CONSULTATION_SCHEMA,
            Self::Procedure => &PROCEDURE_SCHEMA,
            Self::Emergency => &EMERGENCY_SCHEMA,
            Self::Hospitalization => &HOSPITALIZATION_SCHEMA,
            Self::Newborn => &NEWBORN_SCHEMA,
            Self::Medication => &MEDICATION_SCHEMA,
            Self::OtherService => &OTHER_SERVICE_SCHEMA,
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for RecordType {
    type Err = RipsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| RipsError::UnknownRecordType(s.trim().to_string()))
    }
}

/// Backing table of a record type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordSchema {
    pub record_type: RecordType,
    /// Table name.
    pub table: &'static str,
    /// Column used for keyed lookups.
    pub key_column: &'static str,
    /// Projected columns, in select order.
    pub columns: &'static [&'static str],
}

impl RecordSchema {
    /// True when `column` is part of the projection (exact match).
    pub fn has_column(&self, column: &str) -> bool {
        self.columns.contains(&column)
    }
}

/// Column holding the beneficiary document id on every clinical record.
pub const BENEFICIARY_REF_COLUMN: &str = "numDocumentoIdentificacion";

static TRANSACTION_SCHEMA: RecordSchema = RecordSchema {
    record_type: RecordType::Transaction,
    table: "Transacciones",
    key_column: "consecutivo",
    columns: &[
        "codPrestador",
        "consecutivo",
        "numDocumentoIdObligado",
        "numFactura",
        "tipoNota",
        "numNota",
    ],
};

static BENEFICIARY_SCHEMA: RecordSchema = RecordSchema {
    record_type: RecordType::Beneficiary,
    table: "Usuarios",
    key_column: BENEFICIARY_REF_COLUMN,
    columns: &[
        "tipoDocumentoIdentificacion",
        "numDocumentoIdentificacion",
        "codPaisOrigen",
    ],
};

static CONSULTATION_SCHEMA: RecordSchema = RecordSchema {
    record_type: RecordType::Consultation,
    table: "Consultas",
    key_column: "consecutivo",
    columns: &[
        "codPrestador",
        "consecutivo",
        "numDocumentoIdentificacion",
        "fechaConsulta",
        "codConsulta",
        "codDiagnosticoPrincipal",
        "conceptoRecaudo",
    ],
};

static PROCEDURE_SCHEMA: RecordSchema = RecordSchema {
    record_type: RecordType::Procedure,
    table: "Procedimientos",
    key_column: "consecutivo",
    columns: &[
        "codPrestador",
        "consecutivo",
        "numDocumentoIdentificacion",
        "fechaInicioAtencion",
        "numAutorizacion",
        "codProcedimiento",
        "viaIngreso",
    ],
};

static EMERGENCY_SCHEMA: RecordSchema = RecordSchema {
    record_type: RecordType::Emergency,
    table: "Urgencias",
    key_column: "consecutivo",
    columns: &[
        "codPrestador",
        "consecutivo",
        "numDocumentoIdentificacion",
        "fechaInicioAtencion",
        "causaExterna",
        "codDiagnosticoPrincipal",
        "condicionDestinoUsuarioEgreso",
    ],
};

static HOSPITALIZATION_SCHEMA: RecordSchema = RecordSchema {
    record_type: RecordType::Hospitalization,
    table: "Hospitalizacion",
    key_column: "consecutivo",
    columns: &[
        "codPrestador",
        "consecutivo",
        "numDocumentoIdentificacion",
        "fechaIngreso",
        "codDiagnosticoPrincipal",
        "fechaEgreso",
        "codDiagnosticoCausaMuerte",
    ],
};

static NEWBORN_SCHEMA: RecordSchema = RecordSchema {
    record_type: RecordType::Newborn,
    table: "Recien_Nacido",
    key_column: "consecutivo",
    columns: &[
        "codPrestador",
        "consecutivo",
        "numDocumentoIdentificacion",
        "fechaNacimiento",
        "sexoRecienNacido",
        "pesoRecienNacido",
    ],
};

static MEDICATION_SCHEMA: RecordSchema = RecordSchema {
    record_type: RecordType::Medication,
    table: "Medicamentos",
    key_column: "consecutivo",
    columns: &[
        "codPrestador",
        "consecutivo",
        "numDocumentoIdentificacion",
        "codTecnologiaSalud",
        "nomTecnologiaSalud",
        "concentracionMedicamento",
        "formaFarmaceutica",
    ],
};

static OTHER_SERVICE_SCHEMA: RecordSchema = RecordSchema {
    record_type: RecordType::OtherService,
    table: "Otros_Servicios",
    key_column: "consecutivo",
    columns: &[
        "codPrestador",
        "consecutivo",
        "numDocumentoIdentificacion",
        "tipoOS",
        "codTecnologiaSalud",
        "cantidadOS",
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(RecordType::parse("ac"), Some(RecordType::Consultation));
        assert_eq!(RecordType::parse(" AH "), Some(RecordType::Hospitalization));
        assert_eq!(RecordType::parse("ZZ"), None);
        assert_eq!(RecordType::parse(""), None);
    }

    #[test]
    fn test_from_str_reports_tag() {
        let err = "ZZ".parse::<RecordType>().unwrap_err();
        assert_eq!(err.to_string(), "unsupported record type: ZZ");
    }

    #[test]
    fn test_schema_matches_record_type() {
        for record_type in RecordType::all() {
            let schema = record_type.schema();
            assert_eq!(schema.record_type, *record_type);
            assert!(schema.has_column(schema.key_column), "{record_type}");
        }
    }

    #[test]
    fn test_clinical_schemas_carry_beneficiary_reference() {
        for record_type in RecordType::all() {
            if matches!(record_type, RecordType::Transaction) {
                continue;
            }
            assert!(record_type.schema().has_column(BENEFICIARY_REF_COLUMN));
        }
    }
}
