use thiserror::Error;

#[derive(Debug, Error)]
pub enum RipsError {
    #[error("unsupported record type: {0}")]
    UnknownRecordType(String),
}

pub type Result<T> = std::result::Result<T, RipsError>;
