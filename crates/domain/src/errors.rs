use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Invalid record type: {0}")]
    InvalidRecordType(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Record store unavailable")]
    StoreUnavailable,
}
