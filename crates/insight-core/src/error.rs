use thiserror::Error;

#[derive(Error, Debug)]
pub enum InsightError {
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    #[error("Malformed entity: {0}")]
    MalformedEntity(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
