use thiserror::Error;

/// Failures of the entity stores
#[derive(Debug, Error, PartialEq)]
pub enum StoreError {
    #[error("Invalid id: {0}")]
    InvalidId(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Already exists: {0}")]
    Conflict(String),

    #[error("{0}")]
    Validation(String),
}
