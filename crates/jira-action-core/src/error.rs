//! Error types for the release core

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Field not found: {0}")]
    UnknownFieldKey(String),

    #[error("Field '{key}' has no value ({attribute})")]
    FieldValueAbsent { key: String, attribute: String },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Whether the failure was caused by the caller's input
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::Validation(_) | Error::UnknownFieldKey(_) | Error::FieldValueAbsent { .. }
        )
    }
}
