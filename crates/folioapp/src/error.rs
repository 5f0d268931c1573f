use crate::model::{ContentKind, RecordId};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolioError {
    /// A draft failed client-side checks. Never reaches a store.
    #[error("{message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// The backend could not be read (unreachable, error status, corrupt data).
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// The backend rejected an insert, update or delete.
    #[error("Write failed: {0}")]
    WriteFailure(String),

    #[error("{kind} not found: {id}")]
    NotFound { kind: ContentKind, id: RecordId },

    #[error("A submission is already in progress")]
    SubmitInFlight,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl FolioError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FolioError>;
