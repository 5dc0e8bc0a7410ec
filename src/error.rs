//! Error types for the FRC command-line client

use thiserror::Error;

use crate::format::RecordKind;


pub type Result<T> = std::result::Result<T, FrcError>;

#[derive(Error, Debug)]
pub enum FrcError {
    /// Malformed or missing identifier component. Raised before any request is made.
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Unrecognized {kind} data point \"{field}\"")]
    UnknownField { kind: RecordKind, field: String },

    /// Anything the API round trip can fail with: network, auth, status, decode.
    #[error("Remote request failed: {0}")]
    Remote(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TBA auth key not provided and {env_var} environment variable not set")]
    MissingAuthKey { env_var: String },

    #[error("No matches found for event '{event}'")]
    NoMatches { event: String },
}

impl FrcError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        FrcError::InvalidInput {
            message: message.into(),
        }
    }
}
