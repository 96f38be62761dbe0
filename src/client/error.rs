use serde::Deserialize;

use crate::shared::domain::ValidationError;

pub(crate) const GENERIC_FAILURE: &str = "Failed to fetch data";

/// Every way a client call can fail. `Display` is the message shown to the
/// admin.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// The server could not be reached.
    #[error("Network error")]
    Network(String),

    /// The server answered with a failure envelope or a non-2xx status.
    #[error("{message}")]
    Remote {
        status: u16,
        code: Option<String>,
        message: String,
    },

    /// A 2xx response whose body is not the expected envelope. Shown to the
    /// admin like a connectivity failure; the detail is kept for logs.
    #[error("Network error")]
    Decode(String),

    /// A successful envelope that carries no `data` where a record was expected.
    #[error("Failed to fetch data")]
    MissingData,

    /// The draft was rejected before anything was sent.
    #[error("{0}")]
    Invalid(ValidationError),
}

impl ClientError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn code(&self) -> Option<&str> {
        match self {
            ClientError::Remote { code, .. } => code.as_deref(),
            ClientError::Invalid(e) => Some(e.code),
            _ => None,
        }
    }
}

impl From<ValidationError> for ClientError {
    fn from(e: ValidationError) -> Self {
        ClientError::Invalid(e)
    }
}

/// The envelope `error` field: either `{code, message}` or a bare string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum RemoteError {
    Detail { code: String, message: String },
    Text(String),
}

impl RemoteError {
    pub(crate) fn into_parts(self) -> (Option<String>, String) {
        match self {
            RemoteError::Detail { code, message } => (Some(code), message),
            RemoteError::Text(message) => (None, message),
        }
    }
}
