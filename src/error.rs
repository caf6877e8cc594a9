use std::fmt::Display;

/// The single error kind surfaced by concert fetching.
///
/// Transport failures, non-200 responses and undecodable bodies all collapse
/// into this type. The message is the underlying cause's text, passed through
/// unchanged so it can be shown to the user verbatim.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct RemoteError {
    message: String,
}

impl RemoteError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build an error for a response whose status was not 200.
    ///
    /// Uses the status text, or the numeric code when no text is available.
    pub fn status(status: u16, status_text: &str) -> Self {
        if status_text.trim().is_empty() {
            Self::new(status.to_string())
        } else {
            Self::new(status_text)
        }
    }

    /// Wrap a transport or decode failure.
    pub fn wrap(cause: impl Display) -> Self {
        Self::new(cause.to_string())
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<reqwest::Error> for RemoteError {
    fn from(err: reqwest::Error) -> Self {
        RemoteError::wrap(err)
    }
}

impl From<serde_json::Error> for RemoteError {
    fn from(err: serde_json::Error) -> Self {
        RemoteError::wrap(err)
    }
}

pub type Result<T> = std::result::Result<T, RemoteError>;
