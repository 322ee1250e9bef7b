use thiserror::Error;

/// Result type alias for Mail-in-a-Box operations
pub type Result<T> = std::result::Result<T, MiabError>;

/// Maximum number of characters of a response body kept in a [`MiabError::Decode`]
pub const SNIPPET_LEN: usize = 200;

/// Errors that can occur when talking to the Mail-in-a-Box admin API
#[derive(Error, Debug)]
pub enum MiabError {
    /// The request never produced a response (connection, timeout, body read)
    #[error("transport error: {0}")]
    Transport(String),

    /// The API answered with a non-2xx status and no recognizable sentinel
    #[error("HTTP error ({code}): {body}")]
    Http {
        /// HTTP status code
        code: u16,
        /// Raw response body
        body: String,
    },

    /// The body did not have the expected shape
    #[error("failed to decode response: {reason} (body: {snippet})")]
    Decode {
        /// What went wrong
        reason: String,
        /// Leading part of the offending body
        snippet: String,
    },

    /// The API reported a logical failure through its `status` field
    #[error("{message}")]
    Api {
        /// Message as reported, e.g. `invalid: Incorrect username or password`
        message: String,
    },

    /// Invalid base URL
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Client configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl MiabError {
    /// Build a decode error, keeping only the start of the body
    pub fn decode(reason: impl std::fmt::Display, body: &str) -> Self {
        Self::Decode {
            reason: reason.to_string(),
            snippet: snippet(body),
        }
    }

    /// Build an API error from a status tag and the accompanying reason
    pub fn api(status: &str, reason: &str) -> Self {
        let message = if reason.is_empty() {
            status.to_string()
        } else {
            format!("{status}: {reason}")
        };
        Self::Api { message }
    }

    /// Returns true if the remote signalled a logical failure
    #[must_use]
    pub const fn is_api_error(&self) -> bool {
        matches!(self, Self::Api { .. })
    }

    /// Returns true if no response was received
    #[must_use]
    pub const fn is_transport_error(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Returns the HTTP status code if this is an HTTP error
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Http { code, .. } => Some(*code),
            _ => None,
        }
    }
}

fn snippet(body: &str) -> String {
    match body.char_indices().nth(SNIPPET_LEN) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
