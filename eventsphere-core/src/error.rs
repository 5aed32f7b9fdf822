//! Error types for the EventSphere client.

use thiserror::Error;

/// Errors that can occur in client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// A required form field was empty or malformed. Raised before any
    /// network call is made.
    #[error("{0}")]
    Validation(String),

    /// The backend could not be reached at all.
    #[error("{0}")]
    Network(String),

    /// The backend answered with an error status and (usually) a message.
    #[error("{message}")]
    Backend { status: u16, message: String },

    #[error("Not found: {0}")]
    NotFound(String),

    /// The backend answered successfully but the body did not match the
    /// expected schema.
    #[error("Unexpected response from backend: {0}")]
    Contract(String),

    #[error("Session storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClientError {
    /// The message a page should show for this error, or `fallback` when the
    /// error carries nothing a user can act on.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ClientError::Backend { message, .. } if !message.trim().is_empty() => message.clone(),
            ClientError::Network(message) | ClientError::Validation(message) => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_message_is_surfaced() {
        let err = ClientError::Backend {
            status: 401,
            message: "Invalid credentials".into(),
        };
        assert_eq!(err.user_message("Login failed."), "Invalid credentials");
    }

    #[test]
    fn blank_backend_message_falls_back() {
        let err = ClientError::Backend {
            status: 500,
            message: "  ".into(),
        };
        assert_eq!(err.user_message("Login failed."), "Login failed.");
    }

    #[test]
    fn contract_errors_fall_back() {
        let err = ClientError::Contract("missing field `id`".into());
        assert_eq!(err.user_message("Could not fetch events."), "Could not fetch events.");
    }
}
