//! Error types for the brainstorm client.

use thiserror::Error;

/// A shared error type for the whole client.
///
/// Remote failures are classified by what the caller can do about them:
/// an `Unauthorized` response sends the user back to the login view, while
/// `NotFound` and `Validation` are shown and the operation is abandoned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BrainstormError {
    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Missing, expired or rejected credentials
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Authenticated, but not allowed to do this
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Request rejected as invalid, either locally or by the server
    #[error("Validation error: {0}")]
    Validation(String),

    /// Non-success HTTP response that fits no other variant
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// Request never produced a response (connect, DNS, body read)
    #[error("Transport error: {0}")]
    Transport(String),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl BrainstormError {
    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is an authentication failure (401).
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if the request failed before a response was received
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

impl From<std::io::Error> for BrainstormError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for BrainstormError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for BrainstormError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for BrainstormError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, BrainstormError>`.
pub type Result<T> = std::result::Result<T, BrainstormError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = BrainstormError::not_found("idea", "7");
        assert_eq!(err.to_string(), "Entity not found: idea '7'");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_http_display() {
        let err = BrainstormError::http(502, "bad gateway");
        assert_eq!(err.to_string(), "HTTP 502: bad gateway");
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn test_json_conversion() {
        let parse = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: BrainstormError = parse.into();
        assert!(matches!(err, BrainstormError::Serialization { ref format, .. } if format == "JSON"));
    }
}
