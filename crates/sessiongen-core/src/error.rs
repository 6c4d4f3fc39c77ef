//! Error types for session presentation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the sessiongen crates.
///
/// Construction of a presenter fails fast with one of these variants
/// instead of defaulting malformed input.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SessionGenError {
    /// A required record key was absent
    #[error("Missing required field: '{field}'")]
    MissingField { field: String },

    /// A timestamp field could not be parsed as ISO-8601
    #[error("Invalid timestamp in '{field}': '{value}' ({message})")]
    InvalidTimestamp {
        field: String,
        value: String,
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON"
        message: String,
    },
}

impl SessionGenError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Creates an InvalidTimestamp error
    pub fn invalid_timestamp(
        field: impl Into<String>,
        value: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidTimestamp {
            field: field.into(),
            value: value.into(),
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    pub fn is_missing_field(&self) -> bool {
        matches!(self, Self::MissingField { .. })
    }

    pub fn is_invalid_timestamp(&self) -> bool {
        matches!(self, Self::InvalidTimestamp { .. })
    }

    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for SessionGenError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for SessionGenError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for SessionGenError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for SessionGenError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, SessionGenError>`.
pub type Result<T> = std::result::Result<T, SessionGenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message() {
        let err = SessionGenError::missing_field("starts_at");
        assert!(err.is_missing_field());
        assert_eq!(err.to_string(), "Missing required field: 'starts_at'");
    }

    #[test]
    fn test_json_error_converts_to_serialization() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: SessionGenError = json_err.into();
        assert!(err.is_serialization());
    }
}
