//! Error types for the Hulpwijzer workspace.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire Hulpwijzer workspace.
///
/// Most of the eligibility core degrades to empty defaults instead of failing,
/// so only a handful of variants ever reach a consumer. Storage variants are
/// produced by repositories and usually swallowed one layer up.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HulpwijzerError {
    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON"
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A session identifier was empty or otherwise unusable.
    #[error("Invalid session id: {0:?}")]
    InvalidSessionId(String),

    /// The eligibility container was accessed before it was installed.
    ///
    /// This is a wiring mistake in the consumer, never a runtime data problem.
    #[error("Eligibility state accessed before initialization: {0}")]
    NotInitialized(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl HulpwijzerError {
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

    /// Creates a NotInitialized error
    pub fn not_initialized(context: impl Into<String>) -> Self {
        Self::NotInitialized(context.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    pub fn is_not_initialized(&self) -> bool {
        matches!(self, Self::NotInitialized(_))
    }
}

impl From<std::io::Error> for HulpwijzerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for HulpwijzerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for HulpwijzerError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for HulpwijzerError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, HulpwijzerError>`.
pub type Result<T> = std::result::Result<T, HulpwijzerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_conversion_keeps_kind() {
        let err: HulpwijzerError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "blocked").into();
        assert!(err.is_io());
        assert!(err.to_string().contains("PermissionDenied"));
    }

    #[test]
    fn test_json_conversion() {
        let err: HulpwijzerError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        match err {
            HulpwijzerError::Serialization { format, .. } => assert_eq!(format, "JSON"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_not_initialized_helper() {
        let err = HulpwijzerError::not_initialized("results view");
        assert!(err.is_not_initialized());
        assert!(err.to_string().contains("results view"));
    }
}
