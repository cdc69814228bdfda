//! Error types for respondkit

use crate::coder::{Coded, Coder};
use thiserror::Error;

/// Result type alias for respondkit operations
pub type RespondResult<T> = Result<T, RespondError>;

/// Error type for the fallible edges around the responder
///
/// `respond` itself never fails; these cover configuration, serialization
/// helpers, and transport adapters.
#[derive(Error, Debug)]
pub enum RespondError {
    /// Configuration could not be parsed or holds an invalid value
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// Serialization/deserialization error
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// Transport status outside the range the transport accepts
    #[error("invalid transport status: {0}")]
    InvalidStatus(u32),

    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),
}

impl RespondError {
    /// Returns the service code for this error
    ///
    /// All variants are server faults, so every code lives in the `500xxx`
    /// namespace.
    pub fn error_code(&self) -> u32 {
        match self {
            RespondError::Internal(_) => 500_000,
            RespondError::ConfigError(_) => 500_001,
            RespondError::SerializationError(_) => 500_002,
            RespondError::InvalidStatus(_) => 500_003,
        }
    }

    /// Short client-facing description, without the error detail
    pub fn description(&self) -> &'static str {
        match self {
            RespondError::Internal(_) => "internal error",
            RespondError::ConfigError(_) => "configuration error",
            RespondError::SerializationError(_) => "serialization error",
            RespondError::InvalidStatus(_) => "invalid transport status",
        }
    }
}

impl Coded for RespondError {
    fn coder(&self) -> Coder {
        Coder::new(self.error_code(), self.description())
    }
}

impl From<serde_json::Error> for RespondError {
    fn from(err: serde_json::Error) -> Self {
        RespondError::SerializationError(err.to_string())
    }
}

impl From<toml::de::Error> for RespondError {
    fn from(err: toml::de::Error) -> Self {
        RespondError::ConfigError(err.to_string())
    }
}
