//! respondkit-core - Contracts shared by the responder and its collaborators
//!
//! This crate provides:
//! - [`ServiceCode`] and [`TransportStatus`] with the `code / 1000` convention
//! - [`Outcome`] for handing a success value or an error to the responder
//! - [`Coder`], [`Coded`], and [`CoderLookup`] for resolving errors to codes
//! - [`ResponseContext`] and [`Annotations`] for the per-request context
//! - [`ResponderConfig`] for responder configuration
//! - [`RespondError`] for error handling

mod code;
mod coder;
mod config;
mod context;
mod error;
mod outcome;

pub use code::{ServiceCode, StatusClass, TransportStatus};
pub use coder::{Coded, CodedLookup, Coder, CoderLookup, UNKNOWN_CODE, UNKNOWN_DESCRIPTION};
pub use config::ResponderConfig;
pub use context::{
    Annotation, Annotations, ERROR_KEY, RESPONSE_BODY_KEY, RecordingContext, ResponseContext,
    SharedError, WARN_KEY,
};
pub use error::{RespondError, RespondResult};
pub use outcome::Outcome;

/// Log levels understood by the logging collaborator
///
/// Variants are ordered from most to least verbose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Off,
}

impl std::str::FromStr for LogLevel {
    type Err = RespondError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "off" => Ok(LogLevel::Off),
            other => Err(RespondError::ConfigError(format!(
                "unknown log level: {other}"
            ))),
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Off => write!(f, "OFF"),
        }
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Annotation, Annotations, Coded, CodedLookup, Coder, CoderLookup, LogLevel, Outcome,
        RecordingContext, RespondError, RespondResult, ResponderConfig, ResponseContext,
        ServiceCode, StatusClass, TransportStatus,
    };
}
