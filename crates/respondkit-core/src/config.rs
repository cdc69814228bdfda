//! Responder configuration

use crate::LogLevel;
use crate::error::{RespondError, RespondResult};
use serde::{Deserialize, Serialize};

/// Configuration for a responder and its logging collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponderConfig {
    /// Maximum idle envelopes the pool keeps for reuse
    ///
    /// Envelopes returned while the pool is full are dropped. Zero disables
    /// reuse entirely.
    #[serde(default = "default_max_idle")]
    pub max_idle_envelopes: usize,

    /// Message placed in `msg` on the success path
    #[serde(default = "default_success_message")]
    pub success_message: String,

    /// Pretty-print response bodies (default: false for efficiency)
    #[serde(default)]
    pub pretty: bool,

    /// Initial log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_max_idle() -> usize {
    1024
}

fn default_success_message() -> String {
    "Success".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ResponderConfig {
    fn default() -> Self {
        Self {
            max_idle_envelopes: default_max_idle(),
            success_message: default_success_message(),
            pretty: false,
            log_level: default_log_level(),
        }
    }
}

impl ResponderConfig {
    /// Create a configuration with all defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create configuration from JSON bytes; empty input yields defaults
    pub fn from_json(bytes: &[u8]) -> RespondResult<Self> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_slice(bytes).map_err(|e| RespondError::ConfigError(e.to_string()))
    }

    /// Create configuration from a TOML document
    pub fn from_toml_str(input: &str) -> RespondResult<Self> {
        Ok(toml::from_str(input)?)
    }

    /// Parsed log level
    pub fn log_level(&self) -> RespondResult<LogLevel> {
        self.log_level.parse()
    }

    pub fn with_max_idle_envelopes(mut self, max_idle: usize) -> Self {
        self.max_idle_envelopes = max_idle;
        self
    }

    pub fn with_success_message(mut self, message: impl Into<String>) -> Self {
        self.success_message = message.into();
        self
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}
