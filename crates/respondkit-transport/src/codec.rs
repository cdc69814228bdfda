//! Body encoding

use respondkit_core::RespondError;
use serde::Serialize;
use thiserror::Error;

/// Errors raised while rendering a response body
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<CodecError> for RespondError {
    fn from(err: CodecError) -> Self {
        RespondError::SerializationError(err.to_string())
    }
}

/// Renders response bodies for one wire format
pub trait Codec: Send + Sync {
    /// Media type transports should advertise for encoded bodies
    const CONTENT_TYPE: &'static str;

    /// Encode a value to bytes
    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, CodecError>;
}

/// JSON bodies through serde_json
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec {
    pretty: bool,
}

impl JsonCodec {
    /// Compact output
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Indented output
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl Codec for JsonCodec {
    const CONTENT_TYPE: &'static str = "application/json";

    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, CodecError> {
        let encoded = if self.pretty {
            serde_json::to_vec_pretty(value)
        } else {
            serde_json::to_vec(value)
        };
        encoded.map_err(|e| CodecError::Serialization(e.to_string()))
    }
}
