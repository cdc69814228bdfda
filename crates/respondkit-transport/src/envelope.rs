//! Normalized response body

use serde::Serialize;
use serde_json::value::RawValue;

use crate::CodecError;

/// Response body sent for every request
///
/// Serializes with a fixed field order:
/// `{"data": <any|null>, "msg": <string>, "code": <int>}`.
///
/// `data` holds the payload already rendered as JSON text, so it reaches the
/// body exactly as the payload's `Serialize` impl wrote it (field order,
/// 128-bit integers and all).
#[derive(Debug, Clone, Default, Serialize)]
pub struct Envelope {
    /// Success payload, the error text on client faults, `None` on server faults
    pub data: Option<Box<RawValue>>,

    /// Human-readable status text
    pub msg: String,

    /// Service-level status code
    pub code: u32,
}

impl Envelope {
    /// Render `value` as JSON and store it as the payload
    ///
    /// On failure the previous payload is left untouched.
    pub fn set_data<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), CodecError> {
        let raw = serde_json::value::to_raw_value(value)
            .map_err(|e| CodecError::Serialization(e.to_string()))?;
        self.data = Some(raw);
        Ok(())
    }

    /// The payload's JSON text, if any
    pub fn data_json(&self) -> Option<&str> {
        self.data.as_deref().map(RawValue::get)
    }

    /// Clear every field back to its zero value
    ///
    /// The message buffer keeps its allocation for the next borrower.
    pub fn reset(&mut self) {
        self.data = None;
        self.msg.clear();
        self.code = 0;
    }

    /// Replace the message, reusing the existing buffer
    pub fn set_msg(&mut self, msg: &str) {
        self.msg.clear();
        self.msg.push_str(msg);
    }

    /// Whether every field holds its zero value
    pub fn is_reset(&self) -> bool {
        self.data.is_none() && self.msg.is_empty() && self.code == 0
    }
}
