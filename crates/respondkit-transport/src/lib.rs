//! respondkit-transport - Envelope model, reuse pool, and JSON codec
//!
//! This crate provides:
//! - [`Envelope`], the normalized `{data, msg, code}` response body
//! - [`EnvelopePool`] and its [`PooledEnvelope`] guard for envelope reuse
//! - [`Codec`] trait and [`JsonCodec`] implementation for encoding bodies

mod codec;
mod envelope;
mod pool;

pub use codec::{Codec, CodecError, JsonCodec};
pub use envelope::Envelope;
pub use pool::{EnvelopePool, PooledEnvelope};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{Codec, CodecError, Envelope, EnvelopePool, JsonCodec, PooledEnvelope};
}
