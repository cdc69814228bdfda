//! # respondkit
//!
//! Uniform response encoding for request handlers.
//!
//! A handler hands the [`Responder`] a service code and either a success
//! payload or an error. The responder produces one normalized body,
//!
//! ```text
//! {"data": <any|null>, "msg": <string>, "code": <int>}
//! ```
//!
//! derives the transport status as `code / 1000`, and discloses error detail
//! according to the status class:
//!
//! | status | `data` | annotation |
//! |---|---|---|
//! | 400–499 | error text | `"warn"` |
//! | ≥ 500 | `null` | `"error"` |
//! | otherwise | payload | none |
//!
//! Envelopes are borrowed from a pool owned by the responder and returned
//! reset when the call finishes.
//!
//! ## Example
//!
//! ```
//! use respondkit::prelude::*;
//!
//! #[derive(Debug)]
//! struct NotFound;
//!
//! impl std::fmt::Display for NotFound {
//!     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
//!         write!(f, "user not found")
//!     }
//! }
//!
//! impl std::error::Error for NotFound {}
//!
//! impl Coded for NotFound {
//!     fn coder(&self) -> Coder {
//!         Coder::new(404_001, "user not found")
//!     }
//! }
//!
//! let responder = Responder::new(CodedLookup::<NotFound>::new());
//!
//! let mut ctx = RecordingContext::new();
//! responder.respond_ok(&mut ctx, ServiceCode::new(200_001), "ok");
//! assert_eq!(ctx.status(), Some(TransportStatus::new(200)));
//!
//! let mut ctx = RecordingContext::new();
//! responder.respond_err(&mut ctx, ServiceCode::new(404_001), NotFound);
//! assert!(ctx.is_aborted());
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports from:
//! - [`respondkit_core`] - Codes, coder lookup, context, and configuration
//! - [`respondkit_transport`] - Envelope, envelope pool, and JSON codec

mod responder;

pub use responder::Responder;

// Re-export core types
pub use respondkit_core::{
    Annotation, Annotations, Coded, CodedLookup, Coder, CoderLookup, ERROR_KEY, LogLevel,
    Outcome, RESPONSE_BODY_KEY, RecordingContext, RespondError, RespondResult, ResponderConfig,
    ResponseContext, ServiceCode, SharedError, StatusClass, TransportStatus, UNKNOWN_CODE,
    UNKNOWN_DESCRIPTION, WARN_KEY,
};

// Re-export transport types
pub use respondkit_transport::{Codec, CodecError, Envelope, EnvelopePool, JsonCodec};

/// Prelude module for convenient imports.
///
/// Use `use respondkit::prelude::*;` to import commonly used types.
pub mod prelude {
    pub use crate::{
        Annotation, Annotations, Coded, CodedLookup, Coder, CoderLookup, Outcome,
        RecordingContext, RespondError, ResponderConfig, Responder, ResponseContext,
        ServiceCode, StatusClass, TransportStatus,
    };
}
