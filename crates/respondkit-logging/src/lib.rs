//! respondkit-logging - Tracing setup and annotation reporting
//!
//! The responder never logs responses itself; it leaves annotations on the
//! request context. This crate is the collaborator that turns them into log
//! events.
//!
//! This crate provides:
//! - [`init_logging`] to install a `tracing` subscriber with a reloadable level
//! - [`ReloadHandle`] for changing the level at runtime
//! - [`AnnotationReporter`] for logging the annotations of a finished request

mod reload;
mod reporter;
mod subscriber;

pub use reload::ReloadHandle;
pub use reporter::{AnnotationReporter, REPORT_TARGET};
pub use respondkit_core::LogLevel;
pub use subscriber::init_logging;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{AnnotationReporter, LogLevel, ReloadHandle, init_logging};
}
