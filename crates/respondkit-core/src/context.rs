//! Per-request context the responder writes into
//!
//! The context is owned by the transport layer. The responder only aborts
//! it, annotates it, and performs the terminal write; collaborators such as
//! access loggers read the annotations afterwards.

use crate::code::TransportStatus;
use bytes::Bytes;
use std::sync::Arc;

/// Annotation key for client-fault errors
pub const WARN_KEY: &str = "warn";

/// Annotation key for server-fault errors
pub const ERROR_KEY: &str = "error";

/// Annotation key for the encoded response body
pub const RESPONSE_BODY_KEY: &str = "ResponseBody";

/// Error shared between the responder and annotation readers
pub type SharedError = Arc<dyn std::error::Error + Send + Sync + 'static>;

/// Value stored under an annotation key
#[derive(Clone)]
pub enum Annotation {
    /// An error routed to observability instead of (or alongside) the body
    Fault(SharedError),
    /// Raw encoded bytes
    Body(Bytes),
}

impl Annotation {
    pub fn as_fault(&self) -> Option<&SharedError> {
        match self {
            Annotation::Fault(err) => Some(err),
            Annotation::Body(_) => None,
        }
    }

    pub fn as_body(&self) -> Option<&Bytes> {
        match self {
            Annotation::Fault(_) => None,
            Annotation::Body(bytes) => Some(bytes),
        }
    }
}

impl std::fmt::Debug for Annotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Annotation::Fault(err) => f.debug_tuple("Fault").field(&err.to_string()).finish(),
            Annotation::Body(bytes) => f.debug_tuple("Body").field(bytes).finish(),
        }
    }
}

/// Key/value annotations of one request
///
/// Setting an existing key replaces its value. A handful of keys per request
/// is the norm, so a vector beats a map here.
#[derive(Debug, Clone, Default)]
pub struct Annotations {
    entries: Vec<(&'static str, Annotation)>,
}

impl Annotations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: &'static str, value: Annotation) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Annotation> {
        self.entries.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    pub fn fault(&self, key: &str) -> Option<&SharedError> {
        self.get(key).and_then(Annotation::as_fault)
    }

    pub fn body(&self, key: &str) -> Option<&Bytes> {
        self.get(key).and_then(Annotation::as_body)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Annotation)> {
        self.entries.iter().map(|(k, v)| (*k, v))
    }
}

/// Per-request context consumed by the responder
pub trait ResponseContext {
    /// Stop any further handler processing for this request
    fn abort(&mut self);

    /// Whether [`abort`](Self::abort) has been called
    fn is_aborted(&self) -> bool;

    /// Attach an annotation for downstream collaborators
    fn set(&mut self, key: &'static str, value: Annotation);

    /// Finalize the transport response with an already-encoded JSON body
    fn write_json(&mut self, status: TransportStatus, body: Bytes);
}

/// In-memory context that records everything written to it
///
/// Useful outside any transport (batch jobs, tests) and as the reference
/// behavior for transport adapters.
#[derive(Debug, Clone, Default)]
pub struct RecordingContext {
    aborted: bool,
    annotations: Annotations,
    response: Option<(TransportStatus, Bytes)>,
}

impl RecordingContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn annotations(&self) -> &Annotations {
        &self.annotations
    }

    pub fn get(&self, key: &str) -> Option<&Annotation> {
        self.annotations.get(key)
    }

    /// Status of the written response, if any
    pub fn status(&self) -> Option<TransportStatus> {
        self.response.as_ref().map(|(status, _)| *status)
    }

    /// Body of the written response, if any
    pub fn body(&self) -> Option<&Bytes> {
        self.response.as_ref().map(|(_, body)| body)
    }

    /// Parse the written body as JSON
    pub fn body_json(&self) -> Option<serde_json::Value> {
        self.body().and_then(|b| serde_json::from_slice(b).ok())
    }

    pub fn is_written(&self) -> bool {
        self.response.is_some()
    }
}

impl ResponseContext for RecordingContext {
    fn abort(&mut self) {
        self.aborted = true;
    }

    fn is_aborted(&self) -> bool {
        self.aborted
    }

    fn set(&mut self, key: &'static str, value: Annotation) {
        self.annotations.set(key, value);
    }

    fn write_json(&mut self, status: TransportStatus, body: Bytes) {
        self.response = Some((status, body));
    }
}

#[cfg(test)]
#[path = "context/context_tests.rs"]
mod context_tests;
