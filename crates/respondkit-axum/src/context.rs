//! Response context backed by an axum response

use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use bytes::Bytes;
use respondkit_core::{
    Annotation, Annotations, RespondError, RespondResult, ResponseContext, TransportStatus,
};
use respondkit_transport::{Codec, JsonCodec};

/// Annotations of a request, attached to its response extensions
#[derive(Debug, Clone)]
pub struct ResponseAnnotations(pub Annotations);

/// Per-request context for axum handlers
///
/// Return it from the handler after the responder has written to it.
/// A context nobody wrote to becomes an empty `500`.
#[derive(Debug, Default)]
pub struct HttpContext {
    aborted: bool,
    annotations: Annotations,
    response: Option<(TransportStatus, Bytes)>,
}

impl HttpContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn annotations(&self) -> &Annotations {
        &self.annotations
    }

    pub fn is_written(&self) -> bool {
        self.response.is_some()
    }
}

impl ResponseContext for HttpContext {
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

/// Map a transport status onto an HTTP status code
pub fn status_code(status: TransportStatus) -> RespondResult<StatusCode> {
    u16::try_from(status.get())
        .ok()
        .and_then(|code| StatusCode::from_u16(code).ok())
        .ok_or(RespondError::InvalidStatus(status.get()))
}

impl IntoResponse for HttpContext {
    fn into_response(self) -> Response {
        let (status, body) = match self.response {
            Some((status, body)) => {
                let code = status_code(status).unwrap_or_else(|err| {
                    tracing::warn!(error = %err, "sending 500 instead");
                    StatusCode::INTERNAL_SERVER_ERROR
                });
                (code, body)
            }
            None => {
                tracing::warn!("response context was never written");
                (StatusCode::INTERNAL_SERVER_ERROR, Bytes::new())
            }
        };

        let mut response = (
            status,
            [(header::CONTENT_TYPE, HeaderValue::from_static(JsonCodec::CONTENT_TYPE))],
            body,
        )
            .into_response();
        response
            .extensions_mut()
            .insert(ResponseAnnotations(self.annotations));
        response
    }
}

#[cfg(test)]
#[path = "context/context_tests.rs"]
mod context_tests;
