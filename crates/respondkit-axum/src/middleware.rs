//! Middleware reporting response annotations

use crate::context::ResponseAnnotations;
use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use respondkit_logging::AnnotationReporter;

/// Log the annotations of every response produced by an [`HttpContext`](crate::HttpContext)
///
/// Use with `axum::middleware::from_fn(annotation_logging)`.
pub async fn annotation_logging(request: Request, next: Next) -> Response {
    let response = next.run(request).await;
    let annotations = response.extensions().get::<ResponseAnnotations>();
    if let Some(ResponseAnnotations(annotations)) = annotations {
        AnnotationReporter::new().report(annotations);
    }
    response
}
