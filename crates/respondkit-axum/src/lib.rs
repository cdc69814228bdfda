//! respondkit-axum - axum transport adapter
//!
//! This crate provides:
//! - [`HttpContext`], a [`ResponseContext`](respondkit_core::ResponseContext)
//!   that becomes an axum [`Response`](axum::response::Response)
//! - [`ResponseAnnotations`], the annotations attached to that response
//! - [`annotation_logging`] middleware that reports those annotations
//!
//! ```ignore
//! async fn get_user(State(responder): State<Arc<AppResponder>>) -> HttpContext {
//!     let mut ctx = HttpContext::new();
//!     responder.respond_result(&mut ctx, ServiceCode::new(200_001), load_user().await);
//!     ctx
//! }
//!
//! let app = Router::new()
//!     .route("/user", get(get_user))
//!     .layer(axum::middleware::from_fn(annotation_logging))
//!     .with_state(Arc::new(responder));
//! ```

mod context;
mod middleware;

pub use context::{HttpContext, ResponseAnnotations, status_code};
pub use middleware::annotation_logging;
