//! Request spans for the site, admin and health surfaces.
//!
//! Every request gets an `INFO` span carrying the method, path and the
//! surface it belongs to. `caller_id` starts empty and is filled in by
//! [`crate::web::middleware::web_auth`] once an admin session is resolved,
//! so every event logged while handling an admin request names its caller.
//!
//! ```text
//! INFO request{method=POST path=/admin/posts/7 area=admin caller_id=3}: Redirect link saved content_id=7
//! INFO request{method=POST path=/admin/posts/7 area=admin caller_id=3}: finished processing request latency=2 ms status=303
//! ```

use axum::http::Request;
use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, MakeSpan, TraceLayer};
use tracing::{Level, Span, field};

/// Span field recorded by the admin session middleware.
pub const CALLER_ID_FIELD: &str = "caller_id";

/// Builds the per-request span.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestSpan;

impl<B> MakeSpan<B> for RequestSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        let path = request.uri().path();
        tracing::info_span!(
            "request",
            method = %request.method(),
            path,
            area = area(path),
            caller_id = field::Empty,
        )
    }
}

/// Which surface a path belongs to.
fn area(path: &str) -> &'static str {
    if path == "/admin" || path.starts_with("/admin/") {
        "admin"
    } else if path == "/health" {
        "health"
    } else {
        "site"
    }
}

pub fn layer() -> TraceLayer<
    SharedClassifier<ServerErrorsAsFailures>,
    RequestSpan,
    DefaultOnRequest,
    DefaultOnResponse,
> {
    TraceLayer::new_for_http()
        .make_span_with(RequestSpan)
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}
