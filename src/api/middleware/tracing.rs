//! Request/response tracing.

use tower_http::LatencyUnit;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Builds the trace layer wrapped around the whole router.
///
/// Each request gets an `INFO` span carrying the method, URI, and HTTP
/// version; the response side logs the status code and latency in
/// milliseconds inside that span:
///
/// ```text
/// INFO request{method=PUT uri=/api/users/3 version=HTTP/1.1}: finished processing request latency=4 ms status=204
/// ```
///
/// Handlers and repositories log through `tracing` as well, so their
/// events land inside the request span automatically.
pub fn layer()
-> TraceLayer<tower_http::classify::SharedClassifier<tower_http::classify::ServerErrorsAsFailures>>
{
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}
