//! Per-IP rate limiting for the API.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

/// Builds the token-bucket limiter applied to everything under `/api`.
///
/// Keys on the peer socket address, so the server must be started with
/// connect-info (see `server::run`). Steady state allows 2 requests per
/// second with a burst capacity of 100; excess requests get
/// `429 Too Many Requests` before they reach credential verification or
/// any handler.
///
/// The health endpoint sits outside this layer so probes are never
/// throttled.
pub fn layer() -> GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>
{
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(2)
            .burst_size(100)
            .finish()
            .unwrap(),
    );

    GovernorLayer::new(governor_conf)
}
