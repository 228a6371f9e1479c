//! Per-IP rate limiting using the token bucket algorithm.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

type PeerIpGovernor =
    GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Rate limiter for authenticated admin pages.
///
/// # Limits
///
/// - **Rate**: 2 requests per second
/// - **Burst**: 100 requests
///
/// Requests exceeding the limit receive `429 Too Many Requests`. Keys are
/// the socket peer address, so the router must be served with
/// `into_make_service_with_connect_info`.
pub fn layer() -> PeerIpGovernor {
    governor_layer(2, 100)
}

/// Stricter rate limiter for the login form.
///
/// # Limits
///
/// - **Rate**: 1 request per second
/// - **Burst**: 10 requests
///
/// Slows down token guessing.
pub fn secure_layer() -> PeerIpGovernor {
    governor_layer(1, 10)
}

fn governor_layer(per_second: u64, burst_size: u32) -> PeerIpGovernor {
    // Both values are non-zero, so the builder always yields a config.
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(per_second)
            .burst_size(burst_size)
            .finish()
            .unwrap(),
    );

    GovernorLayer::new(governor_conf)
}
