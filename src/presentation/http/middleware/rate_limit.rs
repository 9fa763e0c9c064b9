// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

/// Per-client-IP limiter. Returns `None` when either limit is zero.
pub fn rate_limit_layer(
    per_second: u64,
    burst: u32,
) -> Option<GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>> {
    let mut builder = GovernorConfigBuilder::default();
    builder.per_second(per_second);
    builder.burst_size(burst);
    let config = builder.key_extractor(SmartIpKeyExtractor).finish()?;
    Some(GovernorLayer::new(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_limits_disable_the_layer() {
        assert!(rate_limit_layer(0, 20).is_none());
        assert!(rate_limit_layer(10, 0).is_none());
        assert!(rate_limit_layer(10, 20).is_some());
    }
}
