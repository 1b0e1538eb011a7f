//! Application state.

use crate::config::GatewayConfig;
use crate::upstream::UpstreamClient;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Client for the billing backend.
    pub upstream: UpstreamClient,

    /// Gateway configuration.
    pub config: GatewayConfig,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: GatewayConfig) -> Self {
        let upstream =
            UpstreamClient::new(&config.upstream_base_url, config.upstream_timeout_seconds);

        tracing::info!(upstream = %config.upstream_base_url, "Upstream billing backend configured");

        Self { upstream, config }
    }
}
