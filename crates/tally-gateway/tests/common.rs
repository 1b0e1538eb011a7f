//! Common test utilities for tally-gateway integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use axum::Router;
use axum_test::TestServer;
use wiremock::MockServer;

use tally_gateway::{create_router, AppState, GatewayConfig};

/// Bearer token used by authenticated test requests.
pub const TEST_TOKEN: &str = "test-session-token";

/// Test harness containing everything needed for integration tests.
pub struct TestHarness {
    /// The test server for making HTTP requests.
    pub server: TestServer,
    /// Mocked billing backend the gateway forwards to.
    pub upstream: MockServer,
}

impl TestHarness {
    /// Create a new test harness with a fresh mocked backend.
    pub async fn new() -> Self {
        let upstream = MockServer::start().await;

        let config = GatewayConfig {
            listen_addr: "127.0.0.1:0".into(),
            upstream_base_url: upstream.uri(),
            ..GatewayConfig::default()
        };

        let state = AppState::new(config);
        let router: Router = create_router(state);

        let server = TestServer::new(router).expect("Failed to create test server");

        Self { server, upstream }
    }

    /// Cookie header value for an authenticated session.
    pub fn session_cookie() -> String {
        format!("access_token={TEST_TOKEN}")
    }

    /// Number of requests the mocked backend has received.
    pub async fn upstream_request_count(&self) -> usize {
        self.upstream
            .received_requests()
            .await
            .map_or(0, |requests| requests.len())
    }
}
