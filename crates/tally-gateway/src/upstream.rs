//! Billing backend client.
//!
//! The gateway never reshapes backend payloads: success bodies are relayed
//! as parsed JSON values and structured errors keep their status and
//! message. One attempt per call, no retries.

use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use tally_core::CheckoutRequest;

/// Error type for upstream operations.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// The request never produced a usable response.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend returned a structured `{"detail": ...}` error.
    #[error("upstream API error: {status} - {detail}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message.
        detail: String,
    },

    /// The backend failed without a parseable error body.
    #[error("unexpected upstream response: HTTP {status}")]
    Unexpected {
        /// HTTP status code.
        status: u16,
    },
}

/// Backend error body shape (FastAPI-style).
#[derive(Debug, Deserialize)]
struct DetailBody {
    detail: String,
}

/// Billing backend API client.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: Client,
    base_url: String,
}

impl UpstreamClient {
    /// Create a new upstream client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Backend base URL (e.g., `"http://localhost:8000"`)
    /// * `timeout_seconds` - Per-request timeout
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be built (should not happen with
    /// default settings).
    #[must_use]
    pub fn new(base_url: impl Into<String>, timeout_seconds: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Fetch the billing summary for the session's user.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend returns an
    /// error response.
    pub async fn billing_summary(&self, token: &str) -> Result<serde_json::Value, UpstreamError> {
        let url = format!("{}/api/v1/billing/summary", self.base_url);

        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {token}"))
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Open a checkout session.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend returns an
    /// error response.
    pub async fn create_checkout(
        &self,
        token: &str,
        request: &CheckoutRequest,
    ) -> Result<serde_json::Value, UpstreamError> {
        let url = format!("{}/api/v1/billing/checkout", self.base_url);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {token}"))
            .json(request)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Relay a success body, or classify the failure.
    async fn handle_response(
        &self,
        response: reqwest::Response,
    ) -> Result<serde_json::Value, UpstreamError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response.json().await?);
        }

        match response.json::<DetailBody>().await {
            Ok(body) => Err(UpstreamError::Api {
                status: status.as_u16(),
                detail: body.detail,
            }),
            Err(_) => Err(UpstreamError::Unexpected {
                status: status.as_u16(),
            }),
        }
    }
}
