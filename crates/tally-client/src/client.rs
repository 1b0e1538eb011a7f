//! Tally HTTP client implementation.

use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use tally_core::{BillingSummary, CheckoutRequest, CheckoutResponse};

use crate::error::ClientError;

/// Name of the session cookie carrying the bearer credential.
pub const ACCESS_TOKEN_COOKIE: &str = "access_token";

/// Gateway error body shape.
#[derive(Debug, Deserialize)]
struct DetailBody {
    detail: String,
}

/// Tally gateway API client.
///
/// Sends the session token the way a browser does, as the `access_token`
/// cookie, so the same credential flows unchanged from view to gateway to
/// backend.
#[derive(Debug, Clone)]
pub struct BillingClient {
    client: Client,
    base_url: String,
}

impl BillingClient {
    /// Create a new tally client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL of the gateway (e.g., `"http://localhost:8080"`)
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_options(base_url, ClientOptions::default())
    }

    /// Create a new tally client with custom options.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be built (should not happen with
    /// default settings).
    #[must_use]
    pub fn with_options(base_url: impl Into<String>, options: ClientOptions) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(options.timeout_seconds))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Fetch the billing summary for a session.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn get_summary(&self, token: &str) -> Result<BillingSummary, ClientError> {
        let url = format!("{}/billing/summary", self.base_url);

        let response = self
            .client
            .get(&url)
            .header("cookie", format!("{ACCESS_TOKEN_COOKIE}={token}"))
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Open a checkout session for a subscription or credit pack.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn create_checkout(
        &self,
        token: &str,
        request: &CheckoutRequest,
    ) -> Result<CheckoutResponse, ClientError> {
        let url = format!("{}/billing/checkout", self.base_url);

        let response = self
            .client
            .post(&url)
            .header("cookie", format!("{ACCESS_TOKEN_COOKIE}={token}"))
            .json(request)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Handle API response and convert errors.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response.json().await?);
        }

        // Try to parse error response
        let error_body: Result<DetailBody, _> = response.json().await;

        match error_body {
            Ok(body) => Err(ClientError::Api {
                status: status.as_u16(),
                detail: body.detail,
            }),
            Err(_) => Err(ClientError::Api {
                status: status.as_u16(),
                detail: format!("HTTP {status}"),
            }),
        }
    }
}

/// Client options for customization.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Request timeout in seconds (default: 30).
    pub timeout_seconds: u64,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
        }
    }
}
