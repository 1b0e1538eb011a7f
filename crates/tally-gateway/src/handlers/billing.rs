//! Billing proxy handlers.
//!
//! Both handlers are pure relays: authenticate the session cookie, forward
//! to the backend with a bearer header, hand back the backend's JSON.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use tally_core::CheckoutRequest;

use crate::auth::SessionToken;
use crate::error::ApiError;
use crate::state::AppState;

/// Relay the billing summary for the current session.
pub async fn summary(
    State(state): State<Arc<AppState>>,
    session: SessionToken,
) -> Result<Json<serde_json::Value>, ApiError> {
    let body = state.upstream.billing_summary(&session.token).await?;

    tracing::debug!("Relayed billing summary");

    Ok(Json(body))
}

/// Relay a checkout request and the resulting session URL.
pub async fn checkout(
    State(state): State<Arc<AppState>>,
    session: SessionToken,
    Json(request): Json<CheckoutRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let body = state
        .upstream
        .create_checkout(&session.token, &request)
        .await?;

    tracing::info!(kind = ?request.kind, "Relayed checkout session");

    Ok(Json(body))
}
