//! Tally HTTP proxy gateway.
//!
//! This crate fronts the billing backend for browser sessions. It exposes:
//!
//! - `GET /billing/summary` - the account's billing snapshot
//! - `POST /billing/checkout` - open a payment-provider checkout session
//! - `GET /health` - liveness
//!
//! # Authentication
//!
//! Callers authenticate with a session-scoped `access_token` cookie. The
//! gateway never validates the token itself: it forwards it to the backend
//! as a bearer credential and relays whatever the backend decides. A request
//! without the cookie is rejected with 401 before any upstream call.
//!
//! The gateway is stateless and makes exactly one upstream attempt per
//! inbound request.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Allow some pedantic lints that are noisy for Axum handler functions
#![allow(clippy::missing_errors_doc)] // Axum handlers all return Result
#![allow(clippy::unused_async)] // Routing requires async handlers either way

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod upstream;

pub use config::GatewayConfig;
pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
pub use upstream::{UpstreamClient, UpstreamError};
