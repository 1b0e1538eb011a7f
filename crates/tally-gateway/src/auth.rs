//! Session authentication extractor.
//!
//! The gateway trusts the backend to validate credentials. This extractor
//! only lifts the session cookie out of the request so handlers can forward
//! it; a missing or empty cookie short-circuits to 401 without an upstream
//! call.

use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;

use crate::error::ApiError;
use crate::state::AppState;

/// Name of the session cookie carrying the bearer credential.
pub const ACCESS_TOKEN_COOKIE: &str = "access_token";

/// The session's bearer token, read from the `access_token` cookie.
#[derive(Debug, Clone)]
pub struct SessionToken {
    /// The raw token value, forwarded verbatim as a bearer credential.
    pub token: String,
}

impl FromRequestParts<Arc<AppState>> for SessionToken {
    type Rejection = ApiError;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut Parts,
        _state: &'life1 Arc<AppState>,
    ) -> ::core::pin::Pin<
        Box<
            dyn ::core::future::Future<Output = Result<Self, Self::Rejection>>
                + ::core::marker::Send
                + 'async_trait,
        >,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            let jar = CookieJar::from_headers(&parts.headers);

            let token = jar
                .get(ACCESS_TOKEN_COOKIE)
                .map(|cookie| cookie.value().to_string())
                .filter(|token| !token.is_empty())
                .ok_or(ApiError::Unauthorized)?;

            Ok(Self { token })
        })
    }
}
