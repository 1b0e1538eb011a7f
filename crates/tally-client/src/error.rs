//! Client error types.

/// Errors that can occur when using the tally client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned an error response.
    #[error("API error: {status} - {detail}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message.
        detail: String,
    },
}

impl ClientError {
    /// Reduce the error to a message fit for the error banner.
    ///
    /// API errors surface the server's own message; transport failures get
    /// a generic line rather than leaking reqwest internals at the user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Api { detail, .. } => detail.clone(),
            Self::Http(_) => "Request failed. Please try again.".to_string(),
        }
    }
}
