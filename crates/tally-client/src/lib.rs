//! Tally Client SDK.
//!
//! This crate drives the billing summary page against a tally gateway: a
//! thin HTTP client plus the view-model state machine behind the page.
//!
//! # Example
//!
//! ```no_run
//! use tally_client::{BillingClient, CheckoutIntent, SummaryPage};
//!
//! # async fn example() {
//! let client = BillingClient::new("http://localhost:8080");
//! let mut page = SummaryPage::new(client, "session-token");
//!
//! // Mount: fetch and render the summary.
//! page.refresh().await;
//! println!("status: {}", page.view().subscription_status_label());
//!
//! // User clicked "Subscribe": open checkout and follow the redirect.
//! if let Some(redirect) = page.checkout(CheckoutIntent::Subscribe).await {
//!     println!("navigate to {}", redirect.url);
//! }
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod client;
mod error;
mod page;
mod view;

pub use client::{BillingClient, ClientOptions, ACCESS_TOKEN_COOKIE};
pub use error::ClientError;
pub use page::SummaryPage;
pub use view::{
    CheckoutIntent, FetchTicket, Redirect, RenderPhase, SummaryView, EMPTY_LEDGER_TEXT,
};
