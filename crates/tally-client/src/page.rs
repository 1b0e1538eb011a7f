//! Async driver for the summary view.

use crate::client::BillingClient;
use crate::view::{CheckoutIntent, Redirect, SummaryView};

/// The billing summary page: a [`BillingClient`] wired to a
/// [`SummaryView`].
///
/// Owns the session token and reduces every transport or API failure to a
/// banner message; none of the methods here can panic on a failed fetch.
#[derive(Debug)]
pub struct SummaryPage {
    client: BillingClient,
    token: String,
    view: SummaryView,
}

impl SummaryPage {
    /// Create a page for one session.
    #[must_use]
    pub fn new(client: BillingClient, token: impl Into<String>) -> Self {
        Self {
            client,
            token: token.into(),
            view: SummaryView::new(),
        }
    }

    /// The view state, for rendering.
    #[must_use]
    pub const fn view(&self) -> &SummaryView {
        &self.view
    }

    /// Fetch the summary, as on mount or manual refresh.
    pub async fn refresh(&mut self) {
        let ticket = self.view.begin_fetch();

        let result = self
            .client
            .get_summary(&self.token)
            .await
            .map_err(|err| err.user_message());

        self.view.complete_fetch(ticket, result);
    }

    /// Run a checkout action to completion.
    ///
    /// Returns the redirect to perform on success; `None` when the action
    /// was rejected (another checkout in flight), failed, or produced no
    /// URL. The view's error banner reflects failures.
    pub async fn checkout(&mut self, intent: CheckoutIntent) -> Option<Redirect> {
        if !self.view.begin_checkout(&intent) {
            tracing::debug!(label = %intent.label(), "Checkout already in flight, ignoring");
            return None;
        }

        let result = self
            .client
            .create_checkout(&self.token, &intent.to_request())
            .await
            .map_err(|err| err.user_message());

        self.view.complete_checkout(result)
    }
}
