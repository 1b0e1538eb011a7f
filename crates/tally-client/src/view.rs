//! Summary view state machine.
//!
//! The page behind `GET /billing/summary` reduced to a plain state machine:
//! no rendering, no I/O, just the transitions the UI must respect. The
//! async glue lives in [`SummaryPage`](crate::SummaryPage); everything here
//! is synchronous and unit-testable.
//!
//! Load lifecycle: `loading -> loaded | error`. A failed fetch keeps the
//! previously held summary, so the page degrades to stale data plus an
//! error banner instead of going blank. Fetches carry a generation ticket;
//! a completion whose ticket has been superseded is discarded, so a slow
//! response can never overwrite a newer one.
//!
//! Checkout is single-flight: one shared label tracks the in-flight action,
//! and further checkout attempts are rejected until it clears.

use tally_core::{BillingSummary, CheckoutRequest, CheckoutResponse};

/// Placeholder shown instead of an empty ledger list.
pub const EMPTY_LEDGER_TEXT: &str = "No usage yet.";

/// Status label shown when the account has no subscription.
const INACTIVE_STATUS: &str = "inactive";

/// What the page body should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderPhase {
    /// First load still in flight; show the loading placeholder.
    Loading,

    /// Load finished but produced nothing; show the empty-state message.
    Empty,

    /// A summary is held; render all four sections.
    Loaded,
}

/// A user-triggered checkout action.
///
/// Pack intents are derived from the last-fetched catalog (see
/// [`SummaryView::pack_intents`]); the view offers no way to request a pack
/// the backend did not list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutIntent {
    /// Start the subscription plan.
    Subscribe,

    /// Buy the credit pack of the given size.
    BuyPack {
        /// Pack size in credits.
        credits: i64,
    },
}

impl CheckoutIntent {
    /// Label identifying this action in busy-state tracking.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Subscribe => "subscribe".to_string(),
            Self::BuyPack { credits } => format!("pack-{credits}"),
        }
    }

    /// The wire request for this intent.
    #[must_use]
    pub const fn to_request(&self) -> CheckoutRequest {
        match self {
            Self::Subscribe => CheckoutRequest::subscription(),
            Self::BuyPack { credits } => CheckoutRequest::credit_pack(*credits),
        }
    }
}

/// A browser navigation the caller must perform.
///
/// Returned when checkout succeeds; following it is terminal for the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    /// Where to send the browser.
    pub url: String,
}

/// Ticket tying a fetch completion to the fetch that started it.
///
/// Tickets are ordered by issue; only the most recently issued one is
/// accepted at completion time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
}

/// State machine for the billing summary page.
#[derive(Debug, Default)]
pub struct SummaryView {
    summary: Option<BillingSummary>,
    error: Option<String>,
    loading: bool,
    checkout_loading: Option<String>,
    generation: u64,
}

impl SummaryView {
    /// Create a fresh view, as on mount.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Fetch lifecycle
    // ------------------------------------------------------------------

    /// Enter the loading state and issue a ticket for the new fetch.
    ///
    /// Issuing a new ticket supersedes every earlier one: their completions
    /// will be discarded.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.loading = true;
        FetchTicket {
            generation: self.generation,
        }
    }

    /// Apply the outcome of the fetch identified by `ticket`.
    ///
    /// Stale tickets are discarded without touching any state. On success
    /// the summary is replaced and the error banner cleared; on failure the
    /// banner is set and the previously held summary (if any) survives.
    pub fn complete_fetch(&mut self, ticket: FetchTicket, result: Result<BillingSummary, String>) {
        if ticket.generation != self.generation {
            tracing::debug!(
                ticket = ticket.generation,
                current = self.generation,
                "Discarding stale summary fetch"
            );
            return;
        }

        self.loading = false;
        match result {
            Ok(summary) => {
                self.summary = Some(summary);
                self.error = None;
            }
            Err(message) => {
                self.error = Some(message);
            }
        }
    }

    // ------------------------------------------------------------------
    // Checkout lifecycle
    // ------------------------------------------------------------------

    /// Try to start a checkout; returns `false` when one is already in
    /// flight (single-flight across all actions).
    pub fn begin_checkout(&mut self, intent: &CheckoutIntent) -> bool {
        if self.checkout_loading.is_some() {
            return false;
        }
        self.checkout_loading = Some(intent.label());
        true
    }

    /// Apply the outcome of the in-flight checkout.
    ///
    /// A success with a non-empty URL yields the redirect to perform; the
    /// busy label is intentionally left set since the view is abandoned at
    /// navigation. A success with an empty URL clears the label and stays
    /// put. A failure sets the error banner and clears the label.
    pub fn complete_checkout(
        &mut self,
        result: Result<CheckoutResponse, String>,
    ) -> Option<Redirect> {
        match result {
            Ok(response) if !response.checkout_url.is_empty() => Some(Redirect {
                url: response.checkout_url,
            }),
            Ok(_) => {
                self.checkout_loading = None;
                None
            }
            Err(message) => {
                self.error = Some(message);
                self.checkout_loading = None;
                None
            }
        }
    }

    // ------------------------------------------------------------------
    // Render policy
    // ------------------------------------------------------------------

    /// What the page body should show right now.
    #[must_use]
    pub fn phase(&self) -> RenderPhase {
        match (&self.summary, self.loading) {
            (Some(_), _) => RenderPhase::Loaded,
            (None, true) => RenderPhase::Loading,
            (None, false) => RenderPhase::Empty,
        }
    }

    /// The currently held summary, if any.
    #[must_use]
    pub fn summary(&self) -> Option<&BillingSummary> {
        self.summary.as_ref()
    }

    /// The current error banner text, if any.
    ///
    /// Shown alongside loaded content, never instead of it.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether a summary fetch is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Status badge text: the subscription's status, or `"inactive"` when
    /// there is none.
    #[must_use]
    pub fn subscription_status_label(&self) -> &str {
        self.summary
            .as_ref()
            .and_then(|summary| summary.subscription.as_ref())
            .map_or(INACTIVE_STATUS, |sub| sub.status.as_str())
    }

    /// Monthly credit allowance to display; `0` without a subscription.
    #[must_use]
    pub fn monthly_credits(&self) -> i64 {
        self.summary
            .as_ref()
            .and_then(|summary| summary.subscription.as_ref())
            .map_or(0, |sub| sub.monthly_credits)
    }

    /// Whether any checkout is in flight.
    #[must_use]
    pub const fn checkout_in_flight(&self) -> bool {
        self.checkout_loading.is_some()
    }

    /// Whether this specific action should render as busy.
    #[must_use]
    pub fn is_checkout_busy(&self, intent: &CheckoutIntent) -> bool {
        self.checkout_loading.as_deref() == Some(intent.label().as_str())
    }

    /// Placeholder for the ledger section, when it has nothing to list.
    #[must_use]
    pub fn ledger_placeholder(&self) -> Option<&'static str> {
        match &self.summary {
            Some(summary) if summary.recent_ledger.is_empty() => Some(EMPTY_LEDGER_TEXT),
            _ => None,
        }
    }

    /// Purchase buttons to offer, one per catalog entry.
    #[must_use]
    pub fn pack_intents(&self) -> Vec<CheckoutIntent> {
        self.summary
            .as_ref()
            .map(|summary| {
                summary
                    .credit_packs
                    .iter()
                    .map(|pack| CheckoutIntent::BuyPack {
                        credits: pack.credits,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_core::{CreditPack, Wallet};

    fn summary_without_subscription() -> BillingSummary {
        BillingSummary {
            wallet: Wallet {
                monthly_remaining: 0,
                prepaid_balance: 150,
            },
            subscription: None,
            credit_packs: vec![
                CreditPack {
                    credits: 2000,
                    price_usd: 9.9,
                },
                CreditPack {
                    credits: 5000,
                    price_usd: 19.9,
                },
            ],
            recent_ledger: vec![],
        }
    }

    fn checkout_response(url: &str) -> CheckoutResponse {
        CheckoutResponse {
            provider: "creem".to_string(),
            checkout_url: url.to_string(),
        }
    }

    #[test]
    fn starts_in_loading_phase_after_begin_fetch() {
        let mut view = SummaryView::new();
        assert_eq!(view.phase(), RenderPhase::Empty);

        view.begin_fetch();
        assert_eq!(view.phase(), RenderPhase::Loading);
    }

    #[test]
    fn successful_fetch_loads_and_clears_error() {
        let mut view = SummaryView::new();

        let ticket = view.begin_fetch();
        view.complete_fetch(ticket, Err("network down".to_string()));
        assert_eq!(view.error(), Some("network down"));

        let ticket = view.begin_fetch();
        view.complete_fetch(ticket, Ok(summary_without_subscription()));

        assert_eq!(view.phase(), RenderPhase::Loaded);
        assert_eq!(view.error(), None);
    }

    #[test]
    fn failed_fetch_keeps_previous_summary() {
        let mut view = SummaryView::new();

        let ticket = view.begin_fetch();
        view.complete_fetch(ticket, Ok(summary_without_subscription()));

        let ticket = view.begin_fetch();
        view.complete_fetch(ticket, Err("backend unavailable".to_string()));

        // Stale data plus banner, not a blank page.
        assert_eq!(view.phase(), RenderPhase::Loaded);
        assert!(view.summary().is_some());
        assert_eq!(view.error(), Some("backend unavailable"));
    }

    #[test]
    fn first_fetch_failure_shows_empty_state() {
        let mut view = SummaryView::new();

        let ticket = view.begin_fetch();
        view.complete_fetch(ticket, Err("boom".to_string()));

        assert_eq!(view.phase(), RenderPhase::Empty);
        assert_eq!(view.error(), Some("boom"));
    }

    #[test]
    fn stale_fetch_completion_is_discarded() {
        let mut view = SummaryView::new();

        let stale = view.begin_fetch();
        let fresh = view.begin_fetch();

        // The fresh response lands first.
        view.complete_fetch(fresh, Ok(summary_without_subscription()));
        // The stale response lands late with an error and must not win.
        view.complete_fetch(stale, Err("slow response".to_string()));

        assert_eq!(view.phase(), RenderPhase::Loaded);
        assert_eq!(view.error(), None);
    }

    #[test]
    fn stale_success_cannot_overwrite_fresh_summary() {
        let mut view = SummaryView::new();

        let stale = view.begin_fetch();
        let fresh = view.begin_fetch();

        let mut newer = summary_without_subscription();
        newer.wallet.prepaid_balance = 999;
        view.complete_fetch(fresh, Ok(newer));
        view.complete_fetch(stale, Ok(summary_without_subscription()));

        let held = view.summary().expect("summary held");
        assert_eq!(held.wallet.prepaid_balance, 999);
    }

    #[test]
    fn null_subscription_renders_inactive_with_zero_credits() {
        let mut view = SummaryView::new();
        let ticket = view.begin_fetch();
        view.complete_fetch(ticket, Ok(summary_without_subscription()));

        assert_eq!(view.subscription_status_label(), "inactive");
        assert_eq!(view.monthly_credits(), 0);
        // Subscribe stays offered and enabled.
        assert!(!view.is_checkout_busy(&CheckoutIntent::Subscribe));
    }

    #[test]
    fn empty_ledger_renders_placeholder() {
        let mut view = SummaryView::new();
        let ticket = view.begin_fetch();
        view.complete_fetch(ticket, Ok(summary_without_subscription()));

        assert_eq!(view.ledger_placeholder(), Some("No usage yet."));
    }

    #[test]
    fn pack_intents_mirror_the_catalog() {
        let mut view = SummaryView::new();
        let ticket = view.begin_fetch();
        view.complete_fetch(ticket, Ok(summary_without_subscription()));

        assert_eq!(
            view.pack_intents(),
            vec![
                CheckoutIntent::BuyPack { credits: 2000 },
                CheckoutIntent::BuyPack { credits: 5000 },
            ]
        );
    }

    #[test]
    fn checkout_is_single_flight_across_actions() {
        let mut view = SummaryView::new();

        assert!(view.begin_checkout(&CheckoutIntent::Subscribe));
        // A different action is still blocked while the first is in flight.
        assert!(!view.begin_checkout(&CheckoutIntent::BuyPack { credits: 2000 }));

        assert!(view.is_checkout_busy(&CheckoutIntent::Subscribe));
        assert!(!view.is_checkout_busy(&CheckoutIntent::BuyPack { credits: 2000 }));
    }

    #[test]
    fn checkout_success_yields_redirect_to_exact_url() {
        let mut view = SummaryView::new();
        view.begin_checkout(&CheckoutIntent::Subscribe);

        let redirect = view.complete_checkout(Ok(checkout_response("https://pay.example/x")));

        assert_eq!(
            redirect,
            Some(Redirect {
                url: "https://pay.example/x".to_string()
            })
        );
    }

    #[test]
    fn empty_checkout_url_clears_flag_without_navigation() {
        let mut view = SummaryView::new();
        view.begin_checkout(&CheckoutIntent::BuyPack { credits: 2000 });

        let redirect = view.complete_checkout(Ok(checkout_response("")));

        assert_eq!(redirect, None);
        assert!(!view.checkout_in_flight());
    }

    #[test]
    fn checkout_failure_sets_banner_and_clears_flag() {
        let mut view = SummaryView::new();
        view.begin_checkout(&CheckoutIntent::Subscribe);

        let redirect = view.complete_checkout(Err("Insufficient credits".to_string()));

        assert_eq!(redirect, None);
        assert_eq!(view.error(), Some("Insufficient credits"));
        assert!(!view.checkout_in_flight());
        // The next attempt is allowed again.
        assert!(view.begin_checkout(&CheckoutIntent::Subscribe));
    }
}
