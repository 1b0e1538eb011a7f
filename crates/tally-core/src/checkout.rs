//! Checkout intent and response types.

use serde::{Deserialize, Serialize};

use crate::error::{BillingError, Result};
use crate::CreditPack;

/// What a checkout session is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutKind {
    /// Start or renew the subscription plan.
    Subscription,

    /// Buy a one-time credit pack.
    CreditPack,
}

/// A request to open a checkout session.
///
/// `pack_credits` identifies the pack by its credit amount and is required
/// for credit-pack checkouts; it is ignored for subscription checkouts.
/// The backend cross-checks it against the catalog, but [`validate`] and
/// [`validate_against`] expose the same checks client-side so a malformed
/// intent never leaves the process.
///
/// [`validate`]: CheckoutRequest::validate
/// [`validate_against`]: CheckoutRequest::validate_against
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutRequest {
    /// Checkout kind.
    pub kind: CheckoutKind,

    /// Pack size in credits; required iff `kind` is `credit_pack`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pack_credits: Option<i64>,
}

impl CheckoutRequest {
    /// Build a subscription checkout request.
    #[must_use]
    pub const fn subscription() -> Self {
        Self {
            kind: CheckoutKind::Subscription,
            pack_credits: None,
        }
    }

    /// Build a credit-pack checkout request.
    #[must_use]
    pub const fn credit_pack(credits: i64) -> Self {
        Self {
            kind: CheckoutKind::CreditPack,
            pack_credits: Some(credits),
        }
    }

    /// Check the request shape.
    ///
    /// # Errors
    ///
    /// Returns [`BillingError::MissingPackCredits`] for a credit-pack
    /// request without a pack size.
    pub const fn validate(&self) -> Result<()> {
        match self.kind {
            CheckoutKind::CreditPack if self.pack_credits.is_none() => {
                Err(BillingError::MissingPackCredits)
            }
            _ => Ok(()),
        }
    }

    /// Check the request shape and catalog membership.
    ///
    /// # Errors
    ///
    /// Returns [`BillingError::MissingPackCredits`] for a credit-pack
    /// request without a pack size, or [`BillingError::UnknownCreditPack`]
    /// when the named pack is not in `catalog`.
    pub fn validate_against(&self, catalog: &[CreditPack]) -> Result<()> {
        self.validate()?;
        if self.kind == CheckoutKind::CreditPack {
            let credits = self.pack_credits.unwrap_or_default();
            if !catalog.iter().any(|pack| pack.credits == credits) {
                return Err(BillingError::UnknownCreditPack { credits });
            }
        }
        Ok(())
    }
}

/// The backend's answer to a checkout request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutResponse {
    /// Payment provider that will host the session.
    pub provider: String,

    /// URL to send the browser to.
    pub checkout_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<CreditPack> {
        vec![
            CreditPack {
                credits: 2000,
                price_usd: 9.9,
            },
            CreditPack {
                credits: 5000,
                price_usd: 19.9,
            },
        ]
    }

    #[test]
    fn subscription_request_serializes_without_pack() {
        let json = serde_json::to_value(CheckoutRequest::subscription()).expect("serialize");
        assert_eq!(json, serde_json::json!({"kind": "subscription"}));
    }

    #[test]
    fn credit_pack_request_carries_credits() {
        let json = serde_json::to_value(CheckoutRequest::credit_pack(2000)).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({"kind": "credit_pack", "pack_credits": 2000})
        );
    }

    #[test]
    fn credit_pack_without_credits_is_invalid() {
        let request = CheckoutRequest {
            kind: CheckoutKind::CreditPack,
            pack_credits: None,
        };
        assert!(matches!(
            request.validate(),
            Err(BillingError::MissingPackCredits)
        ));
    }

    #[test]
    fn unknown_pack_is_rejected_against_catalog() {
        let request = CheckoutRequest::credit_pack(999);
        assert!(matches!(
            request.validate_against(&catalog()),
            Err(BillingError::UnknownCreditPack { credits: 999 })
        ));
    }

    #[test]
    fn catalog_member_passes_validation() {
        let request = CheckoutRequest::credit_pack(5000);
        assert!(request.validate_against(&catalog()).is_ok());
    }

    #[test]
    fn subscription_ignores_stray_pack_credits() {
        let request = CheckoutRequest {
            kind: CheckoutKind::Subscription,
            pack_credits: Some(2000),
        };
        assert!(request.validate_against(&catalog()).is_ok());
    }
}
