//! Subscription state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A subscription as reported by the backend.
///
/// A summary with no subscription at all carries `null`, not an empty
/// object; consumers hold this as `Option<Subscription>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    /// Current status of the subscription.
    pub status: SubscriptionStatus,

    /// Plan name, if the provider reports one.
    #[serde(default)]
    pub plan_name: Option<String>,

    /// Credits granted each billing period.
    #[serde(default)]
    pub monthly_credits: i64,

    /// Start of the current billing period.
    #[serde(default)]
    pub current_period_start: Option<DateTime<Utc>>,

    /// End of the current billing period.
    #[serde(default)]
    pub current_period_end: Option<DateTime<Utc>>,

    /// Payment provider backing the subscription.
    #[serde(default)]
    pub provider: Option<String>,
}

/// Status of a subscription.
///
/// Statuses originate at the payment provider, so deserialization accepts
/// values outside the known set rather than failing the whole summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    /// Subscription is active.
    Active,

    /// In a trial period.
    Trialing,

    /// Cancelled (may remain usable until period end).
    Cancelled,

    /// Payment failed, subscription is past due.
    PastDue,

    /// A status this client does not recognize.
    #[serde(other)]
    Unknown,
}

impl SubscriptionStatus {
    /// The wire string for this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Trialing => "trialing",
            Self::Cancelled => "cancelled",
            Self::PastDue => "past_due",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for SubscriptionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_from_wire() {
        let status: SubscriptionStatus =
            serde_json::from_str(r#""past_due""#).expect("valid status");
        assert_eq!(status, SubscriptionStatus::PastDue);
    }

    #[test]
    fn unlisted_status_maps_to_unknown() {
        let status: SubscriptionStatus =
            serde_json::from_str(r#""incomplete_expired""#).expect("tolerated status");
        assert_eq!(status, SubscriptionStatus::Unknown);
    }

    #[test]
    fn subscription_defaults_monthly_credits() {
        let sub: Subscription = serde_json::from_str(
            r#"{
                "status": "active",
                "plan_name": null,
                "current_period_start": null,
                "current_period_end": null,
                "provider": "creem"
            }"#,
        )
        .expect("valid subscription");
        assert_eq!(sub.monthly_credits, 0);
        assert_eq!(sub.provider.as_deref(), Some("creem"));
    }
}
