//! Token usage ledger entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One usage event on the append-only token ledger.
///
/// Entries are created by the backend when usage is committed and are
/// returned newest-first in summaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Backend-assigned entry ID.
    pub id: Uuid,

    /// Model that generated the usage, if recorded.
    #[serde(default)]
    pub model_name: Option<String>,

    /// Prompt tokens, if the provider reported a breakdown.
    #[serde(default)]
    pub prompt_tokens: Option<i64>,

    /// Completion tokens, if the provider reported a breakdown.
    #[serde(default)]
    pub completion_tokens: Option<i64>,

    /// Total tokens consumed by the event.
    pub total_tokens: i64,

    /// Credits charged for the event.
    pub cost_credits: i64,

    /// Credits charged beyond the available balance.
    #[serde(default)]
    pub overage_credits: i64,

    /// When the usage was committed.
    pub created_at: DateTime<Utc>,
}
