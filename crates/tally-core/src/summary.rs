//! The billing summary aggregate.

use serde::{Deserialize, Serialize};

use crate::{CreditPack, LedgerEntry, Subscription, Wallet};

/// Snapshot of an account's billing state.
///
/// This is the aggregate the summary endpoint returns. It is rebuilt on
/// every fetch and never mutated by consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillingSummary {
    /// Current balances.
    pub wallet: Wallet,

    /// Current subscription; `null` when the account has none.
    pub subscription: Option<Subscription>,

    /// Purchasable credit packs, in catalog order.
    pub credit_packs: Vec<CreditPack>,

    /// Recent usage, newest first.
    pub recent_ledger: Vec<LedgerEntry>,
}
