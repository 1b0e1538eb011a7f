//! Wallet balances.

use serde::{Deserialize, Serialize};

/// Credit balances for an account.
///
/// Both balances are non-negative by domain convention: the backend never
/// reports a negative balance, it records overage on the ledger instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallet {
    /// Credits remaining from the current subscription period.
    pub monthly_remaining: i64,

    /// Credits purchased as packs; do not reset with the billing cycle.
    pub prepaid_balance: i64,
}

impl Wallet {
    /// Total credits available to spend.
    #[must_use]
    pub const fn total_available(&self) -> i64 {
        self.monthly_remaining + self.prepaid_balance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_sums_both_balances() {
        let wallet = Wallet {
            monthly_remaining: 30,
            prepaid_balance: 1200,
        };
        assert_eq!(wallet.total_available(), 1230);
    }

    #[test]
    fn wallet_wire_format() {
        let wallet: Wallet =
            serde_json::from_str(r#"{"monthly_remaining": 50, "prepaid_balance": 0}"#)
                .expect("valid wallet JSON");
        assert_eq!(wallet.monthly_remaining, 50);
        assert_eq!(wallet.prepaid_balance, 0);
    }
}
