//! Credit pack catalog.

use serde::{Deserialize, Serialize};

/// A purchasable bundle of credits at a fixed price.
///
/// Catalog entries are configured on the backend and are immutable from the
/// consumer's point of view; `credits` doubles as the pack's identifier in
/// checkout requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditPack {
    /// Credits granted on purchase.
    pub credits: i64,

    /// Price in US dollars.
    pub price_usd: f64,
}
