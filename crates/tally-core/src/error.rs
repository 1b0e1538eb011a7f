//! Error types for tally.

/// Result type for tally operations.
pub type Result<T> = std::result::Result<T, BillingError>;

/// Errors that can occur when working with billing data.
#[derive(Debug, thiserror::Error)]
pub enum BillingError {
    /// A credit-pack checkout was requested without naming a pack.
    #[error("pack_credits is required for credit_pack checkout")]
    MissingPackCredits,

    /// The requested pack does not exist in the catalog.
    #[error("unknown credit pack: {credits} credits")]
    UnknownCreditPack {
        /// The credit amount that matched no catalog entry.
        credits: i64,
    },
}
