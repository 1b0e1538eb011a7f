//! Core types for the tally billing gateway.
//!
//! This crate provides the data contracts shared by the gateway and the
//! client SDK:
//!
//! - **Wallet**: `Wallet`
//! - **Subscriptions**: `Subscription`, `SubscriptionStatus`
//! - **Catalog**: `CreditPack`
//! - **Usage**: `LedgerEntry`
//! - **Summary**: `BillingSummary`
//! - **Checkout**: `CheckoutRequest`, `CheckoutKind`, `CheckoutResponse`
//!
//! # Credits
//!
//! Balances are integer credits, stored as `i64`. A credit is the billing
//! unit the backend deducts per usage event; pack prices are quoted in USD.
//! All types here are read-only snapshots of backend state: nothing in this
//! crate mutates a balance.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod catalog;
pub mod checkout;
pub mod error;
pub mod ledger;
pub mod subscription;
pub mod summary;
pub mod wallet;

pub use catalog::CreditPack;
pub use checkout::{CheckoutKind, CheckoutRequest, CheckoutResponse};
pub use error::{BillingError, Result};
pub use ledger::LedgerEntry;
pub use subscription::{Subscription, SubscriptionStatus};
pub use summary::BillingSummary;
pub use wallet::Wallet;
