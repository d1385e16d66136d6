//! # Sale Ledger
//!
//! Gated early-access sale: a fixed catalog of invite codes, each
//! bound to a payout recipient, sold in sequential priced rounds with
//! payment in a native crypto-asset converted through a USD price
//! oracle.
//!
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purchase path
//!
//! A buyer redeems a registered code with a native-asset payment. The
//! payment is converted at the oracle rate, checked against the
//! round's minimum-payment policy, and forwarded in full to the
//! code's payout recipient. Purchase funds never rest in the ledger's
//! own balance; only the fallback/receive path accumulates there, and
//! only the owner can drain it.
//!
//! ## Module Structure
//!
//! ```text
//! sale-ledger/
//! ├── domain/          # InviteCode, Round, SaleConfig, errors, invariants
//! ├── ports/           # SaleApi, PriceOracle, ValueTransfer
//! ├── adapters/        # FixedRateOracle, InMemoryBank
//! ├── service/         # AccessSaleLedger
//! ├── pricing          # oracle conversion + minimum-payment policy
//! └── events           # observable operation records
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod events;
pub mod ports;
pub mod pricing;
pub mod service;

// Re-exports
pub use adapters::{FixedRateOracle, InMemoryBank, AGGREGATOR_DECIMALS, DEFAULT_RATE};
pub use domain::{
    invariant_caller_is, invariant_payment_covers, Address, CodeId, InviteCode, QuoteUsd,
    RateQuote, Role, Round, SaleConfig, SaleError, NATIVE_DECIMALS, QUOTE_DECIMALS,
};
pub use events::{SaleEvent, SaleEventKind};
pub use ports::{PriceOracle, SaleApi, ValueTransfer};
pub use pricing::{quote_value_usd, required_usd};
pub use service::{AccessSaleLedger, SaleDeployment};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
