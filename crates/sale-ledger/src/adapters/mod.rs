//! # Adapters Layer (Hexagonal Architecture)
//!
//! Implements outbound port traits for the sale ledger.

mod bank;
mod oracle;

pub use bank::InMemoryBank;
pub use oracle::{FixedRateOracle, AGGREGATOR_DECIMALS, DEFAULT_RATE};
