//! # Domain Entities
//!
//! Core entities for the early-access sale ledger.

use super::errors::{Address, CodeId, QuoteUsd};
use serde::{Deserialize, Serialize};

/// A registered invite code.
///
/// Immutable once created: never deleted, never reassigned. Created
/// only by the manager.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InviteCode {
    /// Opaque identifier, unique across the registry's lifetime.
    pub id: CodeId,
    /// Payout recipient for purchases redeemed against this code.
    pub payout: Address,
    /// Round in effect when the code was registered.
    pub added_at_round: u32,
}

impl InviteCode {
    /// Register a code bound to a payout recipient.
    pub fn new(id: CodeId, payout: Address, added_at_round: u32) -> Self {
        Self {
            id,
            payout,
            added_at_round,
        }
    }
}

/// Sale configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleConfig {
    /// Opening price for round zero, fixed-point USD.
    pub round_zero_price_usd: QuoteUsd,
    /// Minimum-payment policy: a payment is accepted iff its
    /// oracle-converted USD value covers `min_price_units` times the
    /// current round price. Zero disables the check, in which case
    /// any amount is forwarded.
    pub min_price_units: u64,
}

impl Default for SaleConfig {
    fn default() -> Self {
        Self {
            round_zero_price_usd: 5_000, // 0.50 USD
            min_price_units: 0,          // forward any amount
        }
    }
}
