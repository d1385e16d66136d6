//! # Domain Value Objects
//!
//! Immutable value types for the early-access sale.

use super::errors::QuoteUsd;
use serde::{Deserialize, Serialize};

/// Decimal places of the quote currency (USD fixed-point).
pub const QUOTE_DECIMALS: u32 = 4;

/// Decimal places of the native payment asset (wei scale).
pub const NATIVE_DECIMALS: u32 = 18;

/// Exchange rate sample from the price oracle.
///
/// Chainlink-style: `rate` is the native-asset price in the quote
/// currency, scaled by `10^decimals`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateQuote {
    /// Native-asset price in quote-currency units.
    pub rate: u64,
    /// Scale of `rate` (8 for the reference aggregator).
    pub decimals: u32,
}

impl RateQuote {
    /// Create a new rate sample.
    pub fn new(rate: u64, decimals: u32) -> Self {
        Self { rate, decimals }
    }
}

/// The current sale round.
///
/// Exactly one round is active at any time. Rounds are numbered by
/// succession; the price is set at round zero and only ever replaced
/// by an explicit manager action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    /// Succession number, starting at zero.
    pub index: u32,
    /// Per-unit price in fixed-point USD ([`QUOTE_DECIMALS`]).
    pub price_usd: QuoteUsd,
}

impl Round {
    /// Round zero at the given opening price.
    pub fn opening(price_usd: QuoteUsd) -> Self {
        Self {
            index: 0,
            price_usd,
        }
    }

    /// Advance to the next round at a new price.
    ///
    /// The price is accepted verbatim; callers are trusted. Already
    /// settled purchases are unaffected.
    pub fn advance(&mut self, new_price: QuoteUsd) -> Round {
        self.index += 1;
        self.price_usd = new_price;
        *self
    }
}
