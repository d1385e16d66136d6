//! # Outbound Ports
//!
//! Traits for external dependencies (price oracle, value transfer).

use crate::domain::{Address, RateQuote, SaleError};
use primitive_types::U256;

/// Price oracle - outbound port.
///
/// Supplies the current native-asset rate in the quote currency.
/// Queried synchronously inside an operation; read-only, no side
/// effects. No fallback oracle is provided.
pub trait PriceOracle: Send + Sync {
    /// Latest exchange rate sample.
    fn latest_rate(&self) -> Result<RateQuote, SaleError>;
}

/// Native value transfer - outbound port.
///
/// The enclosing platform's asset-movement primitive. A transfer is
/// atomic: either both balances move or neither does, so a rejected
/// transfer leaves the triggering operation with no committed effect.
pub trait ValueTransfer: Send + Sync {
    /// Move `amount` from one account to another.
    ///
    /// Fails with [`SaleError::TransferFailed`] when the recipient
    /// refuses inbound funds and [`SaleError::InsufficientFunds`]
    /// when the sender does not hold `amount`.
    fn transfer(&self, from: &Address, to: &Address, amount: U256) -> Result<(), SaleError>;

    /// Current balance of an account.
    fn balance_of(&self, who: &Address) -> U256;
}
