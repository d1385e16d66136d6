//! # Inbound Ports
//!
//! API trait defining what the sale ledger can do.

use crate::domain::{Address, CodeId, QuoteUsd, Round, SaleError};
use primitive_types::U256;

/// Sale ledger API - inbound port.
///
/// Every operation takes the caller's address explicitly; the
/// surrounding platform is responsible for authenticating it. Each
/// call executes atomically and serially relative to all others:
/// either it commits all state changes and transfers, or it fails
/// with no partial effect.
pub trait SaleApi: Send + Sync {
    /// Register an invite code bound to a payout recipient.
    ///
    /// Manager only. Fails with [`SaleError::DuplicateCode`] when the
    /// identifier is already present.
    fn add_code(&mut self, caller: Address, id: CodeId, payout: Address)
        -> Result<(), SaleError>;

    /// Move to the next round at a new per-unit USD price.
    ///
    /// Manager only. The price is accepted verbatim and is
    /// immediately visible to subsequent purchases. Returns the round
    /// now in effect.
    fn advance_round(&mut self, caller: Address, new_price: QuoteUsd)
        -> Result<Round, SaleError>;

    /// Redeem a code, forwarding the entire payment to its payout
    /// recipient.
    ///
    /// Callable by anyone. The payment is converted through the price
    /// oracle and checked against the minimum-payment policy before
    /// any funds move. Returns the assessed quote value of the
    /// payment.
    fn buy_with_eth(
        &mut self,
        caller: Address,
        code: &str,
        payment: U256,
    ) -> Result<QuoteUsd, SaleError>;

    /// Accept an unconditional native-asset transfer into the
    /// ledger's own balance (fallback/receive path).
    fn receive_direct(&mut self, from: Address, amount: U256) -> Result<(), SaleError>;

    /// Transfer the ledger's entire balance to the owner.
    ///
    /// Owner only. Fails with [`SaleError::NothingToWithdraw`] at
    /// zero balance. Returns the withdrawn amount.
    fn withdraw_ether(&mut self, caller: Address) -> Result<U256, SaleError>;

    /// Payout recipient of a registered code, if any.
    fn code_owner(&self, code: &str) -> Option<Address>;

    /// The round currently in effect.
    fn current_round(&self) -> Round;

    /// Number of registered codes.
    fn registry_len(&self) -> usize;

    /// The ledger's own native-asset balance (direct transfers only;
    /// purchase payments never rest here).
    fn ledger_balance(&self) -> U256;
}
