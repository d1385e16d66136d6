//! # Domain Errors
//!
//! Error types for the early-access sale ledger.

use thiserror::Error;

/// Account address type (20-byte).
pub type Address = [u8; 20];

/// Invite code identifier (opaque string).
pub type CodeId = String;

/// Quote-currency amount, fixed-point USD with four decimal places.
pub type QuoteUsd = u64;

/// Roles a restricted operation may require.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Role {
    /// Runs the catalog: adds codes, advances rounds.
    Manager,
    /// The deploying identity: withdraws the ledger's residual balance.
    Owner,
}

/// Sale ledger error types.
#[derive(Debug, Error)]
pub enum SaleError {
    /// Caller lacks the required role.
    #[error("access denied: {required:?} role required")]
    AccessDenied {
        /// Role the operation is restricted to.
        required: Role,
    },

    /// Code identifier already present in the registry.
    #[error("code already exists: {0}")]
    DuplicateCode(CodeId),

    /// Redemption of a code that was never registered.
    #[error("unknown code: {0}")]
    UnknownCode(CodeId),

    /// Payment below the round-derived minimum.
    #[error("insufficient payment: requires {required_usd} USD units, offered {offered_usd}")]
    InsufficientPayment {
        /// Minimum quote value the current round demands.
        required_usd: QuoteUsd,
        /// Quote value of the submitted payment.
        offered_usd: QuoteUsd,
    },

    /// Recipient rejected the inbound transfer.
    #[error("transfer rejected by recipient 0x{}", hex::encode(.recipient))]
    TransferFailed {
        /// Address that refused the funds.
        recipient: Address,
    },

    /// Sending account does not hold the transferred amount.
    #[error("insufficient funds in account 0x{}", hex::encode(.account))]
    InsufficientFunds {
        /// Account short on funds.
        account: Address,
    },

    /// Withdrawal attempted against a zero balance.
    #[error("nothing to withdraw")]
    NothingToWithdraw,

    /// Price oracle could not supply a rate.
    #[error("oracle failure: {0}")]
    Oracle(String),

    /// Conversion result does not fit the fixed-point range.
    #[error("amount overflow during conversion")]
    AmountOverflow,
}
