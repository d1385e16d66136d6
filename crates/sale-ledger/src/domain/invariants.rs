//! # Domain Invariants
//!
//! Business rules for the early-access sale ledger.

use super::errors::{Address, QuoteUsd, Role, SaleError};

/// Invariant: restricted operations compare the caller against the
/// explicit role holder recorded at construction. No ambient
/// authority.
pub fn invariant_caller_is(
    caller: &Address,
    holder: &Address,
    required: Role,
) -> Result<(), SaleError> {
    if caller != holder {
        return Err(SaleError::AccessDenied { required });
    }
    Ok(())
}

/// Invariant: the quote value of a payment covers the round-derived
/// minimum. A zero minimum accepts every payment.
pub fn invariant_payment_covers(
    offered_usd: QuoteUsd,
    required_usd: QuoteUsd,
) -> Result<(), SaleError> {
    if offered_usd < required_usd {
        return Err(SaleError::InsufficientPayment {
            required_usd,
            offered_usd,
        });
    }
    Ok(())
}
