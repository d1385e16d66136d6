//! # Pricing
//!
//! Oracle-rate conversion and the minimum-payment policy.
//!
//! The quote value of a wei-scale payment at rate `r` scaled by
//! `10^d` is `payment * r * 10^QUOTE_DECIMALS / 10^(d + 18)`, carried
//! out in 256-bit arithmetic and narrowed to the fixed-point `u64`
//! range at the end.

use crate::domain::{QuoteUsd, RateQuote, SaleError, NATIVE_DECIMALS, QUOTE_DECIMALS};
use primitive_types::U256;

/// `10^exp` as a 256-bit integer.
pub(crate) fn pow10(exp: u32) -> U256 {
    U256::from(10u64).pow(U256::from(exp))
}

/// Quote-currency value of a native-asset payment, fixed-point USD
/// with [`QUOTE_DECIMALS`] places.
pub fn quote_value_usd(payment_wei: U256, rate: &RateQuote) -> Result<QuoteUsd, SaleError> {
    if rate.rate == 0 {
        return Err(SaleError::Oracle("zero rate".to_string()));
    }

    let scaled = payment_wei
        .checked_mul(U256::from(rate.rate))
        .and_then(|v| v.checked_mul(pow10(QUOTE_DECIMALS)))
        .ok_or(SaleError::AmountOverflow)?;
    let value = scaled / pow10(rate.decimals + NATIVE_DECIMALS);

    if value > U256::from(u64::MAX) {
        return Err(SaleError::AmountOverflow);
    }
    Ok(value.as_u64())
}

/// Minimum quote value a payment must reach under the current round.
///
/// `min_price_units` is the tunable policy knob: zero disables the
/// floor, `n` demands the value of `n` round-priced units.
pub fn required_usd(round_price_usd: QuoteUsd, min_price_units: u64) -> QuoteUsd {
    round_price_usd.saturating_mul(min_price_units)
}
