//! Fixed-Rate Oracle Adapter
//!
//! Implements the `PriceOracle` port with a constant rate. Stands in
//! for the production aggregator in local deployments and tests.

use crate::domain::{RateQuote, SaleError};
use crate::ports::PriceOracle;
use tracing::debug;

/// Default rate: 2000 USD per native unit, 8 decimals.
pub const DEFAULT_RATE: u64 = 2_000 * 100_000_000;

/// Decimal scale used by the reference aggregator.
pub const AGGREGATOR_DECIMALS: u32 = 8;

/// Constant-rate oracle.
#[derive(Clone, Debug)]
pub struct FixedRateOracle {
    /// Rate returned from every query.
    pub rate: u64,
    /// Scale of `rate`.
    pub decimals: u32,
    /// Should queries fail?
    pub should_fail: bool,
}

impl FixedRateOracle {
    /// Oracle answering with the given rate at aggregator scale.
    pub fn new(rate: u64) -> Self {
        Self {
            rate,
            decimals: AGGREGATOR_DECIMALS,
            should_fail: false,
        }
    }
}

impl Default for FixedRateOracle {
    fn default() -> Self {
        Self::new(DEFAULT_RATE)
    }
}

impl PriceOracle for FixedRateOracle {
    fn latest_rate(&self) -> Result<RateQuote, SaleError> {
        if self.should_fail {
            return Err(SaleError::Oracle("aggregator unavailable".to_string()));
        }
        debug!("[sale] oracle rate {} at {} decimals", self.rate, self.decimals);
        Ok(RateQuote::new(self.rate, self.decimals))
    }
}
