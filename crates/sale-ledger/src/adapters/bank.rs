//! In-Memory Bank Adapter
//!
//! Implements the `ValueTransfer` port over an in-memory balance map.
//! In production the enclosing platform moves the native asset; this
//! adapter reproduces its observable contract, including recipients
//! that refuse inbound funds (a non-accepting contract).

use crate::domain::{Address, SaleError};
use crate::ports::ValueTransfer;
use parking_lot::RwLock;
use primitive_types::U256;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// In-memory account balances.
#[derive(Default)]
pub struct InMemoryBank {
    accounts: RwLock<HashMap<Address, U256>>,
    refusing: RwLock<HashSet<Address>>,
}

impl InMemoryBank {
    /// Empty bank.
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit an account out of thin air (fixture setup).
    pub fn fund(&self, who: Address, amount: U256) {
        let mut accounts = self.accounts.write();
        let balance = accounts.entry(who).or_insert_with(U256::zero);
        *balance += amount;
    }

    /// Mark an account as refusing inbound transfers.
    pub fn refuse_inbound(&self, who: Address) {
        self.refusing.write().insert(who);
    }
}

impl ValueTransfer for InMemoryBank {
    fn transfer(&self, from: &Address, to: &Address, amount: U256) -> Result<(), SaleError> {
        if self.refusing.read().contains(to) {
            return Err(SaleError::TransferFailed { recipient: *to });
        }

        // Single lock scope: debit and credit commit together.
        let mut accounts = self.accounts.write();
        let available = accounts.get(from).copied().unwrap_or_else(U256::zero);
        if available < amount {
            return Err(SaleError::InsufficientFunds { account: *from });
        }
        accounts.insert(*from, available - amount);
        let credited = accounts.entry(*to).or_insert_with(U256::zero);
        *credited += amount;

        debug!(
            "[sale] transferred {} wei 0x{} -> 0x{}",
            amount,
            hex::encode(from),
            hex::encode(to)
        );
        Ok(())
    }

    fn balance_of(&self, who: &Address) -> U256 {
        self.accounts
            .read()
            .get(who)
            .copied()
            .unwrap_or_else(U256::zero)
    }
}
