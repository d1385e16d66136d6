//! # Event Records
//!
//! Observable records appended by ledger operations. Each record
//! carries a v4 correlation id so the surrounding platform can tie a
//! record back to the submission that produced it.

use crate::domain::{Address, CodeId, QuoteUsd};
use primitive_types::U256;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single entry in the ledger's event log.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SaleEvent {
    /// Correlation id for this record.
    pub correlation_id: Uuid,
    /// What happened.
    pub kind: SaleEventKind,
}

impl SaleEvent {
    /// Wrap a payload with a fresh correlation id.
    pub fn new(kind: SaleEventKind) -> Self {
        Self {
            correlation_id: Uuid::new_v4(),
            kind,
        }
    }
}

/// Event payloads emitted by ledger operations.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum SaleEventKind {
    /// A code was registered.
    CodeAdded {
        /// Registered identifier.
        code: CodeId,
        /// Payout recipient bound to the code.
        payout: Address,
        /// Round in effect at registration.
        round: u32,
    },
    /// The manager moved to the next round.
    RoundAdvanced {
        /// New round number.
        index: u32,
        /// New per-unit price, fixed-point USD.
        price_usd: QuoteUsd,
    },
    /// A purchase settled; the payment went straight to the payout
    /// recipient.
    Purchase {
        /// Redeemed code.
        code: CodeId,
        /// Paying account.
        buyer: Address,
        /// Recipient of the forwarded payment.
        payout: Address,
        /// Forwarded amount in wei.
        amount_wei: U256,
        /// Assessed quote value of the payment.
        value_usd: QuoteUsd,
        /// Round the purchase was evaluated against.
        round: u32,
    },
    /// Funds arrived through the fallback/receive path.
    DirectDeposit {
        /// Sending account.
        from: Address,
        /// Deposited amount in wei.
        amount_wei: U256,
    },
    /// The owner drained the ledger's balance.
    Withdrawal {
        /// Receiving account (the owner).
        to: Address,
        /// Withdrawn amount in wei.
        amount_wei: U256,
    },
}
