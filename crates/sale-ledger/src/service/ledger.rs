//! Access Sale Ledger
//!
//! Implements the `SaleApi` port using injected oracle and transfer
//! dependencies. Owns the code registry, the round sequence, and the
//! event log.

use std::collections::BTreeMap;
use std::sync::Arc;

use primitive_types::U256;
use tracing::{info, warn};

use crate::domain::{
    invariant_caller_is, invariant_payment_covers, Address, CodeId, InviteCode, QuoteUsd, Role,
    Round, SaleConfig, SaleError,
};
use crate::events::{SaleEvent, SaleEventKind};
use crate::ports::{PriceOracle, SaleApi, ValueTransfer};
use crate::pricing;

/// Identities and configuration fixed at deployment.
#[derive(Clone, Debug)]
pub struct SaleDeployment {
    /// Catalog manager: adds codes, advances rounds.
    pub manager: Address,
    /// Deploying identity, recorded as owner.
    pub deployer: Address,
    /// Account holding the ledger's own balance.
    pub ledger_account: Address,
    /// Opening price and minimum-payment policy.
    pub config: SaleConfig,
}

/// The sale ledger service.
///
/// All mutating operations take `&mut self`; the registry, round, and
/// event log are only touched inside the single operation that
/// requested them, preserving the platform's serial-execution
/// guarantee.
pub struct AccessSaleLedger<O: PriceOracle, B: ValueTransfer> {
    oracle: Arc<O>,
    bank: Arc<B>,
    manager: Address,
    owner: Address,
    ledger_account: Address,
    registry: BTreeMap<CodeId, InviteCode>,
    round: Round,
    config: SaleConfig,
    events: Vec<SaleEvent>,
}

impl<O: PriceOracle, B: ValueTransfer> AccessSaleLedger<O, B> {
    /// Deploy a ledger with an empty registry at round zero.
    pub fn new(oracle: Arc<O>, bank: Arc<B>, deployment: SaleDeployment) -> Self {
        info!(
            "[sale] deployed: manager 0x{}, owner 0x{}",
            hex::encode(deployment.manager),
            hex::encode(deployment.deployer)
        );
        Self {
            oracle,
            bank,
            manager: deployment.manager,
            owner: deployment.deployer,
            ledger_account: deployment.ledger_account,
            registry: BTreeMap::new(),
            round: Round::opening(deployment.config.round_zero_price_usd),
            config: deployment.config,
            events: Vec::new(),
        }
    }

    /// The manager address.
    pub fn manager(&self) -> Address {
        self.manager
    }

    /// The owner (deployer) address.
    pub fn owner(&self) -> Address {
        self.owner
    }

    /// The ledger's own account address.
    pub fn ledger_account(&self) -> Address {
        self.ledger_account
    }

    /// Records appended by settled operations, oldest first.
    pub fn events(&self) -> &[SaleEvent] {
        &self.events
    }

    fn record(&mut self, kind: SaleEventKind) {
        self.events.push(SaleEvent::new(kind));
    }
}

impl<O: PriceOracle, B: ValueTransfer> SaleApi for AccessSaleLedger<O, B> {
    fn add_code(
        &mut self,
        caller: Address,
        id: CodeId,
        payout: Address,
    ) -> Result<(), SaleError> {
        invariant_caller_is(&caller, &self.manager, Role::Manager)?;
        if self.registry.contains_key(&id) {
            return Err(SaleError::DuplicateCode(id));
        }

        let round = self.round.index;
        self.registry
            .insert(id.clone(), InviteCode::new(id.clone(), payout, round));
        info!(
            "[sale] code {} registered for 0x{}",
            id,
            hex::encode(payout)
        );
        self.record(SaleEventKind::CodeAdded {
            code: id,
            payout,
            round,
        });
        Ok(())
    }

    fn advance_round(
        &mut self,
        caller: Address,
        new_price: QuoteUsd,
    ) -> Result<Round, SaleError> {
        invariant_caller_is(&caller, &self.manager, Role::Manager)?;

        // Price accepted verbatim; already settled purchases keep
        // the price they were evaluated against.
        let round = self.round.advance(new_price);
        info!(
            "[sale] round {} open at {} USD units",
            round.index, round.price_usd
        );
        self.record(SaleEventKind::RoundAdvanced {
            index: round.index,
            price_usd: round.price_usd,
        });
        Ok(round)
    }

    fn buy_with_eth(
        &mut self,
        caller: Address,
        code: &str,
        payment: U256,
    ) -> Result<QuoteUsd, SaleError> {
        let payout = self
            .registry
            .get(code)
            .map(|entry| entry.payout)
            .ok_or_else(|| SaleError::UnknownCode(code.to_string()))?;

        let rate = self.oracle.latest_rate()?;
        let offered_usd = pricing::quote_value_usd(payment, &rate)?;
        let required = pricing::required_usd(self.round.price_usd, self.config.min_price_units);
        invariant_payment_covers(offered_usd, required)?;

        // All validation done; the transfer is the commit point. On
        // rejection nothing has been recorded and the caller keeps
        // the payment.
        if let Err(err) = self.bank.transfer(&caller, &payout, payment) {
            warn!("[sale] purchase of {} rolled back: {}", code, err);
            return Err(err);
        }

        info!(
            "[sale] code {} redeemed: {} wei -> 0x{} ({} USD units)",
            code,
            payment,
            hex::encode(payout),
            offered_usd
        );
        self.record(SaleEventKind::Purchase {
            code: code.to_string(),
            buyer: caller,
            payout,
            amount_wei: payment,
            value_usd: offered_usd,
            round: self.round.index,
        });
        Ok(offered_usd)
    }

    fn receive_direct(&mut self, from: Address, amount: U256) -> Result<(), SaleError> {
        // No business validation on this path.
        self.bank.transfer(&from, &self.ledger_account, amount)?;
        self.record(SaleEventKind::DirectDeposit {
            from,
            amount_wei: amount,
        });
        Ok(())
    }

    fn withdraw_ether(&mut self, caller: Address) -> Result<U256, SaleError> {
        invariant_caller_is(&caller, &self.owner, Role::Owner)?;

        let balance = self.bank.balance_of(&self.ledger_account);
        if balance.is_zero() {
            return Err(SaleError::NothingToWithdraw);
        }
        self.bank.transfer(&self.ledger_account, &self.owner, balance)?;

        info!("[sale] owner withdrew {} wei", balance);
        self.record(SaleEventKind::Withdrawal {
            to: self.owner,
            amount_wei: balance,
        });
        Ok(balance)
    }

    fn code_owner(&self, code: &str) -> Option<Address> {
        self.registry.get(code).map(|entry| entry.payout)
    }

    fn current_round(&self) -> Round {
        self.round
    }

    fn registry_len(&self) -> usize {
        self.registry.len()
    }

    fn ledger_balance(&self) -> U256 {
        self.bank.balance_of(&self.ledger_account)
    }
}
