//! Settlement facade: the only caller-reachable surface.
//!
//! ## Responsibilities
//!
//! - enforce the per-identity state machine
//!   (`Unregistered -> register -> Registered`, terminal),
//! - validate preconditions (registration, signed trade direction, the
//!   pre-dispatch funds fast-fail) before routing to the trade engine,
//! - serialize every state-changing operation behind one lock so each call
//!   runs to completion before the next begins.
//!
//! ## Identity
//!
//! Every entry point takes an explicit [`ProsumerId`]. Authentication is
//! the calling boundary's job; the ledger trusts the identity it is handed.
//!
//! ## Custody
//!
//! Deposits and withdrawals settle against an external value-transfer
//! mechanism modelled by the [`CustodyBoundary`] trait. The ledger treats
//! it as opaque: a payout either succeeds or reports failure.

use std::cmp::Ordering;
use std::sync::{Mutex, MutexGuard};

use crate::engine::TradeEngine;
use crate::registry::Registry;
use crate::types::units::trade_cost;
use crate::types::{LedgerError, LedgerEvent, ProsumerId, SettlementReceipt};

/// External value-transfer capability backing withdrawals.
///
/// Implementations live outside the core (bank rails, a chain wallet, a
/// test double). `payout` returns `false` when the transfer mechanism
/// reports failure, in which case the ledger rolls the withdrawal back.
pub trait CustodyBoundary {
    /// Transfer `amount` atomic units out to `to`'s external wallet.
    fn payout(&mut self, to: ProsumerId, amount: u64) -> bool;
}

/// All mutable ledger state, owned as a unit.
///
/// Grouped in one struct so a single lock acquisition covers the registry,
/// the engine, and the receipt log together.
#[derive(Debug, Default)]
struct LedgerState {
    registry: Registry,
    engine: TradeEngine,
    receipts: Vec<SettlementReceipt>,
}

/// The peer-to-peer energy trading ledger.
///
/// Entry points mirror the external interface one to one; each returns the
/// events it emitted, in emission order, or the specific [`LedgerError`]
/// kind. A failed call leaves all state exactly as it found it.
///
/// ## Concurrency
///
/// One global mutual-exclusion region guards everything: each operation
/// locks, runs to completion (counterparty scan included), and unlocks.
/// This is the serializability contract, not an optimization target.
///
/// ## Example
///
/// ```
/// use gridswap::settlement::EnergyLedger;
///
/// let ledger = EnergyLedger::new();
///
/// ledger.register(1).unwrap();
/// ledger.register(2).unwrap();
/// ledger.deposit_funds(1, 10).unwrap();
/// ledger.send_request(2, 5).unwrap();   // prosumer 2 lists 5 units
/// ledger.send_request(1, -3).unwrap();  // prosumer 1 buys 3 of them
///
/// assert_eq!(ledger.query_energy(1).unwrap(), 3);
/// assert_eq!(ledger.query_balance(1).unwrap(), 7);
/// ```
#[derive(Debug, Default)]
pub struct EnergyLedger {
    state: Mutex<LedgerState>,
}

impl EnergyLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self {
            state: Mutex::new(LedgerState::default()),
        }
    }

    /// Create a ledger with registry capacity pre-allocated
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            state: Mutex::new(LedgerState {
                registry: Registry::with_capacity(capacity),
                engine: TradeEngine::new(),
                receipts: Vec::new(),
            }),
        }
    }

    /// Acquire the global serialization lock.
    fn lock(&self) -> MutexGuard<'_, LedgerState> {
        self.state.lock().expect("ledger state lock poisoned")
    }

    // ========================================================================
    // Registration and custody
    // ========================================================================

    /// Register the caller as a prosumer.
    ///
    /// Registration is terminal and irreversible; it is also the only
    /// operation permitted to an unregistered identity.
    ///
    /// # Errors
    ///
    /// [`LedgerError::AlreadyRegistered`] on any repeat attempt.
    pub fn register(&self, who: ProsumerId) -> Result<Vec<LedgerEvent>, LedgerError> {
        let mut state = self.lock();
        state.registry.register(who)?;
        Ok(vec![LedgerEvent::Registered { who }])
    }

    /// Credit the caller's balance by exactly `amount` atomic units.
    ///
    /// # Errors
    ///
    /// [`LedgerError::NotRegistered`] if the caller has no account.
    pub fn deposit_funds(
        &self,
        who: ProsumerId,
        amount: u64,
    ) -> Result<Vec<LedgerEvent>, LedgerError> {
        let mut state = self.lock();
        state.registry.account_mut(who)?.credit_balance(amount);
        Ok(vec![LedgerEvent::FundsDeposited { who, amount }])
    }

    /// Pay the caller's entire balance out through the custody boundary.
    ///
    /// The balance is zeroed **before** the external transfer is attempted,
    /// so a re-entrant caller observes an already-empty account. If the
    /// custody payout reports failure the zeroing is rolled back inside the
    /// same critical section and [`LedgerError::WithdrawalFailed`] surfaces.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::NotRegistered`] if the caller has no account
    /// - [`LedgerError::WithdrawalFailed`] if the payout is rejected
    pub fn withdraw_funds(
        &self,
        who: ProsumerId,
        custody: &mut dyn CustodyBoundary,
    ) -> Result<Vec<LedgerEvent>, LedgerError> {
        let mut state = self.lock();

        let account = state.registry.account_mut(who)?;
        let amount = account.balance;
        account.balance = 0;

        if !custody.payout(who, amount) {
            state.registry.account_mut(who)?.credit_balance(amount);
            return Err(LedgerError::WithdrawalFailed);
        }

        Ok(vec![LedgerEvent::FundsWithdrawn { who, amount }])
    }

    // ========================================================================
    // Trading
    // ========================================================================

    /// Submit a signed trade request.
    ///
    /// Negative amounts buy, positive amounts sell (list). A zero amount
    /// carries nothing to settle and is rejected with the distinct
    /// [`LedgerError::NothingToDo`] signal rather than either trade-path
    /// error. The funds guard for the buy direction runs before dispatch
    /// as a fast-fail; it uses the same cost computation as the engine, so
    /// the two can never disagree.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::NotRegistered`] if the caller has no account
    /// - [`LedgerError::NothingToDo`] if `amount` is zero
    /// - [`LedgerError::InsufficientFunds`] if a buy cannot be covered
    /// - any error from the dispatched engine operation
    pub fn send_request(
        &self,
        who: ProsumerId,
        amount: i64,
    ) -> Result<Vec<LedgerEvent>, LedgerError> {
        let mut state = self.lock();
        state.registry.must_be_registered(who)?;

        if amount < 0 {
            let cost = trade_cost(amount.unsigned_abs());
            if state.registry.must_be_registered(who)?.balance < cost {
                return Err(LedgerError::InsufficientFunds);
            }
        }

        let mut events = Vec::new();
        let LedgerState {
            registry,
            engine,
            receipts,
        } = &mut *state;

        match amount.cmp(&0) {
            Ordering::Less => {
                let receipt = engine.buy(registry, &mut events, who, amount.unsigned_abs())?;
                receipts.push(receipt);
            }
            Ordering::Greater => {
                engine.sell(registry, &mut events, who, amount as u64)?;
            }
            // Zero carries nothing to settle; neither trade path runs
            Ordering::Equal => return Err(LedgerError::NothingToDo),
        }

        Ok(events)
    }

    /// Buy energy for a flat token price instead of funds.
    ///
    /// See [`TradeEngine::buy_with_tokens`] for the one-sided settlement
    /// semantics.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::NotRegistered`] if the caller has no account
    /// - any error from the engine's token-purchase path
    pub fn purchase_with_tokens(
        &self,
        who: ProsumerId,
        quantity: u64,
    ) -> Result<Vec<LedgerEvent>, LedgerError> {
        let mut state = self.lock();
        state.registry.must_be_registered(who)?;

        let mut events = Vec::new();
        let LedgerState {
            registry, engine, ..
        } = &mut *state;
        engine.buy_with_tokens(registry, &mut events, who, quantity)?;

        Ok(events)
    }

    // ========================================================================
    // Read-only queries (registered callers only, never mutate)
    // ========================================================================

    /// The caller's balance in atomic currency units
    pub fn query_balance(&self, who: ProsumerId) -> Result<u64, LedgerError> {
        Ok(self.lock().registry.must_be_registered(who)?.balance)
    }

    /// The caller's signed energy holdings
    pub fn query_energy(&self, who: ProsumerId) -> Result<i64, LedgerError> {
        Ok(self.lock().registry.must_be_registered(who)?.energy())
    }

    /// The caller's loyalty token balance
    pub fn query_tokens(&self, who: ProsumerId) -> Result<u64, LedgerError> {
        Ok(self.lock().registry.must_be_registered(who)?.tokens)
    }

    // ========================================================================
    // Observation
    // ========================================================================

    /// Receipts for every completed fund-settled purchase, in trade order
    pub fn receipts(&self) -> Vec<SettlementReceipt> {
        self.lock().receipts.clone()
    }

    /// SHA-256 digest of the current registry snapshot
    pub fn state_root(&self) -> [u8; 32] {
        self.lock().registry.state_root()
    }

    /// Number of registered prosumers
    pub fn prosumer_count(&self) -> usize {
        self.lock().registry.len()
    }

    /// Aggregate totals `(balance, energy, tokens)` for invariant checks
    pub fn totals(&self) -> (u128, i128, u128) {
        let state = self.lock();
        (
            state.registry.total_balance(),
            state.registry.total_energy(),
            state.registry.total_tokens(),
        )
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
