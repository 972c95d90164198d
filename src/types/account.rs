//! Prosumer account state.
//!
//! ## SSZ Serialization
//!
//! `Account` derives `SimpleSerialize` from ssz_rs for deterministic
//! encoding. Per the SSZ spec (ethereum.org):
//! - Basic types (u64, bool): Direct little-endian encoding
//! - Fixed-size composites: Concatenated little-endian fields
//!
//! ## Signed Energy
//!
//! Energy is a signed quantity (a buyer's in-flight validation may reason
//! about negative balances), but SSZ only encodes unsigned integers. The
//! raw field stores the two's-complement bits as `u64`; use [`Account::energy`]
//! and [`Account::set_energy`] for typed access.

use ssz_rs::prelude::*;

/// Identity of a registered participant.
///
/// Supplied explicitly by the calling boundary after authentication;
/// the ledger never derives identity from ambient context.
pub type ProsumerId = u64;

// ============================================================================
// Account struct
// ============================================================================

/// Per-prosumer ledger record.
///
/// An account is created exactly once, at registration, with every quantity
/// zero and `registered = true`. It is never destroyed; all later operations
/// mutate fields in place.
///
/// ## Fields
///
/// - `energy_raw`: signed energy holdings, stored as two's-complement bits
/// - `balance`: funds in atomic currency units
/// - `tokens`: loyalty token balance
/// - `registered`: set once, never cleared
///
/// ## Example
///
/// ```
/// use gridswap::types::Account;
///
/// let mut account = Account::new();
/// assert!(account.registered);
/// assert_eq!(account.energy(), 0);
///
/// account.add_energy(5);
/// account.add_energy(-8);
/// assert_eq!(account.energy(), -3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct Account {
    /// Signed energy quantity as two's-complement bits.
    /// Use `energy()` / `set_energy()` for typed access.
    pub energy_raw: u64,

    /// Funds in atomic currency units
    pub balance: u64,

    /// Loyalty token balance
    pub tokens: u64,

    /// Set at registration, never cleared
    pub registered: bool,
}

impl Account {
    /// Create a freshly registered account with all quantities zero.
    pub fn new() -> Self {
        Self {
            energy_raw: 0,
            balance: 0,
            tokens: 0,
            registered: true,
        }
    }

    /// Get the signed energy balance
    #[inline]
    pub fn energy(&self) -> i64 {
        self.energy_raw as i64
    }

    /// Set the signed energy balance
    #[inline]
    pub fn set_energy(&mut self, energy: i64) {
        self.energy_raw = energy as u64;
    }

    /// Adjust the energy balance by a signed delta (saturating at i64 bounds)
    #[inline]
    pub fn add_energy(&mut self, delta: i64) {
        self.set_energy(self.energy().saturating_add(delta));
    }

    /// Credit funds (saturating at the host numeric width)
    #[inline]
    pub fn credit_balance(&mut self, amount: u64) {
        self.balance = self.balance.saturating_add(amount);
    }

    /// Debit funds
    ///
    /// Callers check sufficiency first; saturation here is a backstop,
    /// never a substitute for the precondition.
    #[inline]
    pub fn debit_balance(&mut self, amount: u64) {
        self.balance = self.balance.saturating_sub(amount);
    }

    /// Credit loyalty tokens (saturating at the host numeric width)
    #[inline]
    pub fn credit_tokens(&mut self, amount: u64) {
        self.tokens = self.tokens.saturating_add(amount);
    }

    /// Debit loyalty tokens
    #[inline]
    pub fn debit_tokens(&mut self, amount: u64) {
        self.tokens = self.tokens.saturating_sub(amount);
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
