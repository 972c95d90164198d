//! Prosumer registry: the account store.
//!
//! ## Architecture
//!
//! The registry pairs two structures:
//!
//! - **Vec**: registration order, append-only (insertion order = scan order)
//! - **HashMap**: identity to account record, O(1) lookup
//!
//! The Vec ordering is a correctness property, not an optimization detail:
//! counterparty discovery scans it front to back and the first match wins,
//! so a stable order is what makes matching deterministic.
//!
//! ## Ownership
//!
//! The registry exclusively owns every [`Account`]; no other component
//! caches or duplicates this state. Accounts are created exactly once, at
//! registration, and never removed.

use std::collections::HashMap;

use sha2::{Digest, Sha256};

use crate::types::{Account, LedgerError, ProsumerId};

/// The account store and registration ledger.
///
/// ## Example
///
/// ```
/// use gridswap::registry::Registry;
/// use gridswap::types::LedgerError;
///
/// let mut registry = Registry::new();
///
/// registry.register(7).unwrap();
/// assert!(registry.is_registered(7));
/// assert_eq!(registry.register(7), Err(LedgerError::AlreadyRegistered));
/// ```
#[derive(Debug, Default)]
pub struct Registry {
    /// Identity to account record
    accounts: HashMap<ProsumerId, Account>,

    /// Identities in registration order (append-only)
    order: Vec<ProsumerId>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            accounts: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Create a registry with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            accounts: HashMap::with_capacity(capacity),
            order: Vec::with_capacity(capacity),
        }
    }

    // ========================================================================
    // Registration
    // ========================================================================

    /// Register a new prosumer.
    ///
    /// Creates a zero-initialized account with `registered = true` and
    /// appends the identity to the registration order. Registration is
    /// terminal: it happens at most once per identity and is never undone.
    ///
    /// # Errors
    ///
    /// [`LedgerError::AlreadyRegistered`] if the identity already holds a
    /// registered account.
    pub fn register(&mut self, id: ProsumerId) -> Result<(), LedgerError> {
        if self.is_registered(id) {
            return Err(LedgerError::AlreadyRegistered);
        }

        self.accounts.insert(id, Account::new());
        self.order.push(id);
        Ok(())
    }

    /// Check whether an identity holds a registered account
    #[inline]
    pub fn is_registered(&self, id: ProsumerId) -> bool {
        self.accounts
            .get(&id)
            .map(|account| account.registered)
            .unwrap_or(false)
    }

    // ========================================================================
    // Access
    // ========================================================================

    /// Read access to an account, if one exists
    #[inline]
    pub fn get(&self, id: ProsumerId) -> Option<&Account> {
        self.accounts.get(&id)
    }

    /// Read access that fails for unregistered identities
    ///
    /// # Errors
    ///
    /// [`LedgerError::NotRegistered`] if the identity has no registered
    /// account.
    pub fn must_be_registered(&self, id: ProsumerId) -> Result<&Account, LedgerError> {
        self.accounts
            .get(&id)
            .filter(|account| account.registered)
            .ok_or(LedgerError::NotRegistered)
    }

    /// Mutable access that fails for unregistered identities
    ///
    /// All mutation elsewhere in the crate goes through this accessor; the
    /// registry itself does not authorize callers (that is the facade's
    /// job).
    pub fn account_mut(&mut self, id: ProsumerId) -> Result<&mut Account, LedgerError> {
        self.accounts
            .get_mut(&id)
            .filter(|account| account.registered)
            .ok_or(LedgerError::NotRegistered)
    }

    /// Number of registered prosumers
    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if no prosumer has registered yet
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate identities and accounts in registration order
    pub fn iter_in_order(&self) -> impl Iterator<Item = (ProsumerId, &Account)> {
        self.order
            .iter()
            .filter_map(|id| self.accounts.get(id).map(|account| (*id, account)))
    }

    // ========================================================================
    // Aggregates (conservation checks and state digest)
    // ========================================================================

    /// Sum of all balances, widened so the total cannot overflow
    pub fn total_balance(&self) -> u128 {
        self.iter_in_order()
            .map(|(_, account)| account.balance as u128)
            .sum()
    }

    /// Sum of all signed energy holdings
    pub fn total_energy(&self) -> i128 {
        self.iter_in_order()
            .map(|(_, account)| account.energy() as i128)
            .sum()
    }

    /// Sum of all token balances
    pub fn total_tokens(&self) -> u128 {
        self.iter_in_order()
            .map(|(_, account)| account.tokens as u128)
            .sum()
    }

    /// SHA-256 digest of the full registry snapshot.
    ///
    /// Fields are folded in little-endian, in registration order, so two
    /// registries holding identical state produce identical roots.
    pub fn state_root(&self) -> [u8; 32] {
        let mut hasher = Sha256::new();

        for (id, account) in self.iter_in_order() {
            hasher.update(id.to_le_bytes());
            hasher.update(account.energy_raw.to_le_bytes());
            hasher.update(account.balance.to_le_bytes());
            hasher.update(account.tokens.to_le_bytes());
            hasher.update([account.registered as u8]);
        }

        let result = hasher.finalize();
        let mut root = [0u8; 32];
        root.copy_from_slice(&result);
        root
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
