//! Observable ledger events.
//!
//! Every state-changing entry point returns the events it emitted, in
//! emission order. Order matters per call: a completed purchase emits its
//! purchase event before the token-reward events, a listing emits the sale
//! event before the reward. Delivery to external subscribers is the
//! caller's concern; the core only produces the ordered values.

use crate::types::ProsumerId;

/// An observable event emitted by a completed ledger operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerEvent {
    /// A new prosumer registered
    Registered { who: ProsumerId },

    /// Funds credited from the custody boundary
    FundsDeposited { who: ProsumerId, amount: u64 },

    /// Entire balance paid out to the custody boundary
    FundsWithdrawn { who: ProsumerId, amount: u64 },

    /// A unilateral sale listing: the seller's advertised energy grew
    EnergyListed { seller: ProsumerId, quantity: u64 },

    /// A fund-settled purchase between two prosumers
    EnergyPurchased {
        buyer: ProsumerId,
        seller: ProsumerId,
        quantity: u64,
        cost: u64,
    },

    /// Loyalty tokens granted for a completed trade
    TokensRewarded { who: ProsumerId, amount: u64 },

    /// A token-settled purchase (flat token price, buyer side only)
    TokensSpent {
        buyer: ProsumerId,
        quantity: u64,
        tokens: u64,
    },
}
