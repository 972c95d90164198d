//! Settlement receipt for completed fund-settled trades.
//!
//! Each receipt binds the trade parameters to the SHA-256 state root of the
//! registry immediately after settlement, so an external observer can
//! verify ledger state without replaying every operation.

use ssz_rs::prelude::*;

use crate::types::ProsumerId;

/// Receipt summarizing one settled purchase.
///
/// ## State Root
///
/// The 32-byte state root is a SHA-256 digest of the registry snapshot in
/// registration order, taken after both halves of the transfer applied.
///
/// ## Example
///
/// ```
/// use gridswap::types::SettlementReceipt;
///
/// let receipt = SettlementReceipt::new(
///     1,          // trade_id
///     100,        // buyer
///     200,        // seller
///     3,          // quantity
///     3,          // cost
///     [0u8; 32],  // state_root (would be computed)
/// );
/// assert_eq!(receipt.state_root_hex().len(), 64);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct SettlementReceipt {
    /// Trade sequence number (assigned by the engine)
    pub trade_id: u64,

    /// Buyer identity
    pub buyer: ProsumerId,

    /// Seller identity (the discovered counterparty)
    pub seller: ProsumerId,

    /// Energy quantity transferred
    pub quantity: u64,

    /// Funds moved from buyer to seller, in atomic units
    pub cost: u64,

    /// Registry state root after settlement (SHA-256, 32 bytes)
    pub state_root: [u8; 32],
}

impl SettlementReceipt {
    /// Create a new settlement receipt
    pub fn new(
        trade_id: u64,
        buyer: ProsumerId,
        seller: ProsumerId,
        quantity: u64,
        cost: u64,
        state_root: [u8; 32],
    ) -> Self {
        Self {
            trade_id,
            buyer,
            seller,
            quantity,
            cost,
            state_root,
        }
    }

    /// Get the state root as a hex string
    pub fn state_root_hex(&self) -> String {
        hex::encode(self.state_root)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
