//! # GridSwap
//!
//! Peer-to-peer energy trading ledger with deterministic settlement.
//!
//! ## Architecture
//!
//! The ledger consists of:
//! - **Types**: Core data structures (Account, LedgerEvent, SettlementReceipt)
//! - **Registry**: Account store plus first-match counterparty discovery
//! - **Engine**: Trade execution and fixed-size token rewards
//! - **Settlement**: The registered-prosumer-only facade and custody seam
//!
//! ## Design Principles
//!
//! 1. **Determinism**: Counterparty choice depends only on registration
//!    order and account state, never on hashing or timing
//! 2. **All-or-Nothing**: Every operation validates fully before mutating;
//!    failures leave the ledger byte-for-byte unchanged
//! 3. **One Serialization Boundary**: A single lock guards all mutable
//!    state, so operations execute one at a time to completion
//! 4. **No Floating Point**: Balances are atomic integer units; display
//!    conversion goes through fixed-point decimal math
//!
//! ## Trading Model
//!
//! A positive request lists energy for sale (unilateral, no counterparty).
//! A negative request buys from the first registered seller holding
//! strictly more energy than requested, at a fixed rate of one atomic
//! currency unit per energy unit. Completed trades earn flat token
//! rewards, spendable through a fixed-price token purchase path.

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: Account, LedgerEvent, LedgerError, SettlementReceipt
pub mod types;

/// Account store and counterparty discovery
pub mod registry;

/// Trade engine and token rewards
pub mod engine;

/// Caller-facing settlement facade and custody boundary
pub mod settlement;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use types::{Account, LedgerError, LedgerEvent, ProsumerId, SettlementReceipt};
pub use registry::{find_seller, Registry};
pub use engine::{TradeEngine, TOKEN_PURCHASE_PRICE, TRADE_REWARD};
pub use settlement::{CustodyBoundary, EnergyLedger};
