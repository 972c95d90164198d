//! Core data types for GridSwap
//!
//! ## Types
//!
//! - [`Account`]: Per-prosumer ledger record (energy, balance, tokens)
//! - [`ProsumerId`]: Explicit participant identity
//! - [`LedgerEvent`]: Ordered observable events per operation
//! - [`LedgerError`]: The settlement error taxonomy
//! - [`SettlementReceipt`]: Per-trade receipt with SHA-256 state root
//!
//! ## Units
//!
//! Balances are atomic currency units (`u64`); energy is a signed `i64`
//! stored as two's-complement bits for SSZ compatibility. The [`units`]
//! module holds the market constants and fixed-point display helpers.

mod account;
mod error;
mod event;
mod receipt;
pub mod units;

// Re-export all types at module level
pub use account::{Account, ProsumerId};
pub use error::LedgerError;
pub use event::LedgerEvent;
pub use receipt::SettlementReceipt;
