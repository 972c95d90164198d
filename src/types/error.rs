//! Error taxonomy for the settlement surface.
//!
//! Every failure is terminal, synchronous, and non-retriable from inside
//! the engine: the whole operation fails, state is left untouched, and the
//! specific kind surfaces to the caller. Any retry policy (for example,
//! re-scanning for a seller) belongs to the caller.

use thiserror::Error;

/// Errors surfaced by the trading and settlement engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// The identity already has a registered account
    #[error("prosumer is already registered")]
    AlreadyRegistered,

    /// The identity has no registered account
    #[error("prosumer is not registered")]
    NotRegistered,

    /// Zero or negative where a positive quantity is required
    #[error("amount must be a positive quantity")]
    InvalidAmount,

    /// No registered seller holds strictly more energy than requested
    #[error("no seller with sufficient energy is available")]
    NoSellerAvailable,

    /// Caller's balance does not cover the trade cost
    #[error("insufficient funds to settle the purchase")]
    InsufficientFunds,

    /// Caller's token balance does not cover the flat token price
    #[error("insufficient tokens to settle the purchase")]
    InsufficientTokens,

    /// The purchase would leave the buyer with negative energy
    #[error("purchase would leave the buyer with negative energy")]
    InvalidResultingEnergy,

    /// The custody boundary rejected the payout
    #[error("custody payout was rejected")]
    WithdrawalFailed,

    /// A settlement request carrying no quantity at all
    #[error("request carries nothing to settle")]
    NothingToDo,
}
