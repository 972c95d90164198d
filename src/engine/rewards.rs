//! Loyalty token rewards.
//!
//! Rewards are fixed-size and unconditional: every completed listing or
//! purchase credits a flat number of tokens, with no decay, no caps, and no
//! ceiling beyond the host numeric width. Tokens only ever decrease through
//! the fixed-price token purchase path.

use crate::registry::Registry;
use crate::types::{LedgerError, LedgerEvent, ProsumerId};

/// Tokens granted per completed listing or purchase.
///
/// In a fund-settled purchase each party is credited independently.
pub const TRADE_REWARD: u64 = 10;

/// Flat token price of a token-settled purchase, independent of quantity.
pub const TOKEN_PURCHASE_PRICE: u64 = 100;

/// Credit `amount` tokens to `who` and emit the reward event.
///
/// # Errors
///
/// [`LedgerError::NotRegistered`] if `who` holds no registered account.
/// Call sites only reward parties already validated by the trade path, so
/// in practice this propagates nothing.
pub fn reward(
    registry: &mut Registry,
    events: &mut Vec<LedgerEvent>,
    who: ProsumerId,
    amount: u64,
) -> Result<(), LedgerError> {
    registry.account_mut(who)?.credit_tokens(amount);
    events.push(LedgerEvent::TokensRewarded { who, amount });
    Ok(())
}

// ============================================================================
// Unit Tests
// ============================================================================
