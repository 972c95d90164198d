//! Market constants and fixed-point currency display.
//!
//! ## Atomic Units
//!
//! All balances are kept in atomic currency units (u64). The human-facing
//! coin is scaled by 10^8, giving 8 decimal places of precision without
//! floating point; conversion goes through `rust_decimal` so results are
//! identical on every host.
//!
//! ## Exchange Rate
//!
//! The trading engine uses a fixed exchange rate: one atomic currency unit
//! per unit of energy. There is no price discovery; cost is always
//! `quantity * UNIT_PRICE`.
//!
//! ## Examples
//!
//! ```
//! use gridswap::types::units::{from_atomic, trade_cost};
//!
//! assert_eq!(from_atomic(150_000_000), "1.50000000");
//! assert_eq!(trade_cost(3), 3);
//! ```

use rust_decimal::Decimal;

/// Scaling factor between the display coin and atomic units: 10^8
pub const SCALE: u64 = 100_000_000;

/// Price of one unit of energy, in atomic currency units.
///
/// Fixed by design; the engine matches on quantity only.
pub const UNIT_PRICE: u64 = 1;

/// Cost of a fund-settled purchase of `quantity` energy units.
///
/// The pre-dispatch funds guard and the engine's own check both call this,
/// so the fast-fail can never disagree with the settlement computation.
#[inline]
pub fn trade_cost(quantity: u64) -> u64 {
    quantity.saturating_mul(UNIT_PRICE)
}

/// Convert atomic units to a coin string with 8 decimal places
///
/// # Example
///
/// ```
/// use gridswap::types::units::from_atomic;
///
/// assert_eq!(from_atomic(100_000_000), "1.00000000");
/// assert_eq!(from_atomic(7), "0.00000007");
/// ```
pub fn from_atomic(value: u64) -> String {
    let coin = Decimal::from(value) / Decimal::from(SCALE);
    format!("{:.8}", coin)
}

// ============================================================================
// Unit Tests
// ============================================================================
