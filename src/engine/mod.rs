//! Trading engine module.
//!
//! ## Design Principles
//!
//! 1. **Determinism**: same registry state and same request always settle
//!    against the same counterparty.
//! 2. **All-or-nothing**: preconditions are fully checked before the first
//!    mutation; a failed operation changes nothing.
//! 3. **Synchronous execution**: discovery and settlement complete inside
//!    one critical section, with no async in the trading path.
//!
//! ## Example
//!
//! ```
//! use gridswap::engine::TradeEngine;
//! use gridswap::registry::Registry;
//!
//! let mut registry = Registry::new();
//! let mut engine = TradeEngine::new();
//! let mut events = Vec::new();
//!
//! registry.register(1).unwrap();
//! registry.register(2).unwrap();
//! registry.account_mut(1).unwrap().credit_balance(10);
//!
//! // Prosumer 2 lists energy, prosumer 1 buys it
//! engine.sell(&mut registry, &mut events, 2, 5).unwrap();
//! let receipt = engine.buy(&mut registry, &mut events, 1, 3).unwrap();
//!
//! assert_eq!(receipt.quantity, 3);
//! assert_eq!(registry.get(1).unwrap().energy(), 3);
//! ```

pub mod rewards;
pub mod trade;

pub use rewards::{reward, TOKEN_PURCHASE_PRICE, TRADE_REWARD};
pub use trade::TradeEngine;
