//! Registry module: account store and counterparty discovery.
//!
//! The [`Registry`] is the single source of truth for who is registered and
//! what each account holds; [`find_seller`] is the linear, first-match
//! counterparty scan over it.

mod finder;
mod store;

pub use finder::find_seller;
pub use store::Registry;
