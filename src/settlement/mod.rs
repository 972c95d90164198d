//! Settlement module: the caller-facing surface of the ledger.
//!
//! [`EnergyLedger`] wraps the registry and trade engine behind one
//! serialization boundary; [`CustodyBoundary`] is the opaque external
//! value-transfer capability backing withdrawals.

pub mod facade;

pub use facade::{CustodyBoundary, EnergyLedger};
