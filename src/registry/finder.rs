//! Counterparty discovery.
//!
//! ## Matching Policy
//!
//! Discovery is a linear scan over the registry in registration order. The
//! first registered prosumer holding **strictly more** energy than the
//! requested threshold wins; a seller holding exactly the threshold is never
//! eligible. Both rules are deliberate policy:
//!
//! - strict inequality is the original eligibility contract, and
//! - first-match in stable scan order is what makes the chosen counterparty
//!   deterministic.
//!
//! The scan is O(n) by design. Replacing it with an index would change
//! which seller wins and is therefore a behavior change, not an
//! optimization.

use crate::registry::Registry;
use crate::types::ProsumerId;

/// Find the first registered prosumer with energy strictly above `min_energy`.
///
/// Returns `None` when no registered seller qualifies.
///
/// # Example
///
/// ```
/// use gridswap::registry::{find_seller, Registry};
///
/// let mut registry = Registry::new();
/// for id in [1, 2, 3] {
///     registry.register(id).unwrap();
/// }
/// registry.account_mut(1).unwrap().add_energy(5);
/// registry.account_mut(2).unwrap().add_energy(5);
/// registry.account_mut(3).unwrap().add_energy(6);
///
/// // Exactly 5 is never eligible; the first strictly-greater seller wins
/// assert_eq!(find_seller(&registry, 5), Some(3));
/// ```
pub fn find_seller(registry: &Registry, min_energy: i64) -> Option<ProsumerId> {
    registry
        .iter_in_order()
        .find(|(_, account)| account.registered && account.energy() > min_energy)
        .map(|(id, _)| id)
}

// ============================================================================
// Unit Tests
// ============================================================================
