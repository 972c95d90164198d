//! Trade engine: listings, fund-settled purchases, token-settled purchases.
//!
//! ## Design Principles
//!
//! 1. **Validate, then mutate**: every precondition is checked before the
//!    first account field changes, so a failed call leaves the registry
//!    byte-for-byte unchanged.
//! 2. **Quantity-only matching**: the counterparty is the first registered
//!    seller with strictly more energy than requested, never the best one.
//! 3. **Fixed exchange rate**: cost is always `quantity * UNIT_PRICE`.
//!
//! ## Operations
//!
//! - [`TradeEngine::sell`]: a unilateral listing. Only the seller's
//!   advertised energy grows; no counterparty, no funds.
//! - [`TradeEngine::buy`]: an atomic two-account transfer of energy against
//!   funds, rewarding both parties.
//! - [`TradeEngine::buy_with_tokens`]: a flat-price token spend that credits
//!   the buyer after a liquidity check. The discovered seller is *not*
//!   settled against (see the method docs).

use crate::engine::rewards::{reward, TOKEN_PURCHASE_PRICE, TRADE_REWARD};
use crate::registry::{find_seller, Registry};
use crate::types::units::trade_cost;
use crate::types::{LedgerError, LedgerEvent, ProsumerId, SettlementReceipt};

/// Clamp an unsigned quantity into the signed energy domain.
#[inline]
fn energy_delta(quantity: u64) -> i64 {
    i64::try_from(quantity).unwrap_or(i64::MAX)
}

/// Executes trades against the registry.
///
/// The engine holds no account state of its own; it only assigns trade
/// sequence numbers. All balances live in the [`Registry`].
#[derive(Debug)]
pub struct TradeEngine {
    /// Next trade sequence number
    next_trade_id: u64,
}

impl Default for TradeEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TradeEngine {
    /// Create a new trade engine
    pub fn new() -> Self {
        Self { next_trade_id: 1 }
    }

    /// Get the next trade ID and increment the counter
    #[inline]
    fn next_trade_id(&mut self) -> u64 {
        let id = self.next_trade_id;
        self.next_trade_id += 1;
        id
    }

    // ========================================================================
    // Operations
    // ========================================================================

    /// List `quantity` units of energy for sale.
    ///
    /// A listing is unilateral: it only increases the seller's advertised
    /// energy so a later buyer can discover and match against it. No
    /// counterparty is touched and no funds move. The seller earns
    /// [`TRADE_REWARD`] tokens.
    ///
    /// Emits `EnergyListed` then `TokensRewarded`.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::InvalidAmount`] if `quantity` is zero
    /// - [`LedgerError::NotRegistered`] if `seller` has no account
    pub fn sell(
        &mut self,
        registry: &mut Registry,
        events: &mut Vec<LedgerEvent>,
        seller: ProsumerId,
        quantity: u64,
    ) -> Result<(), LedgerError> {
        if quantity == 0 {
            return Err(LedgerError::InvalidAmount);
        }

        registry.account_mut(seller)?.add_energy(energy_delta(quantity));
        events.push(LedgerEvent::EnergyListed { seller, quantity });

        reward(registry, events, seller, TRADE_REWARD)
    }

    /// Buy `quantity` units of energy from the first eligible seller.
    ///
    /// Both halves of the transfer apply together or not at all: buyer
    /// gains energy and loses funds, seller loses energy and gains funds.
    /// Each party earns [`TRADE_REWARD`] tokens.
    ///
    /// Emits `EnergyPurchased`, then `TokensRewarded` for the buyer, then
    /// `TokensRewarded` for the seller. Returns a [`SettlementReceipt`]
    /// carrying the post-trade state root.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::InvalidAmount`] if `quantity` is zero
    /// - [`LedgerError::NotRegistered`] if `buyer` has no account
    /// - [`LedgerError::NoSellerAvailable`] if no seller holds strictly
    ///   more than `quantity`
    /// - [`LedgerError::InsufficientFunds`] if the buyer cannot cover the
    ///   cost
    pub fn buy(
        &mut self,
        registry: &mut Registry,
        events: &mut Vec<LedgerEvent>,
        buyer: ProsumerId,
        quantity: u64,
    ) -> Result<SettlementReceipt, LedgerError> {
        if quantity == 0 {
            return Err(LedgerError::InvalidAmount);
        }

        let delta = energy_delta(quantity);
        let cost = trade_cost(quantity);

        let seller = find_seller(registry, delta).ok_or(LedgerError::NoSellerAvailable)?;
        if registry.must_be_registered(buyer)?.balance < cost {
            return Err(LedgerError::InsufficientFunds);
        }

        // All preconditions hold; apply both halves of the transfer.
        {
            let buyer_account = registry.account_mut(buyer)?;
            buyer_account.add_energy(delta);
            buyer_account.debit_balance(cost);
        }
        {
            let seller_account = registry.account_mut(seller)?;
            seller_account.add_energy(-delta);
            seller_account.credit_balance(cost);
        }

        events.push(LedgerEvent::EnergyPurchased {
            buyer,
            seller,
            quantity,
            cost,
        });
        reward(registry, events, buyer, TRADE_REWARD)?;
        reward(registry, events, seller, TRADE_REWARD)?;

        Ok(SettlementReceipt::new(
            self.next_trade_id(),
            buyer,
            seller,
            quantity,
            cost,
            registry.state_root(),
        ))
    }

    /// Buy `quantity` units of energy for a flat token price.
    ///
    /// Counterparty discovery here is a liquidity gate only: a seller with
    /// strictly more energy must exist, but that seller's energy, balance,
    /// and tokens are deliberately left untouched. The buyer is credited
    /// and pays [`TOKEN_PURCHASE_PRICE`] tokens regardless of quantity.
    /// This one-sided settlement is intentional; the integration tests
    /// assert it explicitly.
    ///
    /// The resulting-energy guard can only fire if a negative quantity ever
    /// reaches this path. The public surface makes that impossible today;
    /// the guard stays.
    ///
    /// Emits `TokensSpent`.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::NotRegistered`] if `buyer` has no account
    /// - [`LedgerError::NoSellerAvailable`] if no seller holds strictly
    ///   more than `quantity`
    /// - [`LedgerError::InsufficientTokens`] if the buyer holds fewer than
    ///   [`TOKEN_PURCHASE_PRICE`] tokens
    /// - [`LedgerError::InvalidResultingEnergy`] if the purchase would
    ///   leave the buyer's energy negative
    pub fn buy_with_tokens(
        &mut self,
        registry: &mut Registry,
        events: &mut Vec<LedgerEvent>,
        buyer: ProsumerId,
        quantity: u64,
    ) -> Result<(), LedgerError> {
        let delta = energy_delta(quantity);

        find_seller(registry, delta).ok_or(LedgerError::NoSellerAvailable)?;

        let buyer_account = registry.must_be_registered(buyer)?;
        if buyer_account.tokens < TOKEN_PURCHASE_PRICE {
            return Err(LedgerError::InsufficientTokens);
        }
        if buyer_account.energy().saturating_add(delta) < 0 {
            return Err(LedgerError::InvalidResultingEnergy);
        }

        let buyer_account = registry.account_mut(buyer)?;
        buyer_account.add_energy(delta);
        buyer_account.debit_tokens(TOKEN_PURCHASE_PRICE);

        events.push(LedgerEvent::TokensSpent {
            buyer,
            quantity,
            tokens: TOKEN_PURCHASE_PRICE,
        });
        Ok(())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Registry with `buyer` funded and `seller` holding listed energy
    fn trading_pair(buyer_funds: u64, seller_energy: i64) -> (Registry, TradeEngine) {
        let mut registry = Registry::new();
        registry.register(1).unwrap(); // buyer
        registry.register(2).unwrap(); // seller
        registry.account_mut(1).unwrap().credit_balance(buyer_funds);
        registry.account_mut(2).unwrap().set_energy(seller_energy);
        (registry, TradeEngine::new())
    }

    #[test]
    fn test_sell_is_unilateral() {
        let (mut registry, mut engine) = trading_pair(0, 0);
        let mut events = Vec::new();

        engine.sell(&mut registry, &mut events, 2, 3).unwrap();

        let seller = registry.get(2).unwrap();
        assert_eq!(seller.energy(), 3);
        assert_eq!(seller.balance, 0);
        assert_eq!(seller.tokens, TRADE_REWARD);

        // Buyer untouched by a listing
        let buyer = registry.get(1).unwrap();
        assert_eq!(buyer.energy(), 0);
        assert_eq!(buyer.tokens, 0);

        assert_eq!(
            events,
            vec![
                LedgerEvent::EnergyListed { seller: 2, quantity: 3 },
                LedgerEvent::TokensRewarded { who: 2, amount: TRADE_REWARD },
            ]
        );
    }

    #[test]
    fn test_sell_zero_quantity_rejected() {
        let (mut registry, mut engine) = trading_pair(0, 0);
        let mut events = Vec::new();

        let err = engine.sell(&mut registry, &mut events, 2, 0).unwrap_err();
        assert_eq!(err, LedgerError::InvalidAmount);
        assert!(events.is_empty());
    }

    #[test]
    fn test_buy_transfers_both_halves() {
        let (mut registry, mut engine) = trading_pair(10, 5);
        let mut events = Vec::new();

        let receipt = engine.buy(&mut registry, &mut events, 1, 3).unwrap();

        let buyer = registry.get(1).unwrap();
        assert_eq!(buyer.energy(), 3);
        assert_eq!(buyer.balance, 7);
        assert_eq!(buyer.tokens, TRADE_REWARD);

        let seller = registry.get(2).unwrap();
        assert_eq!(seller.energy(), 2);
        assert_eq!(seller.balance, 3);
        assert_eq!(seller.tokens, TRADE_REWARD);

        assert_eq!(receipt.trade_id, 1);
        assert_eq!(receipt.buyer, 1);
        assert_eq!(receipt.seller, 2);
        assert_eq!(receipt.quantity, 3);
        assert_eq!(receipt.cost, 3);
        assert_eq!(receipt.state_root, registry.state_root());

        assert_eq!(
            events,
            vec![
                LedgerEvent::EnergyPurchased { buyer: 1, seller: 2, quantity: 3, cost: 3 },
                LedgerEvent::TokensRewarded { who: 1, amount: TRADE_REWARD },
                LedgerEvent::TokensRewarded { who: 2, amount: TRADE_REWARD },
            ]
        );
    }

    #[test]
    fn test_buy_no_seller() {
        // Seller holds exactly the requested quantity: never eligible
        let (mut registry, mut engine) = trading_pair(10, 3);
        let mut events = Vec::new();

        let err = engine.buy(&mut registry, &mut events, 1, 3).unwrap_err();
        assert_eq!(err, LedgerError::NoSellerAvailable);
        assert!(events.is_empty());
    }

    #[test]
    fn test_buy_insufficient_funds_leaves_state_untouched() {
        let (mut registry, mut engine) = trading_pair(2, 5);
        let root_before = registry.state_root();
        let mut events = Vec::new();

        let err = engine.buy(&mut registry, &mut events, 1, 3).unwrap_err();
        assert_eq!(err, LedgerError::InsufficientFunds);

        // Byte-identical rollback for both parties
        assert_eq!(registry.state_root(), root_before);
        assert!(events.is_empty());
    }

    #[test]
    fn test_buy_conserves_totals() {
        let (mut registry, mut engine) = trading_pair(100, 50);
        let balance_before = registry.total_balance();
        let energy_before = registry.total_energy();
        let mut events = Vec::new();

        engine.buy(&mut registry, &mut events, 1, 7).unwrap();

        assert_eq!(registry.total_balance(), balance_before);
        assert_eq!(registry.total_energy(), energy_before);
    }

    #[test]
    fn test_buy_trade_ids_increment() {
        let (mut registry, mut engine) = trading_pair(100, 50);
        let mut events = Vec::new();

        let first = engine.buy(&mut registry, &mut events, 1, 3).unwrap();
        let second = engine.buy(&mut registry, &mut events, 1, 3).unwrap();

        assert_eq!(first.trade_id, 1);
        assert_eq!(second.trade_id, 2);
    }

    #[test]
    fn test_buy_with_tokens_settles_buyer_only() {
        let (mut registry, mut engine) = trading_pair(0, 10);
        registry
            .account_mut(1)
            .unwrap()
            .credit_tokens(TOKEN_PURCHASE_PRICE + 5);
        let seller_before = registry.get(2).unwrap().clone();
        let mut events = Vec::new();

        engine
            .buy_with_tokens(&mut registry, &mut events, 1, 4)
            .unwrap();

        let buyer = registry.get(1).unwrap();
        assert_eq!(buyer.energy(), 4);
        assert_eq!(buyer.tokens, 5);

        // The discovered seller is a liquidity proof only; nothing moves
        assert_eq!(registry.get(2).unwrap(), &seller_before);

        assert_eq!(
            events,
            vec![LedgerEvent::TokensSpent { buyer: 1, quantity: 4, tokens: TOKEN_PURCHASE_PRICE }]
        );
    }

    #[test]
    fn test_buy_with_tokens_requires_liquidity() {
        let (mut registry, mut engine) = trading_pair(0, 4);
        registry
            .account_mut(1)
            .unwrap()
            .credit_tokens(TOKEN_PURCHASE_PRICE);
        let mut events = Vec::new();

        let err = engine
            .buy_with_tokens(&mut registry, &mut events, 1, 4)
            .unwrap_err();
        assert_eq!(err, LedgerError::NoSellerAvailable);
    }

    #[test]
    fn test_buy_with_tokens_insufficient_tokens() {
        let (mut registry, mut engine) = trading_pair(0, 10);
        registry
            .account_mut(1)
            .unwrap()
            .credit_tokens(TOKEN_PURCHASE_PRICE - 1);
        let root_before = registry.state_root();
        let mut events = Vec::new();

        let err = engine
            .buy_with_tokens(&mut registry, &mut events, 1, 4)
            .unwrap_err();
        assert_eq!(err, LedgerError::InsufficientTokens);
        assert_eq!(registry.state_root(), root_before);
    }

    #[test]
    fn test_buy_with_tokens_flat_price_independent_of_quantity() {
        let (mut registry, mut engine) = trading_pair(0, 1_000);
        registry
            .account_mut(1)
            .unwrap()
            .credit_tokens(2 * TOKEN_PURCHASE_PRICE);
        let mut events = Vec::new();

        engine
            .buy_with_tokens(&mut registry, &mut events, 1, 1)
            .unwrap();
        engine
            .buy_with_tokens(&mut registry, &mut events, 1, 500)
            .unwrap();

        // Two purchases, wildly different quantities, identical token cost
        assert_eq!(registry.get(1).unwrap().tokens, 0);
        assert_eq!(registry.get(1).unwrap().energy(), 501);
    }
}
