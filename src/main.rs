//! GridSwap - Binary Entry Point
//!
//! Walks through a small two-prosumer trading session and prints the
//! resulting ledger state, as a quick end-to-end sanity check.

use gridswap::types::units::from_atomic;
use gridswap::{EnergyLedger, LedgerError};

fn main() -> Result<(), LedgerError> {
    println!("===========================================");
    println!("  GridSwap - P2P Energy Trading Ledger");
    println!("===========================================");
    println!();

    let ledger = EnergyLedger::new();

    const ALICE: u64 = 1;
    const BOB: u64 = 2;

    println!("Registering prosumers...");
    ledger.register(ALICE)?;
    ledger.register(BOB)?;

    println!("Alice deposits 10 units, Bob lists 5 energy...");
    ledger.deposit_funds(ALICE, 10)?;
    ledger.send_request(BOB, 5)?;

    println!("Alice buys 3 energy (signed request -3)...");
    let events = ledger.send_request(ALICE, -3)?;
    for event in &events {
        println!("  event: {:?}", event);
    }
    println!();

    for (name, id) in [("Alice", ALICE), ("Bob", BOB)] {
        println!(
            "{}: energy={} balance={} ({} coin) tokens={}",
            name,
            ledger.query_energy(id)?,
            ledger.query_balance(id)?,
            from_atomic(ledger.query_balance(id)?),
            ledger.query_tokens(id)?,
        );
    }
    println!();

    if let Some(receipt) = ledger.receipts().last() {
        println!("Trade #{} settled, state root:", receipt.trade_id);
        println!("  {}", receipt.state_root_hex());
    }

    Ok(())
}
