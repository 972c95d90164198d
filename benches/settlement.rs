//! Benchmarks for the GridSwap settlement surface.
//!
//! The counterparty scan is O(n) in registered prosumers by design, so the
//! interesting curve is buy latency against registry size, worst case being
//! a single eligible seller at the tail of the registration order.
//!
//! ## Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//!
//! # Run a specific benchmark
//! cargo bench -- buy_scan
//! ```
//!
//! Results are saved to `target/criterion/` with HTML reports.

use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};

use gridswap::EnergyLedger;

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Ledger with `count` registered prosumers, none holding energy
fn registered_ledger(count: u64) -> EnergyLedger {
    let ledger = EnergyLedger::with_capacity(count as usize);
    for id in 1..=count {
        ledger.register(id).unwrap();
    }
    ledger
}

/// Ledger where only the last-registered seller can satisfy a buy.
///
/// Forces the finder to walk the entire registry: the worst case for the
/// linear scan. The funded buyer registers after the seller so the buyer's
/// own accumulating energy can never shadow the match.
fn tail_seller_ledger(count: u64) -> (EnergyLedger, u64) {
    let ledger = registered_ledger(count);
    ledger.send_request(count, i64::MAX / 2).unwrap();

    let buyer = count + 1;
    ledger.register(buyer).unwrap();
    ledger.deposit_funds(buyer, u64::MAX / 2).unwrap();
    (ledger, buyer)
}

// ============================================================================
// BENCHMARKS
// ============================================================================

/// Registration throughput on a fresh ledger
fn bench_register(c: &mut Criterion) {
    let mut group = c.benchmark_group("register");
    group.throughput(Throughput::Elements(1));

    group.bench_function("single", |b| {
        b.iter_batched(
            EnergyLedger::new,
            |ledger| {
                ledger.register(black_box(1)).unwrap();
                ledger
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

/// Unilateral listing: one account mutation plus a reward
fn bench_listing(c: &mut Criterion) {
    let mut group = c.benchmark_group("listing");
    group.throughput(Throughput::Elements(1));

    group.bench_function("sell_1", |b| {
        let ledger = registered_ledger(1);
        b.iter(|| ledger.send_request(black_box(1), black_box(1)).unwrap())
    });

    group.finish();
}

/// Buy latency as the registry grows (full scan per call)
fn bench_buy_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("buy_scan");

    for size in [10u64, 100, 1_000, 10_000] {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let (ledger, buyer) = tail_seller_ledger(size);
            b.iter(|| ledger.send_request(black_box(buyer), black_box(-1)).unwrap())
        });
    }

    group.finish();
}

/// Full session throughput: deposit, list, buy
fn bench_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("session");
    group.throughput(Throughput::Elements(3));

    group.bench_function("deposit_list_buy", |b| {
        b.iter_batched(
            || registered_ledger(2),
            |ledger| {
                ledger.deposit_funds(1, 100).unwrap();
                ledger.send_request(2, 10).unwrap();
                ledger.send_request(1, -5).unwrap();
                ledger
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_register,
    bench_listing,
    bench_buy_scan,
    bench_session
);
criterion_main!(benches);
