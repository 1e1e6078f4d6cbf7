//! Basic usage example for bvtree.
//!
//! Run with `RUST_LOG=bvtree=trace` to see construction and query failures
//! logged by the library.

use bvtree::{build, BinaryTreeSet, DynamicSet, SetError, SummaryKind};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), SetError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== bvtree - Basic Usage Example ===\n");

    for kind in [SummaryKind::Binary, SummaryKind::Block] {
        println!("--- {kind:?} summary ---");

        let mut set = build(kind, 1000);
        println!("Requested universe 1000, got {}", set.universe());

        println!("\nInserting keys: 100, 200, 150, 300");
        for key in [100, 200, 150, 300] {
            set.insert(key)?;
        }
        println!("Set now contains {} keys", set.len());

        println!("\nMembership checks:");
        println!("  contains(150): {}", set.contains(150)?);
        println!("  contains(999): {}", set.contains(999)?);

        println!("\nMin/Max:");
        println!("  min: {}", set.min()?);
        println!("  max: {}", set.max()?);

        println!("\nNavigation:");
        println!("  successor(100): {}", set.successor(100)?);
        println!("  successor(175): {}", set.successor(175)?);
        println!("  predecessor(200): {}", set.predecessor(200)?);
        println!("  predecessor(175): {}", set.predecessor(175)?);

        println!("\nErrors:");
        match set.successor(300) {
            Err(err) => println!("  successor(300): {err}"),
            Ok(key) => println!("  successor(300): {key}"),
        }
        let universe = set.universe();
        match set.insert(universe) {
            Err(err) => println!("  insert(universe): {err}"),
            Ok(_) => println!("  insert(universe) unexpectedly succeeded"),
        }

        println!("\nRemoving 100");
        set.remove(100)?;
        println!("  min is now {}", set.min()?);
        println!("  summary consistent: {}\n", set.is_consistent());
    }

    println!("--- Clustered keys, walked both ways ---");
    let mut clustered = BinaryTreeSet::new(4096);
    for key in (1000..1100).chain(3000..3100) {
        clustered.insert(key)?;
    }
    println!("  Total keys: {}", clustered.len());

    let first: Vec<u64> = clustered.iter().take(5).collect();
    let last: Vec<u64> = clustered.iter().rev().take(5).collect();
    println!("  First 5: {first:?}");
    println!("  Last 5 (descending): {last:?}");
    println!("  Across the gap: successor(1099) = {}", clustered.successor(1099)?);

    println!("\nDump of a small set:");
    let mut small = build(SummaryKind::Block, 64);
    for key in [0, 1, 2, 63] {
        small.insert(key)?;
    }
    let mut out = String::new();
    if small.dump(&mut out).is_ok() {
        print!("{out}");
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
