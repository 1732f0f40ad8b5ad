//! Benchmark for pushing a million strings through one queue
//!
//! Measures insert throughput, then sorts the full queue once and drains
//! it, timing each phase separately.

use std::io::{self, Write};
use std::time::Instant;
use strq_queue::QueueEngine;

fn main() {
    println!("=== 1 Million Insert Benchmark ===\n");

    const NUM_INSERTS: usize = 1_000_000;
    const PROGRESS_INTERVAL: usize = 100_000;

    let mut engine = QueueEngine::new();
    let queue = engine.create().expect("creating the queue");

    println!("Starting {} tail inserts...", NUM_INSERTS);
    let start_time = Instant::now();

    for i in 0..NUM_INSERTS {
        // Vary the key order so the later sort has real work to do
        let key = (i.wrapping_mul(2_654_435_761)) % NUM_INSERTS;
        engine
            .insert_tail(queue, &format!("item-{:07}", key))
            .expect("insert failed");

        if (i + 1) % PROGRESS_INTERVAL == 0 {
            eprint!(".");
            io::stderr().flush().expect("flushing progress");
        }
    }
    eprintln!();

    let insert_seconds = start_time.elapsed().as_secs_f64();
    println!(
        "Inserted {} items in {:.2}s ({:.0} inserts/sec)",
        NUM_INSERTS,
        insert_seconds,
        NUM_INSERTS as f64 / insert_seconds
    );

    println!("\nSorting...");
    let sort_start = Instant::now();
    engine.sort(queue).expect("sort failed");
    println!("Sorted in {:.2}s", sort_start.elapsed().as_secs_f64());

    println!("\nDraining...");
    let drain_start = Instant::now();
    let mut drained = 0;
    let mut previous: Option<String> = None;
    while let Ok(value) = engine.remove_head(queue, Some(64)) {
        if let (Some(p), Some(v)) = (&previous, &value) {
            assert!(p <= v, "drain out of order");
        }
        previous = value;
        drained += 1;
    }
    let drain_seconds = drain_start.elapsed().as_secs_f64();
    println!(
        "Drained {} items in {:.2}s ({:.0} removals/sec)",
        drained,
        drain_seconds,
        drained as f64 / drain_seconds
    );

    engine.destroy(queue).expect("destroying the queue");

    println!("\n=== Benchmark Results ===");
    println!("Total operations:  {}", NUM_INSERTS + drained + 2);
    println!(
        "Total time:        {:.2} seconds",
        start_time.elapsed().as_secs_f64()
    );
    println!("\nBenchmark complete");
}
