/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # Atomic Counter Example
//!
//! Demonstrates using counters as thread-safe counters and as latches.

use prism3_sync::AtomicCounter;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Atomic Counter Example ===\n");

    // Example 1: Basic counter operations
    println!("1. Basic Counter Operations:");
    let counter = AtomicCounter::new(0);
    println!("   Initial value: {}", counter.get());

    counter.inc();
    println!("   After increment: {}", counter.get());

    counter.inc_by(5);
    println!("   After adding 5: {}", counter.get());

    counter.dec();
    println!("   After decrement: {}", counter.get());

    // Example 2: Floor policy
    println!("\n2. Floor Policy:");
    let floored = AtomicCounter::with_floor(0);
    floored.inc_by(2);
    println!("   Floored dec_by(5): {}", floored.dec_by(5));
    let unbounded = AtomicCounter::new(0);
    unbounded.inc_by(2);
    println!("   Unbounded dec_by(5): {}", unbounded.dec_by(5));

    // Example 3: Multi-threaded counter
    println!("\n3. Multi-threaded Counter:");
    let counter = Arc::new(AtomicCounter::new(0));
    let num_threads = 10;
    let increments_per_thread = 1000;

    let mut handles = vec![];
    for i in 0..num_threads {
        let counter = counter.clone();
        let handle = thread::spawn(move || {
            for _ in 0..increments_per_thread {
                counter.inc();
            }
            println!("   Thread {} completed", i);
        });
        handles.push(handle);
    }

    let reached = counter.wait_equal(num_threads * increments_per_thread, None);
    println!("   Reached expected count: {}", reached);

    for handle in handles {
        handle.join().unwrap();
    }

    // Example 4: Counter as a latch
    println!("\n4. Counter as a Latch:");
    let pending = Arc::new(AtomicCounter::with_floor(0));
    pending.set(3);
    let mut handles = vec![];
    for i in 0..3 {
        let pending = pending.clone();
        let handle = thread::spawn(move || {
            thread::sleep(Duration::from_millis(10 * (i + 1)));
            pending.dec();
        });
        handles.push(handle);
    }
    println!(
        "   All workers done: {}",
        pending.wait_equal(0, Some(Duration::from_secs(5)))
    );
    for handle in handles {
        handle.join().unwrap();
    }

    // Example 5: Timeout
    println!("\n5. Timeout:");
    let counter = AtomicCounter::new(0);
    println!(
        "   wait_above(0) within 50ms: {}",
        counter.wait_above(0, Some(Duration::from_millis(50)))
    );

    println!("\n=== Example completed ===");
}
