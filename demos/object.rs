/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # Atomic Object Example
//!
//! Demonstrates sharing a structured value and waiting for it to change.

use prism3_sync::AtomicObject;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
struct Config {
    timeout: u64,
    max_retries: u32,
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Atomic Object Example ===\n");

    // Example 1: Basic operations
    println!("1. Basic Operations:");
    let config = AtomicObject::with_factory(|| Config {
        timeout: 1000,
        max_retries: 3,
    });
    println!("   Initial config: {:?}", config.get());

    let updated = config.set_by(|c| c.timeout = 2000);
    println!("   After set_by: {:?}", updated);

    // Example 2: Waiting for another thread
    println!("\n2. Waiting for Another Thread:");
    let config = Arc::new(config);
    let config_clone = config.clone();
    let handle = thread::spawn(move || {
        thread::sleep(Duration::from_millis(20));
        config_clone.set_by(|c| c.max_retries = 10);
    });
    let changed = config.wait_for(|c| c.max_retries == 10, Some(Duration::from_secs(5)));
    println!("   max_retries changed: {}", changed);
    handle.join().unwrap();

    // Example 3: Multi-step critical section
    println!("\n3. Multi-step Critical Section:");
    {
        let mut guard = config.lock();
        if guard.max_retries > 5 {
            guard.max_retries = 5;
            guard.timeout *= 2;
        }
    }
    println!("   After guarded update: {:?}", config.get());

    println!("\n=== Example completed ===");
}
