/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # Atomic State Example
//!
//! Demonstrates a worker publishing its phase to observers through a
//! read-only tracker.

use prism3_sync::{
    AtomicState,
    StateCode,
};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle = 0,
    Running = 1,
    Finished = 2,
}

impl StateCode for Phase {
    fn to_code(self) -> Option<i64> {
        Some(self as i64)
    }

    fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Phase::Idle),
            1 => Some(Phase::Running),
            2 => Some(Phase::Finished),
            _ => None,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Atomic State Example ===\n");

    let phase = AtomicState::new(Phase::Idle).unwrap();
    println!("   Initial phase: {}", phase);

    thread::scope(|s| {
        let tracker = phase.tracker();
        let observer = s.spawn(move || {
            tracker.wait_state(Phase::Finished, Some(Duration::from_secs(5)))
        });

        phase.set(Phase::Running).unwrap();
        println!("   Worker phase: {}", phase);
        thread::sleep(Duration::from_millis(20));
        phase.set(Phase::Finished).unwrap();
        println!("   Worker phase: {}", phase);

        println!("   Observer saw Finished: {}", observer.join().unwrap());
    });

    match phase.set_code(9) {
        Ok(state) => println!("   Unexpectedly accepted: {:?}", state),
        Err(e) => println!("   Rejected code: {}", e),
    }

    println!("   After reset: {:?}", phase.reset());

    println!("\n=== Example completed ===");
}
