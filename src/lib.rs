/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # prism3-rust-sync
//!
//! Condition-variable backed synchronized values, counters and states.
//!
//! Every type in this crate guards its value with a mutex and wakes all
//! blocked waiters whenever the value changes, so threads can wait for a
//! condition on the value instead of polling it.
//!
//! ## Features
//!
//! - Synchronized cell: `AtomicObject<T>` (aliases `AtomicVariable<T>`,
//!   `AtomicNumber<T>`)
//! - Counter with floor policy: `AtomicCounter<T>`, `AtomicInteger`
//! - State holder and read-only view: `AtomicState<S>`,
//!   `AtomicStateTracker<S>`
//!
//! ## Example
//!
//! ```rust
//! use prism3_sync::AtomicCounter;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let counter = Arc::new(AtomicCounter::new(0));
//! let mut handles = vec![];
//!
//! for _ in 0..10 {
//!     let counter = counter.clone();
//!     let handle = thread::spawn(move || {
//!         for _ in 0..100 {
//!             counter.inc();
//!         }
//!     });
//!     handles.push(handle);
//! }
//!
//! assert!(counter.wait_equal(1000, None));
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//! ```
//!
//! ## Author
//!
//! Haixing Hu

#![deny(missing_docs)]
#![forbid(unsafe_code)]

pub mod sync;

pub use sync::{
    AtomicCounter,
    AtomicError,
    AtomicInteger,
    AtomicNumber,
    AtomicObject,
    AtomicObjectGuard,
    AtomicResult,
    AtomicState,
    AtomicStateTracker,
    AtomicVariable,
    CounterGuard,
    CounterValue,
    StateCode,
};
