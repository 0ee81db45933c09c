/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Synchronized Types
//!
//! Provides thread-safe value wrappers built on a mutex and a condition
//! variable. Unlike the lock-free atomics of `std::sync::atomic`, every
//! type here supports blocking until its value satisfies a predicate.
//!
//! # Features
//!
//! - A generic synchronized cell with predicate waits and timeouts
//! - A counter with an optional floor
//! - A typed state holder with a read-only tracker
//! - Scoped guards for multi-step critical sections
//!
//! # Author
//!
//! Haixing Hu

#[macro_use]
mod primitive_macro;

mod atomic_counter;
mod atomic_object;
mod atomic_state;
mod error;
mod primitives;
mod traits;

pub use atomic_counter::{
    AtomicCounter,
    AtomicInteger,
    CounterGuard,
};
pub use atomic_object::{
    AtomicNumber,
    AtomicObject,
    AtomicObjectGuard,
    AtomicVariable,
};
pub use atomic_state::{
    AtomicState,
    AtomicStateTracker,
};
pub use error::{
    AtomicError,
    AtomicResult,
};
pub use traits::{
    CounterValue,
    StateCode,
};
