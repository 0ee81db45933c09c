/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use prism3_sync::{
    AtomicCounter,
    AtomicInteger,
};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

test_atomic_counter!(i8, i8_counter_tests);
test_atomic_counter!(i16, i16_counter_tests);
test_atomic_counter!(i32, i32_counter_tests);
test_atomic_counter!(i64, i64_counter_tests);
test_atomic_counter!(isize, isize_counter_tests);
test_atomic_counter!(u8, u8_counter_tests);
test_atomic_counter!(u16, u16_counter_tests);
test_atomic_counter!(u32, u32_counter_tests);
test_atomic_counter!(u64, u64_counter_tests);
test_atomic_counter!(usize, usize_counter_tests);

#[test]
fn test_floor_scenario() {
    let floored = AtomicCounter::with_floor(0);
    assert_eq!(floored.inc(), 1);
    assert_eq!(floored.inc(), 2);
    assert_eq!(floored.dec_by(5), 0);

    let unbounded = AtomicCounter::new(0);
    assert_eq!(unbounded.inc(), 1);
    assert_eq!(unbounded.inc(), 2);
    assert_eq!(unbounded.dec_by(5), -3);
}

#[test]
fn test_below_default_with_nonzero_default() {
    let counter = AtomicCounter::new(1);
    assert_eq!(counter.dec(), 0);
    counter.reset();
    counter.inc();
    assert_eq!(counter.reset(), 1);

    let counter = AtomicCounter::with_floor(1);
    assert_eq!(counter.dec(), 1);
}

#[test]
fn test_set_applies_floor() {
    let floored = AtomicCounter::with_floor(0);
    assert_eq!(floored.set(-3), 0);
    let unbounded = AtomicCounter::new(0);
    assert_eq!(unbounded.set(-3), -3);
    let above = AtomicCounter::with_floor(5);
    assert_eq!(above.set(7), 7);
}

#[test]
fn test_float_nan_snaps_to_floor() {
    let counter = AtomicCounter::with_floor(1.0f64);
    assert_eq!(counter.set(f64::NAN), 1.0);
}

#[test]
fn test_negative_delta_respects_floor() {
    let counter = AtomicCounter::with_floor(0);
    assert_eq!(counter.inc_by(-4), 0);
}

#[test]
fn test_unsigned_counter_stops_at_zero() {
    let counter = AtomicCounter::<u32>::new(2);
    assert_eq!(counter.dec_by(5), 0);
}

#[test]
fn test_float_counter() {
    let counter = AtomicCounter::new(0.5f64);
    assert_eq!(counter.inc(), 1.5);
    assert_eq!(counter.inc_by(0.25), 1.75);
    assert_eq!(counter.dec_by(2.0), -0.25);
    assert!(counter < 0.0);
    assert!(-1.0f64 < counter);
    assert_eq!(counter.reset(), 0.5);
}

#[test]
fn test_float_counter_with_floor() {
    let counter = AtomicCounter::with_floor(1.0f32);
    assert_eq!(counter.dec(), 1.0);
    assert_eq!(counter.set(f32::NAN), 1.0);
    assert_eq!(counter.set(2.5), 2.5);
}

#[test]
fn test_float_wait() {
    let counter = Arc::new(AtomicCounter::new(0.0f64));
    let counter_clone = counter.clone();
    let handle = thread::spawn(move || {
        for _ in 0..4 {
            counter_clone.inc_by(0.5);
        }
    });
    assert!(counter.wait_at_least(2.0, Some(Duration::from_secs(10))));
    handle.join().unwrap();
}

#[test]
fn test_atomic_integer() {
    let integer = AtomicInteger::new(3);
    assert!(integer.allows_below_default());
    assert_eq!(integer.set(-10), -10);
    assert_eq!(integer.reset(), 3);
}

#[test]
fn test_default_type_is_i64() {
    let counter: AtomicCounter = AtomicCounter::default();
    assert_eq!(counter.set(i64::MAX), i64::MAX);
}

#[test]
fn test_guard_wait_then_modify() {
    let counter = Arc::new(AtomicCounter::new(0));
    let counter_clone = counter.clone();
    let handle = thread::spawn(move || {
        let mut guard = counter_clone.lock();
        assert!(guard.wait_for(|v| *v >= 3, Some(Duration::from_secs(10))));
        guard.reset()
    });
    for _ in 0..3 {
        counter.inc();
    }
    assert_eq!(handle.join().unwrap(), 0);
    assert!(counter.wait_equal(0, Some(Duration::from_secs(10))));
}
