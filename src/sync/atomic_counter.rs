/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Counter
//!
//! Provides a thread-safe counter with an optional floor, built on
//! [`AtomicObject`].
//!
//! # Author
//!
//! Haixing Hu

use std::cmp::Ordering;
use std::fmt;
use std::time::Duration;

use tracing::trace;

use crate::sync::atomic_object::{
    AtomicObject,
    AtomicObjectGuard,
};
use crate::sync::traits::CounterValue;

/// Thread-safe counter.
///
/// Counts up and down from a default value. Every update is a single
/// read-modify-write inside one critical section of the underlying
/// [`AtomicObject`], so concurrent updates are never lost, and every update
/// wakes all threads blocked in one of the `wait_*` methods.
///
/// # Floor Policy
///
/// If the counter is created with [`with_floor`](Self::with_floor) (or with
/// `allow_below_default` set to `false`), any update whose result would be
/// below the default value stores the default value instead. The result is
/// snapped once, it is not clamped step by step.
///
/// # Comparisons
///
/// A counter compares against plain values of its type from either side.
/// Each comparison reads its own snapshot, so an expression such as
/// `low < counter && counter < high` may observe two different values. Use
/// [`lock`](Self::lock) when a consistent view is required.
///
/// # Example
///
/// ```rust
/// use prism3_sync::AtomicCounter;
///
/// let counter = AtomicCounter::with_floor(0);
/// assert_eq!(counter.inc(), 1);
/// assert_eq!(counter.inc(), 2);
/// assert_eq!(counter.dec_by(5), 0);
///
/// let counter = AtomicCounter::new(0);
/// counter.inc_by(2);
/// assert_eq!(counter.dec_by(5), -3);
/// ```
///
/// # Author
///
/// Haixing Hu
pub struct AtomicCounter<T: CounterValue = i64> {
    cell: AtomicObject<T>,
    default_value: T,
    allow_below_default: bool,
}

/// Integer counter that may always go below its default value.
///
/// Create it with [`AtomicCounter::new`].
pub type AtomicInteger = AtomicCounter<i64>;

impl<T: CounterValue> AtomicCounter<T> {
    /// Creates a counter that may go below its default value.
    ///
    /// # Parameters
    ///
    /// * `default_value` - The initial value, restored by
    ///   [`reset`](Self::reset).
    #[inline]
    pub fn new(default_value: T) -> Self {
        Self::with_policy(default_value, true)
    }

    /// Creates a counter that never goes below its default value.
    ///
    /// # Parameters
    ///
    /// * `default_value` - The initial value and the floor.
    #[inline]
    pub fn with_floor(default_value: T) -> Self {
        Self::with_policy(default_value, false)
    }

    /// Creates a counter with an explicit floor policy.
    ///
    /// # Parameters
    ///
    /// * `default_value` - The initial value, restored by
    ///   [`reset`](Self::reset).
    /// * `allow_below_default` - If `false`, the value never drops below
    ///   `default_value`.
    #[inline]
    pub fn with_policy(default_value: T, allow_below_default: bool) -> Self {
        Self {
            cell: AtomicObject::new(default_value),
            default_value,
            allow_below_default,
        }
    }

    /// Gets the current value.
    #[inline]
    pub fn get(&self) -> T {
        self.cell.get()
    }

    /// Gets the default value.
    #[inline]
    pub fn default_value(&self) -> T {
        self.default_value
    }

    /// Returns whether the value may drop below the default value.
    #[inline]
    pub fn allows_below_default(&self) -> bool {
        self.allow_below_default
    }

    /// Sets the value, applying the floor policy.
    ///
    /// # Parameters
    ///
    /// * `value` - The new value.
    ///
    /// # Returns
    ///
    /// The value actually stored.
    #[inline]
    pub fn set(&self, value: T) -> T {
        let value = self.floor(value);
        self.cell.update(|current| {
            *current = value;
            value
        })
    }

    /// Increments the value by one.
    ///
    /// # Returns
    ///
    /// The new value.
    #[inline]
    pub fn inc(&self) -> T {
        self.inc_by(T::one())
    }

    /// Decrements the value by one, applying the floor policy.
    ///
    /// # Returns
    ///
    /// The new value.
    #[inline]
    pub fn dec(&self) -> T {
        self.dec_by(T::one())
    }

    /// Increments the value by `delta`, applying the floor policy.
    ///
    /// # Parameters
    ///
    /// * `delta` - The amount to add. May be negative for signed types.
    ///
    /// # Returns
    ///
    /// The new value.
    pub fn inc_by(&self, delta: T) -> T {
        self.cell.update(|current| {
            *current = self.floor(current.add_delta(delta));
            *current
        })
    }

    /// Decrements the value by `delta`, applying the floor policy.
    ///
    /// # Parameters
    ///
    /// * `delta` - The amount to subtract.
    ///
    /// # Returns
    ///
    /// The new value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_sync::AtomicCounter;
    ///
    /// let counter = AtomicCounter::with_floor(10u32);
    /// counter.inc_by(3);
    /// assert_eq!(counter.dec_by(7), 10);
    /// ```
    pub fn dec_by(&self, delta: T) -> T {
        self.cell.update(|current| {
            *current = self.floor(current.sub_delta(delta));
            *current
        })
    }

    /// Resets the value to the default value.
    ///
    /// # Returns
    ///
    /// The default value.
    #[inline]
    pub fn reset(&self) -> T {
        self.set(self.default_value)
    }

    /// Blocks until `predicate` holds for the value, or until `timeout`
    /// elapses.
    ///
    /// See [`AtomicObject::wait_for`].
    #[inline]
    pub fn wait_for<P>(&self, predicate: P, timeout: Option<Duration>) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.cell.wait_for(predicate, timeout)
    }

    /// Blocks until the value equals `value`.
    ///
    /// # Parameters
    ///
    /// * `value` - The value to compare with.
    /// * `timeout` - The maximum time to wait, or `None` to wait forever.
    ///
    /// # Returns
    ///
    /// `true` if the condition holds, `false` if the timeout expired.
    #[inline]
    pub fn wait_equal(&self, value: T, timeout: Option<Duration>) -> bool {
        self.wait_for(|v| *v == value, timeout)
    }

    /// Blocks until the value is strictly below `value`.
    ///
    /// # Parameters
    ///
    /// * `value` - The value to compare with.
    /// * `timeout` - The maximum time to wait, or `None` to wait forever.
    ///
    /// # Returns
    ///
    /// `true` if the condition holds, `false` if the timeout expired.
    #[inline]
    pub fn wait_below(&self, value: T, timeout: Option<Duration>) -> bool {
        self.wait_for(|v| *v < value, timeout)
    }

    /// Blocks until the value is strictly above `value`.
    ///
    /// # Parameters
    ///
    /// * `value` - The value to compare with.
    /// * `timeout` - The maximum time to wait, or `None` to wait forever.
    ///
    /// # Returns
    ///
    /// `true` if the condition holds, `false` if the timeout expired.
    #[inline]
    pub fn wait_above(&self, value: T, timeout: Option<Duration>) -> bool {
        self.wait_for(|v| *v > value, timeout)
    }

    /// Blocks until the value is at least `value`.
    #[inline]
    pub fn wait_at_least(&self, value: T, timeout: Option<Duration>) -> bool {
        self.wait_for(|v| *v >= value, timeout)
    }

    /// Blocks until the value is at most `value`.
    #[inline]
    pub fn wait_at_most(&self, value: T, timeout: Option<Duration>) -> bool {
        self.wait_for(|v| *v <= value, timeout)
    }

    /// Acquires the counter's lock for a multi-step critical section.
    ///
    /// The returned guard applies the same floor policy as the counter. It
    /// is not reentrant: calling methods of this counter while the guard is
    /// alive deadlocks the calling thread.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_sync::AtomicCounter;
    ///
    /// let counter = AtomicCounter::new(0);
    /// {
    ///     let mut guard = counter.lock();
    ///     if guard.get() < 10 {
    ///         guard.inc_by(10);
    ///     }
    /// }
    /// assert_eq!(counter.get(), 10);
    /// ```
    #[inline]
    pub fn lock(&self) -> CounterGuard<'_, T> {
        CounterGuard {
            guard: self.cell.lock(),
            default_value: self.default_value,
            allow_below_default: self.allow_below_default,
        }
    }

    #[inline]
    fn floor(&self, value: T) -> T {
        apply_floor(value, self.default_value, self.allow_below_default)
    }
}

/// Scoped lock over an [`AtomicCounter`].
///
/// Created by [`AtomicCounter::lock`]. All updates go through the counter's
/// floor policy; waiters are woken when a modified guard is dropped.
///
/// # Author
///
/// Haixing Hu
pub struct CounterGuard<'a, T: CounterValue> {
    guard: AtomicObjectGuard<'a, T>,
    default_value: T,
    allow_below_default: bool,
}

impl<'a, T: CounterValue> CounterGuard<'a, T> {
    /// Gets the value seen under the lock.
    #[inline]
    pub fn get(&self) -> T {
        *self.guard
    }

    /// Sets the value, applying the floor policy.
    #[inline]
    pub fn set(&mut self, value: T) -> T {
        let value = apply_floor(value, self.default_value, self.allow_below_default);
        *self.guard = value;
        value
    }

    /// Increments the value by `delta`, applying the floor policy.
    #[inline]
    pub fn inc_by(&mut self, delta: T) -> T {
        let value = self.get().add_delta(delta);
        self.set(value)
    }

    /// Decrements the value by `delta`, applying the floor policy.
    #[inline]
    pub fn dec_by(&mut self, delta: T) -> T {
        let value = self.get().sub_delta(delta);
        self.set(value)
    }

    /// Resets the value to the default value.
    #[inline]
    pub fn reset(&mut self) -> T {
        self.set(self.default_value)
    }

    /// Blocks until `predicate` holds, releasing the lock while suspended.
    ///
    /// See [`AtomicObjectGuard::wait_for`].
    #[inline]
    pub fn wait_for<P>(&mut self, predicate: P, timeout: Option<Duration>) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.guard.wait_for(predicate, timeout)
    }
}

impl<'a, T: CounterValue> fmt::Debug for CounterGuard<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CounterGuard").field(&self.get()).finish()
    }
}

fn apply_floor<T: CounterValue>(value: T, default_value: T, allow_below_default: bool) -> T {
    if allow_below_default || value >= default_value {
        value
    } else {
        trace!(value = ?value, floor = ?default_value, "counter value snapped to floor");
        default_value
    }
}

impl<T: CounterValue> Default for AtomicCounter<T> {
    #[inline]
    fn default() -> Self {
        Self::new(T::zero())
    }
}

impl<T: CounterValue> PartialEq<T> for AtomicCounter<T> {
    #[inline]
    fn eq(&self, other: &T) -> bool {
        self.get() == *other
    }
}

impl<T: CounterValue> PartialOrd<T> for AtomicCounter<T> {
    #[inline]
    fn partial_cmp(&self, other: &T) -> Option<Ordering> {
        self.get().partial_cmp(other)
    }
}

impl<T: CounterValue> fmt::Debug for AtomicCounter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AtomicCounter").field(&self.get()).finish()
    }
}

impl<T: CounterValue + fmt::Display> fmt::Display for AtomicCounter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}
