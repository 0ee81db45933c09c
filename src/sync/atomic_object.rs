/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Object
//!
//! Provides a synchronized value cell: a single value guarded by a mutex and
//! a condition variable. Every mutation wakes all threads blocked in
//! [`AtomicObject::wait_for`].
//!
//! # Author
//!
//! Haixing Hu

use std::cmp::Ordering;
use std::fmt;
use std::ops::{
    Deref,
    DerefMut,
};
use std::time::{
    Duration,
    Instant,
};

use parking_lot::{
    Condvar,
    Mutex,
    MutexGuard,
};
use tracing::trace;

/// Synchronized value cell.
///
/// Owns one value of type `T` together with a mutex and a condition
/// variable bound to that mutex. The value is only ever read or written
/// while the mutex is held, and every write is followed by a broadcast to
/// all waiters before the mutex is released.
///
/// # Waiting
///
/// [`wait_for`](Self::wait_for) blocks until a predicate over the value
/// holds. The predicate is evaluated under the lock, and re-evaluated on
/// every wake-up, so a write that happens between a waiter's check and its
/// suspension can not be lost.
///
/// # Reentrancy
///
/// The lock is **not** reentrant. A mutator passed to
/// [`set_by`](Self::set_by) or [`update`](Self::update), or code holding an
/// [`AtomicObjectGuard`], must not call back into the same cell, or the
/// calling thread deadlocks.
///
/// # Panics
///
/// A panicking predicate or mutator propagates to the caller. The lock is
/// released during unwinding and the cell remains usable; a mutation that
/// was in progress is still broadcast to the waiters.
///
/// # Example
///
/// ```rust
/// use prism3_sync::AtomicObject;
/// use std::sync::Arc;
/// use std::thread;
/// use std::time::Duration;
///
/// let ready = Arc::new(AtomicObject::new(false));
/// let ready_clone = ready.clone();
///
/// let handle = thread::spawn(move || {
///     ready_clone.set(true);
/// });
///
/// assert!(ready.wait_for(|v| *v, Some(Duration::from_secs(5))));
/// handle.join().unwrap();
/// ```
///
/// # Author
///
/// Haixing Hu
pub struct AtomicObject<T> {
    value: Mutex<T>,
    condvar: Condvar,
}

/// Alternative name of [`AtomicObject`].
pub type AtomicVariable<T> = AtomicObject<T>;

/// Alternative name of [`AtomicObject`] for numeric values.
///
/// The comparison operators of [`AtomicObject`] apply; use
/// [`AtomicCounter`](crate::AtomicCounter) for increments with a floor.
pub type AtomicNumber<T> = AtomicObject<T>;

impl<T> AtomicObject<T> {
    /// Creates a new cell holding `value`.
    ///
    /// # Parameters
    ///
    /// * `value` - The initial value. Ownership moves into the cell.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_sync::AtomicObject;
    ///
    /// let cell = AtomicObject::new(42);
    /// assert_eq!(cell.get(), 42);
    /// ```
    #[inline]
    pub fn new(value: T) -> Self {
        Self {
            value: Mutex::new(value),
            condvar: Condvar::new(),
        }
    }

    /// Creates a new cell whose initial value is built by `factory`.
    ///
    /// The factory runs exactly once, on the calling thread, before the
    /// cell exists, so it can not observe or contend with other threads.
    ///
    /// # Parameters
    ///
    /// * `factory` - Constructs the initial value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_sync::AtomicObject;
    ///
    /// let cell = AtomicObject::with_factory(|| vec![1, 2, 3]);
    /// assert_eq!(cell.read(|v| v.len()), 3);
    /// ```
    #[inline]
    pub fn with_factory<F>(factory: F) -> Self
    where
        F: FnOnce() -> T,
    {
        Self::new(factory())
    }

    /// Gets a copy of the current value.
    ///
    /// Blocks only while another thread holds the lock.
    ///
    /// # Returns
    ///
    /// A clone of the current value.
    #[inline]
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.value.lock().clone()
    }

    /// Reads the current value through a closure without cloning it.
    ///
    /// The closure runs while the lock is held.
    ///
    /// # Parameters
    ///
    /// * `f` - Receives a shared reference to the value.
    ///
    /// # Returns
    ///
    /// Whatever `f` returns.
    #[inline]
    pub fn read<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        let guard = self.value.lock();
        f(&*guard)
    }

    /// Sets a new value and wakes all waiters.
    ///
    /// # Parameters
    ///
    /// * `value` - The new value.
    ///
    /// # Returns
    ///
    /// A clone of the value as stored.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_sync::AtomicObject;
    ///
    /// let cell = AtomicObject::new(1);
    /// assert_eq!(cell.set(5), 5);
    /// assert_eq!(cell.get(), 5);
    /// ```
    #[inline]
    pub fn set(&self, value: T) -> T
    where
        T: Clone,
    {
        let mut guard = self.lock();
        *guard = value;
        (*guard).clone()
    }

    /// Replaces the value and wakes all waiters, returning the previous
    /// value.
    ///
    /// Unlike [`set`](Self::set) this does not require `T: Clone`.
    ///
    /// # Parameters
    ///
    /// * `value` - The new value.
    ///
    /// # Returns
    ///
    /// The value held before the call.
    #[inline]
    pub fn replace(&self, value: T) -> T {
        let mut guard = self.lock();
        std::mem::replace(&mut *guard, value)
    }

    /// Mutates the value in place and wakes all waiters.
    ///
    /// The mutator runs while the lock is held. It must not access this
    /// cell again and should not block for long.
    ///
    /// # Parameters
    ///
    /// * `mutator` - Receives a mutable reference to the value.
    ///
    /// # Returns
    ///
    /// A clone of the value after the mutation.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_sync::AtomicObject;
    ///
    /// let cell = AtomicObject::new(vec![1]);
    /// let v = cell.set_by(|v| v.push(2));
    /// assert_eq!(v, vec![1, 2]);
    /// ```
    #[inline]
    pub fn set_by<F>(&self, mutator: F) -> T
    where
        T: Clone,
        F: FnOnce(&mut T),
    {
        let mut guard = self.lock();
        mutator(&mut *guard);
        (*guard).clone()
    }

    /// Mutates the value in place, wakes all waiters and returns the
    /// closure's result.
    ///
    /// The same restrictions as for [`set_by`](Self::set_by) apply to the
    /// closure.
    ///
    /// # Parameters
    ///
    /// * `f` - Receives a mutable reference to the value.
    ///
    /// # Returns
    ///
    /// Whatever `f` returns.
    #[inline]
    pub fn update<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R,
    {
        let mut guard = self.lock();
        f(&mut *guard)
    }

    /// Blocks until `predicate` holds for the value, or until `timeout`
    /// elapses.
    ///
    /// The predicate is evaluated under the lock, first immediately and then
    /// after every wake-up. Between evaluations the lock is released and the
    /// thread is suspended on the condition variable. When the deadline
    /// passes the predicate is evaluated one last time.
    ///
    /// A timeout too large to be represented as a deadline is treated as no
    /// timeout.
    ///
    /// # Parameters
    ///
    /// * `predicate` - A pure function of the value.
    /// * `timeout` - The maximum time to wait, or `None` to wait forever.
    ///
    /// # Returns
    ///
    /// `true` if the predicate holds, `false` if the timeout expired first.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_sync::AtomicObject;
    /// use std::time::Duration;
    ///
    /// let cell = AtomicObject::new(0);
    /// assert!(cell.wait_for(|v| *v == 0, None));
    /// assert!(!cell.wait_for(|v| *v == 1, Some(Duration::from_millis(10))));
    /// ```
    pub fn wait_for<P>(&self, predicate: P, timeout: Option<Duration>) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        let mut guard = self.value.lock();
        wait_until_satisfied(&self.condvar, &mut guard, predicate, timeout)
    }

    /// Acquires the lock and returns a scoped guard.
    ///
    /// The guard dereferences to the value. If it is ever dereferenced
    /// mutably, all waiters are woken when it is dropped, before the lock is
    /// released.
    ///
    /// The lock is not reentrant: calling any method of this cell while the
    /// guard is alive deadlocks the calling thread.
    ///
    /// # Returns
    ///
    /// The guard; the lock is held until it is dropped.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_sync::AtomicObject;
    ///
    /// let cell = AtomicObject::new(10);
    /// {
    ///     let mut guard = cell.lock();
    ///     let before = *guard;
    ///     *guard = before * 2;
    /// }
    /// assert_eq!(cell.get(), 20);
    /// ```
    #[inline]
    pub fn lock(&self) -> AtomicObjectGuard<'_, T> {
        AtomicObjectGuard {
            guard: self.value.lock(),
            condvar: &self.condvar,
            dirty: false,
        }
    }

    /// Gets a mutable reference to the value through exclusive access.
    ///
    /// No other thread can be waiting while `&mut self` exists, so no
    /// notification is needed.
    #[inline]
    pub fn get_mut(&mut self) -> &mut T {
        self.value.get_mut()
    }

    /// Consumes the cell and returns the value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.value.into_inner()
    }
}

/// Scoped lock over an [`AtomicObject`].
///
/// Created by [`AtomicObject::lock`]. Mutable access marks the guard dirty;
/// a dirty guard wakes all waiters of the cell when dropped.
///
/// # Author
///
/// Haixing Hu
pub struct AtomicObjectGuard<'a, T> {
    guard: MutexGuard<'a, T>,
    condvar: &'a Condvar,
    dirty: bool,
}

impl<'a, T> AtomicObjectGuard<'a, T> {
    /// Blocks until `predicate` holds, releasing the lock while suspended.
    ///
    /// Pending modifications made through this guard are broadcast before
    /// the thread suspends. On return the lock is held again, whatever the
    /// result.
    ///
    /// # Parameters
    ///
    /// * `predicate` - A pure function of the value.
    /// * `timeout` - The maximum time to wait, or `None` to wait forever.
    ///
    /// # Returns
    ///
    /// `true` if the predicate holds, `false` if the timeout expired first.
    pub fn wait_for<P>(&mut self, predicate: P, timeout: Option<Duration>) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        if self.dirty {
            self.condvar.notify_all();
            self.dirty = false;
        }
        wait_until_satisfied(self.condvar, &mut self.guard, predicate, timeout)
    }
}

impl<'a, T> Deref for AtomicObjectGuard<'a, T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.guard
    }
}

impl<'a, T> DerefMut for AtomicObjectGuard<'a, T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut T {
        self.dirty = true;
        &mut self.guard
    }
}

impl<'a, T> Drop for AtomicObjectGuard<'a, T> {
    fn drop(&mut self) {
        // The mutex guard field is dropped after this body, so waiters are
        // notified while the lock is still held.
        if self.dirty {
            self.condvar.notify_all();
        }
    }
}

impl<'a, T: fmt::Debug> fmt::Debug for AtomicObjectGuard<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AtomicObjectGuard")
            .field(&*self.guard)
            .finish()
    }
}

fn wait_until_satisfied<T, P>(
    condvar: &Condvar,
    guard: &mut MutexGuard<'_, T>,
    mut predicate: P,
    timeout: Option<Duration>,
) -> bool
where
    P: FnMut(&T) -> bool,
{
    if predicate(&**guard) {
        return true;
    }
    let deadline = timeout.and_then(|t| Instant::now().checked_add(t));
    trace!(timeout = ?timeout, "waiting for predicate");
    loop {
        match deadline {
            Some(deadline) => {
                if condvar.wait_until(guard, deadline).timed_out() {
                    let satisfied = predicate(&**guard);
                    if !satisfied {
                        trace!(timeout = ?timeout, "wait timed out");
                    }
                    return satisfied;
                }
            }
            None => condvar.wait(guard),
        }
        if predicate(&**guard) {
            return true;
        }
    }
}

impl<T: Default> Default for AtomicObject<T> {
    #[inline]
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> From<T> for AtomicObject<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

// Comparisons read a snapshot of the value. Two comparisons in one
// expression take two independent snapshots.

impl<T: PartialEq> PartialEq<T> for AtomicObject<T> {
    #[inline]
    fn eq(&self, other: &T) -> bool {
        self.read(|v| v == other)
    }
}

impl<T: PartialOrd> PartialOrd<T> for AtomicObject<T> {
    #[inline]
    fn partial_cmp(&self, other: &T) -> Option<Ordering> {
        self.read(|v| v.partial_cmp(other))
    }
}

impl<T: fmt::Debug> fmt::Debug for AtomicObject<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.read(|v| f.debug_tuple("AtomicObject").field(v).finish())
    }
}

impl<T: fmt::Display> fmt::Display for AtomicObject<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.read(|v| write!(f, "{}", v))
    }
}
