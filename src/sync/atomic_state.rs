/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic State
//!
//! Provides a thread-safe holder for a discrete state, stored as its integer
//! code in an [`AtomicInteger`], and a read-only tracking view.
//!
//! # Author
//!
//! Haixing Hu

use std::any::type_name;
use std::cmp::Ordering;
use std::fmt;
use std::time::Duration;

use tracing::debug;

use crate::sync::atomic_counter::AtomicInteger;
use crate::sync::error::{
    AtomicError,
    AtomicResult,
};
use crate::sync::traits::StateCode;

/// Thread-safe state holder.
///
/// Stores the integer code of a state of type `S`. Only codes that map back
/// to a member of `S` are ever stored. The holder enforces no transition
/// rules: any state may follow any other.
///
/// Hand out an [`AtomicStateTracker`] to code that should observe the state
/// but must not change it.
///
/// # Example
///
/// ```rust
/// use prism3_sync::{AtomicState, StateCode};
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// enum Light {
///     Off = 0,
///     On = 1,
/// }
///
/// impl StateCode for Light {
///     fn to_code(self) -> Option<i64> {
///         Some(self as i64)
///     }
///
///     fn from_code(code: i64) -> Option<Self> {
///         match code {
///             0 => Some(Light::Off),
///             1 => Some(Light::On),
///             _ => None,
///         }
///     }
/// }
///
/// let state = AtomicState::new(Light::Off).unwrap();
/// let tracker = state.tracker();
/// state.set(Light::On).unwrap();
/// assert_eq!(tracker.state(), Light::On);
/// ```
///
/// # Author
///
/// Haixing Hu
pub struct AtomicState<S: StateCode> {
    code: AtomicInteger,
    default_state: S,
}

impl<S: StateCode> AtomicState<S> {
    /// Creates a state holder starting at `default_state`.
    ///
    /// # Parameters
    ///
    /// * `default_state` - The initial state, restored by
    ///   [`reset`](Self::reset).
    ///
    /// # Errors
    ///
    /// Returns [`AtomicError::InvalidArgument`] if `default_state` has no
    /// integer code, or [`AtomicError::InvalidState`] if its code does not
    /// map back to a state.
    pub fn new(default_state: S) -> AtomicResult<Self> {
        let code = validated_code(default_state)?;
        Ok(Self {
            code: AtomicInteger::new(code),
            default_state,
        })
    }

    /// Gets the current state.
    #[inline]
    pub fn state(&self) -> S {
        decode(self.code.get(), self.default_state)
    }

    /// Gets the integer code of the current state.
    #[inline]
    pub fn code(&self) -> i64 {
        self.code.get()
    }

    /// Gets the default state.
    #[inline]
    pub fn default_state(&self) -> S {
        self.default_state
    }

    /// Sets a new state and wakes all waiters.
    ///
    /// # Parameters
    ///
    /// * `state` - The new state.
    ///
    /// # Returns
    ///
    /// The state after setting it.
    ///
    /// # Errors
    ///
    /// Returns [`AtomicError::InvalidArgument`] if `state` has no integer
    /// code, or [`AtomicError::InvalidState`] if its code does not map back
    /// to a state. The stored state is left unchanged.
    pub fn set(&self, state: S) -> AtomicResult<S> {
        let code = validated_code(state)?;
        Ok(self.store(code))
    }

    /// Sets a new state by its integer code and wakes all waiters.
    ///
    /// # Parameters
    ///
    /// * `code` - The code of the new state.
    ///
    /// # Returns
    ///
    /// The state after setting it.
    ///
    /// # Errors
    ///
    /// Returns [`AtomicError::InvalidState`] if `code` is not a member of
    /// `S`. The stored state is left unchanged.
    pub fn set_code(&self, code: i64) -> AtomicResult<S> {
        check_member::<S>(code)?;
        Ok(self.store(code))
    }

    /// Restores the default state.
    ///
    /// # Returns
    ///
    /// The default state.
    #[inline]
    pub fn reset(&self) -> S {
        decode(self.code.reset(), self.default_state)
    }

    /// Blocks until the state equals `state`, or until `timeout` elapses.
    ///
    /// # Returns
    ///
    /// `true` if the state was reached, `false` if the timeout expired or
    /// `state` has no integer code.
    pub fn wait_state(&self, state: S, timeout: Option<Duration>) -> bool {
        match state.to_code() {
            Some(code) => self.code.wait_equal(code, timeout),
            None => false,
        }
    }

    /// Returns a read-only view of this holder.
    #[inline]
    pub fn tracker(&self) -> AtomicStateTracker<'_, S> {
        AtomicStateTracker { holder: self }
    }

    fn store(&self, code: i64) -> S {
        decode(self.code.set(code), self.default_state)
    }
}

/// Read-only view of an [`AtomicState`].
///
/// Always reflects the live state of the holder it was created from, and
/// offers no way to change it.
///
/// # Author
///
/// Haixing Hu
pub struct AtomicStateTracker<'a, S: StateCode> {
    holder: &'a AtomicState<S>,
}

impl<'a, S: StateCode> AtomicStateTracker<'a, S> {
    /// Gets the current state of the tracked holder.
    #[inline]
    pub fn state(&self) -> S {
        self.holder.state()
    }

    /// Gets the integer code of the current state.
    #[inline]
    pub fn code(&self) -> i64 {
        self.holder.code()
    }

    /// Blocks until the tracked state equals `state`, or until `timeout`
    /// elapses.
    #[inline]
    pub fn wait_state(&self, state: S, timeout: Option<Duration>) -> bool {
        self.holder.wait_state(state, timeout)
    }
}

impl<'a, S: StateCode> Clone for AtomicStateTracker<'a, S> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, S: StateCode> Copy for AtomicStateTracker<'a, S> {}

fn validated_code<S: StateCode>(state: S) -> AtomicResult<i64> {
    let Some(code) = state.to_code() else {
        debug!(state_type = type_name::<S>(), "state has no integer code");
        return Err(AtomicError::InvalidArgument {
            type_name: type_name::<S>(),
            reason: "value has no i64 code".to_string(),
        });
    };
    check_member::<S>(code)?;
    Ok(code)
}

fn check_member<S: StateCode>(code: i64) -> AtomicResult<()> {
    if S::from_code(code).is_some() {
        return Ok(());
    }
    debug!(code, state_type = type_name::<S>(), "rejected state code");
    Err(AtomicError::InvalidState {
        code,
        type_name: type_name::<S>(),
    })
}

// Only validated codes are ever stored.
#[inline]
fn decode<S: StateCode>(code: i64, fallback: S) -> S {
    S::from_code(code).unwrap_or(fallback)
}

// Comparisons are by code. Each one reads its own snapshot.

impl<S: StateCode> PartialEq<S> for AtomicState<S> {
    fn eq(&self, other: &S) -> bool {
        other.to_code() == Some(self.code())
    }
}

impl<S: StateCode> PartialOrd<S> for AtomicState<S> {
    fn partial_cmp(&self, other: &S) -> Option<Ordering> {
        other.to_code().map(|code| self.code().cmp(&code))
    }
}

impl<'a, S: StateCode> PartialEq<S> for AtomicStateTracker<'a, S> {
    fn eq(&self, other: &S) -> bool {
        *self.holder == *other
    }
}

impl<'a, S: StateCode> PartialOrd<S> for AtomicStateTracker<'a, S> {
    fn partial_cmp(&self, other: &S) -> Option<Ordering> {
        self.holder.partial_cmp(other)
    }
}

impl<S: StateCode + fmt::Debug> fmt::Debug for AtomicState<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AtomicState").field(&self.state()).finish()
    }
}

impl<S: StateCode + fmt::Debug> fmt::Display for AtomicState<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.state())
    }
}

impl<'a, S: StateCode + fmt::Debug> fmt::Debug for AtomicStateTracker<'a, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AtomicStateTracker")
            .field(&self.state())
            .finish()
    }
}

impl<'a, S: StateCode + fmt::Debug> fmt::Display for AtomicStateTracker<'a, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.state())
    }
}
