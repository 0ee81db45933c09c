/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Value Traits
//!
//! Defines the capabilities a value type needs to be stored in an
//! [`AtomicCounter`](crate::AtomicCounter) or an
//! [`AtomicState`](crate::AtomicState).
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;

/// Number-like values that a counter can hold.
///
/// Requires equality, ordering, and stepping up and down by a delta.
/// Implemented for all primitive integer and floating-point types.
///
/// # Overflow
///
/// Integer implementations saturate at the bounds of the type instead of
/// wrapping or panicking. Floating-point implementations use plain
/// arithmetic.
///
/// # Author
///
/// Haixing Hu
pub trait CounterValue: Copy + PartialEq + PartialOrd + fmt::Debug + Send + 'static {
    /// The additive identity.
    fn zero() -> Self;

    /// The default step of `inc()` and `dec()`.
    fn one() -> Self;

    /// Returns `self + delta`.
    ///
    /// # Parameters
    ///
    /// * `delta` - The value to add.
    fn add_delta(self, delta: Self) -> Self;

    /// Returns `self - delta`.
    ///
    /// # Parameters
    ///
    /// * `delta` - The value to subtract.
    fn sub_delta(self, delta: Self) -> Self;
}

/// Discrete state types with an integer projection.
///
/// `to_code` and `from_code` must be inverse to each other for every member
/// of the type. Enum state types usually implement this by hand:
///
/// ```rust
/// use prism3_sync::StateCode;
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// enum Phase {
///     Idle = 0,
///     Running = 1,
/// }
///
/// impl StateCode for Phase {
///     fn to_code(self) -> Option<i64> {
///         Some(self as i64)
///     }
///
///     fn from_code(code: i64) -> Option<Self> {
///         match code {
///             0 => Some(Phase::Idle),
///             1 => Some(Phase::Running),
///             _ => None,
///         }
///     }
/// }
/// ```
///
/// # Author
///
/// Haixing Hu
pub trait StateCode: Copy + Send + Sync + 'static {
    /// Projects the state to its integer code.
    ///
    /// # Returns
    ///
    /// The code, or `None` if this value can not be represented as an
    /// `i64`.
    fn to_code(self) -> Option<i64>;

    /// Reconstructs a state from its integer code.
    ///
    /// # Parameters
    ///
    /// * `code` - The integer code.
    ///
    /// # Returns
    ///
    /// The state, or `None` if `code` is not a member of the type.
    fn from_code(code: i64) -> Option<Self>;
}
