/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Primitive Implementation Macros
//!
//! Provides macros to implement [`CounterValue`](crate::CounterValue) and
//! [`StateCode`](crate::StateCode) for the primitive numeric types with
//! consistent behavior.
//!
//! # Author
//!
//! Haixing Hu

/// Macro to implement `CounterValue` for a primitive integer type.
///
/// Arithmetic saturates at the bounds of the type. Also generates the
/// mirrored comparisons `value == counter` and `value < counter`.
///
/// # Parameters
///
/// * `$value_type` - The value type (e.g., `i32`)
macro_rules! impl_counter_integer {
    ($value_type:ty) => {
        impl crate::sync::traits::CounterValue for $value_type {
            #[inline]
            fn zero() -> Self {
                0
            }

            #[inline]
            fn one() -> Self {
                1
            }

            #[inline]
            fn add_delta(self, delta: Self) -> Self {
                self.saturating_add(delta)
            }

            #[inline]
            fn sub_delta(self, delta: Self) -> Self {
                self.saturating_sub(delta)
            }
        }

        impl_counter_mirrored_cmp!($value_type);
    };
}

/// Macro to implement `CounterValue` for a primitive floating-point type.
///
/// # Parameters
///
/// * `$value_type` - The value type (e.g., `f64`)
macro_rules! impl_counter_float {
    ($value_type:ty) => {
        impl crate::sync::traits::CounterValue for $value_type {
            #[inline]
            fn zero() -> Self {
                0.0
            }

            #[inline]
            fn one() -> Self {
                1.0
            }

            #[inline]
            fn add_delta(self, delta: Self) -> Self {
                self + delta
            }

            #[inline]
            fn sub_delta(self, delta: Self) -> Self {
                self - delta
            }
        }

        impl_counter_mirrored_cmp!($value_type);
    };
}

/// Macro to let a plain value appear on the left-hand side of a comparison
/// with a counter, so that `low < counter` compiles as well as
/// `counter > low`.
///
/// Each comparison takes its own snapshot of the counter.
///
/// # Parameters
///
/// * `$value_type` - The value type (e.g., `u8`)
macro_rules! impl_counter_mirrored_cmp {
    ($value_type:ty) => {
        impl PartialEq<crate::sync::AtomicCounter<$value_type>> for $value_type {
            #[inline]
            fn eq(&self, other: &crate::sync::AtomicCounter<$value_type>) -> bool {
                *self == other.get()
            }
        }

        impl PartialOrd<crate::sync::AtomicCounter<$value_type>> for $value_type {
            #[inline]
            fn partial_cmp(
                &self,
                other: &crate::sync::AtomicCounter<$value_type>,
            ) -> Option<std::cmp::Ordering> {
                self.partial_cmp(&other.get())
            }
        }
    };
}

/// Macro to implement `StateCode` for a primitive integer type.
///
/// A value is a member of the state type exactly when it fits into both
/// `i64` and the primitive type.
///
/// # Parameters
///
/// * `$value_type` - The value type (e.g., `u16`)
macro_rules! impl_state_code_integer {
    ($value_type:ty) => {
        impl crate::sync::traits::StateCode for $value_type {
            #[inline]
            fn to_code(self) -> Option<i64> {
                i64::try_from(self).ok()
            }

            #[inline]
            fn from_code(code: i64) -> Option<Self> {
                <$value_type>::try_from(code).ok()
            }
        }
    };
}
