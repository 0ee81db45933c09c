/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Errors
//!
//! Error type shared by the synchronized value types.
//!
//! # Author
//!
//! Haixing Hu

use thiserror::Error;

/// Errors reported by the synchronized value types.
///
/// Timeouts are not errors: all `wait_*` methods report an expired deadline
/// by returning `false`.
///
/// # Author
///
/// Haixing Hu
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AtomicError {
    /// A value has no integer projection where one is required.
    #[error("invalid argument for {type_name}: {reason}")]
    InvalidArgument {
        /// Name of the type the value belongs to.
        type_name: &'static str,
        /// Human readable description of the problem.
        reason: String,
    },

    /// An integer code does not correspond to any member of a state type.
    #[error("code {code} is not a valid state of {type_name}")]
    InvalidState {
        /// The rejected code.
        code: i64,
        /// Name of the target state type.
        type_name: &'static str,
    },
}

/// Result alias for operations that may fail with [`AtomicError`].
pub type AtomicResult<T> = Result<T, AtomicError>;
