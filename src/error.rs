// This file is part of int-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `IntSeq`.
//!
//! These errors represent emptiness and bounds conditions.
//! They are `Copy` and implement `core::error::Error`.

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by checked operations on [`IntSeq`](crate::IntSeq).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The operation needs at least one element, but `len == 0`.
    ///
    /// Returned by [`IntSeq::front`](crate::IntSeq::front) and
    /// [`IntSeq::back`](crate::IntSeq::back).
    Empty,
    /// An index was outside the range the operation accepts.
    ///
    /// `get`, `set` and `remove` accept `0..len`; `insert` accepts `0..=len`.
    OutOfBounds {
        /// The rejected index.
        index: usize,
        /// The logical length at the time of the call.
        len: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("sequence is empty"),
            Self::OutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for length {len}")
            }
        }
    }
}

impl CoreError for Error {}
