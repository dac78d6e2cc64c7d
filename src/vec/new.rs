// This file is part of int-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::{IntSeq, grow::doubled};

// Alloc imports
use alloc::vec;

impl IntSeq {
    /// Constructs a sequence of `n` zeros with room for `2n` elements.
    ///
    /// `n == 0` is treated as `1`, so a freshly constructed sequence is never
    /// empty.
    ///
    /// # Panics
    ///
    /// Panics with `capacity overflow` if `2n` does not fit in a `usize`.
    ///
    /// ```rust
    /// use int_seq::IntSeq;
    ///
    /// let s = IntSeq::new(0);
    /// assert_eq!(s.as_slice(), &[0]);
    /// assert_eq!(s.capacity(), 2);
    /// ```
    #[inline]
    pub fn new(n: usize) -> Self {
        let n = n.max(1);
        Self {
            buf: vec![0; doubled(n)].into_boxed_slice(),
            len: n,
        }
    }

    /// Constructs an empty sequence with exactly `capacity` slots.
    ///
    /// A capacity of `0` is allowed; the first append then allocates one slot.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: vec![0; capacity].into_boxed_slice(),
            len: 0,
        }
    }
}

/// An empty sequence with no allocated slots.
impl Default for IntSeq {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}
