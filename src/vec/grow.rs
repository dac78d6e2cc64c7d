// This file is part of int-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::IntSeq;

// Alloc imports
use alloc::vec;

/// Returns `2 * n`, panicking with `capacity overflow` (as `Vec` does) when
/// that does not fit in a `usize`.
#[inline]
pub(crate) fn doubled(n: usize) -> usize {
    n.checked_mul(2).expect("capacity overflow")
}

impl IntSeq {
    /// Doubles the capacity (or sets it to `1` from `0`) and moves the live
    /// prefix into the new buffer at the same positions.
    pub(crate) fn grow(&mut self) {
        let old_capacity = self.capacity();
        let new_capacity = doubled(old_capacity).max(1);

        let mut buf = vec![0; new_capacity].into_boxed_slice();
        buf[..self.len].copy_from_slice(self.as_slice());
        self.buf = buf;

        tracing::trace!(old_capacity, new_capacity, len = self.len, "grew buffer");
    }

    /// Grows the buffer if the next write at `len` would not fit.
    #[inline]
    pub(crate) fn grow_if_full(&mut self) {
        if self.is_full() {
            self.grow();
        }
    }
}
