// This file is part of int-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::IntSeq;

impl IntSeq {
    /// Appends `value`, growing the buffer first if it is full.
    ///
    /// Amortized `O(1)`.
    #[inline]
    pub fn push_back(&mut self, value: i32) {
        self.grow_if_full();
        self.buf[self.len] = value;
        self.len += 1;
    }
}
