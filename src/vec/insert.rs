// This file is part of int-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::IntSeq};

impl IntSeq {
    /// Inserts `value` at `index`, shifting `[index..len)` one slot to the right.
    ///
    /// - `index == len` appends, like [`push_back`](IntSeq::push_back).
    /// - Returns [`Error::OutOfBounds`] if `index > len`; the sequence is left
    ///   untouched and no growth happens.
    /// - Grows the buffer before shifting when it is full.
    ///
    /// Uses `copy_within` for overlap-safe shifting.
    #[inline]
    pub fn insert(&mut self, index: usize, value: i32) -> Result<(), Error> {
        let len = self.len;
        if index > len {
            return Err(Error::OutOfBounds { index, len });
        }
        self.grow_if_full();

        // Shift right: [index..len) -> [index+1..len+1)
        self.buf.copy_within(index..len, index + 1);
        self.buf[index] = value;

        self.len = len + 1;
        Ok(())
    }
}
