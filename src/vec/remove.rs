// This file is part of int-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::IntSeq};

impl IntSeq {
    /// Removes and returns the element at `index`, shifting `(index..len)` one
    /// slot to the left.
    ///
    /// Returns [`Error::OutOfBounds`] if `index >= len`, leaving the sequence
    /// untouched. The capacity is never reduced.
    #[inline]
    pub fn remove(&mut self, index: usize) -> Result<i32, Error> {
        let out = self.get(index)?;
        let len = self.len;

        // Shift left: [index+1..len) -> [index..len-1)
        self.buf.copy_within(index + 1..len, index);

        self.len = len - 1;
        Ok(out)
    }

    /// Removes the last element if any.
    #[inline]
    #[must_use]
    pub fn pop(&mut self) -> Option<i32> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            Some(self.buf[self.len])
        }
    }
}
