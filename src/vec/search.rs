// This file is part of int-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::IntSeq;

impl IntSeq {
    /// Returns the index of the first element equal to `value`, scanning from
    /// the front.
    #[inline]
    pub fn find(&self, value: i32) -> Option<usize> {
        self.iter().position(|&x| x == value)
    }

    /// Self-organizing search: finds the first `value` and moves it one slot
    /// toward the front.
    ///
    /// - Found at `0`: returns `Some(0)`, nothing moves.
    /// - Found at `i > 0`: swaps positions `i - 1` and `i`, returns `Some(i - 1)`.
    /// - Not found: returns `None`, nothing moves.
    ///
    /// Values that are searched for often drift toward the front, shortening
    /// later scans.
    ///
    /// ```rust
    /// use int_seq::IntSeq;
    ///
    /// let mut s = IntSeq::from([4, 5, 6]);
    /// assert_eq!(s.find_transposition(6), Some(1));
    /// assert_eq!(s.find_transposition(6), Some(0));
    /// assert_eq!(s, [6, 4, 5]);
    /// ```
    pub fn find_transposition(&mut self, value: i32) -> Option<usize> {
        let i = self.find(value)?;
        if i == 0 {
            return Some(0);
        }
        self.buf.swap(i - 1, i);
        Some(i - 1)
    }
}
