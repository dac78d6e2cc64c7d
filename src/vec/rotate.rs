// This file is part of int-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::IntSeq;

impl IntSeq {
    /// Moves the last element to the front, shifting the rest one slot right.
    ///
    /// No-op when `len <= 1`.
    #[inline]
    pub fn right_rotate_one(&mut self) {
        let len = self.len;
        if len <= 1 {
            return;
        }
        let last = self.buf[len - 1];
        self.buf.copy_within(0..len - 1, 1);
        self.buf[0] = last;
    }

    /// Moves the first element to the back, shifting the rest one slot left.
    ///
    /// No-op when `len <= 1`.
    #[inline]
    pub fn left_rotate_one(&mut self) {
        let len = self.len;
        if len <= 1 {
            return;
        }
        let first = self.buf[0];
        self.buf.copy_within(1..len, 0);
        self.buf[len - 1] = first;
    }

    /// Rotates right by `times` positions using three reversals.
    ///
    /// `times` is taken modulo `len`, so any count costs `O(len)` time and
    /// `O(1)` extra space. No-op when `times == 0` or `len <= 1`.
    ///
    /// ```rust
    /// use int_seq::IntSeq;
    ///
    /// let mut s = IntSeq::from([1, 2, 3, 4, 5]);
    /// s.right_rotate(7); // same as 2
    /// assert_eq!(s, [4, 5, 1, 2, 3]);
    /// ```
    pub fn right_rotate(&mut self, times: usize) {
        let len = self.len;
        if times == 0 || len <= 1 {
            return;
        }
        let times = times % len;

        let s = self.as_mut_slice();
        s.reverse();
        s[..times].reverse();
        s[times..].reverse();
    }

    /// Rotates left by `times` positions; the inverse of
    /// [`right_rotate`](IntSeq::right_rotate).
    ///
    /// Same cost and no-op conditions as `right_rotate`.
    pub fn left_rotate(&mut self, times: usize) {
        let len = self.len;
        if times == 0 || len <= 1 {
            return;
        }
        let times = times % len;

        let s = self.as_mut_slice();
        s[..times].reverse();
        s[times..].reverse();
        s.reverse();
    }
}
