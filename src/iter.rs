// This file is part of int-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`IntSeq`](crate::IntSeq).
//!
//! - `IntoIter` yields by value, reusing the sequence's buffer, and supports
//!   `DoubleEndedIterator`, `ExactSizeIterator`, and `FusedIterator`.
//! - `&IntSeq` and `&mut IntSeq` iterate as slices.

// Crate imports
use crate::vec::IntSeq;

// Alloc imports
use alloc::vec;

// Core imports
use core::iter::FusedIterator;

/// Owned iterator returned by `IntSeq::into_iter()`.
///
/// Takes over the sequence's buffer without copying it; the spare slots past
/// `len` are dropped before iteration starts.
#[derive(Debug, Clone)]
pub struct IntoIter(vec::IntoIter<i32>);

impl Iterator for IntoIter {
    type Item = i32;
    #[inline]
    fn next(&mut self) -> Option<i32> {
        self.0.next()
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
    #[inline]
    fn nth(&mut self, n: usize) -> Option<i32> {
        self.0.nth(n)
    }
}

impl DoubleEndedIterator for IntoIter {
    #[inline]
    fn next_back(&mut self) -> Option<i32> {
        self.0.next_back()
    }
}
impl FusedIterator for IntoIter {}
impl ExactSizeIterator for IntoIter {}

impl<'a> IntoIterator for &'a IntSeq {
    type Item = &'a i32;
    type IntoIter = core::slice::Iter<'a, i32>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
impl<'a> IntoIterator for &'a mut IntSeq {
    type Item = &'a mut i32;
    type IntoIter = core::slice::IterMut<'a, i32>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
impl IntoIterator for IntSeq {
    type Item = i32;
    type IntoIter = IntoIter;
    fn into_iter(self) -> Self::IntoIter {
        let len = self.len;
        let mut buf = self.buf.into_vec();
        buf.truncate(len);
        IntoIter(buf.into_iter())
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::vec::IntSeq;
    use alloc::vec::Vec;

    #[test]
    fn test_double_ended_and_nth() {
        let s = IntSeq::from([10, 20, 30, 40]);
        let mut it = s.into_iter();
        assert_eq!(it.next(), Some(10));
        assert_eq!(it.next_back(), Some(40));
        assert_eq!(it.nth(1), Some(30));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }

    #[test]
    #[allow(clippy::iter_nth_zero)]
    fn test_size_hint_tracks_consumption() {
        let s = IntSeq::from([10, 20, 30]);
        let mut it = s.into_iter();
        assert_eq!(it.size_hint(), (3, Some(3)));
        assert_eq!(it.nth(0), Some(10));
        assert_eq!(it.len(), 2);
        assert_eq!(it.nth(5), None);
        assert_eq!(it.size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_into_iter_stops_at_len() {
        // Removed elements stay in the buffer but are never yielded.
        let mut s = IntSeq::from([1, 2, 3, 4]);
        assert_eq!(s.pop(), Some(4));
        let all: Vec<i32> = s.into_iter().collect();
        assert_eq!(all, [1, 2, 3]);
    }

    #[test]
    fn test_borrowed_iteration() {
        let mut s = IntSeq::from([1, 2, 3]);
        for x in &mut s {
            *x += 1;
        }
        let mut sum = 0;
        for x in &s {
            sum += x;
        }
        assert_eq!(sum, 9);
    }

    #[test]
    fn test_into_iter_after_growth_and_removal() {
        let mut s = IntSeq::new(1);
        s.extend_from_slice(&[1, 2, 3, 4]);
        assert_eq!(s.remove(0), Ok(0));
        let mut it = s.into_iter();
        let snapshot = it.clone();
        assert_eq!(it.next_back(), Some(4));
        assert_eq!(it.collect::<Vec<_>>(), [1, 2, 3]);
        assert_eq!(snapshot.len(), 4);
    }
}
