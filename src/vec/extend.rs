// This file is part of int-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::IntSeq;

impl Extend<i32> for IntSeq {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<'a> Extend<&'a i32> for IntSeq {
    fn extend<I: IntoIterator<Item = &'a i32>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl FromIterator<i32> for IntSeq {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut out = Self::default();
        out.extend(iter);
        out
    }
}

impl IntSeq {
    /// Appends every element of `src`, growing as needed.
    #[inline]
    pub fn extend_from_slice(&mut self, src: &[i32]) {
        while self.spare_capacity() < src.len() {
            self.grow();
        }
        let len = self.len;
        self.buf[len..len + src.len()].copy_from_slice(src);
        self.len = len + src.len();
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::vec::IntSeq;

    #[test]
    fn test_extend_grows_without_truncating() {
        let mut s = IntSeq::from([1]);
        s.extend([2, 3, 4, 5]);
        assert_eq!(s, [1, 2, 3, 4, 5]);
        assert_eq!(s.capacity(), 8);
    }

    #[test]
    fn test_extend_by_reference() {
        let mut s = IntSeq::default();
        let src = [9, 8];
        s.extend(src.iter());
        assert_eq!(s, [9, 8]);
    }

    #[test]
    fn test_collect() {
        let s: IntSeq = (1..=5).collect();
        assert_eq!(s, [1, 2, 3, 4, 5]);
        let empty: IntSeq = core::iter::empty().collect();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_extend_from_slice_doubles_until_it_fits() {
        let mut s = IntSeq::new(1);
        assert_eq!(s.capacity(), 2);
        s.extend_from_slice(&[1, 2, 3, 4, 5, 6]);
        // 2 -> 4 -> 8: doubling only, never an exact-fit allocation.
        assert_eq!(s.capacity(), 8);
        assert_eq!(s, [0, 1, 2, 3, 4, 5, 6]);

        s.extend_from_slice(&[]);
        assert_eq!(s.len(), 7);
    }
}
