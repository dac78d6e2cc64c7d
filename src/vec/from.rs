// This file is part of int-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::{IntSeq, grow::doubled};

// Alloc imports
use alloc::vec::Vec;

impl IntSeq {
    /// Copies `src` into a new sequence with `2 * src.len()` slots, the same
    /// headroom [`IntSeq::new`] leaves.
    #[inline]
    pub fn from_slice(src: &[i32]) -> Self {
        let mut out = Self::with_capacity(doubled(src.len()));
        out.buf[..src.len()].copy_from_slice(src);
        out.len = src.len();
        out
    }
}

impl From<&[i32]> for IntSeq {
    fn from(src: &[i32]) -> Self {
        Self::from_slice(src)
    }
}

impl<const M: usize> From<[i32; M]> for IntSeq {
    fn from(src: [i32; M]) -> Self {
        Self::from_slice(&src)
    }
}

impl<const M: usize> From<&[i32; M]> for IntSeq {
    fn from(src: &[i32; M]) -> Self {
        Self::from_slice(src)
    }
}

impl From<Vec<i32>> for IntSeq {
    fn from(src: Vec<i32>) -> Self {
        Self::from_slice(&src)
    }
}

impl From<IntSeq> for Vec<i32> {
    fn from(seq: IntSeq) -> Self {
        seq.as_slice().to_vec()
    }
}
