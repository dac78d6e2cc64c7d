// This file is part of int-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`IntSeq`](crate::IntSeq).
//!
//! `Index` and `IndexMut` mirror slice behavior:
//! - panics on out-of-bounds;
//! - accepts every form `[i32]` accepts (`usize` and all range types);
//! - views are restricted to the live prefix `[0..len)`, never the spare slots.
//!
//! Use [`IntSeq::get`](crate::IntSeq::get) / [`IntSeq::set`](crate::IntSeq::set)
//! for the checked variants.

// Crate imports
use crate::vec::IntSeq;

// Core imports
use core::{
    ops::{Index, IndexMut},
    slice::SliceIndex,
};

impl<I: SliceIndex<[i32]>> Index<I> for IntSeq {
    type Output = I::Output;
    fn index(&self, index: I) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<I: SliceIndex<[i32]>> IndexMut<I> for IntSeq {
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}
