// This file is part of int-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `IntSeq` type and its inherent API.
//!
//! `IntSeq` is a growable vector of `i32` values. It owns one contiguous
//! heap buffer whose length is the capacity, and tracks a logical length.
//! The inherent API is split by operation family across the submodules below.

mod access;
mod clone;
mod extend;
mod from;
mod grow;
mod insert;
mod new;
mod push;
mod remove;
mod rotate;
mod search;
mod slice;

// Alloc imports
use alloc::boxed::Box;

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    hash::{Hash, Hasher},
    ops::{Deref, DerefMut},
};

/// A growable, index-addressable sequence of `i32` values.
///
/// `IntSeq` stores its elements in an owned buffer of `capacity` slots and
/// tracks a logical length `len ∈ 0..=capacity`:
///
/// - the buffer is a single contiguous heap allocation, never shared;
/// - appends and inserts double the capacity when the buffer is full;
/// - capacity never shrinks, removals only shorten `len`;
/// - cloning produces a deep copy with the same length and capacity.
///
/// # Layout and invariants
///
/// Internally, `IntSeq` maintains:
///
/// - a backing buffer `buf: Box<[i32]>` with `buf.len() == capacity`; and
/// - a logical length `len` with `0 <= len <= capacity`.
///
/// Only the prefix `buf[..len]` is visible through the public API. Methods
/// such as [`as_slice`](IntSeq::as_slice), indexing, iteration, comparison,
/// hashing and formatting are all restricted to this prefix. The contents of
/// `buf[len..]` are unspecified.
///
/// # Complexity characteristics
///
/// - [`push_back`](IntSeq::push_back): amortized `O(1)`.
/// - [`insert`](IntSeq::insert) / [`remove`](IntSeq::remove): `O(len - index)`.
/// - [`right_rotate`](IntSeq::right_rotate) / [`left_rotate`](IntSeq::left_rotate):
///   `O(len)` for any rotation count, `O(1)` extra space.
/// - [`find`](IntSeq::find) / [`find_transposition`](IntSeq::find_transposition): `O(len)`.
///
/// # Checked vs panicking access
///
/// - **Checked** (return [`Error`](crate::Error), no change on error):
///   [`front`](IntSeq::front), [`back`](IntSeq::back), [`get`](IntSeq::get),
///   [`set`](IntSeq::set), [`insert`](IntSeq::insert), [`remove`](IntSeq::remove).
/// - **Panicking**: `Index` / `IndexMut` (`s[i]`, `s[a..b]`), exactly like slices.
///
/// # Examples
///
/// ```rust
/// use int_seq::{Error, IntSeq};
///
/// let mut s = IntSeq::new(2);
/// assert_eq!(s.as_slice(), &[0, 0]);
/// assert_eq!(s.capacity(), 4);
///
/// s.set(0, 4).unwrap();
/// s.push_back(9);
/// assert_eq!(s.back(), Ok(9));
/// assert_eq!(s.remove(1), Ok(0));
/// assert_eq!(s.as_slice(), &[4, 9]);
///
/// assert_eq!(s.get(2), Err(Error::OutOfBounds { index: 2, len: 2 }));
/// ```
pub struct IntSeq {
    pub(crate) buf: Box<[i32]>,
    pub(crate) len: usize,
}

impl IntSeq {
    /// Returns the number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns the current logical length.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if the next append or insert would reallocate.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Returns `capacity - len`, the number of appends left before the next growth.
    #[inline]
    pub fn spare_capacity(&self) -> usize {
        self.capacity() - self.len
    }

    // iterators
    /// Shorthand for `self.as_slice().iter()`.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, i32> {
        self.as_slice().iter()
    }

    /// Shorthand for `self.as_mut_slice().iter_mut()`.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, i32> {
        self.as_mut_slice().iter_mut()
    }

    /// Returns `true` if the sequence contains `x`.
    #[inline]
    pub fn contains(&self, x: &i32) -> bool {
        self.as_slice().contains(x)
    }

    /// Sets `len = 0`. The capacity is kept.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }
}

impl fmt::Debug for IntSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntSeq")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("elements", &self.as_slice())
            .finish()
    }
}

/// Space-separated live elements, e.g. `99 0 50`.
impl fmt::Display for IntSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut it = self.iter();
        if let Some(first) = it.next() {
            write!(f, "{first}")?;
            for x in it {
                write!(f, " {x}")?;
            }
        }
        Ok(())
    }
}

impl PartialEq for IntSeq {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl Eq for IntSeq {}
impl PartialEq<[i32]> for IntSeq {
    fn eq(&self, other: &[i32]) -> bool {
        self.as_slice() == other
    }
}
impl<const M: usize> PartialEq<[i32; M]> for IntSeq {
    fn eq(&self, other: &[i32; M]) -> bool {
        self.as_slice() == other
    }
}
impl Ord for IntSeq {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl PartialOrd for IntSeq {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl Hash for IntSeq {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl Deref for IntSeq {
    type Target = [i32];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl DerefMut for IntSeq {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl AsRef<[i32]> for IntSeq {
    fn as_ref(&self) -> &[i32] {
        self.as_slice()
    }
}
impl AsMut<[i32]> for IntSeq {
    fn as_mut(&mut self) -> &mut [i32] {
        self.as_mut_slice()
    }
}

// Borrow ergonomics (treat as a slice)
impl Borrow<[i32]> for IntSeq {
    fn borrow(&self) -> &[i32] {
        self.as_slice()
    }
}
impl BorrowMut<[i32]> for IntSeq {
    fn borrow_mut(&mut self) -> &mut [i32] {
        self.as_mut_slice()
    }
}
