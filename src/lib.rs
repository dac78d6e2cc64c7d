// This file is part of int-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `int-seq`
//!
//! A `no_std` + `alloc`, growable, index-addressable sequence of `i32` values,
//! **with no `unsafe`**.
//!
//! The core type, [`IntSeq`], owns a single contiguous heap buffer and tracks a
//! logical length `len ∈ 0..=capacity`. Only the prefix `[0..len)` is ever
//! visible; the tail `[len..capacity)` is spare room for future appends.
//!
//! ## Growth policy
//!
//! - [`IntSeq::new`] starts with `n` zeroed elements (`n == 0` is treated as
//!   `1`) and a capacity of `2n`.
//! - Whenever an append or insert finds the buffer full, the capacity doubles
//!   (or becomes `1` if it was `0`) and the live prefix is copied across.
//!   Appends are therefore amortized `O(1)`, and `k` pushes cause at most
//!   `O(log k)` reallocations.
//! - Capacity never shrinks. [`IntSeq::remove`], [`IntSeq::pop`] and
//!   [`IntSeq::clear`] only shorten the logical length.
//!
//! ## Structural operations
//!
//! - Positional insert/remove shift the tail with an overlap-safe
//!   `copy_within`.
//! - [`IntSeq::right_rotate`] and [`IntSeq::left_rotate`] use the three-reversal
//!   method: `O(len)` time, `O(1)` extra space, regardless of the rotation count.
//! - [`IntSeq::find_transposition`] is a self-organizing search: every hit moves
//!   the found value one slot toward the front.
//!
//! ## Errors
//!
//! Checked accessors return [`Error`]:
//!
//! - [`Error::Empty`] from [`IntSeq::front`] / [`IntSeq::back`] on an empty sequence;
//! - [`Error::OutOfBounds`] from [`IntSeq::get`], [`IntSeq::set`],
//!   [`IntSeq::insert`] and [`IntSeq::remove`].
//!
//! A failed call never leaves the sequence partially modified. Indexing
//! (`s[i]`, `s[a..b]`) follows slice semantics and **panics** instead.
//!
//! `IntSeq` derefs to `[i32]`, but its checked [`IntSeq::get`] takes a single
//! `usize` and returns a `Result`, shadowing the slice method. For the slice
//! flavor (ranges, `Option` results) go through [`IntSeq::as_slice`]:
//!
//! ```rust
//! use int_seq::IntSeq;
//!
//! let s = IntSeq::from([1, 2, 3, 4]);
//! assert_eq!(s.get(1), Ok(2));
//! assert_eq!(s.as_slice().get(1..3), Some(&[2, 3][..]));
//! assert_eq!(s.as_slice().get(9), None);
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize` / `Deserialize` for [`IntSeq`] as a plain sequence of
//!   the live elements.
//!
//! ## Logging
//!
//! Buffer reallocations are reported as `TRACE` events through the
//! [`tracing`](https://docs.rs/tracing) facade. The crate never installs a
//! subscriber.
//!
//! ## Example
//!
//! ```rust
//! use int_seq::IntSeq;
//!
//! let mut s = IntSeq::new(3);
//! s.push_back(7);
//! s.insert(1, 5).unwrap();
//! assert_eq!(s.as_slice(), &[0, 5, 0, 0, 7]);
//!
//! s.right_rotate(2);
//! assert_eq!(s.as_slice(), &[0, 7, 0, 5, 0]);
//!
//! assert_eq!(s.find_transposition(5), Some(2));
//! assert_eq!(s.as_slice(), &[0, 7, 5, 0, 0]);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

// Modules
mod error;
mod index;
mod iter;
#[cfg(feature = "serde")]
mod serde;
mod vec;

// Public exports (crate API surface)
pub use error::Error;
pub use iter::IntoIter;
pub use vec::IntSeq;
