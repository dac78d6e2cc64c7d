// This file is part of int-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::IntSeq};

impl IntSeq {
    /// Returns `Ok(())` if `index < len`, otherwise [`Error::OutOfBounds`].
    #[inline]
    fn check_index(&self, index: usize) -> Result<(), Error> {
        if index < self.len {
            Ok(())
        } else {
            Err(Error::OutOfBounds {
                index,
                len: self.len,
            })
        }
    }

    /// Returns the first element, or [`Error::Empty`] if `len == 0`.
    #[inline]
    pub fn front(&self) -> Result<i32, Error> {
        self.as_slice().first().copied().ok_or(Error::Empty)
    }

    /// Returns the last element, or [`Error::Empty`] if `len == 0`.
    #[inline]
    pub fn back(&self) -> Result<i32, Error> {
        self.as_slice().last().copied().ok_or(Error::Empty)
    }

    /// Returns the element at `index`, or [`Error::OutOfBounds`] if `index >= len`.
    ///
    /// This shadows the slice method of the same name reachable through `Deref`.
    /// Use `s.as_slice().get(i)` for the `Option<&i32>` flavor.
    #[inline]
    pub fn get(&self, index: usize) -> Result<i32, Error> {
        self.check_index(index)?;
        Ok(self.buf[index])
    }

    /// Overwrites the element at `index`.
    ///
    /// Returns [`Error::OutOfBounds`] if `index >= len`; nothing is written.
    #[inline]
    pub fn set(&mut self, index: usize, value: i32) -> Result<(), Error> {
        self.check_index(index)?;
        self.buf[index] = value;
        Ok(())
    }
}
