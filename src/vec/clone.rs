// This file is part of int-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::IntSeq;

/// Deep copy: the clone owns its own buffer with the same length and capacity.
impl Clone for IntSeq {
    fn clone(&self) -> Self {
        Self {
            buf: self.buf.clone(),
            len: self.len,
        }
    }

    /// Reuses the existing buffer when the capacities already match.
    fn clone_from(&mut self, source: &Self) {
        if self.capacity() == source.capacity() {
            self.buf[..source.len].copy_from_slice(source.as_slice());
        } else {
            self.buf = source.buf.clone();
        }
        self.len = source.len;
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::vec::IntSeq;

    #[test]
    fn test_clone_is_deep_and_keeps_shape() {
        let original = IntSeq::from([1, 2, 3]);
        let mut copy = original.clone();
        assert_eq!(copy, original);
        assert_eq!(copy.capacity(), original.capacity());

        copy.set(0, 100).unwrap();
        copy.push_back(4);
        copy.push_back(5);
        copy.push_back(6);
        copy.push_back(7);

        assert_eq!(original, [1, 2, 3]);
        assert_eq!(original.capacity(), 6);
        assert_eq!(copy, [100, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_clone_from_same_capacity_reuses_buffer() {
        let source = IntSeq::from([4, 5]);
        let mut target = IntSeq::new(2);
        assert_eq!(target.capacity(), source.capacity());
        let before = target.as_slice().as_ptr();

        target.clone_from(&source);
        assert_eq!(target, [4, 5]);
        assert_eq!(target.as_slice().as_ptr(), before);
    }

    #[test]
    fn test_clone_from_adopts_source_capacity() {
        let source = IntSeq::new(10);
        let mut target = IntSeq::from([1, 2, 3]);
        target.clone_from(&source);
        assert_eq!(target.len(), 10);
        assert_eq!(target.capacity(), 20);
        assert!(target.iter().all(|&x| x == 0));

        // Still independent afterwards.
        target.set(0, 1).unwrap();
        assert_eq!(source.front(), Ok(0));
    }
}
