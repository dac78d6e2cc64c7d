// This file is part of int-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`IntSeq`](crate::IntSeq).
//!
//! - **Serialize**: as a sequence of the live elements (length `len`).
//! - **Deserialize**: from any sequence, growing with the usual doubling policy.
//!   The spare capacity is not part of the wire format.

// Crate imports
use crate::vec::IntSeq;

// Core imports
use core::fmt;

// External imports - serde
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

impl Serialize for IntSeq {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.collect_seq(self.iter())
    }
}

/// Upper bound on slots reserved from a deserializer's length hint.
const MAX_PREALLOC: usize = 4096;

struct SeqVisitor;

impl<'de> de::Visitor<'de> for SeqVisitor {
    type Value = IntSeq;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a sequence of 32-bit integers")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        // The hint comes from the input; don't let it drive a huge up-front allocation.
        let mut out = IntSeq::with_capacity(a.size_hint().unwrap_or(0).min(MAX_PREALLOC));
        while let Some(elem) = a.next_element::<i32>()? {
            out.push_back(elem);
        }
        Ok(out)
    }
}

impl<'de> Deserialize<'de> for IntSeq {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(SeqVisitor)
    }
}
