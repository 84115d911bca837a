//! Serde deserialization for vectors.
//!
//! A [`ZcVec`] deserializes from any sequence by collecting into a plain
//! `Vec` and adopting its buffer. There is no `Deserialize` for
//! [`ZcSlice`](crate::ZcSlice): a slice has no storage of its own to
//! deserialize into; deserialize a `ZcVec` and slice it.

use serde::de::{Deserialize, Deserializer};

use crate::ZcVec;

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ZcVec<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Vec::deserialize(deserializer).map(ZcVec::adopt)
    }
}
