//! Serde serialization for vectors and slices.
//!
//! Both [`ZcVec`] and [`ZcSlice`] serialize as plain sequences of their
//! elements. A stale slice fails serialization with the serializer's custom
//! error carrying the [`StaleSlice`](crate::Error::StaleSlice) message.

use serde::ser::{Error as _, Serialize, SerializeSeq, Serializer};

use crate::{VecBase, ZcSlice, ZcVec};

impl<T: Serialize> Serialize for ZcVec<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let cells = self.cells().map_err(S::Error::custom)?;
        let mut seq = serializer.serialize_seq(Some(cells.len()))?;
        for cell in cells.iter() {
            seq.serialize_element(cell)?;
        }
        seq.end()
    }
}

impl<T: Serialize> Serialize for ZcSlice<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let cells = self.cells().map_err(S::Error::custom)?;
        let mut seq = serializer.serialize_seq(Some(cells.len()))?;
        for cell in cells.iter() {
            seq.serialize_element(cell)?;
        }
        seq.end()
    }
}
