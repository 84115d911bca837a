//! Error types for vector and slice operations.
//!
//! This module contains the [`Error`] type which represents all possible
//! errors that can occur when accessing a [`ZcVec`](crate::ZcVec) or a
//! [`ZcSlice`](crate::ZcSlice) derived from one.
//!
//! # Example
//!
//! ```
//! use zc_vec::{Error, VecBase, ZcVec};
//!
//! let mut vec = ZcVec::adopt(vec![1, 2, 3]);
//! let slice = vec.slice(0, 3);
//!
//! vec.clear();
//! match slice.get(0) {
//!     Err(Error::StaleSlice { offset, len, root_len }) => {
//!         println!("window {}..{} no longer fits in {}", offset, offset + len, root_len);
//!     }
//!     other => panic!("expected a stale slice, got {:?}", other),
//! }
//! ```

use std::fmt::{self, Display};

/// Alias for a `Result` with the error type [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// This type represents all possible errors that can occur when reading or
/// writing through a vector or one of its slices.
///
/// # Variants
///
/// - [`IndexOutOfRange`](Error::IndexOutOfRange) - An index fell outside the addressable range
/// - [`StaleSlice`](Error::StaleSlice) - A slice's window no longer fits its root vector
/// - [`UnsupportedOperation`](Error::UnsupportedOperation) - A refused operation was invoked on a slice
/// - [`UnsupportedType`](Error::UnsupportedType) - A slice was requested over a type without shareable storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An index fell outside the addressable range.
    ///
    /// `index` is the index as given by the caller (so a negative index is
    /// reported as written, not normalized) and `len` is the length it was
    /// checked against: the vector's current length, or the slice's fixed
    /// window length.
    IndexOutOfRange { index: isize, len: usize },

    /// A slice's window no longer fits inside its root vector.
    ///
    /// Raised when `offset + len > root_len` at the time of an access, which
    /// happens after the root was shrunk below the slice's declared window.
    /// The check is repeated on every access, so a slice becomes usable again
    /// if the root regrows past the window.
    StaleSlice {
        offset: usize,
        len: usize,
        root_len: usize,
    },

    /// A refused operation was invoked on a slice.
    ///
    /// Slices have no storage of their own: anything that would change the
    /// root's length or reorder cells outside the caller's control is refused
    /// outright rather than silently falling back to a copy. The payload is
    /// the name of the refused method.
    UnsupportedOperation(&'static str),

    /// A slice was requested over a type that cannot expose shared storage.
    ///
    /// Returned by [`SliceSource`](crate::SliceSource) implementations for
    /// plain sequences such as `Vec<T>`: borrowing one gives no owned handle
    /// to alias, and copying would break the zero-copy contract. Adopt the
    /// vector into a [`ZcVec`](crate::ZcVec) first.
    UnsupportedType(&'static str),
}

impl Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::IndexOutOfRange { index, len } => formatter.write_str(&format!(
                "index {index} out of range for length {len}"
            )),
            Error::StaleSlice {
                offset,
                len,
                root_len,
            } => formatter.write_str(&format!(
                "stale slice: window {}..{} exceeds root length {root_len}",
                offset,
                offset + len
            )),
            Error::UnsupportedOperation(op) => {
                formatter.write_str(&format!("operation `{op}` is not supported on a slice"))
            }
            Error::UnsupportedType(ty) => {
                formatter.write_str(&format!("type `{ty}` cannot expose shared storage"))
            }
        }
    }
}

impl std::error::Error for Error {}
