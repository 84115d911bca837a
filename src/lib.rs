mod error;
mod iter;
mod slice;
mod storage;
mod util;
mod vec;
mod vec_trait;

#[cfg(feature = "serde")]
mod de;
#[cfg(feature = "serde")]
mod ser;

pub use error::*;
pub use iter::*;
pub use slice::*;
pub use vec::*;
pub use vec_trait::*;

pub(crate) use storage::Storage;
pub(crate) use util::{clamp_range, resolve_index};
