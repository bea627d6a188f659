//! Errors reported by the fallible operations of this crate.

use thiserror::Error;

/// Result type used by the fallible operations of this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for checked access and fallible allocation.
///
/// # Examples
///
/// ```
/// use simplevec::prelude::*;
///
/// let v = vector![1, 2, 3];
/// assert_eq!(v.at(3), Err(Error::OutOfRange { index: 3, len: 3 }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A checked accessor was called with `index >= len`.
    #[error("index out of range: the len is {len} but the index is {index}")]
    OutOfRange {
        /// The requested index.
        index: usize,
        /// The length of the vector at the time of the call.
        len: usize,
    },
    /// The requested capacity exceeds `isize::MAX` bytes.
    #[error("capacity overflow")]
    CapacityOverflow,
    /// The global allocator returned null.
    #[error("memory allocation of {size} bytes (align {align}) failed")]
    AllocFailed {
        /// Requested allocation size in bytes.
        size: usize,
        /// Requested allocation alignment in bytes.
        align: usize,
    },
}
