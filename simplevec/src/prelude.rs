//! Everything needed to build and use a [`Vector`], in one import.
//!
//! # Examples
//!
//! ```
//! use simplevec::prelude::*;
//!
//! let mut v: Vector<u8> = Vector::from(reserve(4));
//! v.extend([1, 2]);
//! assert_eq!(v, vector![1, 2]);
//! assert!(matches!(v.at(2), Err(Error::OutOfRange { .. })));
//! ```

pub use crate::array_ptr::ArrayPtr;
pub use crate::error::Error;
pub use crate::hint::{reserve, CapacityHint};
pub use crate::init::SlotInitializer;
pub use crate::vector;
pub use crate::vector::{IntoIter, Vector};
