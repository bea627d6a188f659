//! Capacity hints: select the "reserve, but don't fill" constructor.
//!
//! `Vector::<T>::with_len(3)` creates three default elements. To create an empty vector with
//! room for three elements, pass a [`CapacityHint`] instead:
//!
//! ```
//! use simplevec::prelude::*;
//!
//! let v: Vector<String> = Vector::from(reserve(3));
//! assert_eq!(v.len(), 0);
//! assert_eq!(v.capacity(), 3);
//! ```

/// A requested capacity, wrapped so it cannot be confused with a requested length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CapacityHint(usize);

impl CapacityHint {
    /// Number of slots requested.
    #[inline]
    pub fn capacity(self) -> usize {
        self.0
    }
}

/// Creates a [`CapacityHint`] for `capacity` slots.
#[inline]
pub fn reserve(capacity: usize) -> CapacityHint {
    CapacityHint(capacity)
}
