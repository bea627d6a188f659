//! The capacity growth law shared by every growing operation of [`Vector`](crate::Vector).
//!
//! When an insertion needs one more slot than the buffer holds, the new capacity is
//! `max(required, capacity * GROWTH_FACTOR)`. Since every reallocation at least doubles the
//! capacity, `n` pushes onto an empty vector reallocate at most `ceil(log2(n)) + 1` times.
//!
//! # Examples
//!
//! ```
//! use simplevec::growth::{grown_capacity, GROWTH_FACTOR};
//!
//! assert_eq!(GROWTH_FACTOR, 2);
//! assert_eq!(grown_capacity(0, 1), Some(1));
//! assert_eq!(grown_capacity(4, 5), Some(8));
//! assert_eq!(grown_capacity(4, 100), Some(100));
//! ```

/// Factor by which the capacity is multiplied when an insertion overflows it.
pub const GROWTH_FACTOR: usize = 2;

/// Capacity to allocate when `required` slots are needed and `capacity` are available.
///
/// Returns `None` if the computation overflows `usize`.
#[inline]
pub fn grown_capacity(capacity: usize, required: usize) -> Option<usize> {
    let scaled = capacity.checked_mul(GROWTH_FACTOR)?;
    Some(core::cmp::max(required, scaled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doubles_until_required_dominates() {
        let mut capacity = 0;
        let mut reallocations = 0;
        for len in 0..1000usize {
            if len == capacity {
                capacity = grown_capacity(capacity, len + 1).unwrap();
                reallocations += 1;
            }
        }
        // 1, 2, 4, ..., 1024
        assert_eq!(capacity, 1024);
        assert_eq!(reallocations, 11);
    }

    #[test]
    fn overflow_is_reported() {
        assert_eq!(grown_capacity(usize::MAX, usize::MAX), None);
        assert_eq!(grown_capacity(usize::MAX / 2 + 1, 1), None);
    }
}
