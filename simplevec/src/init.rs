#![warn(missing_docs)]
#![warn(rustdoc::missing_doc_code_examples)]

//! A [`SlotInitializer<T>`] is an object that knows how to fill a run of uninitialized slots
//! with `T` values. Every constructor of [`Vector<T>`](crate::Vector) and the growing half of
//! [`Vector::resize`](crate::Vector::resize) write new elements through one.
//!
//! # Examples
//!
//! Building a vector from an initializer:
//!
//! ```
//! use simplevec::prelude::*;
//! use simplevec::init::FillSequentially;
//!
//! let v: Vector<u16> = Vector::from_init(4, FillSequentially(|i| (i * 2) as u16));
//! assert_eq!(v, [0, 2, 4, 6]);
//! ```
//!
//! Appending through an initializer:
//!
//! ```
//! use simplevec::prelude::*;
//! use simplevec::init::FillWithClone;
//!
//! let mut v = vector!["a".to_string()];
//! v.extend_with(2, FillWithClone(&"b".to_string()));
//! assert_eq!(v, ["a", "b", "b"]);
//! ```

use core::mem::MaybeUninit;

/// An object that is able to initialize a run of `T` slots.
///
/// # Safety
///
/// [`SlotInitializer::initialize`] must either write every slot of `dst` or panic. Slots that
/// were written before a panic are leaked, never exposed.
///
/// # Examples
///
/// An initializer that fills from end to start:
///
/// ```
/// use simplevec::init::SlotInitializer;
/// use simplevec::Vector;
/// use std::mem::MaybeUninit;
///
/// struct WriteBackwardsPowersOf3;
/// unsafe impl SlotInitializer<u64> for WriteBackwardsPowersOf3 {
///     fn initialize(self, dst: &mut [MaybeUninit<u64>]) {
///         let mut v = 1;
///         for slot in dst.iter_mut().rev() {
///             slot.write(v);
///             v *= 3;
///         }
///     }
/// }
///
/// let v = Vector::from_init(5, WriteBackwardsPowersOf3);
/// assert_eq!(v, [81, 27, 9, 3, 1]);
/// ```
pub unsafe trait SlotInitializer<T> {
    /// Fills the slots.
    fn initialize(self, dst: &mut [MaybeUninit<T>]);
}

/// Takes values from an iterator. Panics if the iterator runs out before the slots do.
pub struct FromIterPrefix<Iter>(pub Iter);

unsafe impl<T, Iter: Iterator<Item = T>> SlotInitializer<T> for FromIterPrefix<Iter> {
    fn initialize(mut self, dst: &mut [MaybeUninit<T>]) {
        let slots = dst.len();
        let mut written = 0;
        for (slot, value) in dst.iter_mut().zip(&mut self.0) {
            slot.write(value);
            written += 1;
        }
        if written < slots {
            iterator_too_short(written, slots);
        }
    }
}

#[inline(never)]
#[cold]
fn iterator_too_short(written: usize, slots: usize) -> ! {
    panic!("FromIterPrefix: iterator yielded {written} items for {slots} slots")
}

/// Calls the closure with each slot's index, relative to the start of the run.
pub struct FillSequentially<Lambda>(pub Lambda);

unsafe impl<T, Lambda: FnMut(usize) -> T> SlotInitializer<T> for FillSequentially<Lambda> {
    fn initialize(mut self, dst: &mut [MaybeUninit<T>]) {
        for (i, slot) in dst.iter_mut().enumerate() {
            slot.write(self.0(i));
        }
    }
}

/// Fills every slot with `T::default()`.
pub struct FillWithDefault;

unsafe impl<T: Default> SlotInitializer<T> for FillWithDefault {
    fn initialize(self, dst: &mut [MaybeUninit<T>]) {
        dst.iter_mut().for_each(|slot| {
            slot.write(T::default());
        });
    }
}

/// Fills every slot with a clone of the referenced value.
pub struct FillWithClone<'a, T>(pub &'a T);

unsafe impl<'a, T: Clone> SlotInitializer<T> for FillWithClone<'a, T> {
    fn initialize(self, dst: &mut [MaybeUninit<T>]) {
        for slot in dst.iter_mut() {
            slot.write(self.0.clone());
        }
    }
}

/// Copies a slice of the same length with one `copy_nonoverlapping`.
pub struct CopyFrom<'a, T>(pub &'a [T]);

unsafe impl<'a, T: Copy> SlotInitializer<T> for CopyFrom<'a, T> {
    fn initialize(self, dst: &mut [MaybeUninit<T>]) {
        let src = self.0;
        assert_eq!(src.len(), dst.len(), "CopyFrom: slice and slot run differ in length");
        unsafe {
            // Safety: equal lengths; a shared slice and a unique slot run never overlap.
            core::ptr::copy_nonoverlapping(src.as_ptr(), dst.as_mut_ptr().cast::<T>(), src.len());
        }
    }
}

/// Clones a slice of the same length, element by element.
pub struct CloneFrom<'a, T>(pub &'a [T]);

unsafe impl<'a, T: Clone> SlotInitializer<T> for CloneFrom<'a, T> {
    fn initialize(self, dst: &mut [MaybeUninit<T>]) {
        let src = self.0;
        assert_eq!(src.len(), dst.len(), "CloneFrom: slice and slot run differ in length");
        for (slot, value) in dst.iter_mut().zip(src) {
            slot.write(value.clone());
        }
    }
}

/// Moves the elements of an array of the same length.
pub struct MoveFrom<T, const N: usize>(pub [T; N]);

unsafe impl<T, const N: usize> SlotInitializer<T> for MoveFrom<T, N> {
    fn initialize(self, dst: &mut [MaybeUninit<T>]) {
        assert_eq!(dst.len(), N, "MoveFrom: array and slot run differ in length");
        for (slot, value) in dst.iter_mut().zip(self.0) {
            slot.write(value);
        }
    }
}
