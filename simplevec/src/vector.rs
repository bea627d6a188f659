#![warn(missing_docs)]
#![warn(rustdoc::missing_doc_code_examples)]

//! A growable, contiguous array of `T`, backed by one [`ArrayPtr<T>`].
//!
//! # Examples
//!
//! ```
//! use simplevec::prelude::*;
//!
//! let mut v: Vector<i32> = Vector::new();
//! v.push(1);
//! v.push(2);
//! v.push(3);
//! v.insert(1, 99);
//! assert_eq!(v, [1, 99, 2, 3]);
//! assert_eq!(v.erase(0), Some(1));
//! v.resize(5);
//! assert_eq!(v, [99, 2, 3, 0, 0]);
//! v.reserve(10);
//! assert_eq!(v, [99, 2, 3, 0, 0]);
//! assert!(v.capacity() >= 10);
//! ```
//!
//! # Storage
//!
//! Slots `[0, len)` of the buffer hold live elements; slots `[len, capacity)` are allocated but
//! unoccupied, and are never read. Growth never happens in place: a new buffer is allocated,
//! the live elements are moved into it, and the old buffer is freed as a unit. References,
//! slices and iterators into a `Vector` borrow it, so the borrow checker rejects any use of them
//! after an operation that may move the elements.

use crate::array_ptr::ArrayPtr;
use crate::error::{Error, Result};
use crate::growth::grown_capacity;
use crate::hint::CapacityHint;
use crate::init::{
    CloneFrom, CopyFrom, FillSequentially, FillWithClone, FillWithDefault, FromIterPrefix,
    MoveFrom, SlotInitializer,
};
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use core::ops::{Deref, DerefMut, Range};
use core::ptr;

/// A growable, contiguous array with value semantics.
///
/// Cloning a `Vector` deep-copies its live elements into a buffer of exactly `len` slots.
/// Moving it transfers the buffer; [`core::mem::take`] leaves an empty vector (length 0,
/// capacity 0) behind.
///
/// # Examples
///
/// ```
/// use simplevec::prelude::*;
///
/// let a = vector![1, 2, 3];
/// let mut b = a.clone();
/// b[0] = 10;
/// assert_eq!(a, [1, 2, 3]);
/// assert_eq!(b, [10, 2, 3]);
///
/// let mut c = b;
/// let d = core::mem::take(&mut c);
/// assert_eq!(d, [10, 2, 3]);
/// assert_eq!((c.len(), c.capacity()), (0, 0));
/// ```
pub struct Vector<T> {
    items: ArrayPtr<T>,
    size: usize,
}

#[inline(never)]
#[cold]
fn capacity_overflow() -> ! {
    panic!("capacity overflow")
}

#[inline(never)]
#[cold]
fn insert_out_of_bounds(index: usize, len: usize) -> ! {
    panic!("insertion index (is {index}) should be <= len (is {len})")
}

impl<T> Vector<T> {
    /// Creates an empty vector. Does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Vector {
            items: ArrayPtr::empty(),
            size: 0,
        }
    }

    /// Creates an empty vector with room for exactly `capacity` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use simplevec::Vector;
    /// let v: Vector<u8> = Vector::with_capacity(10);
    /// assert_eq!((v.len(), v.capacity()), (0, 10));
    /// ```
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Vector {
            items: ArrayPtr::new(capacity),
            size: 0,
        }
    }

    /// Creates a vector of `len` elements written by `init`, with capacity exactly `len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use simplevec::Vector;
    /// use simplevec::init::FillSequentially;
    /// let v = Vector::from_init(3, FillSequentially(|i| i * 10));
    /// assert_eq!(v, [0, 10, 20]);
    /// ```
    pub fn from_init(len: usize, init: impl SlotInitializer<T>) -> Self {
        let mut v = Vector::with_capacity(len);
        v.extend_with(len, init);
        v
    }

    /// Creates a vector of `len` elements, computing each from its index.
    ///
    /// # Examples
    ///
    /// ```
    /// use simplevec::Vector;
    /// let v = Vector::from_fn(4, |i| i * i);
    /// assert_eq!(v, [0, 1, 4, 9]);
    /// ```
    #[inline]
    pub fn from_fn(len: usize, f: impl FnMut(usize) -> T) -> Self {
        Vector::from_init(len, FillSequentially(f))
    }

    /// Number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    /// True iff there are no live elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of elements the current buffer holds without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.items.len()
    }

    /// The live elements, as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // Safety: slots [0, size) are initialized.
        unsafe { core::slice::from_raw_parts(self.items.as_ptr(), self.size) }
    }

    /// The live elements, as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // Safety: slots [0, size) are initialized.
        unsafe { core::slice::from_raw_parts_mut(self.items.as_mut_ptr(), self.size) }
    }

    /// Raw pointer to the first slot. Valid until the next reallocation.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.items.as_ptr()
    }

    /// Mutable raw pointer to the first slot. Valid until the next reallocation.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.items.as_mut_ptr()
    }

    /// The begin/end cursor pair spanning exactly the live elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use simplevec::prelude::*;
    /// let v = vector![1u32, 2, 3];
    /// let range = v.as_ptr_range();
    /// assert_eq!(unsafe { range.end.offset_from(range.start) }, 3);
    /// ```
    #[inline]
    pub fn as_ptr_range(&self) -> Range<*const T> {
        self.as_slice().as_ptr_range()
    }

    /// Mutable version of [`Vector::as_ptr_range`].
    #[inline]
    pub fn as_mut_ptr_range(&mut self) -> Range<*mut T> {
        self.as_mut_slice().as_mut_ptr_range()
    }

    /// Checked access: the element at `index`, or [`Error::OutOfRange`] if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use simplevec::prelude::*;
    /// let v = vector!['a', 'b'];
    /// assert_eq!(v.at(1), Ok(&'b'));
    /// assert_eq!(v.at(2), Err(Error::OutOfRange { index: 2, len: 2 }));
    /// ```
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T> {
        let len = self.size;
        self.as_slice()
            .get(index)
            .ok_or(Error::OutOfRange { index, len })
    }

    /// Checked mutable access. See [`Vector::at`].
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.size;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(Error::OutOfRange { index, len })
    }

    /// Unchecked access to the element at `index`.
    ///
    /// # Safety
    ///
    /// `index < self.len()`. For a checked variant, see [`Vector::at`].
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.size);
        self.items.get_unchecked(index)
    }

    /// Unchecked mutable access to the element at `index`.
    ///
    /// # Safety
    ///
    /// `index < self.len()`. For a checked variant, see [`Vector::at_mut`].
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.size);
        self.items.get_unchecked_mut(index)
    }

    /// Appends `value` at the end. Amortized O(1).
    #[inline]
    pub fn push(&mut self, value: T) {
        self.insert(self.size, value);
    }

    /// Inserts `value` before position `index`, shifting later elements right, and returns a
    /// reference to the inserted element.
    ///
    /// If the buffer is full, a new one of [`grown_capacity`] slots is allocated and the
    /// elements are moved across around the new value.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use simplevec::prelude::*;
    /// let mut v = vector![1, 2, 3];
    /// *v.insert(3, 4) += 1;
    /// v.insert(0, 0);
    /// assert_eq!(v, [0, 1, 2, 3, 5]);
    /// ```
    ///
    /// The returned reference borrows the vector, so it cannot be used across a call that may
    /// move the elements:
    ///
    /// ```compile_fail,E0499
    /// use simplevec::prelude::*;
    /// let mut v = vector![1, 2, 3];
    /// let inserted = v.insert(0, 0);
    /// v.push(4);
    /// *inserted += 1;
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> &mut T {
        let len = self.size;
        if index > len {
            insert_out_of_bounds(index, len);
        }
        if len == self.capacity() {
            self.grow_and_insert(index, value);
        } else {
            unsafe {
                // Safety: len < capacity, so slot `len` exists; ptr::copy handles the overlap.
                let p = self.items.as_mut_ptr().add(index);
                ptr::copy(p, p.add(1), len - index);
                ptr::write(p, value);
            }
        }
        self.size = len + 1;
        // Safety: index < size.
        unsafe { self.items.get_unchecked_mut(index) }
    }

    #[inline(never)]
    #[cold]
    fn grow_and_insert(&mut self, index: usize, value: T) {
        let len = self.size;
        let new_capacity = len
            .checked_add(1)
            .and_then(|required| grown_capacity(self.capacity(), required))
            .unwrap_or_else(|| capacity_overflow());
        let mut fresh = ArrayPtr::new(new_capacity);
        log::trace!(
            "Vector<{}>: capacity {} -> {} (insert at {})",
            core::any::type_name::<T>(),
            self.capacity(),
            new_capacity,
            index
        );
        unsafe {
            // Safety: distinct blocks; `fresh` has at least len + 1 slots.
            let src = self.items.as_ptr();
            let dst = fresh.as_mut_ptr();
            ptr::copy_nonoverlapping(src, dst, index);
            ptr::write(dst.add(index), value);
            ptr::copy_nonoverlapping(src.add(index), dst.add(index + 1), len - index);
        }
        // The old block's elements were moved out bitwise; dropping `fresh` only frees it.
        self.items.swap(&mut fresh);
    }

    /// Removes and returns the last element, or `None` if empty. Capacity is unchanged.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.size == 0 {
            return None;
        }
        self.size -= 1;
        // Safety: slot `size` was live and is now outside the live range.
        Some(unsafe { self.items.read(self.size) })
    }

    /// Removes and returns the element at `index`, shifting later elements left.
    ///
    /// Erasing at `index >= len` (in particular at the end position, `len`) is a no-op that
    /// returns `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use simplevec::prelude::*;
    /// let mut v = vector![1, 2, 3];
    /// assert_eq!(v.erase(1), Some(2));
    /// assert_eq!(v.erase(2), None);
    /// assert_eq!(v, [1, 3]);
    /// ```
    pub fn erase(&mut self, index: usize) -> Option<T> {
        let len = self.size;
        if index >= len {
            return None;
        }
        unsafe {
            // Safety: index < len; the shifted range stays inside the live prefix.
            let p = self.items.as_mut_ptr().add(index);
            let value = ptr::read(p);
            ptr::copy(p.add(1), p, len - index - 1);
            self.size = len - 1;
            Some(value)
        }
    }

    /// Grows the buffer to exactly `new_capacity` slots if it is currently smaller.
    /// Never shrinks.
    ///
    /// Unlike `Vec::reserve`, the argument is the total capacity, not the additional one.
    ///
    /// # Examples
    ///
    /// ```
    /// use simplevec::prelude::*;
    /// let mut v = vector![1, 2];
    /// v.reserve(10);
    /// assert_eq!(v.capacity(), 10);
    /// v.reserve(4);
    /// assert_eq!(v.capacity(), 10);
    /// ```
    pub fn reserve(&mut self, new_capacity: usize) {
        if new_capacity > self.capacity() {
            self.relocate(new_capacity);
        }
    }

    /// Like [`Vector::reserve`], but reports allocation failure instead of panicking or
    /// aborting. On error the vector is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use simplevec::prelude::*;
    /// let mut v = vector![1u64, 2];
    /// assert_eq!(v.try_reserve(usize::MAX), Err(Error::CapacityOverflow));
    /// assert_eq!(v, [1, 2]);
    /// assert!(v.try_reserve(8).is_ok());
    /// ```
    pub fn try_reserve(&mut self, new_capacity: usize) -> Result<()> {
        if new_capacity > self.capacity() {
            let fresh = ArrayPtr::try_new(new_capacity)?;
            self.adopt(fresh);
        }
        Ok(())
    }

    #[inline(never)]
    #[cold]
    fn relocate(&mut self, new_capacity: usize) {
        let fresh = ArrayPtr::new(new_capacity);
        self.adopt(fresh);
    }

    fn adopt(&mut self, mut fresh: ArrayPtr<T>) {
        debug_assert!(fresh.len() >= self.size);
        log::trace!(
            "Vector<{}>: capacity {} -> {}",
            core::any::type_name::<T>(),
            self.capacity(),
            fresh.len()
        );
        unsafe {
            // Safety: distinct blocks, both with at least `size` slots.
            ptr::copy_nonoverlapping(self.items.as_ptr(), fresh.as_mut_ptr(), self.size);
        }
        self.items.swap(&mut fresh);
    }

    /// Appends `additional` elements written by `init`, growing by the usual growth law if
    /// needed.
    pub fn extend_with(&mut self, additional: usize, init: impl SlotInitializer<T>) {
        let len = self.size;
        let new_len = len
            .checked_add(additional)
            .unwrap_or_else(|| capacity_overflow());
        if new_len > self.capacity() {
            let new_capacity =
                grown_capacity(self.capacity(), new_len).unwrap_or_else(|| capacity_overflow());
            self.relocate(new_capacity);
        }
        init.initialize(&mut self.items.as_uninit_slice_mut()[len..new_len]);
        self.size = new_len;
    }

    /// Resizes to `new_len`, filling new slots with values returned by `f`.
    ///
    /// Shrinking drops the tail and keeps the capacity. Growing beyond the capacity allocates
    /// `max(capacity * 2, new_len)` slots.
    pub fn resize_with(&mut self, new_len: usize, mut f: impl FnMut() -> T) {
        if new_len <= self.size {
            self.truncate(new_len);
        } else {
            self.extend_with(new_len - self.size, FillSequentially(|_| f()));
        }
    }

    /// Drops every element past `new_len`. Keeps the capacity. No-op if `new_len >= len`.
    pub fn truncate(&mut self, new_len: usize) {
        let len = self.size;
        if new_len >= len {
            return;
        }
        unsafe {
            // Safety: [new_len, len) is live. Size is lowered first so a panicking destructor
            // cannot cause a double drop.
            let tail =
                ptr::slice_from_raw_parts_mut(self.items.as_mut_ptr().add(new_len), len - new_len);
            self.size = new_len;
            ptr::drop_in_place(tail);
        }
    }

    /// Drops every element. Keeps the buffer and its capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Exchanges buffers and lengths with `other` in O(1).
    ///
    /// Named `swap_with` so that the slice method `swap(a, b)` stays reachable through
    /// [`Deref`].
    #[inline]
    pub fn swap_with(&mut self, other: &mut Self) {
        self.items.swap(&mut other.items);
        core::mem::swap(&mut self.size, &mut other.size);
    }

    /// Moves the live elements into a standard `Vec`.
    pub fn into_vec(self) -> Vec<T> {
        self.into_iter().collect()
    }
}

impl<T: Default> Vector<T> {
    /// Creates a vector of `len` default values, with capacity exactly `len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use simplevec::Vector;
    /// let v: Vector<i32> = Vector::with_len(3);
    /// assert_eq!(v, [0, 0, 0]);
    /// assert_eq!(v.capacity(), 3);
    /// ```
    #[inline]
    pub fn with_len(len: usize) -> Self {
        Vector::from_init(len, FillWithDefault)
    }

    /// Resizes to `new_len`, filling new slots with `T::default()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use simplevec::prelude::*;
    /// let mut v = vector![1, 2, 3, 4];
    /// v.resize(1);
    /// v.resize(3);
    /// assert_eq!(v, [1, 0, 0]);
    /// assert_eq!(v.capacity(), 4);
    /// ```
    pub fn resize(&mut self, new_len: usize) {
        if new_len <= self.size {
            self.truncate(new_len);
        } else {
            self.extend_with(new_len - self.size, FillWithDefault);
        }
    }
}

impl<T: Clone> Vector<T> {
    /// Creates a vector of `len` clones of `value`, with capacity exactly `len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use simplevec::Vector;
    /// let v = Vector::from_value(3, "hi".to_string());
    /// assert_eq!(v, ["hi", "hi", "hi"]);
    /// ```
    #[inline]
    pub fn from_value(len: usize, value: T) -> Self {
        Vector::from_init(len, FillWithClone(&value))
    }

    /// Appends clones of every element of `other`.
    #[inline]
    pub fn extend_from_slice(&mut self, other: &[T]) {
        self.extend_with(other.len(), CloneFrom(other));
    }
}

impl<T: Copy> Vector<T> {
    /// Creates a vector holding a bitwise copy of `src`, with capacity exactly `src.len()`.
    #[inline]
    pub fn copy_from_slice(src: &[T]) -> Self {
        Vector::from_init(src.len(), CopyFrom(src))
    }
}

/// Creates a [`Vector`] containing the arguments, like `vec!`.
///
/// # Examples
///
/// ```
/// use simplevec::prelude::*;
///
/// let empty: Vector<u8> = vector![];
/// assert!(empty.is_empty());
///
/// let v = vector![1, 2, 3];
/// assert_eq!((v.len(), v.capacity()), (3, 3));
///
/// let zeros = vector![0u8; 4];
/// assert_eq!(zeros, [0, 0, 0, 0]);
/// ```
#[macro_export]
macro_rules! vector {
    () => (
        $crate::Vector::new()
    );
    ($elem:expr; $n:expr) => (
        $crate::Vector::from_value($n, $elem)
    );
    ($($x:expr),+ $(,)?) => (
        $crate::Vector::from([$($x),+])
    );
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        unsafe {
            // Safety: the live prefix is dropped once; `items` then frees the block.
            ptr::drop_in_place(self.as_mut_slice());
        }
    }
}

impl<T> Default for Vector<T> {
    #[inline]
    fn default() -> Self {
        Vector::new()
    }
}

/// Deep copy into a buffer of exactly `len` slots.
///
/// `clone_from` is copy-then-swap: a temporary is cloned from `source`, swapped into `self`,
/// and the old contents are dropped with the temporary. `&mut self` and `&source` never alias,
/// so self-assignment needs no runtime guard.
///
/// # Examples
///
/// ```
/// use simplevec::prelude::*;
/// let a = vector![1, 2, 3];
/// let mut b = vector![9; 100];
/// b.clone_from(&a);
/// assert_eq!(b, a);
/// assert_eq!(b.capacity(), 3);
/// ```
impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        Vector::from_init(self.size, CloneFrom(self.as_slice()))
    }

    fn clone_from(&mut self, source: &Self) {
        let mut tmp = source.clone();
        self.swap_with(&mut tmp);
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for Vector<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for Vector<T> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> From<CapacityHint> for Vector<T> {
    #[inline]
    fn from(hint: CapacityHint) -> Self {
        Vector::with_capacity(hint.capacity())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    #[inline]
    fn from(arr: [T; N]) -> Self {
        Vector::from_init(N, MoveFrom(arr))
    }
}

impl<T: Clone> From<&[T]> for Vector<T> {
    #[inline]
    fn from(src: &[T]) -> Self {
        Vector::from_init(src.len(), CloneFrom(src))
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(src: Vec<T>) -> Self {
        Vector::from_init(src.len(), FromIterPrefix(src.into_iter()))
    }
}

impl<T> From<Vector<T>> for Vec<T> {
    #[inline]
    fn from(src: Vector<T>) -> Self {
        src.into_vec()
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        let wanted = self.size.saturating_add(lower);
        if wanted > self.capacity() {
            let new_capacity =
                grown_capacity(self.capacity(), wanted).unwrap_or_else(|| capacity_overflow());
            self.relocate(new_capacity);
        }
        for value in iter {
            self.push(value);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for Vector<T> {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = &'a T>,
    {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut v = Vector::new();
        v.extend(iter);
        v
    }
}

impl<T, U> PartialEq<Vector<U>> for Vector<T>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &Vector<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T, U> PartialEq<[U]> for Vector<T>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T, U> PartialEq<&[U]> for Vector<T>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}

impl<T, U, const N: usize> PartialEq<[U; N]> for Vector<T>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == &other[..]
    }
}

/// Lexicographic order: the first unequal pair of elements decides, and a proper prefix is
/// less than the longer vector. `<=`, `>` and `>=` follow from `partial_cmp`.
///
/// # Examples
///
/// ```
/// use simplevec::prelude::*;
/// assert!(vector![1, 2] < vector![1, 2, 3]);
/// assert!(vector![1, 3] > vector![1, 2, 9]);
/// ```
impl<T: PartialOrd> PartialOrd for Vector<T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for Vector<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash> Hash for Vector<T> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> IntoIterator for Vector<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(mut self) -> IntoIter<T> {
        let items = self.items.take();
        let end = core::mem::replace(&mut self.size, 0);
        IntoIter {
            items,
            start: 0,
            end,
        }
    }
}

/// Iterates over owned elements of a [`Vector`].
///
/// Walking this iterator takes ownership of the elements one by one. Dropping it drops the
/// elements not yet yielded, then frees the buffer.
///
/// # Examples
///
/// ```
/// use simplevec::prelude::*;
/// let v = vector!["a".to_string(), "b".to_string(), "c".to_string()];
/// let mut iter = v.into_iter();
/// assert_eq!(iter.next().as_deref(), Some("a"));
/// assert_eq!(iter.next_back().as_deref(), Some("c"));
/// assert_eq!(iter.as_slice(), ["b"]);
/// ```
pub struct IntoIter<T> {
    items: ArrayPtr<T>,
    start: usize,
    end: usize,
}

impl<T> IntoIter<T> {
    /// The elements not yet yielded.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // Safety: slots [start, end) are still live.
        unsafe {
            core::slice::from_raw_parts(self.items.as_ptr().add(self.start), self.end - self.start)
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.start < self.end {
            // Safety: slot `start` is live and leaves the live range.
            let value = unsafe { self.items.read(self.start) };
            self.start += 1;
            Some(value)
        } else {
            None
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.start;
        (len, Some(len))
    }

    #[inline]
    fn count(self) -> usize {
        self.end - self.start
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        if self.start < self.end {
            self.end -= 1;
            // Safety: slot `end` was live and leaves the live range.
            Some(unsafe { self.items.read(self.end) })
        } else {
            None
        }
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    #[inline]
    fn len(&self) -> usize {
        self.end - self.start
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        if core::mem::needs_drop::<T>() {
            unsafe {
                // Safety: slots [start, end) are live and dropped once.
                let rest = ptr::slice_from_raw_parts_mut(
                    self.items.as_mut_ptr().add(self.start),
                    self.end - self.start,
                );
                self.start = self.end;
                ptr::drop_in_place(rest);
            }
        }
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hint::reserve;
    use alloc::rc::Rc;
    use alloc::string::{String, ToString};
    use core::cell::Cell;

    /// Counts its own drops into a shared cell.
    #[derive(Clone, Debug, Default)]
    struct DropCounter(Rc<Cell<usize>>);

    impl Drop for DropCounter {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn counters(n: usize, drops: &Rc<Cell<usize>>) -> Vector<DropCounter> {
        Vector::from_fn(n, |_| DropCounter(drops.clone()))
    }

    #[test]
    fn default_is_empty_and_unallocated() {
        let v: Vector<String> = Vector::default();
        assert_eq!((v.len(), v.capacity()), (0, 0));
        assert!(v.is_empty());
        assert_eq!(v.at(0), Err(Error::OutOfRange { index: 0, len: 0 }));
    }

    #[test]
    fn capacity_hint_allocates_without_filling() {
        let v: Vector<String> = Vector::from(reserve(5));
        assert_eq!((v.len(), v.capacity()), (0, 5));
    }

    #[test]
    fn count_constructors() {
        let v: Vector<i32> = Vector::with_len(4);
        assert_eq!(v, [0, 0, 0, 0]);
        assert_eq!(v.capacity(), 4);

        let w = Vector::from_value(3, 7u8);
        assert_eq!(w, [7, 7, 7]);
        assert_eq!(w.capacity(), 3);

        let x = vector![String::from("a"), String::from("b")];
        assert_eq!(x, ["a", "b"]);
        assert_eq!(x.capacity(), 2);
    }

    #[test]
    fn concrete_scenario() {
        let mut v = Vector::new();
        v.push(1);
        v.push(2);
        v.push(3);
        assert_eq!(*v.insert(1, 99), 99);
        assert_eq!(v, [1, 99, 2, 3]);
        assert_eq!(v.erase(0), Some(1));
        assert_eq!(v, [99, 2, 3]);
        v.resize(5);
        assert_eq!(v, [99, 2, 3, 0, 0]);
        v.reserve(10);
        assert_eq!(v, [99, 2, 3, 0, 0]);
        assert!(v.capacity() >= 10);
    }

    #[test]
    fn push_doubles_capacity() {
        let mut v = Vector::new();
        let mut capacities = Vec::new();
        for i in 0..17 {
            v.push(i);
            if capacities.last() != Some(&v.capacity()) {
                capacities.push(v.capacity());
            }
        }
        assert_eq!(capacities, [1, 2, 4, 8, 16, 32]);
        assert_eq!(v, (0..17).collect::<Vec<_>>()[..]);
    }

    #[test]
    fn insert_within_capacity_keeps_buffer() {
        let mut v = Vector::with_capacity(8);
        v.extend([1, 2, 3]);
        let before = v.as_ptr();
        v.insert(0, 0);
        v.insert(2, 15);
        v.insert(5, 4);
        assert_eq!(v, [0, 1, 15, 2, 3, 4]);
        assert_eq!(v.as_ptr(), before);
        assert_eq!(v.capacity(), 8);
    }

    #[test]
    fn insert_when_full_grows_around_new_value() {
        let mut v = vector![1, 2, 3, 4];
        assert_eq!(v.capacity(), 4);
        v.insert(2, 100);
        assert_eq!(v, [1, 2, 100, 3, 4]);
        assert_eq!(v.capacity(), 8);
    }

    #[test]
    #[should_panic(expected = "insertion index (is 3) should be <= len (is 2)")]
    fn insert_past_end_panics() {
        let mut v = vector![1, 2];
        v.insert(3, 0);
    }

    #[test]
    fn pop_on_empty_is_noop() {
        let mut v: Vector<i32> = Vector::with_capacity(3);
        assert_eq!(v.pop(), None);
        v.push(5);
        assert_eq!(v.pop(), Some(5));
        assert_eq!(v.pop(), None);
        assert_eq!(v.capacity(), 3);
    }

    #[test]
    fn erase_shifts_left_and_ignores_end() {
        let mut v = vector!['a', 'b', 'c', 'd'];
        assert_eq!(v.erase(4), None);
        assert_eq!(v.erase(100), None);
        assert_eq!(v.len(), 4);
        assert_eq!(v.erase(1), Some('b'));
        assert_eq!(v, ['a', 'c', 'd']);
        assert_eq!(v.erase(2), Some('d'));
        assert_eq!(v, ['a', 'c']);
        assert_eq!(v.capacity(), 4);
    }

    #[test]
    fn reserve_never_shrinks() {
        let mut v = vector![1, 2, 3];
        v.reserve(2);
        assert_eq!(v.capacity(), 3);
        v.reserve(3);
        assert_eq!(v.capacity(), 3);
        v.reserve(7);
        assert_eq!(v.capacity(), 7);
        assert_eq!(v, [1, 2, 3]);
    }

    #[test]
    fn try_reserve_leaves_vector_unchanged_on_error() {
        let mut v = vector![1u32, 2, 3];
        assert_eq!(v.try_reserve(usize::MAX / 2), Err(Error::CapacityOverflow));
        assert_eq!(v, [1, 2, 3]);
        assert_eq!(v.capacity(), 3);
        assert_eq!(v.try_reserve(6), Ok(()));
        assert_eq!(v.capacity(), 6);
    }

    #[test]
    fn resize_regimes() {
        let mut v = vector![1, 2, 3, 4];
        v.resize(2);
        assert_eq!(v, [1, 2]);
        assert_eq!(v.capacity(), 4);
        v.resize(4);
        assert_eq!(v, [1, 2, 0, 0]);
        assert_eq!(v.capacity(), 4);
        v.resize(5);
        assert_eq!(v, [1, 2, 0, 0, 0]);
        assert_eq!(v.capacity(), 8);
        v.resize(20);
        assert_eq!(v.len(), 20);
        assert_eq!(v.capacity(), 20);
    }

    #[test]
    fn resize_with_calls_closure_per_new_slot() {
        let mut next = 0;
        let mut v: Vector<i32> = Vector::new();
        v.resize_with(3, || {
            next += 1;
            next
        });
        assert_eq!(v, [1, 2, 3]);
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut v = vector![String::from("x"); 6];
        v.clear();
        assert!(v.is_empty());
        assert_eq!(v.capacity(), 6);
        v.push(String::from("y"));
        assert_eq!(v, ["y"]);
    }

    #[test]
    fn checked_access() {
        let mut v = vector![10, 20, 30];
        assert_eq!(v.at(0), Ok(&10));
        *v.at_mut(2).unwrap() += 1;
        assert_eq!(v[2], 31);
        for index in 3..10 {
            assert_eq!(v.at(index), Err(Error::OutOfRange { index, len: 3 }));
            assert_eq!(v.at_mut(index), Err(Error::OutOfRange { index, len: 3 }));
        }
        assert_eq!(unsafe { *v.get_unchecked(1) }, 20);
        unsafe { *v.get_unchecked_mut(1) = 21 };
        assert_eq!(v, [10, 21, 31]);
    }

    #[test]
    fn clone_is_deep_and_tight() {
        let mut a = Vector::with_capacity(10);
        a.extend_from_slice(&[String::from("p"), String::from("q")]);
        let mut b = a.clone();
        assert_eq!(a, b);
        assert_eq!(b.capacity(), 2);
        b[0].push('!');
        b.push(String::from("r"));
        assert_eq!(a, ["p", "q"]);
        assert_eq!(b, ["p!", "q", "r"]);
    }

    #[test]
    fn clone_from_replaces_contents() {
        let drops = Rc::new(Cell::new(0));
        let source = counters(2, &drops);
        let mut target = counters(5, &drops);
        target.clone_from(&source);
        assert_eq!(drops.get(), 5);
        assert_eq!(target.len(), 2);
        assert_eq!(target.capacity(), 2);
    }

    #[test]
    fn take_leaves_source_empty() {
        let mut a = vector![1, 2, 3];
        let b = core::mem::take(&mut a);
        assert_eq!(b, [1, 2, 3]);
        assert_eq!((a.len(), a.capacity()), (0, 0));
    }

    #[test]
    fn swap_with_exchanges_everything() {
        let mut a = vector![1, 2, 3];
        let mut b = Vector::with_capacity(9);
        b.push(7);
        a.swap_with(&mut b);
        assert_eq!((a.len(), a.capacity()), (1, 9));
        assert_eq!((b.len(), b.capacity()), (3, 3));
        assert_eq!(a, [7]);
        assert_eq!(b, [1, 2, 3]);
        b.swap(0, 2);
        assert_eq!(b, [3, 2, 1]);
    }

    #[test]
    fn comparisons_are_lexicographic() {
        assert!(vector![1, 2] < vector![1, 2, 3]);
        assert!(vector![1, 3] > vector![1, 2, 9]);
        assert!(vector![1, 2] <= vector![1, 2]);
        assert!(vector![1, 2] >= vector![1, 2]);
        assert_ne!(vector![1, 2], vector![1, 2, 3]);
        let empty: Vector<i32> = vector![];
        assert!(empty < vector![0]);
        assert_eq!(vector![2, 0].cmp(&vector![1, 9, 9]), Ordering::Greater);
    }

    #[test]
    fn iteration() {
        let mut v = vector![1, 2, 3];
        for x in &mut v {
            *x *= 2;
        }
        assert_eq!((&v).into_iter().sum::<i32>(), 12);
        let range = v.as_ptr_range();
        assert_eq!(unsafe { range.end.offset_from(range.start) }, 3);
        assert_eq!(v.iter().rev().copied().collect::<Vec<_>>(), [6, 4, 2]);
        assert_eq!(v.into_vec(), [2, 4, 6]);
    }

    #[test]
    fn conversions() {
        let v: Vector<i32> = (1..=4).collect();
        assert_eq!(v, [1, 2, 3, 4]);
        let w = Vector::from(alloc::vec![5, 6]);
        assert_eq!((w.len(), w.capacity()), (2, 2));
        let back: Vec<i32> = w.into();
        assert_eq!(back, [5, 6]);
        let s = Vector::from(&["a", "b"][..]);
        assert_eq!(s, ["a", "b"]);
        let c = Vector::copy_from_slice(&[1u8, 2]);
        assert_eq!(c, [1, 2]);
        let mut e = vector![1];
        e.extend(&[2, 3]);
        assert_eq!(e, [1, 2, 3]);
    }

    #[test]
    fn debug_formats_as_list() {
        let v = vector![1, 2];
        assert_eq!(alloc::format!("{:?}", v), "[1, 2]");
        let mut iter = v.into_iter();
        iter.next();
        assert_eq!(alloc::format!("{:?}", iter), "IntoIter([2])");
    }

    #[test]
    fn every_element_dropped_exactly_once() {
        let drops = Rc::new(Cell::new(0));
        {
            let mut v = counters(10, &drops);
            drop(v.pop());
            assert_eq!(drops.get(), 1);
            drop(v.erase(0));
            assert_eq!(drops.get(), 2);
            v.truncate(6);
            assert_eq!(drops.get(), 4);
            v.resize(3);
            assert_eq!(drops.get(), 7);
            v.push(DropCounter(drops.clone()));
            v.insert(0, DropCounter(drops.clone()));
            assert_eq!(drops.get(), 7);
            v.clear();
            assert_eq!(drops.get(), 12);
            v.extend(counters(3, &drops));
            assert_eq!(drops.get(), 12);
        }
        assert_eq!(drops.get(), 15);

        let mut iter = counters(4, &drops).into_iter();
        drop(iter.next());
        drop(iter);
        assert_eq!(drops.get(), 19);
    }

    #[test]
    fn zero_sized_elements() {
        let mut v = Vector::new();
        for _ in 0..100 {
            v.push(());
        }
        v.insert(50, ());
        assert_eq!(v.len(), 101);
        assert_eq!(v.erase(0), Some(()));
        assert_eq!(v.into_iter().count(), 100);
    }

    #[test]
    fn strings_survive_relocation() {
        let mut v: Vector<String> = Vector::new();
        for i in 0..50 {
            v.insert(i / 2, i.to_string());
        }
        let mut expected: Vec<String> = Vec::new();
        for i in 0..50 {
            expected.insert(i / 2, i.to_string());
        }
        assert_eq!(v, expected[..]);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        #[derive(Clone, Debug)]
        enum Op {
            Push(i32),
            Insert(usize, i32),
            Pop,
            Erase(usize),
            Reserve(usize),
            Resize(usize),
            Clear,
        }

        fn op() -> impl Strategy<Value = Op> {
            prop_oneof![
                any::<i32>().prop_map(Op::Push),
                (0usize..64, any::<i32>()).prop_map(|(i, x)| Op::Insert(i, x)),
                Just(Op::Pop),
                (0usize..64).prop_map(Op::Erase),
                (0usize..128).prop_map(Op::Reserve),
                (0usize..64).prop_map(Op::Resize),
                Just(Op::Clear),
            ]
        }

        proptest! {
            #[test]
            fn matches_std_vec_model(ops in proptest::collection::vec(op(), 0..200)) {
                let mut v: Vector<i32> = Vector::new();
                let mut model: Vec<i32> = Vec::new();
                for op in ops {
                    let capacity = v.capacity();
                    match op {
                        Op::Push(x) => {
                            v.push(x);
                            model.push(x);
                        }
                        Op::Insert(i, x) => {
                            let i = i % (model.len() + 1);
                            v.insert(i, x);
                            model.insert(i, x);
                        }
                        Op::Pop => prop_assert_eq!(v.pop(), model.pop()),
                        Op::Erase(i) => {
                            let expected = if i < model.len() { Some(model.remove(i)) } else { None };
                            prop_assert_eq!(v.erase(i), expected);
                        }
                        Op::Reserve(n) => {
                            v.reserve(n);
                            prop_assert_eq!(v.capacity(), core::cmp::max(n, capacity));
                        }
                        Op::Resize(n) => {
                            v.resize(n);
                            model.resize(n, 0);
                        }
                        Op::Clear => {
                            v.clear();
                            model.clear();
                            prop_assert_eq!(v.capacity(), capacity);
                        }
                    }
                    prop_assert!(v.len() <= v.capacity());
                    prop_assert!(v.capacity() >= capacity);
                    prop_assert_eq!(v.as_slice(), &model[..]);
                }
            }

            #[test]
            fn push_reallocates_logarithmically(n in 1usize..5000) {
                let mut v = Vector::new();
                let mut reallocations = 0u32;
                for i in 0..n {
                    let capacity = v.capacity();
                    v.push(i);
                    if v.capacity() != capacity {
                        prop_assert!(v.capacity() >= 2 * capacity);
                        reallocations += 1;
                    }
                }
                prop_assert_eq!(v.len(), n);
                let bound = usize::BITS - (n - 1).leading_zeros() + 1;
                prop_assert!(reallocations <= bound);
            }

            #[test]
            fn insert_shifts_suffix(
                items in proptest::collection::vec(any::<u16>(), 0..40),
                at in any::<prop::sample::Index>(),
                value in any::<u16>(),
            ) {
                let i = at.index(items.len() + 1);
                let mut v = Vector::from(&items[..]);
                v.insert(i, value);
                prop_assert_eq!(v.len(), items.len() + 1);
                prop_assert_eq!(&v[..i], &items[..i]);
                prop_assert_eq!(v[i], value);
                prop_assert_eq!(&v[i + 1..], &items[i..]);
            }

            #[test]
            fn erase_shifts_suffix(
                items in proptest::collection::vec(any::<u16>(), 1..40),
                at in any::<prop::sample::Index>(),
            ) {
                let i = at.index(items.len());
                let mut v = Vector::from(&items[..]);
                prop_assert_eq!(v.erase(i), Some(items[i]));
                prop_assert_eq!(&v[..i], &items[..i]);
                prop_assert_eq!(&v[i..], &items[i + 1..]);
                prop_assert_eq!(v.erase(v.len()), None);
                prop_assert_eq!(v.len(), items.len() - 1);
            }

            #[test]
            fn regrowth_within_capacity_restores_defaults(
                items in proptest::collection::vec(1u8..=u8::MAX, 1..40),
                k in any::<prop::sample::Index>(),
            ) {
                let n = items.len();
                let k = k.index(n);
                let mut v = Vector::from(&items[..]);
                v.resize(k);
                v.resize(n);
                prop_assert_eq!(v.capacity(), n);
                prop_assert_eq!(&v[..k], &items[..k]);
                prop_assert!(v[k..].iter().all(|&x| x == 0));
            }

            #[test]
            fn clone_is_independent(items in proptest::collection::vec(any::<i64>(), 0..40), x in any::<i64>()) {
                let a = Vector::from(&items[..]);
                let mut b = a.clone();
                prop_assert_eq!(&a, &b);
                b.push(x);
                if let Some(first) = b.first_mut() {
                    *first = first.wrapping_add(1);
                }
                prop_assert_eq!(a.as_slice(), &items[..]);
            }

            #[test]
            fn at_rejects_every_index_past_len(
                items in proptest::collection::vec(any::<i8>(), 0..20),
                extra in 0usize..20,
            ) {
                let v = Vector::from(&items[..]);
                for (index, item) in items.iter().enumerate() {
                    prop_assert_eq!(v.at(index), Ok(item));
                }
                let len = items.len();
                for index in len..=len + extra {
                    prop_assert_eq!(v.at(index), Err(Error::OutOfRange { index, len }));
                }
            }

            #[test]
            fn ordering_matches_slices(
                a in proptest::collection::vec(0u8..4, 0..6),
                b in proptest::collection::vec(0u8..4, 0..6),
            ) {
                let va = Vector::from(&a[..]);
                let vb = Vector::from(&b[..]);
                prop_assert_eq!(va.cmp(&vb), a.cmp(&b));
                prop_assert_eq!(va == vb, a == b);
                prop_assert_eq!(va < vb, a < b);
                prop_assert_eq!(va <= vb, !(vb < va));
                prop_assert_eq!(va > vb, vb < va);
                prop_assert_eq!(va >= vb, !(va < vb));
            }
        }
    }
}
