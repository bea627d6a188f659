#![warn(missing_docs)]
#![warn(rustdoc::missing_doc_code_examples)]
#![doc = crate::doc_macro::make_svgbobdoc!(
    //! Single-owner handle to one fixed-size heap allocation.
    //!
    //! An [`ArrayPtr<T>`] owns a block of `len` slots of `T`, obtained from one call to the global
    //! allocator. It never grows or shrinks: all resizing logic lives one level up, in
    //! [`Vector<T>`](crate::Vector), which replaces the whole buffer when it needs more room.
    //!
    //! ```svgbob
    //! "ArrayPtr<u32>"
    //! +----------+-------------+
    //! | ptr      | "len: 4"    |
    //! +----------+-------------+
    //!      |
    //!      |   "heap block"
    //!      |   +------+------+------+------+
    //!      '-> | "?"  | "?"  | "?"  | "?"  |
    //!          +------+------+------+------+
    //! ```
    //!
    //! The slots are treated as uninitialized memory. Dropping an `ArrayPtr` frees the block but
    //! never runs the destructors of values written into it; tracking which slots are live is the
    //! owner's job.
    //!
    //! # Examples
    //!
    //! ```
    //! use simplevec::array_ptr::ArrayPtr;
    //!
    //! let mut buf: ArrayPtr<u32> = ArrayPtr::new(4);
    //! assert!(buf.is_allocated());
    //! unsafe {
    //!     buf.write(0, 7);
    //!     assert_eq!(*buf.get_unchecked(0), 7);
    //! }
    //! ```
)]

use crate::error::{Error, Result};
use alloc::alloc::{alloc, dealloc, handle_alloc_error, Layout};
use core::marker::PhantomData;
use core::mem::MaybeUninit;
use core::ptr::NonNull;

/// Exclusive owner of one heap block of `len` slots of `T`.
///
/// `ArrayPtr` is not `Clone`: a block has exactly one owner. Ownership moves with
/// the value; [`ArrayPtr::take`] leaves an empty `ArrayPtr` behind, whose drop is a no-op.
///
/// ```compile_fail,E0599
/// use simplevec::array_ptr::ArrayPtr;
///
/// let a: ArrayPtr<u8> = ArrayPtr::new(16);
/// let b = a.clone();
/// ```
///
/// # Examples
///
/// Moving ownership out and leaving the source empty:
///
/// ```
/// use simplevec::array_ptr::ArrayPtr;
///
/// let mut a: ArrayPtr<u8> = ArrayPtr::new(16);
/// let b = core::mem::take(&mut a);
/// assert!(!a.is_allocated());
/// assert_eq!(b.len(), 16);
/// ```
pub struct ArrayPtr<T> {
    ptr: NonNull<T>,
    len: usize,
    _marker: PhantomData<T>,
}

// Safety: ArrayPtr owns its block uniquely, like Box<[T]>.
unsafe impl<T: Send> Send for ArrayPtr<T> {}
unsafe impl<T: Sync> Sync for ArrayPtr<T> {}

#[inline(never)]
#[cold]
fn capacity_overflow() -> ! {
    panic!("capacity overflow")
}

#[inline]
fn array_layout<T>(len: usize) -> Result<Layout> {
    Layout::array::<T>(len).map_err(|_| Error::CapacityOverflow)
}

impl<T> ArrayPtr<T> {
    /// Creates an `ArrayPtr` that holds no block.
    ///
    /// # Examples
    ///
    /// ```
    /// use simplevec::array_ptr::ArrayPtr;
    /// let buf: ArrayPtr<String> = ArrayPtr::empty();
    /// assert!(!buf.is_allocated());
    /// ```
    #[inline]
    pub const fn empty() -> Self {
        ArrayPtr {
            ptr: NonNull::dangling(),
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Allocates a block for exactly `len` slots. Holds no block if `len == 0`.
    ///
    /// # Panics
    ///
    /// Panics if the block would exceed `isize::MAX` bytes. Allocator failure is reported through
    /// [`handle_alloc_error`].
    ///
    /// # Examples
    ///
    /// ```
    /// use simplevec::array_ptr::ArrayPtr;
    /// let buf: ArrayPtr<u64> = ArrayPtr::new(8);
    /// assert_eq!(buf.len(), 8);
    /// ```
    pub fn new(len: usize) -> Self {
        let layout = array_layout::<T>(len).unwrap_or_else(|_| capacity_overflow());
        match Self::allocate(layout) {
            Some(ptr) => ArrayPtr {
                ptr,
                len,
                _marker: PhantomData,
            },
            None => handle_alloc_error(layout),
        }
    }

    /// Like [`ArrayPtr::new`], but reports failure instead of panicking or aborting.
    ///
    /// # Examples
    ///
    /// ```
    /// use simplevec::array_ptr::ArrayPtr;
    /// use simplevec::Error;
    ///
    /// assert!(ArrayPtr::<u32>::try_new(4).is_ok());
    /// assert_eq!(ArrayPtr::<u32>::try_new(usize::MAX).err(), Some(Error::CapacityOverflow));
    /// ```
    pub fn try_new(len: usize) -> Result<Self> {
        let layout = array_layout::<T>(len)?;
        match Self::allocate(layout) {
            Some(ptr) => Ok(ArrayPtr {
                ptr,
                len,
                _marker: PhantomData,
            }),
            None => {
                log::debug!(
                    "allocation of {} slots of {} ({} bytes) failed",
                    len,
                    core::any::type_name::<T>(),
                    layout.size()
                );
                Err(Error::AllocFailed {
                    size: layout.size(),
                    align: layout.align(),
                })
            }
        }
    }

    fn allocate(layout: Layout) -> Option<NonNull<T>> {
        if layout.size() == 0 {
            return Some(NonNull::dangling());
        }
        // Safety: layout has non-zero size.
        NonNull::new(unsafe { alloc(layout) }.cast::<T>())
    }

    /// Adopts a block allocated elsewhere.
    ///
    /// # Safety
    ///
    /// `ptr` must have been allocated by the global allocator with the layout of `[T; len]`
    /// (or be dangling if that layout has size zero), and must not be owned by anything else.
    /// The canonical source is [`ArrayPtr::release`].
    ///
    /// # Example
    ///
    /// Safe roundtripping through a raw pointer:
    ///
    /// ```
    /// use simplevec::array_ptr::ArrayPtr;
    ///
    /// let mut a: ArrayPtr<u16> = ArrayPtr::new(3);
    /// let (ptr, len) = a.release();
    /// let b = unsafe { ArrayPtr::from_raw_parts(ptr, len) };
    /// assert_eq!(b.len(), 3);
    /// ```
    #[inline]
    pub unsafe fn from_raw_parts(ptr: NonNull<T>, len: usize) -> Self {
        ArrayPtr {
            ptr,
            len,
            _marker: PhantomData,
        }
    }

    /// Gives up ownership of the block without freeing it, leaving `self` empty.
    ///
    /// The caller becomes responsible for the block, typically by handing it back to
    /// [`ArrayPtr::from_raw_parts`].
    #[must_use = "the released block leaks unless it is handed back to `ArrayPtr::from_raw_parts`"]
    #[inline]
    pub fn release(&mut self) -> (NonNull<T>, usize) {
        let ptr = core::mem::replace(&mut self.ptr, NonNull::dangling());
        let len = core::mem::replace(&mut self.len, 0);
        (ptr, len)
    }

    /// Number of slots in the block.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// True iff there are no slots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True iff a heap block is currently held.
    ///
    /// Zero-sized `T` never needs a block, so slots of such a type report `false` here even
    /// when [`ArrayPtr::len`] is non-zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use simplevec::array_ptr::ArrayPtr;
    /// assert!(ArrayPtr::<u8>::new(1).is_allocated());
    /// assert!(!ArrayPtr::<u8>::new(0).is_allocated());
    /// assert!(!ArrayPtr::<()>::new(3).is_allocated());
    /// ```
    #[inline]
    pub fn is_allocated(&self) -> bool {
        self.len != 0 && core::mem::size_of::<T>() != 0
    }

    /// Raw pointer to the first slot.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    /// Mutable raw pointer to the first slot.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// All slots, as uninitialized memory.
    #[inline]
    pub fn as_uninit_slice_mut(&mut self) -> &mut [MaybeUninit<T>] {
        // Safety: the block holds `len` slots and MaybeUninit<T> has T's layout.
        unsafe { core::slice::from_raw_parts_mut(self.ptr.as_ptr().cast(), self.len) }
    }

    /// Reference to slot `index`, without bounds checking.
    ///
    /// # Safety
    ///
    /// `index < self.len()`, and the slot holds an initialized value.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len);
        &*self.ptr.as_ptr().add(index)
    }

    /// Mutable reference to slot `index`, without bounds checking.
    ///
    /// # Safety
    ///
    /// `index < self.len()`, and the slot holds an initialized value.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len);
        &mut *self.ptr.as_ptr().add(index)
    }

    /// Moves the value out of slot `index`, leaving the slot logically uninitialized.
    ///
    /// # Safety
    ///
    /// `index < self.len()`, the slot holds an initialized value, and the caller treats the
    /// slot as uninitialized afterwards.
    #[inline]
    pub unsafe fn read(&self, index: usize) -> T {
        debug_assert!(index < self.len);
        core::ptr::read(self.ptr.as_ptr().add(index))
    }

    /// Writes `value` into slot `index` without dropping the previous contents.
    ///
    /// # Safety
    ///
    /// `index < self.len()`. Any value previously in the slot is leaked, not dropped.
    #[inline]
    pub unsafe fn write(&mut self, index: usize, value: T) {
        debug_assert!(index < self.len);
        core::ptr::write(self.ptr.as_ptr().add(index), value)
    }

    /// Moves the block out, leaving `self` empty. Same as [`core::mem::take`].
    ///
    /// # Examples
    ///
    /// ```
    /// use simplevec::array_ptr::ArrayPtr;
    /// let mut a: ArrayPtr<u32> = ArrayPtr::new(2);
    /// let b = a.take();
    /// assert_eq!((a.len(), b.len()), (0, 2));
    /// ```
    #[inline]
    pub fn take(&mut self) -> Self {
        core::mem::take(self)
    }

    /// Exchanges the blocks held by `self` and `other`. Never allocates.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other)
    }
}

impl<T> Drop for ArrayPtr<T> {
    fn drop(&mut self) {
        let size = core::mem::size_of::<T>() * self.len;
        if size == 0 {
            return;
        }
        unsafe {
            // Safety: the block was allocated with exactly this layout, and drop runs once.
            let layout = Layout::from_size_align_unchecked(size, core::mem::align_of::<T>());
            dealloc(self.ptr.as_ptr().cast::<u8>(), layout);
        }
    }
}

impl<T> Default for ArrayPtr<T> {
    #[inline]
    fn default() -> Self {
        ArrayPtr::empty()
    }
}

impl<T> core::fmt::Debug for ArrayPtr<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ArrayPtr")
            .field("ptr", &self.ptr)
            .field("len", &self.len)
            .finish()
    }
}
