#![doc = crate::doc_macro::make_svgbobdoc!(
//! # `simplevec`
//! A growable array built from two explicit layers: a single-owner heap block and a vector on
//! top of it.
//!
//! 1. [Summary](#summary)
//! 1. [Examples](#examples)
//! 1. [Overview of types](#overview-of-types)
//! 1. [Logging](#logging)
//! 1. [Feature flags](#feature-flags)
//!
//! # Summary
//!
//! [`Vector<T>`] is a contiguous, growable sequence with value semantics: cloning deep-copies,
//! moving transfers the buffer, and `mem::take` leaves an empty vector behind. Its storage is an
//! [`ArrayPtr<T>`], which owns exactly one fixed-size allocation and never resizes. Every
//! growth replaces the `ArrayPtr` as a whole:
//!
//! ```svgbob
//! "Vector<u32>"
//! +------------------------+-------------+
//! | "items: ArrayPtr<u32>" | "size: 3"   |
//! +------------------------+-------------+
//!     |
//!     |  "capacity 4"
//!     |  +-----+-----+-----+-------+
//!     '->| "7" | "8" | "9" | "?"   |
//!        +-----+-----+-----+-------+
//!        |<---- "live" --->|"spare"|
//! ```
//!
//! When an insertion finds the buffer full, a new buffer of `max(len + 1, 2 * capacity)` slots
//! is allocated, the elements are moved over, and the old block is freed. `n` pushes onto an
//! empty vector therefore reallocate at most `ceil(log2(n)) + 1` times.
//!
//! # Examples
//!
//! ```
//! use simplevec::prelude::*;
//!
//! let mut v: Vector<i32> = Vector::from(reserve(2));
//! v.push(1);
//! v.push(2);
//! v.push(3);
//! v.insert(1, 99);
//! assert_eq!(v, [1, 99, 2, 3]);
//!
//! assert_eq!(v.erase(0), Some(1));
//! v.resize(5);
//! assert_eq!(v, [99, 2, 3, 0, 0]);
//!
//! assert_eq!(v.at(10), Err(Error::OutOfRange { index: 10, len: 5 }));
//! assert!(vector![1, 2] < vector![1, 2, 3]);
//! ```
//!
//! # Overview of types
//!
//! * [`ArrayPtr<T>`]: exclusive owner of one heap block of `T` slots. Not clonable. Frees the
//!   block on drop without running element destructors.
//! * [`Vector<T>`]: the growable array. Dereferences to `[T]`, so every slice method applies.
//! * [`CapacityHint`], made by [`reserve`]: selects the constructor that allocates without
//!   filling.
//! * [`SlotInitializer<T>`](init::SlotInitializer): writes a run of new elements. Used by every
//!   constructor and by [`Vector::extend_with`].
//! * [`Error`]: returned by checked access ([`Vector::at`]) and fallible allocation
//!   ([`Vector::try_reserve`]).
//!
//! # Logging
//!
//! This crate logs through the [`log`](https://docs.rs/log) facade and installs no logger.
//! Every buffer reallocation emits a `trace!` record naming the element type and the old and
//! new capacities. A failed fallible allocation emits a `debug!` record.
//!
//! # Feature flags
//!
//! * `doc`. Renders the diagrams in this documentation. Adds a dependency on `svgbobdoc`.
//!
)]
#![no_std]
extern crate alloc;

#[cfg(any(test, doc))]
extern crate std;

pub mod array_ptr;
pub mod error;
pub mod growth;
pub mod hint;
pub mod init;
pub mod prelude;
pub mod vector;

mod doc_macro;

pub use array_ptr::ArrayPtr;
pub use error::{Error, Result};
pub use hint::{reserve, CapacityHint};
pub use vector::Vector;
