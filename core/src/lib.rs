#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

//! Generic sequence algorithms shared by every element kind.
//!
//! Each algorithm is written once against [`SeqView`] and works for slices,
//! arrays, vectors, small vectors and absent (`Option`) sequences alike.
//! Element-kind differences are handled by two small seams:
//!
//! - [`NaturalOrd`] for ordering, where NaN is absorbing
//! - [`Numeric`] for zero values and widening sums
//!
//! Leading-element removal is [`window::drop`]. It is not re-exported at the
//! root, where it would shadow the prelude's `drop`.

// Needed so that doc examples and tests can uniformly refer to `::seqkit_core`.
extern crate self as seqkit_core;

// This works on std and no_std and is harmless.
extern crate alloc;

pub mod access;
pub mod aggregate;
pub mod convert;
pub mod error;
pub mod group;
pub mod numeric;
pub mod ordered;
pub mod ordering;
pub mod pairing;
pub mod search;
pub mod sort;
pub mod transform;
pub mod window;

pub use access::SeqView;
pub use aggregate::*;
pub use convert::*;
pub use error::{ErrorKind, Result, SeqError};
pub use group::*;
pub use numeric::Numeric;
pub use ordered::{OrderedMap, OrderedSet};
pub use ordering::{
    NaturalOrd, compare_by, compare_by_descending, natural_order, reverse_comparator,
    reverse_order, then_by,
};
pub use pairing::*;
pub use search::*;
pub use sort::*;
pub use transform::*;
// `window::drop` stays behind its module so a glob import of the crate
// leaves the prelude `drop` alone.
pub use window::{
    ElementCount, chunked, chunked_with, drop_last, drop_last_while, drop_while, slice, take,
    take_last, take_last_while, take_while, windowed, windowed_with,
};
