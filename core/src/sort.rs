//! Ordering engine.
//!
//! Every variant funnels into one stable buffer sort. In-place variants hand
//! it the caller's buffer; `sorted*` variants copy the input into a fresh
//! `Vec` first, so their input is never touched.
//!
//! Natural order comes from [`NaturalOrd`]: NaN sorts after every other
//! value, and `-0.0` and `0.0` are equal (their relative order is kept).

use alloc::{format, vec::Vec};
use core::cmp::Ordering;

use crate::{
    access::SeqView,
    error::{Result, SeqError},
    ordering::{NaturalOrd, compare_by, compare_by_descending},
};

// ============================================================================
// Buffer Core
// ============================================================================

fn sort_buffer<T, C>(buf: &mut [T], mut comparator: C)
where
    C: FnMut(&T, &T) -> Ordering,
{
    if buf.len() < 2 {
        return;
    }
    buf.sort_by(|a, b| comparator(a, b));
}

fn sorted_copy<S, C>(seq: &S, comparator: C) -> Vec<S::Elem>
where
    S: SeqView + ?Sized,
    S::Elem: Clone,
    C: FnMut(&S::Elem, &S::Elem) -> Ordering,
{
    let mut out = seq.as_slice().to_vec();
    sort_buffer(&mut out, comparator);
    out
}

// ============================================================================
// In-place
// ============================================================================

/// Sorts `buf` ascending in its natural order.
///
/// # Examples
/// - `[3, 1, 2]` → `[1, 2, 3]`
/// - `[2.0, NaN, 1.0]` → `[1.0, 2.0, NaN]`
pub fn sort<T: PartialOrd>(buf: &mut [T]) {
    sort_buffer(buf, T::natural_cmp);
}

pub fn sort_descending<T: PartialOrd>(buf: &mut [T]) {
    sort_buffer(buf, |a: &T, b: &T| b.natural_cmp(a));
}

/// Sorts `buf` with a caller-supplied comparator. Stable.
pub fn sort_with<T, C>(buf: &mut [T], comparator: C)
where
    C: FnMut(&T, &T) -> Ordering,
{
    sort_buffer(buf, comparator);
}

pub fn sort_by<T, K, F>(buf: &mut [T], selector: F)
where
    K: PartialOrd,
    F: FnMut(&T) -> K,
{
    sort_buffer(buf, compare_by(selector));
}

/// Sorts by descending key. Elements with equal keys keep their order.
pub fn sort_by_descending<T, K, F>(buf: &mut [T], selector: F)
where
    K: PartialOrd,
    F: FnMut(&T) -> K,
{
    sort_buffer(buf, compare_by_descending(selector));
}

// ============================================================================
// Range
// ============================================================================

fn check_range(op: &'static str, len: usize, from: usize, to: usize) -> Result<()> {
    if from > to {
        return Err(SeqError::invalid_argument(
            op,
            format!("from index {from} is greater than to index {to}"),
        ));
    }
    if to > len {
        return Err(SeqError::index_out_of_range(op, to, len));
    }
    Ok(())
}

/// Sorts only the half-open range `[from, to)` of `buf`.
///
/// # Edge Cases
///
/// - `from > to`: `InvalidArgument`
/// - `to > buf.len()`: `IndexOutOfRange`
/// - `from == to`: nothing moves
pub fn sort_range<T: PartialOrd>(buf: &mut [T], from: usize, to: usize) -> Result<()> {
    sort_range_with(buf, from, to, T::natural_cmp)
}

pub fn sort_range_descending<T: PartialOrd>(buf: &mut [T], from: usize, to: usize) -> Result<()> {
    sort_range_with(buf, from, to, |a: &T, b: &T| b.natural_cmp(a))
}

pub fn sort_range_with<T, C>(buf: &mut [T], from: usize, to: usize, comparator: C) -> Result<()>
where
    C: FnMut(&T, &T) -> Ordering,
{
    check_range("sort_range", buf.len(), from, to)?;
    sort_buffer(&mut buf[from..to], comparator);
    Ok(())
}

// ============================================================================
// Copying
// ============================================================================

/// Sorted copy of `seq` in natural order.
pub fn sorted<S>(seq: &S) -> Vec<S::Elem>
where
    S: SeqView + ?Sized,
    S::Elem: Clone + PartialOrd,
{
    sorted_copy(seq, <S::Elem as NaturalOrd>::natural_cmp)
}

pub fn sorted_descending<S>(seq: &S) -> Vec<S::Elem>
where
    S: SeqView + ?Sized,
    S::Elem: Clone + PartialOrd,
{
    sorted_copy(seq, |a: &S::Elem, b: &S::Elem| b.natural_cmp(a))
}

/// Sorted copy under `comparator`. Tied elements keep their input order.
///
/// # Examples
/// - `sorted_with([(1, "a"), (1, "b"), (0, "c")], by .0)` → `[(0, "c"), (1, "a"), (1, "b")]`
pub fn sorted_with<S, C>(seq: &S, comparator: C) -> Vec<S::Elem>
where
    S: SeqView + ?Sized,
    S::Elem: Clone,
    C: FnMut(&S::Elem, &S::Elem) -> Ordering,
{
    sorted_copy(seq, comparator)
}

pub fn sorted_by<S, K, F>(seq: &S, selector: F) -> Vec<S::Elem>
where
    S: SeqView + ?Sized,
    S::Elem: Clone,
    K: PartialOrd,
    F: FnMut(&S::Elem) -> K,
{
    sorted_copy(seq, compare_by(selector))
}

pub fn sorted_by_descending<S, K, F>(seq: &S, selector: F) -> Vec<S::Elem>
where
    S: SeqView + ?Sized,
    S::Elem: Clone,
    K: PartialOrd,
    F: FnMut(&S::Elem) -> K,
{
    sorted_copy(seq, compare_by_descending(selector))
}

#[cfg(test)]
#[path = "sort_test.rs"]
mod sort_test;
