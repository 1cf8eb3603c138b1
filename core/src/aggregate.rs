//! Aggregation over sequences: reduce, fold, sums, predicates and extremes.
//!
//! All functions make a single pass. `reduce*` has no identity and fails on
//! empty input; `fold*`, `sum*` and `count*` start from an identity and are
//! total. Right-hand variants walk from the last element to the first.

use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::{
    access::SeqView,
    error::{Result, SeqError},
    numeric::Numeric,
    ordering::{comparator_extreme, keyed_extreme, natural_extreme, natural_extreme_of},
};

// ============================================================================
// Reduce
// ============================================================================

/// Accumulates from the first element, left to right.
///
/// # Edge Cases
///
/// - Empty (or absent) input: `EmptyInput`
/// - Single element: returned unchanged, `op` is never called
///
/// # Examples
/// - `reduce([1, 2, 3], +)` → `6`
/// - `reduce([], +)` → `EmptyInput`
pub fn reduce<S, F>(seq: &S, op: F) -> Result<S::Elem>
where
    S: SeqView + ?Sized,
    S::Elem: Clone,
    F: FnMut(S::Elem, &S::Elem) -> S::Elem,
{
    reduce_or_null(seq, op)
        .ok_or_else(|| SeqError::empty_input("reduce", "no element to seed the accumulator"))
}

pub fn reduce_or_null<S, F>(seq: &S, mut op: F) -> Option<S::Elem>
where
    S: SeqView + ?Sized,
    S::Elem: Clone,
    F: FnMut(S::Elem, &S::Elem) -> S::Elem,
{
    reduce_indexed_or_null(seq, |_, acc, item| op(acc, item))
}

/// Like [`reduce`], also passing the index of the element being folded in.
pub fn reduce_indexed<S, F>(seq: &S, op: F) -> Result<S::Elem>
where
    S: SeqView + ?Sized,
    S::Elem: Clone,
    F: FnMut(usize, S::Elem, &S::Elem) -> S::Elem,
{
    reduce_indexed_or_null(seq, op)
        .ok_or_else(|| SeqError::empty_input("reduce_indexed", "no element to seed the accumulator"))
}

pub fn reduce_indexed_or_null<S, F>(seq: &S, mut op: F) -> Option<S::Elem>
where
    S: SeqView + ?Sized,
    S::Elem: Clone,
    F: FnMut(usize, S::Elem, &S::Elem) -> S::Elem,
{
    let (first, rest) = seq.as_slice().split_first()?;
    let mut acc = first.clone();
    for (offset, item) in rest.iter().enumerate() {
        acc = op(offset + 1, acc, item);
    }
    Some(acc)
}

/// Accumulates from the last element, right to left: `op(element, acc)`.
///
/// # Examples
/// - `reduce_right(["a", "b", "c"], (x, acc) => acc + x)` → `"cba"`
pub fn reduce_right<S, F>(seq: &S, op: F) -> Result<S::Elem>
where
    S: SeqView + ?Sized,
    S::Elem: Clone,
    F: FnMut(&S::Elem, S::Elem) -> S::Elem,
{
    reduce_right_or_null(seq, op)
        .ok_or_else(|| SeqError::empty_input("reduce_right", "no element to seed the accumulator"))
}

pub fn reduce_right_or_null<S, F>(seq: &S, mut op: F) -> Option<S::Elem>
where
    S: SeqView + ?Sized,
    S::Elem: Clone,
    F: FnMut(&S::Elem, S::Elem) -> S::Elem,
{
    reduce_right_indexed_or_null(seq, |_, item, acc| op(item, acc))
}

pub fn reduce_right_indexed<S, F>(seq: &S, op: F) -> Result<S::Elem>
where
    S: SeqView + ?Sized,
    S::Elem: Clone,
    F: FnMut(usize, &S::Elem, S::Elem) -> S::Elem,
{
    reduce_right_indexed_or_null(seq, op).ok_or_else(|| {
        SeqError::empty_input("reduce_right_indexed", "no element to seed the accumulator")
    })
}

pub fn reduce_right_indexed_or_null<S, F>(seq: &S, mut op: F) -> Option<S::Elem>
where
    S: SeqView + ?Sized,
    S::Elem: Clone,
    F: FnMut(usize, &S::Elem, S::Elem) -> S::Elem,
{
    let (last, rest) = seq.as_slice().split_last()?;
    let mut acc = last.clone();
    for (index, item) in rest.iter().enumerate().rev() {
        acc = op(index, item, acc);
    }
    Some(acc)
}

// ============================================================================
// Fold
// ============================================================================

/// Accumulates left to right starting from `initial`.
///
/// Empty input returns `initial` unchanged.
pub fn fold<S, R, F>(seq: &S, initial: R, mut op: F) -> R
where
    S: SeqView + ?Sized,
    F: FnMut(R, &S::Elem) -> R,
{
    seq.as_slice().iter().fold(initial, |acc, item| op(acc, item))
}

pub fn fold_indexed<S, R, F>(seq: &S, initial: R, mut op: F) -> R
where
    S: SeqView + ?Sized,
    F: FnMut(usize, R, &S::Elem) -> R,
{
    seq.as_slice()
        .iter()
        .enumerate()
        .fold(initial, |acc, (index, item)| op(index, acc, item))
}

/// Accumulates right to left starting from `initial`: `op(element, acc)`.
pub fn fold_right<S, R, F>(seq: &S, initial: R, mut op: F) -> R
where
    S: SeqView + ?Sized,
    F: FnMut(&S::Elem, R) -> R,
{
    seq.as_slice().iter().rev().fold(initial, |acc, item| op(item, acc))
}

pub fn fold_right_indexed<S, R, F>(seq: &S, initial: R, mut op: F) -> R
where
    S: SeqView + ?Sized,
    F: FnMut(usize, &S::Elem, R) -> R,
{
    seq.as_slice()
        .iter()
        .enumerate()
        .rev()
        .fold(initial, |acc, (index, item)| op(index, item, acc))
}

/// Every intermediate accumulator of a left fold, `initial` included.
///
/// # Examples
/// - `running_fold([1, 2, 3], 0, +)` → `[0, 1, 3, 6]`
/// - `running_fold([], 0, +)` → `[0]`
pub fn running_fold<S, R, F>(seq: &S, initial: R, mut op: F) -> Vec<R>
where
    S: SeqView + ?Sized,
    R: Clone,
    F: FnMut(R, &S::Elem) -> R,
{
    let items = seq.as_slice();
    let mut result = Vec::with_capacity(items.len() + 1);
    result.push(initial.clone());
    let mut acc = initial;
    for item in items {
        acc = op(acc, item);
        result.push(acc.clone());
    }
    result
}

/// Every intermediate accumulator of [`reduce`]; empty input gives `[]`.
pub fn running_reduce<S, F>(seq: &S, mut op: F) -> Vec<S::Elem>
where
    S: SeqView + ?Sized,
    S::Elem: Clone,
    F: FnMut(S::Elem, &S::Elem) -> S::Elem,
{
    let items = seq.as_slice();
    let Some((first, rest)) = items.split_first() else {
        return Vec::new();
    };
    let mut result = Vec::with_capacity(items.len());
    let mut acc = first.clone();
    result.push(acc.clone());
    for item in rest {
        acc = op(acc, item);
        result.push(acc.clone());
    }
    result
}

// ============================================================================
// Sums
// ============================================================================

/// Sum of a numeric sequence in the kind's widened sum type.
///
/// Empty input sums to zero.
pub fn sum<S>(seq: &S) -> <S::Elem as Numeric>::Sum
where
    S: SeqView + ?Sized,
    S::Elem: Numeric,
{
    seq.as_slice()
        .iter()
        .fold(<S::Elem as Numeric>::ZERO, |acc, &item| {
            <S::Elem as Numeric>::accumulate(acc, item)
        })
}

/// Sum of the values `selector` produces for each element.
pub fn sum_by<S, N, F>(seq: &S, mut selector: F) -> N::Sum
where
    S: SeqView + ?Sized,
    N: Numeric,
    F: FnMut(&S::Elem) -> N,
{
    seq.as_slice()
        .iter()
        .fold(N::ZERO, |acc, item| N::accumulate(acc, selector(item)))
}

pub fn sum_by_double<S, F>(seq: &S, selector: F) -> f64
where
    S: SeqView + ?Sized,
    F: FnMut(&S::Elem) -> f64,
{
    sum_by(seq, selector)
}

/// Arithmetic mean, accumulated in `f64`.
///
/// # Edge Cases
///
/// - Empty (or absent) input: `NaN`, not an error
pub fn average<S>(seq: &S) -> f64
where
    S: SeqView + ?Sized,
    S::Elem: Numeric,
{
    let items = seq.as_slice();
    if items.is_empty() {
        return f64::NAN;
    }
    let total = items.iter().fold(0.0, |acc, item| acc + item.to_f64());
    total / items.len() as f64
}

// ============================================================================
// Counting and Predicates
// ============================================================================

/// Number of elements matching `predicate`.
pub fn count<S, P>(seq: &S, mut predicate: P) -> usize
where
    S: SeqView + ?Sized,
    P: FnMut(&S::Elem) -> bool,
{
    seq.as_slice().iter().filter(|item| predicate(item)).count()
}

pub fn count_all<S: SeqView + ?Sized>(seq: &S) -> usize {
    seq.len()
}

/// `true` if some element matches. Stops at the first match.
pub fn any<S, P>(seq: &S, predicate: P) -> bool
where
    S: SeqView + ?Sized,
    P: FnMut(&S::Elem) -> bool,
{
    seq.as_slice().iter().any(predicate)
}

/// `true` if every element matches. Stops at the first mismatch.
///
/// # Edge Cases
///
/// - Absent sequence: `false`
/// - Present but empty sequence: `true`
///
/// Unlike [`any`] and [`none`], an absent sequence does not satisfy `all`
/// vacuously.
pub fn all<S, P>(seq: &S, predicate: P) -> bool
where
    S: SeqView + ?Sized,
    P: FnMut(&S::Elem) -> bool,
{
    if seq.is_absent() {
        return false;
    }
    seq.as_slice().iter().all(predicate)
}

/// `true` if no element matches. An absent sequence has no matches.
pub fn none<S, P>(seq: &S, mut predicate: P) -> bool
where
    S: SeqView + ?Sized,
    P: FnMut(&S::Elem) -> bool,
{
    !seq.as_slice().iter().any(|item| predicate(item))
}

// ============================================================================
// Extremes
// ============================================================================

/// Smallest element in natural order; the first NaN if one is present.
///
/// # Examples
/// - `min_or_null([3, 1, 2])` → `1`
/// - `min_or_null([1.0, NaN, 2.0])` → `NaN`
/// - `min_or_null([])` → `None`
pub fn min_or_null<S>(seq: &S) -> Option<&S::Elem>
where
    S: SeqView + ?Sized,
    S::Elem: PartialOrd,
{
    natural_extreme(seq.as_slice(), Ordering::Less)
}

/// Largest element in natural order; the first NaN if one is present.
pub fn max_or_null<S>(seq: &S) -> Option<&S::Elem>
where
    S: SeqView + ?Sized,
    S::Elem: PartialOrd,
{
    natural_extreme(seq.as_slice(), Ordering::Greater)
}

/// First element with the smallest key.
pub fn min_by_or_null<S, K, F>(seq: &S, selector: F) -> Option<&S::Elem>
where
    S: SeqView + ?Sized,
    K: PartialOrd,
    F: FnMut(&S::Elem) -> K,
{
    keyed_extreme(seq.as_slice(), Ordering::Less, selector)
}

/// First element with the largest key.
///
/// # Examples
/// - `max_by_or_null([("x", 1), ("y", 1)], .1)` → `("x", 1)`
pub fn max_by_or_null<S, K, F>(seq: &S, selector: F) -> Option<&S::Elem>
where
    S: SeqView + ?Sized,
    K: PartialOrd,
    F: FnMut(&S::Elem) -> K,
{
    keyed_extreme(seq.as_slice(), Ordering::Greater, selector)
}

pub fn min_with_or_null<S, C>(seq: &S, comparator: C) -> Option<&S::Elem>
where
    S: SeqView + ?Sized,
    C: FnMut(&S::Elem, &S::Elem) -> Ordering,
{
    comparator_extreme(seq.as_slice(), Ordering::Less, comparator)
}

pub fn max_with_or_null<S, C>(seq: &S, comparator: C) -> Option<&S::Elem>
where
    S: SeqView + ?Sized,
    C: FnMut(&S::Elem, &S::Elem) -> Ordering,
{
    comparator_extreme(seq.as_slice(), Ordering::Greater, comparator)
}

/// Smallest value `selector` produces, with the same NaN absorption as
/// [`min_or_null`].
pub fn min_of_or_null<S, R, F>(seq: &S, selector: F) -> Option<R>
where
    S: SeqView + ?Sized,
    R: PartialOrd,
    F: FnMut(&S::Elem) -> R,
{
    natural_extreme_of(seq.as_slice().iter().map(selector), Ordering::Less)
}

pub fn max_of_or_null<S, R, F>(seq: &S, selector: F) -> Option<R>
where
    S: SeqView + ?Sized,
    R: PartialOrd,
    F: FnMut(&S::Elem) -> R,
{
    natural_extreme_of(seq.as_slice().iter().map(selector), Ordering::Greater)
}

#[cfg(test)]
#[path = "aggregate_test.rs"]
mod aggregate_test;
