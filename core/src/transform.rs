//! Transform and filter engine.
//!
//! The map, filter and flat-map families are all one call to [`build_into`]:
//! visit each element with its index and append whatever the visitor yields
//! (nothing, one value or a whole sub-sequence) to the destination. Output
//! order always follows input order.

use alloc::vec::Vec;
use core::{any::Any, borrow::Borrow, hash::Hash};

use hashbrown::HashSet;

use crate::access::SeqView;

// ============================================================================
// Core Primitive
// ============================================================================

/// Visits each `(index, element)` pair in order and appends what `visit`
/// yields to `dest`.
///
/// `Option<R>` yields zero or one item, so the same primitive covers map,
/// filter and flat-map.
pub fn build_into<S, C, I, F>(seq: &S, dest: &mut C, mut visit: F)
where
    S: SeqView + ?Sized,
    C: Extend<I::Item>,
    I: IntoIterator,
    F: FnMut(usize, &S::Elem) -> I,
{
    for (index, item) in seq.as_slice().iter().enumerate() {
        dest.extend(visit(index, item));
    }
}

fn build_vec<S, I, F>(seq: &S, capacity: usize, visit: F) -> Vec<I::Item>
where
    S: SeqView + ?Sized,
    I: IntoIterator,
    F: FnMut(usize, &S::Elem) -> I,
{
    let mut out = Vec::with_capacity(capacity);
    build_into(seq, &mut out, visit);
    out
}

// ============================================================================
// Map
// ============================================================================

/// Applies `transform` to every element.
///
/// # Examples
/// - `map([1, 2, 3], x => x * 2)` → `[2, 4, 6]`
/// - `map([], x => x)` → `[]`
pub fn map<S, R, F>(seq: &S, mut transform: F) -> Vec<R>
where
    S: SeqView + ?Sized,
    F: FnMut(&S::Elem) -> R,
{
    build_vec(seq, seq.len(), |_, item| Some(transform(item)))
}

pub fn map_indexed<S, R, F>(seq: &S, mut transform: F) -> Vec<R>
where
    S: SeqView + ?Sized,
    F: FnMut(usize, &S::Elem) -> R,
{
    build_vec(seq, seq.len(), |index, item| Some(transform(index, item)))
}

/// Keeps only the `Some` results of `transform`.
pub fn map_not_null<S, R, F>(seq: &S, mut transform: F) -> Vec<R>
where
    S: SeqView + ?Sized,
    F: FnMut(&S::Elem) -> Option<R>,
{
    build_vec(seq, 0, |_, item| transform(item))
}

pub fn map_indexed_not_null<S, R, F>(seq: &S, transform: F) -> Vec<R>
where
    S: SeqView + ?Sized,
    F: FnMut(usize, &S::Elem) -> Option<R>,
{
    build_vec(seq, 0, transform)
}

/// Appends the mapped elements to `dest` and returns it.
pub fn map_to<'d, S, R, C, F>(seq: &S, dest: &'d mut C, mut transform: F) -> &'d mut C
where
    S: SeqView + ?Sized,
    C: Extend<R>,
    F: FnMut(&S::Elem) -> R,
{
    build_into(seq, dest, |_, item| Some(transform(item)));
    dest
}

pub fn map_indexed_to<'d, S, R, C, F>(seq: &S, dest: &'d mut C, mut transform: F) -> &'d mut C
where
    S: SeqView + ?Sized,
    C: Extend<R>,
    F: FnMut(usize, &S::Elem) -> R,
{
    build_into(seq, dest, |index, item| Some(transform(index, item)));
    dest
}

// ============================================================================
// Flat Map
// ============================================================================

/// Concatenates the sub-sequences `transform` returns, element-major.
///
/// # Examples
/// - `flat_map([1, 2], x => [x, x * 10])` → `[1, 10, 2, 20]`
pub fn flat_map<S, I, F>(seq: &S, mut transform: F) -> Vec<I::Item>
where
    S: SeqView + ?Sized,
    I: IntoIterator,
    F: FnMut(&S::Elem) -> I,
{
    build_vec(seq, seq.len(), |_, item| transform(item))
}

pub fn flat_map_indexed<S, I, F>(seq: &S, transform: F) -> Vec<I::Item>
where
    S: SeqView + ?Sized,
    I: IntoIterator,
    F: FnMut(usize, &S::Elem) -> I,
{
    build_vec(seq, seq.len(), transform)
}

pub fn flat_map_to<'d, S, I, C, F>(seq: &S, dest: &'d mut C, mut transform: F) -> &'d mut C
where
    S: SeqView + ?Sized,
    I: IntoIterator,
    C: Extend<I::Item>,
    F: FnMut(&S::Elem) -> I,
{
    build_into(seq, dest, |_, item| transform(item));
    dest
}

// ============================================================================
// Filter
// ============================================================================

/// Elements matching `predicate`, in their original order.
pub fn filter<S, P>(seq: &S, mut predicate: P) -> Vec<S::Elem>
where
    S: SeqView + ?Sized,
    S::Elem: Clone,
    P: FnMut(&S::Elem) -> bool,
{
    build_vec(seq, 0, |_, item| predicate(item).then(|| item.clone()))
}

pub fn filter_not<S, P>(seq: &S, mut predicate: P) -> Vec<S::Elem>
where
    S: SeqView + ?Sized,
    S::Elem: Clone,
    P: FnMut(&S::Elem) -> bool,
{
    build_vec(seq, 0, |_, item| (!predicate(item)).then(|| item.clone()))
}

pub fn filter_indexed<S, P>(seq: &S, mut predicate: P) -> Vec<S::Elem>
where
    S: SeqView + ?Sized,
    S::Elem: Clone,
    P: FnMut(usize, &S::Elem) -> bool,
{
    build_vec(seq, 0, |index, item| predicate(index, item).then(|| item.clone()))
}

pub fn filter_to<'d, S, C, P>(seq: &S, dest: &'d mut C, mut predicate: P) -> &'d mut C
where
    S: SeqView + ?Sized,
    S::Elem: Clone,
    C: Extend<S::Elem>,
    P: FnMut(&S::Elem) -> bool,
{
    build_into(seq, dest, |_, item| predicate(item).then(|| item.clone()));
    dest
}

pub fn filter_not_to<'d, S, C, P>(seq: &S, dest: &'d mut C, mut predicate: P) -> &'d mut C
where
    S: SeqView + ?Sized,
    S::Elem: Clone,
    C: Extend<S::Elem>,
    P: FnMut(&S::Elem) -> bool,
{
    build_into(seq, dest, |_, item| (!predicate(item)).then(|| item.clone()));
    dest
}

/// Unwraps the present elements of a sequence with absent elements.
///
/// # Examples
/// - `filter_not_null([Some(1), None, Some(3)])` → `[1, 3]`
pub fn filter_not_null<S, T>(seq: &S) -> Vec<T>
where
    S: SeqView<Elem = Option<T>> + ?Sized,
    T: Clone,
{
    build_vec(seq, 0, |_, item| item.clone())
}

/// Elements of a heterogeneous sequence whose concrete type is `R`.
pub fn filter_is_instance<R, S>(seq: &S) -> Vec<&R>
where
    R: Any,
    S: SeqView + ?Sized,
    S::Elem: Borrow<dyn Any>,
{
    seq.as_slice()
        .iter()
        .filter_map(|item| <S::Elem as Borrow<dyn Any>>::borrow(item).downcast_ref::<R>())
        .collect()
}

/// Splits into `(matching, not_matching)`, each in input order.
pub fn partition<S, P>(seq: &S, mut predicate: P) -> (Vec<S::Elem>, Vec<S::Elem>)
where
    S: SeqView + ?Sized,
    S::Elem: Clone,
    P: FnMut(&S::Elem) -> bool,
{
    let mut matched = Vec::new();
    let mut unmatched = Vec::new();
    for item in seq.as_slice() {
        if predicate(item) {
            matched.push(item.clone());
        } else {
            unmatched.push(item.clone());
        }
    }
    (matched, unmatched)
}

// ============================================================================
// Distinct
// ============================================================================

/// First occurrence of every element, in input order.
///
/// # Examples
/// - `distinct([3, 1, 3, 2])` → `[3, 1, 2]`
pub fn distinct<S>(seq: &S) -> Vec<S::Elem>
where
    S: SeqView + ?Sized,
    S::Elem: Clone + Eq + Hash,
{
    let items = seq.as_slice();
    let mut seen: HashSet<&S::Elem> = HashSet::with_capacity(items.len());
    let mut out = Vec::new();
    for item in items {
        if seen.insert(item) {
            out.push(item.clone());
        }
    }
    out
}

/// First element for every distinct key, in input order.
pub fn distinct_by<S, K, F>(seq: &S, mut selector: F) -> Vec<S::Elem>
where
    S: SeqView + ?Sized,
    S::Elem: Clone,
    K: Eq + Hash,
    F: FnMut(&S::Elem) -> K,
{
    let mut seen: HashSet<K> = HashSet::new();
    build_vec(seq, 0, |_, item| seen.insert(selector(item)).then(|| item.clone()))
}

// ============================================================================
// Indexed Iteration
// ============================================================================

/// Lazily pairs every element with its index.
pub fn with_index<S>(seq: &S) -> impl DoubleEndedIterator<Item = (usize, &S::Elem)> + ExactSizeIterator
where
    S: SeqView + ?Sized,
{
    seq.as_slice().iter().enumerate()
}

pub fn for_each_indexed<S, F>(seq: &S, mut action: F)
where
    S: SeqView + ?Sized,
    F: FnMut(usize, &S::Elem),
{
    for (index, item) in seq.as_slice().iter().enumerate() {
        action(index, item);
    }
}

/// Elements in reverse order, copied.
pub fn reversed<S>(seq: &S) -> Vec<S::Elem>
where
    S: SeqView + ?Sized,
    S::Elem: Clone,
{
    seq.as_slice().iter().rev().cloned().collect()
}

/// Reverses `buf` in place.
pub fn reverse<T>(buf: &mut [T]) {
    buf.reverse();
}

#[cfg(test)]
#[path = "transform_test.rs"]
mod transform_test;
