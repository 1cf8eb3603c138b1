//! Element access and search.
//!
//! Positional lookups return `Option<usize>` rather than a `-1` sentinel.
//! The throwing accessors (`element_at`, `first`, `last`, `single`) have
//! `*_or_null` counterparts that never fail.

use crate::{
    access::SeqView,
    error::{Result, SeqError},
};

// ============================================================================
// Positional Access
// ============================================================================

/// Element at `index`.
///
/// # Edge Cases
///
/// - `index >= len` (including any index into an absent sequence): `IndexOutOfRange`
pub fn element_at<S>(seq: &S, index: usize) -> Result<&S::Elem>
where
    S: SeqView + ?Sized,
{
    seq.at(index)
        .ok_or_else(|| SeqError::index_out_of_range("element_at", index, seq.len()))
}

pub fn get_or_null<S>(seq: &S, index: usize) -> Option<&S::Elem>
where
    S: SeqView + ?Sized,
{
    seq.at(index)
}

/// Element at `index`, or `default_value(index)` when out of range.
pub fn element_at_or_else<S, F>(seq: &S, index: usize, default_value: F) -> S::Elem
where
    S: SeqView + ?Sized,
    S::Elem: Clone,
    F: FnOnce(usize) -> S::Elem,
{
    match seq.at(index) {
        Some(item) => item.clone(),
        None => default_value(index),
    }
}

// ============================================================================
// First / Last
// ============================================================================

pub fn first<S>(seq: &S) -> Result<&S::Elem>
where
    S: SeqView + ?Sized,
{
    first_or_null(seq).ok_or_else(|| SeqError::empty_input("first", "sequence has no elements"))
}

pub fn first_or_null<S>(seq: &S) -> Option<&S::Elem>
where
    S: SeqView + ?Sized,
{
    seq.as_slice().first()
}

pub fn last<S>(seq: &S) -> Result<&S::Elem>
where
    S: SeqView + ?Sized,
{
    last_or_null(seq).ok_or_else(|| SeqError::empty_input("last", "sequence has no elements"))
}

pub fn last_or_null<S>(seq: &S) -> Option<&S::Elem>
where
    S: SeqView + ?Sized,
{
    seq.as_slice().last()
}

/// First element matching `predicate`; `EmptyInput` when none does.
pub fn first_matching<S, P>(seq: &S, predicate: P) -> Result<&S::Elem>
where
    S: SeqView + ?Sized,
    P: FnMut(&S::Elem) -> bool,
{
    find(seq, predicate)
        .ok_or_else(|| SeqError::empty_input("first_matching", "no element matches the predicate"))
}

pub fn last_matching<S, P>(seq: &S, predicate: P) -> Result<&S::Elem>
where
    S: SeqView + ?Sized,
    P: FnMut(&S::Elem) -> bool,
{
    find_last(seq, predicate)
        .ok_or_else(|| SeqError::empty_input("last_matching", "no element matches the predicate"))
}

pub fn find<S, P>(seq: &S, mut predicate: P) -> Option<&S::Elem>
where
    S: SeqView + ?Sized,
    P: FnMut(&S::Elem) -> bool,
{
    seq.as_slice().iter().find(|item| predicate(item))
}

/// Last element matching `predicate`, scanning from the back.
pub fn find_last<S, P>(seq: &S, mut predicate: P) -> Option<&S::Elem>
where
    S: SeqView + ?Sized,
    P: FnMut(&S::Elem) -> bool,
{
    seq.as_slice().iter().rev().find(|item| predicate(item))
}

// ============================================================================
// Single
// ============================================================================

/// The only element.
///
/// # Edge Cases
///
/// - Empty: `EmptyInput`
/// - More than one element: `AmbiguousMatch`
pub fn single<S>(seq: &S) -> Result<&S::Elem>
where
    S: SeqView + ?Sized,
{
    match seq.as_slice() {
        [only] => Ok(only),
        [] => Err(SeqError::empty_input("single", "sequence has no elements")),
        _ => Err(SeqError::ambiguous_match("single")),
    }
}

pub fn single_or_null<S>(seq: &S) -> Option<&S::Elem>
where
    S: SeqView + ?Sized,
{
    match seq.as_slice() {
        [only] => Some(only),
        _ => None,
    }
}

/// The only element matching `predicate`. Scanning stops at a second match.
pub fn single_matching<S, P>(seq: &S, mut predicate: P) -> Result<&S::Elem>
where
    S: SeqView + ?Sized,
    P: FnMut(&S::Elem) -> bool,
{
    let mut found = None;
    for item in seq.as_slice() {
        if predicate(item) {
            if found.is_some() {
                return Err(SeqError::ambiguous_match("single_matching"));
            }
            found = Some(item);
        }
    }
    found.ok_or_else(|| {
        SeqError::empty_input("single_matching", "no element matches the predicate")
    })
}

pub fn single_matching_or_null<S, P>(seq: &S, mut predicate: P) -> Option<&S::Elem>
where
    S: SeqView + ?Sized,
    P: FnMut(&S::Elem) -> bool,
{
    let mut found = None;
    for item in seq.as_slice() {
        if predicate(item) {
            if found.is_some() {
                return None;
            }
            found = Some(item);
        }
    }
    found
}

// ============================================================================
// Index Lookup
// ============================================================================

pub fn index_of<S>(seq: &S, element: &S::Elem) -> Option<usize>
where
    S: SeqView + ?Sized,
    S::Elem: PartialEq,
{
    seq.as_slice().iter().position(|item| item == element)
}

pub fn last_index_of<S>(seq: &S, element: &S::Elem) -> Option<usize>
where
    S: SeqView + ?Sized,
    S::Elem: PartialEq,
{
    seq.as_slice().iter().rposition(|item| item == element)
}

pub fn index_of_first<S, P>(seq: &S, predicate: P) -> Option<usize>
where
    S: SeqView + ?Sized,
    P: FnMut(&S::Elem) -> bool,
{
    seq.as_slice().iter().position(predicate)
}

pub fn index_of_last<S, P>(seq: &S, predicate: P) -> Option<usize>
where
    S: SeqView + ?Sized,
    P: FnMut(&S::Elem) -> bool,
{
    seq.as_slice().iter().rposition(predicate)
}

// ============================================================================
// Existence
// ============================================================================

/// Equality is `PartialEq`, so a NaN element is never found.
pub fn contains<S>(seq: &S, element: &S::Elem) -> bool
where
    S: SeqView + ?Sized,
    S::Elem: PartialEq,
{
    seq.as_slice().contains(element)
}

pub fn is_empty<S: SeqView + ?Sized>(seq: &S) -> bool {
    seq.is_empty()
}

pub fn is_not_empty<S: SeqView + ?Sized>(seq: &S) -> bool {
    !seq.is_empty()
}

/// `true` for an absent sequence as well as an empty one.
pub fn is_null_or_empty<S: SeqView + ?Sized>(seq: &S) -> bool {
    seq.is_absent() || seq.is_empty()
}

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;
