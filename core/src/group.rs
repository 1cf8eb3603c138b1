//! Grouping and association into insertion-ordered maps.
//!
//! The first element producing a key fixes that key's position in the
//! result. Later elements with the same key append to its group
//! (`group_by*`) or overwrite its value (`associate*`) without moving it.

use alloc::vec::Vec;
use core::hash::Hash;

use crate::{
    access::SeqView,
    ordered::{OrderedMap, ordered_map_with_capacity},
};

// ============================================================================
// Group By
// ============================================================================

/// Groups elements by the key `key_selector` returns.
///
/// # Examples
/// - `group_by(["apple", "ant", "bee"], first char)` → `{a: [apple, ant], b: [bee]}`
/// - `group_by([], f)` → `{}`
pub fn group_by<S, K, F>(seq: &S, key_selector: F) -> OrderedMap<K, Vec<S::Elem>>
where
    S: SeqView + ?Sized,
    S::Elem: Clone,
    K: Eq + Hash,
    F: FnMut(&S::Elem) -> K,
{
    group_by_with(seq, key_selector, |item| item.clone())
}

/// Groups `value_transform(element)` by `key_selector(element)`.
pub fn group_by_with<S, K, V, F, G>(
    seq: &S,
    key_selector: F,
    value_transform: G,
) -> OrderedMap<K, Vec<V>>
where
    S: SeqView + ?Sized,
    K: Eq + Hash,
    F: FnMut(&S::Elem) -> K,
    G: FnMut(&S::Elem) -> V,
{
    let mut groups = ordered_map_with_capacity(0);
    group_by_to(seq, &mut groups, key_selector, value_transform);
    groups
}

/// Appends into an existing map. Keys already in `dest` keep their position.
pub fn group_by_to<'d, S, K, V, F, G>(
    seq: &S,
    dest: &'d mut OrderedMap<K, Vec<V>>,
    mut key_selector: F,
    mut value_transform: G,
) -> &'d mut OrderedMap<K, Vec<V>>
where
    S: SeqView + ?Sized,
    K: Eq + Hash,
    F: FnMut(&S::Elem) -> K,
    G: FnMut(&S::Elem) -> V,
{
    for item in seq.as_slice() {
        dest.entry(key_selector(item))
            .or_insert_with(Vec::new)
            .push(value_transform(item));
    }
    dest
}

// ============================================================================
// Associate
// ============================================================================

/// Builds a map from the `(key, value)` pairs `transform` returns.
///
/// A repeated key keeps its first position and takes the last value.
pub fn associate<S, K, V, F>(seq: &S, mut transform: F) -> OrderedMap<K, V>
where
    S: SeqView + ?Sized,
    K: Eq + Hash,
    F: FnMut(&S::Elem) -> (K, V),
{
    let mut map = ordered_map_with_capacity(seq.len());
    for item in seq.as_slice() {
        let (key, value) = transform(item);
        map.insert(key, value);
    }
    map
}

/// Elements keyed by `key_selector`.
pub fn associate_by<S, K, F>(seq: &S, mut key_selector: F) -> OrderedMap<K, S::Elem>
where
    S: SeqView + ?Sized,
    S::Elem: Clone,
    K: Eq + Hash,
    F: FnMut(&S::Elem) -> K,
{
    associate(seq, |item| (key_selector(item), item.clone()))
}

/// Each element mapped to `value_selector(element)`.
pub fn associate_with<S, V, F>(seq: &S, mut value_selector: F) -> OrderedMap<S::Elem, V>
where
    S: SeqView + ?Sized,
    S::Elem: Clone + Eq + Hash,
    F: FnMut(&S::Elem) -> V,
{
    associate(seq, |item| (item.clone(), value_selector(item)))
}

#[cfg(test)]
#[path = "group_test.rs"]
mod group_test;
