//! Insertion-ordered containers returned by grouping and set conversions.
//!
//! Iteration order is the order in which keys were first inserted.
//! Re-inserting an existing key updates its value in place and never moves it.

use hashbrown::DefaultHashBuilder;
use indexmap::{IndexMap, IndexSet};

/// Key to value map iterating in first-insertion order.
pub type OrderedMap<K, V> = IndexMap<K, V, DefaultHashBuilder>;

/// Set iterating in first-insertion order.
pub type OrderedSet<T> = IndexSet<T, DefaultHashBuilder>;

pub(crate) fn ordered_map_with_capacity<K, V>(capacity: usize) -> OrderedMap<K, V> {
    OrderedMap::with_capacity_and_hasher(capacity, DefaultHashBuilder::default())
}

pub(crate) fn ordered_set_with_capacity<T>(capacity: usize) -> OrderedSet<T> {
    OrderedSet::with_capacity_and_hasher(capacity, DefaultHashBuilder::default())
}
