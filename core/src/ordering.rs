//! Comparison and ordering policy.
//!
//! Natural order comes from [`NaturalOrd`], which every `PartialOrd` type
//! gets for free. A value that is unordered with itself (a floating-point
//! NaN) sorts after every other value and is *absorbing* for the extreme
//! scans: `min_or_null` / `max_or_null` return the first NaN they meet.
//!
//! The extreme scans in this module replace the running best only on a
//! strict improvement, so the first element reaching the extreme wins.

use core::cmp::Ordering;

/// Natural ordering with NaN treated as the maximum.
///
/// Any value unordered with itself ranks above every other value. That covers
/// compound values holding a NaN, such as `(1.0, f64::NAN)`, which sort after
/// all NaN-free tuples and tie with each other.
pub trait NaturalOrd: PartialOrd {
    /// `true` for values that do not compare with themselves (NaN).
    #[inline]
    fn is_unordered(&self) -> bool {
        self.partial_cmp(self).is_none()
    }

    /// Total order over the element kind.
    ///
    /// NaN compares equal to NaN and greater than everything else.
    fn natural_cmp(&self, other: &Self) -> Ordering {
        match (self.is_unordered(), other.is_unordered()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => self.partial_cmp(other).unwrap_or(Ordering::Equal),
        }
    }
}

impl<T: PartialOrd + ?Sized> NaturalOrd for T {}

// ============================================================================
// Comparator Builders
// ============================================================================

/// Comparator for the natural order of `T`.
pub fn natural_order<T: PartialOrd + ?Sized>() -> impl Fn(&T, &T) -> Ordering + Copy {
    |a: &T, b: &T| a.natural_cmp(b)
}

/// Comparator for the reverse of the natural order of `T`.
pub fn reverse_order<T: PartialOrd + ?Sized>() -> impl Fn(&T, &T) -> Ordering + Copy {
    |a: &T, b: &T| b.natural_cmp(a)
}

/// Compares elements by the natural order of the key `selector` extracts.
pub fn compare_by<T, K, F>(mut selector: F) -> impl FnMut(&T, &T) -> Ordering
where
    T: ?Sized,
    K: PartialOrd,
    F: FnMut(&T) -> K,
{
    move |a: &T, b: &T| {
        let ka = selector(a);
        let kb = selector(b);
        ka.natural_cmp(&kb)
    }
}

/// Descending counterpart of [`compare_by`].
///
/// The arguments are swapped rather than the result negated, so a stable
/// sort keeps equal keys in their original relative order.
pub fn compare_by_descending<T, K, F>(mut selector: F) -> impl FnMut(&T, &T) -> Ordering
where
    T: ?Sized,
    K: PartialOrd,
    F: FnMut(&T) -> K,
{
    move |a: &T, b: &T| {
        let ka = selector(a);
        let kb = selector(b);
        kb.natural_cmp(&ka)
    }
}

/// Inverts a comparator by swapping its arguments.
pub fn reverse_comparator<T, C>(mut comparator: C) -> impl FnMut(&T, &T) -> Ordering
where
    T: ?Sized,
    C: FnMut(&T, &T) -> Ordering,
{
    move |a: &T, b: &T| comparator(b, a)
}

/// Uses `tie_break` for elements `first` considers equal.
pub fn then_by<T, C1, C2>(mut first: C1, mut tie_break: C2) -> impl FnMut(&T, &T) -> Ordering
where
    T: ?Sized,
    C1: FnMut(&T, &T) -> Ordering,
    C2: FnMut(&T, &T) -> Ordering,
{
    move |a: &T, b: &T| first(a, b).then_with(|| tie_break(a, b))
}

// ============================================================================
// Extreme Scans
// ============================================================================

/// Natural-order extreme with NaN absorption.
///
/// `wanted` is `Less` for a minimum and `Greater` for a maximum.
pub(crate) fn natural_extreme<T: PartialOrd>(items: &[T], wanted: Ordering) -> Option<&T> {
    let (first, rest) = items.split_first()?;
    if first.is_unordered() {
        return Some(first);
    }
    let mut best = first;
    for item in rest {
        if item.is_unordered() {
            return Some(item);
        }
        if item.partial_cmp(best) == Some(wanted) {
            best = item;
        }
    }
    Some(best)
}

/// Same as [`natural_extreme`] over values produced on the fly.
pub(crate) fn natural_extreme_of<R: PartialOrd>(
    values: impl Iterator<Item = R>,
    wanted: Ordering,
) -> Option<R> {
    let mut best: Option<R> = None;
    for value in values {
        if value.is_unordered() {
            return Some(value);
        }
        let improves = match &best {
            Some(current) => value.partial_cmp(current) == Some(wanted),
            None => true,
        };
        if improves {
            best = Some(value);
        }
    }
    best
}

/// Keyed extreme: first element whose key is strictly beyond every earlier key.
///
/// Keys compare with [`NaturalOrd::natural_cmp`], so a NaN key is the
/// largest key wherever it appears, matching `compare_by`.
pub(crate) fn keyed_extreme<T, K, F>(items: &[T], wanted: Ordering, mut selector: F) -> Option<&T>
where
    K: PartialOrd,
    F: FnMut(&T) -> K,
{
    let (first, rest) = items.split_first()?;
    let mut best = first;
    let mut best_key = selector(first);
    for item in rest {
        let key = selector(item);
        if key.natural_cmp(&best_key) == wanted {
            best = item;
            best_key = key;
        }
    }
    Some(best)
}

/// Comparator extreme with the same first-wins rule.
pub(crate) fn comparator_extreme<T, C>(items: &[T], wanted: Ordering, mut comparator: C) -> Option<&T>
where
    C: FnMut(&T, &T) -> Ordering,
{
    let (first, rest) = items.split_first()?;
    let mut best = first;
    for item in rest {
        if comparator(item, best) == wanted {
            best = item;
        }
    }
    Some(best)
}

#[cfg(test)]
#[path = "ordering_test.rs"]
mod ordering_test;
