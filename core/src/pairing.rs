//! Pairing engine: index-aligned zips and adjacent pairs.
//!
//! Zips stop at the shorter side; the excess of the longer side is dropped
//! silently. When the right side is a lazy iterator it is pulled at most
//! once per element of the left side and never after the left side ends.

use alloc::vec::Vec;

use crate::access::SeqView;

// ============================================================================
// Zip
// ============================================================================

/// Index-aligned pairs, truncated to the shorter input.
///
/// # Examples
/// - `zip([1, 2, 3], ["a", "b"])` → `[(1, "a"), (2, "b")]`
/// - `zip([], [1])` → `[]`
pub fn zip<A, B>(a: &A, b: &B) -> Vec<(A::Elem, B::Elem)>
where
    A: SeqView + ?Sized,
    B: SeqView + ?Sized,
    A::Elem: Clone,
    B::Elem: Clone,
{
    zip_with(a, b, |x, y| (x.clone(), y.clone()))
}

/// Combines index-aligned elements with `transform`.
pub fn zip_with<A, B, R, F>(a: &A, b: &B, mut transform: F) -> Vec<R>
where
    A: SeqView + ?Sized,
    B: SeqView + ?Sized,
    F: FnMut(&A::Elem, &B::Elem) -> R,
{
    a.as_slice()
        .iter()
        .zip(b.as_slice())
        .map(|(x, y)| transform(x, y))
        .collect()
}

/// Zips against a lazily produced right side.
pub fn zip_iter<A, I>(a: &A, other: I) -> Vec<(A::Elem, I::Item)>
where
    A: SeqView + ?Sized,
    A::Elem: Clone,
    I: IntoIterator,
{
    zip_iter_with(a, other, |x, y| (x.clone(), y))
}

pub fn zip_iter_with<A, I, R, F>(a: &A, other: I, mut transform: F) -> Vec<R>
where
    A: SeqView + ?Sized,
    I: IntoIterator,
    F: FnMut(&A::Elem, I::Item) -> R,
{
    let items = a.as_slice();
    let mut other = other.into_iter();
    let mut out = Vec::with_capacity(items.len().min(other.size_hint().0));
    for item in items {
        let Some(paired) = other.next() else {
            break;
        };
        out.push(transform(item, paired));
    }
    out
}

/// Splits a sequence of pairs into its two components.
pub fn unzip<S, L, R>(seq: &S) -> (Vec<L>, Vec<R>)
where
    S: SeqView<Elem = (L, R)> + ?Sized,
    L: Clone,
    R: Clone,
{
    seq.as_slice().iter().cloned().unzip()
}

// ============================================================================
// Adjacent Pairs
// ============================================================================

/// Each element paired with its successor. Fewer than two elements give `[]`.
pub fn zip_with_next<S>(seq: &S) -> Vec<(S::Elem, S::Elem)>
where
    S: SeqView + ?Sized,
    S::Elem: Clone,
{
    zip_with_next_with(seq, |x, y| (x.clone(), y.clone()))
}

pub fn zip_with_next_with<S, R, F>(seq: &S, mut transform: F) -> Vec<R>
where
    S: SeqView + ?Sized,
    F: FnMut(&S::Elem, &S::Elem) -> R,
{
    seq.as_slice()
        .windows(2)
        .map(|pair| transform(&pair[0], &pair[1]))
        .collect()
}

#[cfg(test)]
#[path = "pairing_test.rs"]
mod pairing_test;
