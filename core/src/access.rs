//! Uniform element access over sequence-like values.
//!
//! [`SeqView`] is the only thing the algorithms know about their input: a
//! contiguous, length-known run of elements. Implementations never allocate
//! or copy.
//!
//! An absent sequence is spelled `Option<S>`. `None` views as an empty
//! slice, so every algorithm treats it as length 0. [`SeqView::is_absent`]
//! lets the few operations that distinguish "absent" from "empty" tell the
//! two apart.

use alloc::{boxed::Box, vec::Vec};

use smallvec::SmallVec;

/// A read-only, indexable view over a sequence of elements.
///
/// `Option` has an inherent `as_slice`, which wins over this trait in
/// method-call syntax and yields a slice of zero or one `S`. Call
/// `SeqView::as_slice(&opt)` to get the element view of an `Option<S>`.
pub trait SeqView {
    /// The element kind of this sequence.
    type Elem;

    /// Borrow the elements as a slice.
    fn as_slice(&self) -> &[Self::Elem];

    /// Whether the sequence reference itself is missing.
    ///
    /// Only `Option<S>` returns `true` (for `None`); an empty but present
    /// sequence is not absent.
    fn is_absent(&self) -> bool {
        false
    }

    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element at `index`, or `None` outside `[0, len)`.
    fn at(&self, index: usize) -> Option<&Self::Elem> {
        self.as_slice().get(index)
    }
}

impl<T> SeqView for [T] {
    type Elem = T;

    #[inline]
    fn as_slice(&self) -> &[T] {
        self
    }
}

impl<T, const N: usize> SeqView for [T; N] {
    type Elem = T;

    #[inline]
    fn as_slice(&self) -> &[T] {
        self
    }
}

impl<T> SeqView for Vec<T> {
    type Elem = T;

    #[inline]
    fn as_slice(&self) -> &[T] {
        self
    }
}

impl<T> SeqView for Box<[T]> {
    type Elem = T;

    #[inline]
    fn as_slice(&self) -> &[T] {
        self
    }
}

impl<A: smallvec::Array> SeqView for SmallVec<A> {
    type Elem = A::Item;

    #[inline]
    fn as_slice(&self) -> &[A::Item] {
        self
    }
}

#[cfg(feature = "bumpalo")]
impl<'bump, T> SeqView for bumpalo::collections::Vec<'bump, T> {
    type Elem = T;

    #[inline]
    fn as_slice(&self) -> &[T] {
        self
    }
}

impl<S: SeqView + ?Sized> SeqView for &S {
    type Elem = S::Elem;

    #[inline]
    fn as_slice(&self) -> &[S::Elem] {
        (**self).as_slice()
    }

    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

impl<S: SeqView> SeqView for Option<S> {
    type Elem = S::Elem;

    #[inline]
    fn as_slice(&self) -> &[S::Elem] {
        match self {
            Some(seq) => seq.as_slice(),
            None => &[],
        }
    }

    fn is_absent(&self) -> bool {
        match self {
            Some(seq) => seq.is_absent(),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use smallvec::smallvec;

    #[test]
    fn test_views_share_length_and_indexing() {
        let array = [1, 2, 3];
        let vector = vec![1, 2, 3];
        let boxed: Box<[i32]> = vec![1, 2, 3].into_boxed_slice();
        let small: SmallVec<[i32; 4]> = smallvec![1, 2, 3];

        assert_eq!(array.len(), 3);
        assert_eq!(SeqView::len(&vector), 3);
        assert_eq!(boxed.at(2), Some(&3));
        assert_eq!(small.at(0), Some(&1));
        assert_eq!(small.at(3), None);
    }

    #[test]
    fn test_absent_sequence_is_empty_but_distinguishable() {
        let absent: Option<Vec<i32>> = None;
        let empty: Option<Vec<i32>> = Some(vec![]);

        assert!(absent.is_absent());
        assert!(SeqView::is_empty(&absent));
        assert!(!empty.is_absent());
        assert!(SeqView::is_empty(&empty));
        assert_eq!(absent.at(0), None);
    }

    #[test]
    fn test_reference_forwards_absence() {
        let absent: Option<&[u8]> = None;
        let borrowed = &absent;
        assert!(borrowed.is_absent());
        assert_eq!(SeqView::as_slice(borrowed), &[] as &[u8]);
        assert_eq!(SeqView::len(borrowed), 0);
    }
}
