//! Windowing engine: take/drop from either end, chunks and sliding windows.
//!
//! Counts may be given as any primitive integer. A negative count is an
//! `InvalidArgument` error, `0` selects nothing and a count past the end
//! selects everything; chunk and window sizes must be strictly positive.

use alloc::{format, vec::Vec};
use core::{
    fmt::Display,
    ops::{Bound, RangeBounds},
};

use crate::{
    access::SeqView,
    error::{Result, SeqError},
};

// ============================================================================
// Counts
// ============================================================================

/// Integer argument accepted as an element count.
pub trait ElementCount: Copy + Display {
    /// The count as `usize`, or `None` if it is negative.
    ///
    /// Counts too large for `usize` saturate, since no sequence is that long.
    fn to_count(self) -> Option<usize>;
}

macro_rules! impl_signed_count {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ElementCount for $ty {
                #[inline]
                fn to_count(self) -> Option<usize> {
                    if self < 0 {
                        None
                    } else {
                        Some(usize::try_from(self).unwrap_or(usize::MAX))
                    }
                }
            }
        )*
    };
}

macro_rules! impl_unsigned_count {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ElementCount for $ty {
                #[inline]
                fn to_count(self) -> Option<usize> {
                    Some(usize::try_from(self).unwrap_or(usize::MAX))
                }
            }
        )*
    };
}

impl_signed_count!(i8, i16, i32, i64, i128, isize);
impl_unsigned_count!(u8, u16, u32, u64, u128, usize);

fn count_arg<N: ElementCount>(op: &'static str, n: N) -> Result<usize> {
    n.to_count().ok_or_else(|| {
        SeqError::invalid_argument(op, format!("requested element count {n} is less than zero"))
    })
}

fn positive_arg<N: ElementCount>(op: &'static str, what: &str, n: N) -> Result<usize> {
    match n.to_count() {
        Some(count) if count > 0 => Ok(count),
        _ => Err(SeqError::invalid_argument(
            op,
            format!("{what} must be greater than zero, was {n}"),
        )),
    }
}

// ============================================================================
// Take / Drop
// ============================================================================

/// The first `n` elements.
///
/// # Edge Cases
///
/// - `n < 0`: `InvalidArgument`
/// - `n == 0`: `[]`
/// - `n >= len`: the whole sequence
///
/// # Examples
/// - `take([1, 2, 3], 2)` → `[1, 2]`
/// - `take([1, 2, 3], 10)` → `[1, 2, 3]`
pub fn take<S, N>(seq: &S, n: N) -> Result<Vec<S::Elem>>
where
    S: SeqView + ?Sized,
    S::Elem: Clone,
    N: ElementCount,
{
    let items = seq.as_slice();
    let n = count_arg("take", n)?.min(items.len());
    Ok(items[..n].to_vec())
}

/// Everything after the first `n` elements.
pub fn drop<S, N>(seq: &S, n: N) -> Result<Vec<S::Elem>>
where
    S: SeqView + ?Sized,
    S::Elem: Clone,
    N: ElementCount,
{
    let items = seq.as_slice();
    let n = count_arg("drop", n)?.min(items.len());
    Ok(items[n..].to_vec())
}

/// The last `n` elements, in their original order.
pub fn take_last<S, N>(seq: &S, n: N) -> Result<Vec<S::Elem>>
where
    S: SeqView + ?Sized,
    S::Elem: Clone,
    N: ElementCount,
{
    let items = seq.as_slice();
    let n = count_arg("take_last", n)?.min(items.len());
    Ok(items[items.len() - n..].to_vec())
}

pub fn drop_last<S, N>(seq: &S, n: N) -> Result<Vec<S::Elem>>
where
    S: SeqView + ?Sized,
    S::Elem: Clone,
    N: ElementCount,
{
    let items = seq.as_slice();
    let n = count_arg("drop_last", n)?.min(items.len());
    Ok(items[..items.len() - n].to_vec())
}

// ============================================================================
// Predicate Windows
// ============================================================================

/// Leading run of elements matching `predicate`.
pub fn take_while<S, P>(seq: &S, mut predicate: P) -> Vec<S::Elem>
where
    S: SeqView + ?Sized,
    S::Elem: Clone,
    P: FnMut(&S::Elem) -> bool,
{
    seq.as_slice()
        .iter()
        .take_while(|item| predicate(item))
        .cloned()
        .collect()
}

/// Everything from the first element failing `predicate` onwards.
pub fn drop_while<S, P>(seq: &S, mut predicate: P) -> Vec<S::Elem>
where
    S: SeqView + ?Sized,
    S::Elem: Clone,
    P: FnMut(&S::Elem) -> bool,
{
    let items = seq.as_slice();
    let start = items
        .iter()
        .position(|item| !predicate(item))
        .unwrap_or(items.len());
    items[start..].to_vec()
}

/// Trailing run of elements matching `predicate`, scanned from the back.
pub fn take_last_while<S, P>(seq: &S, mut predicate: P) -> Vec<S::Elem>
where
    S: SeqView + ?Sized,
    S::Elem: Clone,
    P: FnMut(&S::Elem) -> bool,
{
    let items = seq.as_slice();
    let start = items
        .iter()
        .rposition(|item| !predicate(item))
        .map_or(0, |index| index + 1);
    items[start..].to_vec()
}

pub fn drop_last_while<S, P>(seq: &S, mut predicate: P) -> Vec<S::Elem>
where
    S: SeqView + ?Sized,
    S::Elem: Clone,
    P: FnMut(&S::Elem) -> bool,
{
    let items = seq.as_slice();
    let end = items
        .iter()
        .rposition(|item| !predicate(item))
        .map_or(0, |index| index + 1);
    items[..end].to_vec()
}

// ============================================================================
// Chunks and Windows
// ============================================================================

/// Consecutive chunks of `size` elements; the last one may be shorter.
///
/// # Examples
/// - `chunked([1, 2, 3, 4, 5], 2)` → `[[1, 2], [3, 4], [5]]`
/// - `chunked([1], 0)` → `InvalidArgument`
pub fn chunked<S, N>(seq: &S, size: N) -> Result<Vec<Vec<S::Elem>>>
where
    S: SeqView + ?Sized,
    S::Elem: Clone,
    N: ElementCount,
{
    chunked_with(seq, size, <[S::Elem]>::to_vec)
}

pub fn chunked_with<S, N, R, F>(seq: &S, size: N, transform: F) -> Result<Vec<R>>
where
    S: SeqView + ?Sized,
    N: ElementCount,
    F: FnMut(&[S::Elem]) -> R,
{
    let size = positive_arg("chunked", "chunk size", size)?;
    Ok(seq.as_slice().chunks(size).map(transform).collect())
}

/// Windows of `size` elements whose starts are `step` apart.
///
/// With `partial`, windows running off the end are kept, shortened;
/// otherwise only full windows are returned.
///
/// # Examples
/// - `windowed([1, 2, 3, 4], 2, 1, false)` → `[[1, 2], [2, 3], [3, 4]]`
/// - `windowed([1, 2, 3, 4], 3, 2, true)` → `[[1, 2, 3], [3, 4]]`
pub fn windowed<S, N>(seq: &S, size: N, step: N, partial: bool) -> Result<Vec<Vec<S::Elem>>>
where
    S: SeqView + ?Sized,
    S::Elem: Clone,
    N: ElementCount,
{
    windowed_with(seq, size, step, partial, <[S::Elem]>::to_vec)
}

pub fn windowed_with<S, N, R, F>(
    seq: &S,
    size: N,
    step: N,
    partial: bool,
    mut transform: F,
) -> Result<Vec<R>>
where
    S: SeqView + ?Sized,
    N: ElementCount,
    F: FnMut(&[S::Elem]) -> R,
{
    let size = positive_arg("windowed", "window size", size)?;
    let step = positive_arg("windowed", "window step", step)?;
    let items = seq.as_slice();

    let mut out = Vec::new();
    for start in (0..items.len()).step_by(step) {
        let end = start.saturating_add(size);
        if end <= items.len() {
            out.push(transform(&items[start..end]));
        } else if partial {
            out.push(transform(&items[start..]));
        } else {
            break;
        }
    }
    Ok(out)
}

// ============================================================================
// Slice
// ============================================================================

/// Copy of the elements in `range`.
///
/// # Edge Cases
///
/// - start after end: `InvalidArgument`
/// - end past the sequence: `IndexOutOfRange`
pub fn slice<S, R>(seq: &S, range: R) -> Result<Vec<S::Elem>>
where
    S: SeqView + ?Sized,
    S::Elem: Clone,
    R: RangeBounds<usize>,
{
    let items = seq.as_slice();
    let start = match range.start_bound() {
        Bound::Included(&start) => start,
        Bound::Excluded(&start) => start.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&end) => end.saturating_add(1),
        Bound::Excluded(&end) => end,
        Bound::Unbounded => items.len(),
    };

    if start > end {
        return Err(SeqError::invalid_argument(
            "slice",
            format!("range start {start} is after range end {end}"),
        ));
    }
    if end > items.len() {
        return Err(SeqError::index_out_of_range("slice", end, items.len()));
    }
    Ok(items[start..end].to_vec())
}

#[cfg(test)]
#[path = "window_test.rs"]
mod window_test;
