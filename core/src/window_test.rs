//! Tests for the windowing engine

use super::*;
use crate::error::ErrorKind;
use crate::test_utils::init_test_logging;
use alloc::{vec, vec::Vec};
use pretty_assertions::assert_eq;

// ============================================================================
// Take / Drop Tests
// ============================================================================

#[test]
fn test_take_boundaries() {
    let values = [1, 2, 3];
    assert_eq!(take(&values, 0), Ok(vec![]));
    assert_eq!(take(&values, 2), Ok(vec![1, 2]));
    assert_eq!(take(&values, 10), Ok(vec![1, 2, 3]));
    assert_eq!(take(&values, u64::MAX), Ok(vec![1, 2, 3]));
}

#[test]
fn test_negative_counts_are_rejected() {
    init_test_logging();

    let values = [1, 2, 3];
    assert_eq!(take(&values, -1).unwrap_err().kind(), ErrorKind::InvalidArgument);
    assert_eq!(drop(&values, -1i64).unwrap_err().op(), "drop");
    assert_eq!(take_last(&values, -5i8).unwrap_err().kind(), ErrorKind::InvalidArgument);
    assert_eq!(drop_last(&values, isize::MIN).unwrap_err().kind(), ErrorKind::InvalidArgument);
}

#[test]
fn test_drop_boundaries() {
    let values = vec![1, 2, 3];
    assert_eq!(drop(&values, 0), Ok(vec![1, 2, 3]));
    assert_eq!(drop(&values, 1), Ok(vec![2, 3]));
    assert_eq!(drop(&values, 3), Ok(vec![]));
    assert_eq!(drop(&values, 7usize), Ok(vec![]));
}

#[test]
fn test_take_and_drop_from_the_end() {
    let values = ['a', 'b', 'c', 'd'];
    assert_eq!(take_last(&values, 2), Ok(vec!['c', 'd']));
    assert_eq!(take_last(&values, 9), Ok(values.to_vec()));
    assert_eq!(drop_last(&values, 1), Ok(vec!['a', 'b', 'c']));
    assert_eq!(drop_last(&values, 4), Ok(vec![]));
}

#[test]
fn test_absent_sequence_windows_are_empty() {
    let absent: Option<Vec<i32>> = None;
    assert_eq!(take(&absent, 3), Ok(vec![]));
    assert_eq!(drop_last(&absent, 3), Ok(vec![]));
}

// ============================================================================
// Predicate Window Tests
// ============================================================================

#[test]
fn test_take_and_drop_while() {
    let values = [1, 2, 5, 1, 7];
    assert_eq!(take_while(&values, |&x| x < 3), vec![1, 2]);
    assert_eq!(drop_while(&values, |&x| x < 3), vec![5, 1, 7]);

    assert_eq!(take_while(&values, |_| true), values.to_vec());
    assert_eq!(drop_while(&values, |_| true), Vec::<i32>::new());
}

#[test]
fn test_take_while_stops_calling_predicate() {
    let mut calls = 0;
    take_while(&[1, 9, 1, 1], |&x| {
        calls += 1;
        x < 5
    });
    assert_eq!(calls, 2);
}

#[test]
fn test_last_while_variants_scan_from_back() {
    let values = [7, 1, 5, 2, 1];
    assert_eq!(take_last_while(&values, |&x| x < 3), vec![2, 1]);
    assert_eq!(drop_last_while(&values, |&x| x < 3), vec![7, 1, 5]);

    assert_eq!(take_last_while(&values, |_| true), values.to_vec());
    assert_eq!(drop_last_while(&values, |_| true), Vec::<i32>::new());
    assert_eq!(take_last_while(&values, |_| false), Vec::<i32>::new());
}

// ============================================================================
// Chunk / Window Tests
// ============================================================================

#[test]
fn test_chunked() {
    assert_eq!(
        chunked(&[1, 2, 3, 4, 5], 2),
        Ok(vec![vec![1, 2], vec![3, 4], vec![5]])
    );
    assert_eq!(chunked_with(&[1, 2, 3, 4], 2, |c| c.iter().sum::<i32>()), Ok(vec![3, 7]));
    assert_eq!(chunked(&[1], 0).unwrap_err().kind(), ErrorKind::InvalidArgument);
    assert_eq!(chunked(&[1], -2).unwrap_err().kind(), ErrorKind::InvalidArgument);
}

#[test]
fn test_windowed_full_and_partial() {
    let values = [1, 2, 3, 4];
    assert_eq!(
        windowed(&values, 2, 1, false),
        Ok(vec![vec![1, 2], vec![2, 3], vec![3, 4]])
    );
    assert_eq!(
        windowed(&values, 3, 2, true),
        Ok(vec![vec![1, 2, 3], vec![3, 4]])
    );
    assert_eq!(windowed(&values, 3, 2, false), Ok(vec![vec![1, 2, 3]]));
    assert_eq!(windowed(&values, 5, 1, false), Ok(Vec::<Vec<i32>>::new()));
    assert_eq!(
        windowed_with(&values, 2, 2, false, |w| w[0] * w[1]),
        Ok(vec![2, 12])
    );
}

#[test]
fn test_windowed_rejects_non_positive_arguments() {
    assert_eq!(
        windowed(&[1, 2], 0, 1, true).unwrap_err().kind(),
        ErrorKind::InvalidArgument
    );
    assert_eq!(
        windowed(&[1, 2], 1, 0, true).unwrap_err().kind(),
        ErrorKind::InvalidArgument
    );
}

// ============================================================================
// Slice Tests
// ============================================================================

#[test]
fn test_slice_ranges() {
    let values = [10, 20, 30, 40];
    assert_eq!(slice(&values, 1..3), Ok(vec![20, 30]));
    assert_eq!(slice(&values, ..=1), Ok(vec![10, 20]));
    assert_eq!(slice(&values, 2..), Ok(vec![30, 40]));
    assert_eq!(slice(&values, 4..4), Ok(vec![]));
}

#[test]
fn test_slice_rejects_bad_ranges() {
    let values = [10, 20, 30];
    let err = slice(&values, 1..5).unwrap_err();
    assert_eq!(
        err,
        SeqError::IndexOutOfRange {
            op: "slice",
            index: 5,
            len: 3,
        }
    );

    #[allow(clippy::reversed_empty_ranges)]
    let reversed = 2..1;
    assert_eq!(slice(&values, reversed).unwrap_err().kind(), ErrorKind::InvalidArgument);
}
