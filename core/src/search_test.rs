//! Tests for element access and search

use super::*;
use crate::error::ErrorKind;
use crate::test_utils::init_test_logging;
use alloc::{vec, vec::Vec};
use pretty_assertions::assert_eq;

#[test]
fn test_element_at_and_fallbacks() {
    init_test_logging();

    let values = [10, 20, 30];
    assert_eq!(element_at(&values, 1), Ok(&20));
    assert_eq!(
        element_at(&values, 3),
        Err(SeqError::IndexOutOfRange {
            op: "element_at",
            index: 3,
            len: 3,
        })
    );
    assert_eq!(get_or_null(&values, 3), None);
    assert_eq!(element_at_or_else(&values, 7, |index| -(index as i32)), -7);
    assert_eq!(element_at_or_else(&values, 0, |_| 0), 10);

    let absent: Option<Vec<i32>> = None;
    assert_eq!(element_at(&absent, 0).unwrap_err().kind(), ErrorKind::IndexOutOfRange);
}

#[test]
fn test_first_and_last() {
    let values = vec!['a', 'b', 'c'];
    assert_eq!(first(&values), Ok(&'a'));
    assert_eq!(last(&values), Ok(&'c'));

    let empty: [char; 0] = [];
    assert_eq!(first(&empty).unwrap_err().kind(), ErrorKind::EmptyInput);
    assert_eq!(last(&empty).unwrap_err().op(), "last");
    assert_eq!(first_or_null(&empty), None);
    assert_eq!(last_or_null(&empty), None);
}

#[test]
fn test_matching_accessors() {
    let values = [1, 4, 6, 7];
    assert_eq!(first_matching(&values, |x| x % 2 == 0), Ok(&4));
    assert_eq!(last_matching(&values, |x| x % 2 == 0), Ok(&6));
    assert_eq!(find(&values, |&x| x > 10), None);
    assert_eq!(find_last(&values, |&x| x < 5), Some(&4));
    assert_eq!(
        first_matching(&values, |&x| x > 10).unwrap_err().kind(),
        ErrorKind::EmptyInput
    );
}

#[test]
fn test_single_variants() {
    assert_eq!(single(&[42]), Ok(&42));
    assert_eq!(single(&[1, 2]).unwrap_err().kind(), ErrorKind::AmbiguousMatch);

    let empty: [i32; 0] = [];
    assert_eq!(single(&empty).unwrap_err().kind(), ErrorKind::EmptyInput);
    assert_eq!(single_or_null(&empty), None);
    assert_eq!(single_or_null(&[1, 2]), None);
}

#[test]
fn test_single_matching_stops_at_second_match() {
    let mut calls = 0;
    let err = single_matching(&[2, 4, 6, 8], |x| {
        calls += 1;
        x % 2 == 0
    })
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AmbiguousMatch);
    assert_eq!(calls, 2);

    assert_eq!(single_matching(&[1, 2, 3], |&x| x == 2), Ok(&2));
    assert_eq!(single_matching_or_null(&[2, 4], |x| x % 2 == 0), None);
    assert_eq!(single_matching_or_null(&[1, 3], |x| x % 2 == 0), None);
    assert_eq!(single_matching_or_null(&[1, 4], |x| x % 2 == 0), Some(&4));
}

#[test]
fn test_index_lookup() {
    let values = ["a", "b", "a", "c"];
    assert_eq!(index_of(&values, &"a"), Some(0));
    assert_eq!(last_index_of(&values, &"a"), Some(2));
    assert_eq!(index_of(&values, &"z"), None);
    assert_eq!(index_of_first(&values, |s| *s > "a"), Some(1));
    assert_eq!(index_of_last(&values, |s| *s > "a"), Some(3));
}

#[test]
fn test_existence_checks() {
    assert!(contains(&[1, 2, 3], &2));
    assert!(!contains(&[f64::NAN], &f64::NAN));

    let absent: Option<Vec<u8>> = None;
    let empty: Option<Vec<u8>> = Some(vec![]);
    let filled: Option<Vec<u8>> = Some(vec![1]);

    assert!(is_empty(&absent));
    assert!(is_null_or_empty(&absent));
    assert!(is_null_or_empty(&empty));
    assert!(!is_null_or_empty(&filled));
    assert!(is_not_empty(&filled));
    assert!(!is_not_empty(&empty));
}
