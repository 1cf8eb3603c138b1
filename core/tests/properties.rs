//! Property tests for the sequence invariants.

use proptest::prelude::*;
use seqkit_core::window::drop;
use seqkit_core::{
    distinct, filter, group_by, map, partition, sorted, sorted_by, take, take_last, to_set,
    zip,
};

proptest! {
    #[test]
    fn prop_map_preserves_length(values in prop::collection::vec(any::<i32>(), 0..100)) {
        let mapped = map(&values, |x| x.wrapping_mul(3));
        prop_assert_eq!(mapped.len(), values.len());
    }

    #[test]
    fn prop_filter_is_an_ordered_subsequence(values in prop::collection::vec(any::<i16>(), 0..100)) {
        let kept = filter(&values, |x| x % 3 == 0);
        prop_assert!(kept.len() <= values.len());

        let mut rest = values.iter();
        for item in &kept {
            prop_assert!(rest.any(|candidate| candidate == item));
        }
    }

    #[test]
    fn prop_zip_length_is_minimum(
        left in prop::collection::vec(any::<u8>(), 0..50),
        right in prop::collection::vec(any::<char>(), 0..50),
    ) {
        prop_assert_eq!(zip(&left, &right).len(), left.len().min(right.len()));
    }

    #[test]
    fn prop_partition_splits_without_loss(values in prop::collection::vec(any::<i32>(), 0..100)) {
        let (even, odd) = partition(&values, |x| x % 2 == 0);
        prop_assert_eq!(even.len() + odd.len(), values.len());
        prop_assert_eq!(even, filter(&values, |x| x % 2 == 0));
    }

    #[test]
    fn prop_distinct_is_idempotent(values in prop::collection::vec(0u8..16, 0..100)) {
        let once = distinct(&values);
        prop_assert_eq!(distinct(&once), once.clone());

        let via_set: Vec<u8> = to_set(&values).into_iter().collect();
        prop_assert_eq!(via_set, once);
    }

    #[test]
    fn prop_sorted_is_ordered_permutation(values in prop::collection::vec(any::<i64>(), 0..100)) {
        let out = sorted(&values);
        prop_assert_eq!(out.len(), values.len());
        prop_assert!(out.windows(2).all(|pair| pair[0] <= pair[1]));

        let mut expected = values.clone();
        expected.sort();
        prop_assert_eq!(out, expected);
    }

    #[test]
    fn prop_sorted_by_is_stable(values in prop::collection::vec((0u8..4, any::<u16>()), 0..60)) {
        let tagged: Vec<(u8, usize)> = values
            .iter()
            .enumerate()
            .map(|(position, (key, _))| (*key, position))
            .collect();
        let out = sorted_by(&tagged, |pair| pair.0);
        for pair in out.windows(2) {
            if pair[0].0 == pair[1].0 {
                prop_assert!(pair[0].1 < pair[1].1);
            }
        }
    }

    #[test]
    fn prop_take_and_drop_recombine(
        values in prop::collection::vec(any::<i32>(), 0..50),
        n in 0usize..80,
    ) {
        let mut joined = take(&values, n).unwrap_or_default();
        joined.extend(drop(&values, n).unwrap_or_default());
        prop_assert_eq!(joined, values.clone());

        let tail = take_last(&values, n).unwrap_or_default();
        prop_assert_eq!(tail.len(), n.min(values.len()));
    }

    #[test]
    fn prop_negative_counts_always_fail(values in prop::collection::vec(any::<i32>(), 0..10), n in i32::MIN..0) {
        prop_assert!(take(&values, n).is_err());
        prop_assert!(drop(&values, n).is_err());
    }

    #[test]
    fn prop_group_by_covers_every_element(values in prop::collection::vec(any::<u32>(), 0..100)) {
        let groups = group_by(&values, |x| x % 5);
        let total: usize = groups.values().map(Vec::len).sum();
        prop_assert_eq!(total, values.len());

        let flattened: Vec<u32> = groups.values().flatten().copied().collect();
        let mut expected = values.clone();
        expected.sort_by_key(|x| groups.get_index_of(&(x % 5)));
        prop_assert_eq!(flattened, expected);
    }
}
