//! Property-based tests for the sequence combinators.
//!
//! Each combinator is checked against the equivalent `std::iter` pipeline
//! over materialized vectors.

use lazyfn::chain;
use lazyfn::sequence::{
    IntoSequence, Sequence, collect, count, enumerate, filter, map, pull, range, reduce, reverse,
    step_range, sum, values, zip,
};
use proptest::prelude::*;

fn small_vector() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-1000..1000_i32, 0..40)
}

proptest! {
    // =========================================================================
    // Generators
    // =========================================================================

    #[test]
    fn prop_range_length_is_distance(start in -500..500_i64, end in -500..500_i64) {
        let expected = usize::try_from((end - start).max(0)).unwrap();
        prop_assert_eq!(count(range(start, end)), expected);
    }

    #[test]
    fn prop_range_matches_std(start in -200..200_i32, end in -200..200_i32) {
        prop_assert_eq!(collect(range(start, end)), (start..end).collect::<Vec<_>>());
    }

    #[test]
    fn prop_step_range_matches_std_step_by(start in 0..200_i32, end in 0..200_i32, step in 1..20_i32) {
        let expected: Vec<i32> = (start..end).step_by(usize::try_from(step).unwrap()).collect();
        prop_assert_eq!(collect(step_range(start, end, step)), expected);
    }

    #[test]
    fn prop_descending_step_range_is_reversed_ascending(start in -100..100_i32, end in -100..100_i32) {
        let descending = collect(step_range(end, start, -1));
        let ascending: Vec<i32> = ((start + 1)..=end).rev().collect();
        prop_assert_eq!(descending, ascending);
    }

    // =========================================================================
    // Chain
    // =========================================================================

    #[test]
    fn prop_chain_is_concatenation(first in small_vector(), second in small_vector()) {
        let mut expected = first.clone();
        expected.extend(second.iter().copied());
        prop_assert_eq!(collect(chain!(first, second)), expected);
    }

    #[test]
    fn prop_chain_is_associative(a in small_vector(), b in small_vector(), c in small_vector()) {
        let left = collect(chain!(chain!(a.clone(), b.clone()), c.clone()));
        let right = collect(chain!(a, chain!(b, c)));
        prop_assert_eq!(left, right);
    }

    // =========================================================================
    // Map / Filter / Enumerate
    // =========================================================================

    #[test]
    fn prop_map_matches_std(elements in small_vector()) {
        let expected: Vec<i64> = elements.iter().map(|value| i64::from(*value) * 3).collect();
        prop_assert_eq!(collect(map(elements, |value| i64::from(value) * 3)), expected);
    }

    #[test]
    fn prop_map_composition(elements in small_vector()) {
        let composed = collect(map(elements.clone(), |value| (value + 1) * 2));
        let sequential = collect(map(map(elements, |value| value + 1), |value| value * 2));
        prop_assert_eq!(composed, sequential);
    }

    #[test]
    fn prop_filter_matches_std(elements in small_vector(), modulus in 1..7_i32) {
        let expected: Vec<i32> = elements.iter().copied().filter(|value| value % modulus == 0).collect();
        let actual = collect(filter(elements, |value: &i32| value % modulus == 0));
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_enumerate_indices_are_positions(elements in small_vector()) {
        for (index, element) in collect(enumerate(elements.clone())) {
            prop_assert_eq!(elements[index], element);
        }
    }

    // =========================================================================
    // Zip
    // =========================================================================

    #[test]
    fn prop_zip_length_is_minimum(left in small_vector(), right in small_vector()) {
        let expected = left.len().min(right.len());
        prop_assert_eq!(count(zip(left, right)), expected);
    }

    #[test]
    fn prop_zip_matches_std(left in small_vector(), right in small_vector()) {
        let expected: Vec<(i32, i32)> = left.iter().copied().zip(right.iter().copied()).collect();
        prop_assert_eq!(collect(zip(left, right)), expected);
    }

    // =========================================================================
    // Reverse
    // =========================================================================

    #[test]
    fn prop_reverse_is_involution(elements in small_vector()) {
        prop_assert_eq!(collect(reverse(reverse(elements.clone()))), elements);
    }

    #[test]
    fn prop_reverse_matches_std(elements in small_vector()) {
        let expected: Vec<i32> = elements.iter().rev().copied().collect();
        prop_assert_eq!(collect(reverse(elements)), expected);
    }

    // =========================================================================
    // Folds
    // =========================================================================

    #[test]
    fn prop_sum_matches_std(elements in small_vector()) {
        prop_assert_eq!(sum(elements.clone()), elements.iter().sum::<i32>());
    }

    #[test]
    fn prop_reduce_is_left_fold(elements in small_vector()) {
        let expected = elements.iter().fold(Vec::new(), |mut seen, value| {
            seen.push(*value);
            seen
        });
        let actual = reduce(elements, Vec::new(), |mut seen, value| {
            seen.push(value);
            seen
        });
        prop_assert_eq!(actual, expected);
    }

    // =========================================================================
    // Push / Pull agreement
    // =========================================================================

    #[test]
    fn prop_pull_and_push_agree(elements in small_vector()) {
        let pushed = collect(values(elements.clone()));
        let pulled: Vec<i32> = pull(elements).collect();
        prop_assert_eq!(pushed, pulled);
    }

    #[test]
    fn prop_early_stop_leaves_remainder(elements in small_vector(), take in 0..40_usize) {
        let mut sequence = elements.clone().into_sequence();
        let mut seen = Vec::new();
        if take > 0 {
            sequence.for_each_while(|value| {
                seen.push(value);
                seen.len() < take
            });
        }
        let remainder = collect(&mut sequence);
        let stop = take.min(elements.len());
        prop_assert_eq!(&seen[..], &elements[..stop]);
        prop_assert_eq!(&remainder[..], &elements[stop..]);
    }
}
