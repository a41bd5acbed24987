#![cfg(feature = "persistent")]

//! Property-based tests for the persistent `List`.

use lazyfn::persistent::List;
use lazyfn::sequence::{collect, values};
use proptest::prelude::*;

// =============================================================================
// Strategy for generating List
// =============================================================================

/// Generates a `List<i32>` with up to `max_size` elements.
fn list_strategy(max_size: usize) -> impl Strategy<Value = List<i32>> {
    prop::collection::vec(any::<i32>(), 0..max_size).prop_map(|vector| vector.into_iter().collect())
}

fn small_list() -> impl Strategy<Value = List<i32>> {
    list_strategy(20)
}

proptest! {
    #[test]
    fn prop_len_matches_iter_count(list in small_list()) {
        prop_assert_eq!(list.len(), list.iter().count());
        prop_assert_eq!(list.is_empty(), list.len() == 0);
    }

    #[test]
    fn prop_prepend_puts_element_at_head(list in small_list(), element: i32) {
        let extended = list.prepend(element);
        prop_assert_eq!(extended.len(), list.len() + 1);
        prop_assert_eq!(extended.head(), Some(&element));
        prop_assert_eq!(extended.tail(), list);
    }

    #[test]
    fn prop_append_puts_element_last(list in small_list(), element: i32) {
        let extended = list.append(element);
        prop_assert_eq!(extended.get(list.len()), Ok(&element));
        prop_assert_eq!(extended.iter().take(list.len()).collect::<Vec<_>>(), list.iter().collect::<Vec<_>>());
    }

    #[test]
    fn prop_get_agrees_with_iter(list in small_list(), index in 0..25_usize) {
        prop_assert_eq!(list.get(index).ok(), list.iter().nth(index));
    }

    #[test]
    fn prop_filter_matches_std(list in small_list()) {
        let expected: Vec<i32> = list.iter().copied().filter(|value| value % 2 == 0).collect();
        let filtered = list.filter(|value| value % 2 == 0);
        prop_assert_eq!(filtered.iter().copied().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn prop_sequence_roundtrip(elements in prop::collection::vec(any::<i32>(), 0..20)) {
        let list = List::from_sequence(values(elements.clone()));
        prop_assert_eq!(collect(list), elements);
    }

    #[test]
    fn prop_display_matches_vector_debug(list in small_list()) {
        let elements: Vec<i32> = list.iter().copied().collect();
        prop_assert_eq!(list.to_string(), format!("{elements:?}"));
    }
}
