#![cfg(feature = "persistent")]

//! Integration tests for the persistent `List`.

use lazyfn::persistent::{IndexOutOfRange, List};
use lazyfn::sequence::{collect, filter, range, reverse, sum, zip};
use rstest::rstest;

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn test_new_list_is_empty() {
    let list: List<i32> = List::new();
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
    assert_eq!(list.head(), None);
}

#[rstest]
fn test_singleton() {
    let list = List::singleton("only");
    assert_eq!(list.len(), 1);
    assert_eq!(list.head(), Some(&"only"));
    assert!(list.tail().is_empty());
}

#[rstest]
fn test_prepend_and_append() {
    let list = List::singleton(2).prepend(1).append(3);
    assert_eq!(list.to_string(), "[1, 2, 3]");
    assert_eq!(list.len(), 3);
}

#[rstest]
fn test_versions_are_independent() {
    let base: List<i32> = vec![1, 2, 3].into_iter().collect();
    let front = base.prepend(0);
    let back = base.append(4);
    let trimmed = base.tail();

    assert_eq!(base.to_string(), "[1, 2, 3]");
    assert_eq!(front.to_string(), "[0, 1, 2, 3]");
    assert_eq!(back.to_string(), "[1, 2, 3, 4]");
    assert_eq!(trimmed.to_string(), "[2, 3]");
}

// =============================================================================
// Lookup
// =============================================================================

#[rstest]
#[case(0, Ok(&'a'))]
#[case(2, Ok(&'c'))]
#[case(3, Err(IndexOutOfRange { index: 3, length: 3 }))]
fn test_get(#[case] index: usize, #[case] expected: Result<&'static char, IndexOutOfRange>) {
    let list: List<char> = "abc".chars().collect();
    assert_eq!(list.get(index), expected);
}

#[rstest]
fn test_get_error_converts_to_boxed_error() {
    fn third(list: &List<u8>) -> Result<u8, Box<dyn std::error::Error>> {
        Ok(*list.get(2)?)
    }
    let short: List<u8> = vec![1].into_iter().collect();
    let error = third(&short).unwrap_err();
    assert_eq!(error.to_string(), "index 2 out of range for list of length 1");
}

// =============================================================================
// Traversal
// =============================================================================

#[rstest]
fn test_each_and_filter() {
    let list: List<i32> = (1..=6).collect();
    let mut total = 0;
    list.each(|value| total += value);
    assert_eq!(total, 21);
    assert_eq!(list.filter(|value| value % 2 == 0).to_string(), "[2, 4, 6]");
    assert_eq!(list.len(), 6);
}

#[rstest]
fn test_display_and_debug() {
    let list: List<&str> = vec!["a", "b"].into_iter().collect();
    assert_eq!(format!("{list}"), "[a, b]");
    assert_eq!(format!("{list:?}"), r#"["a", "b"]"#);
}

// =============================================================================
// Sequence interop
// =============================================================================

#[rstest]
fn test_list_feeds_combinators() {
    let list: List<i32> = (0..10).collect();
    assert_eq!(sum(filter(list.clone(), |value: &i32| value % 2 == 1)), 25);
    assert_eq!(collect(reverse(list.clone())), (0..10).rev().collect::<Vec<_>>());
    assert_eq!(collect(zip(&list, range(100, 102))), vec![(&0, 100), (&1, 101)]);
}

#[rstest]
fn test_from_sequence_preserves_order() {
    let list = List::from_sequence(filter(range(0, 20), |value: &i32| value % 5 == 0));
    assert_eq!(list.to_string(), "[0, 5, 10, 15]");
}
