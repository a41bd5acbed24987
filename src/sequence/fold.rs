//! Terminal operations that drive a sequence to a single result.

use super::{IntoSequence, Numeric, Sequence};

/// Folds a sequence from the left.
///
/// Starts from `seed` and replaces the accumulator with
/// `combine(accumulator, element)` for every element in order. An empty
/// sequence returns `seed` unchanged.
///
/// # Examples
///
/// ```rust
/// use lazyfn::sequence::{range, reduce};
///
/// let factorial = reduce(range(1, 6), 1, |product, value| product * value);
/// assert_eq!(factorial, 120);
///
/// let joined = reduce(vec!["a", "b"], String::new(), |mut text, piece| {
///     text.push_str(piece);
///     text
/// });
/// assert_eq!(joined, "ab");
/// ```
pub fn reduce<S, A, F>(sequence: S, seed: A, mut combine: F) -> A
where
    S: IntoSequence,
    F: FnMut(A, S::Item) -> A,
{
    let mut sequence = sequence.into_sequence();
    let mut accumulator = seed;
    while let Some(element) = sequence.resume() {
        accumulator = combine(accumulator, element);
    }
    accumulator
}

/// Adds up a numeric sequence. An empty sequence sums to zero.
///
/// # Panics
///
/// Like [`Iterator::sum`], integer overflow panics when overflow checks are
/// enabled (debug builds) and wraps otherwise. Ranges stop before they
/// overflow, but their sum can still exceed the element type.
///
/// # Examples
///
/// ```rust
/// use lazyfn::sequence::{range, sum};
///
/// assert_eq!(sum(range(0, 100)), 4950);
/// assert_eq!(sum(range(0, 0)), 0);
/// assert_eq!(sum(vec![0.5, 0.25]), 0.75);
/// ```
#[inline]
pub fn sum<S>(sequence: S) -> S::Item
where
    S: IntoSequence,
    S::Item: Numeric,
{
    reduce(sequence, <S::Item as Numeric>::ZERO, |total, element| {
        total + element
    })
}

/// Counts the elements of a sequence.
///
/// # Examples
///
/// ```rust
/// use lazyfn::sequence::{count, filter, range};
///
/// assert_eq!(count(filter(range(0, 10), |value: &i32| value % 3 == 0)), 4);
/// ```
pub fn count<S: IntoSequence>(sequence: S) -> usize {
    let mut total = 0;
    sequence.into_sequence().feed(&mut |_| {
        total += 1;
        true
    });
    total
}

/// Returns `true` if the sequence is non-empty and every element is `true`.
///
/// Stops at the first `false`. An empty sequence gives `false`, since there is
/// nothing to vouch for.
///
/// # Examples
///
/// ```rust
/// use lazyfn::sequence::{all, empty, map, range};
///
/// assert!(all(map(range(0, 5), |value| value < 5)));
/// assert!(!all(vec![true, false, true]));
/// assert!(!all(empty::<bool>()));
/// ```
pub fn all<S>(sequence: S) -> bool
where
    S: IntoSequence<Item = bool>,
{
    let mut seen_any = false;
    let exhausted = sequence.into_sequence().feed(&mut |element| {
        seen_any = true;
        element
    });
    exhausted && seen_any
}

/// Materializes a sequence into a vector, preserving order.
///
/// # Examples
///
/// ```rust
/// use lazyfn::sequence::{collect, range};
///
/// assert_eq!(collect(range(0, 3)), vec![0, 1, 2]);
/// ```
pub fn collect<S: IntoSequence>(sequence: S) -> Vec<S::Item> {
    let mut sequence = sequence.into_sequence();
    let mut elements = Vec::with_capacity(sequence.size_hint().0);
    sequence.feed(&mut |element| {
        elements.push(element);
        true
    });
    elements
}
