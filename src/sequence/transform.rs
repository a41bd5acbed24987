//! Element-wise transformations: `map`, `filter` and `enumerate`.
//!
//! Each adapter forwards the push protocol straight to its source: the
//! consumer's stop signal travels back through the adapter unchanged, so the
//! source stops producing on the same element the consumer rejected.

use std::fmt;

use super::{IntoSequence, Sequence};

/// Applies a function to every element.
///
/// Created by [`map`] and [`Sequence::map`].
#[derive(Clone)]
pub struct Map<S, F> {
    source: S,
    function: F,
}

impl<S, F> Map<S, F> {
    pub(super) const fn new(source: S, function: F) -> Self {
        Self { source, function }
    }
}

/// Yields `function(element)` for each element of `sequence`.
///
/// The function runs exactly once per consumed element, at the moment the
/// element is consumed.
///
/// # Examples
///
/// ```rust
/// use lazyfn::sequence::{collect, map, range};
///
/// let doubled = map(range(1, 4), |value| value * 2);
/// assert_eq!(collect(doubled), vec![2, 4, 6]);
/// ```
#[inline]
pub fn map<S, B, F>(sequence: S, function: F) -> Map<S::IntoSeq, F>
where
    S: IntoSequence,
    F: FnMut(S::Item) -> B,
{
    Map::new(sequence.into_sequence(), function)
}

impl<S, B, F> Sequence for Map<S, F>
where
    S: Sequence,
    F: FnMut(S::Item) -> B,
{
    type Item = B;

    #[inline]
    fn resume(&mut self) -> Option<B> {
        self.source.resume().map(&mut self.function)
    }

    fn feed(&mut self, consumer: &mut dyn FnMut(B) -> bool) -> bool {
        let Self { source, function } = self;
        source.feed(&mut |element| consumer(function(element)))
    }

    #[inline]
    fn release(&mut self) {
        self.source.release();
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.source.size_hint()
    }
}

impl<S: fmt::Debug, F> fmt::Debug for Map<S, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Map")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

/// Keeps only the elements matching a predicate.
///
/// Created by [`filter`] and [`Sequence::filter`].
#[derive(Clone)]
pub struct Filter<S, P> {
    source: S,
    predicate: P,
}

impl<S, P> Filter<S, P> {
    pub(super) const fn new(source: S, predicate: P) -> Self {
        Self { source, predicate }
    }
}

/// Yields the elements of `sequence` for which `predicate` returns `true`,
/// in their original order.
///
/// The predicate runs exactly once per source element, and only up to the
/// element at which the consumer stops.
///
/// # Examples
///
/// ```rust
/// use lazyfn::sequence::{collect, filter, range};
///
/// let evens = filter(range(0, 10), |value: &i32| value % 2 == 0);
/// assert_eq!(collect(evens), vec![0, 2, 4, 6, 8]);
/// ```
#[inline]
pub fn filter<S, P>(sequence: S, predicate: P) -> Filter<S::IntoSeq, P>
where
    S: IntoSequence,
    P: FnMut(&S::Item) -> bool,
{
    Filter::new(sequence.into_sequence(), predicate)
}

impl<S, P> Sequence for Filter<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn resume(&mut self) -> Option<S::Item> {
        while let Some(element) = self.source.resume() {
            if (self.predicate)(&element) {
                return Some(element);
            }
        }
        None
    }

    fn feed(&mut self, consumer: &mut dyn FnMut(S::Item) -> bool) -> bool {
        let Self { source, predicate } = self;
        source.feed(&mut |element| !predicate(&element) || consumer(element))
    }

    #[inline]
    fn release(&mut self) {
        self.source.release();
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.source.size_hint().1)
    }
}

impl<S: fmt::Debug, P> fmt::Debug for Filter<S, P> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Filter")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

/// Pairs every element with its position.
///
/// Created by [`enumerate`] and [`Sequence::enumerate`].
#[derive(Debug, Clone)]
pub struct Enumerate<S> {
    source: S,
    index: usize,
}

impl<S> Enumerate<S> {
    pub(super) const fn new(source: S) -> Self {
        Self { source, index: 0 }
    }
}

/// Yields `(index, element)` pairs, counting from zero in source order.
///
/// # Examples
///
/// ```rust
/// use lazyfn::sequence::{collect, enumerate};
///
/// let indexed = enumerate(vec!["a", "b"]);
/// assert_eq!(collect(indexed), vec![(0, "a"), (1, "b")]);
/// ```
#[inline]
pub fn enumerate<S: IntoSequence>(sequence: S) -> Enumerate<S::IntoSeq> {
    Enumerate::new(sequence.into_sequence())
}

impl<S: Sequence> Sequence for Enumerate<S> {
    type Item = (usize, S::Item);

    fn resume(&mut self) -> Option<Self::Item> {
        let element = self.source.resume()?;
        let index = self.index;
        self.index += 1;
        Some((index, element))
    }

    fn feed(&mut self, consumer: &mut dyn FnMut(Self::Item) -> bool) -> bool {
        let Self { source, index } = self;
        source.feed(&mut |element| {
            let position = *index;
            *index += 1;
            consumer((position, element))
        })
    }

    #[inline]
    fn release(&mut self) {
        self.source.release();
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.source.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::{collect, range};
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_map_is_lazy() {
        let calls = Cell::new(0);
        let mut mapped = map(range(0, 10), |value| {
            calls.set(calls.get() + 1);
            value + 1
        });
        assert_eq!(calls.get(), 0);
        assert_eq!(mapped.resume(), Some(1));
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn test_map_push_stops_with_consumer() {
        let calls = Cell::new(0);
        let mut mapped = map(range(0, 10), |value| {
            calls.set(calls.get() + 1);
            value
        });
        mapped.for_each_while(|value| value < 2);
        assert_eq!(calls.get(), 3);
    }

    #[rstest]
    fn test_filter_resume_skips_rejected() {
        let mut odd = filter(range(0, 6), |value: &i32| value % 2 == 1);
        assert_eq!(odd.resume(), Some(1));
        assert_eq!(odd.resume(), Some(3));
        assert_eq!(odd.resume(), Some(5));
        assert_eq!(odd.resume(), None);
    }

    #[rstest]
    fn test_filter_push_calls_predicate_until_stop() {
        let checks = Cell::new(0);
        let mut evens = filter(range(0, 100), |value: &i32| {
            checks.set(checks.get() + 1);
            value % 2 == 0
        });
        let mut taken = Vec::new();
        evens.for_each_while(|value| {
            taken.push(value);
            taken.len() < 3
        });
        assert_eq!(taken, vec![0, 2, 4]);
        assert_eq!(checks.get(), 5);
    }

    #[rstest]
    fn test_enumerate_continues_index_across_calls() {
        let mut indexed = enumerate(range(10, 14));
        assert_eq!(indexed.resume(), Some((0, 10)));
        let rest = collect(&mut indexed);
        assert_eq!(rest, vec![(1, 11), (2, 12), (3, 13)]);
    }

    #[rstest]
    fn test_filter_size_hint_keeps_upper_bound() {
        let evens = filter(vec![1, 2, 3], |value: &i32| value % 2 == 0);
        assert_eq!(evens.size_hint(), (0, Some(3)));
    }
}
