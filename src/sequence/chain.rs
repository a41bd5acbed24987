//! Concatenation of sequences.

use super::{IntoSequence, Sequence};

/// Two sequences back to back.
///
/// Created by [`Sequence::chain`] and the [`chain!`](crate::chain!) macro.
/// The second sequence is not touched until the first is exhausted, and the
/// first is released as soon as it runs out.
#[derive(Debug, Clone)]
pub struct Chain<A, B> {
    first: Option<A>,
    second: Option<B>,
}

impl<A, B> Chain<A, B>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
{
    /// Creates a sequence yielding all of `first`, then all of `second`.
    #[inline]
    pub const fn new(first: A, second: B) -> Self {
        Self {
            first: Some(first),
            second: Some(second),
        }
    }
}

impl<A, B> Sequence for Chain<A, B>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
{
    type Item = A::Item;

    fn resume(&mut self) -> Option<Self::Item> {
        if let Some(first) = self.first.as_mut() {
            if let Some(element) = first.resume() {
                return Some(element);
            }
            self.first = None;
        }
        let element = self.second.as_mut()?.resume();
        if element.is_none() {
            self.second = None;
        }
        element
    }

    fn feed(&mut self, consumer: &mut dyn FnMut(Self::Item) -> bool) -> bool {
        if let Some(first) = self.first.as_mut() {
            if !first.feed(consumer) {
                return false;
            }
            self.first = None;
        }
        if let Some(second) = self.second.as_mut() {
            if !second.feed(consumer) {
                return false;
            }
            self.second = None;
        }
        true
    }

    fn release(&mut self) {
        if let Some(mut first) = self.first.take() {
            first.release();
        }
        if let Some(mut second) = self.second.take() {
            second.release();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (first_lower, first_upper) =
            self.first.as_ref().map_or((0, Some(0)), A::size_hint);
        let (second_lower, second_upper) =
            self.second.as_ref().map_or((0, Some(0)), B::size_hint);
        let lower = first_lower.saturating_add(second_lower);
        let upper = first_upper
            .zip(second_upper)
            .and_then(|(first, second)| first.checked_add(second));
        (lower, upper)
    }
}

/// Any number of sequences of the same type, back to back.
///
/// Created by [`chain`].
#[derive(Debug, Clone)]
pub struct ChainAll<I, S> {
    pending: Option<I>,
    current: Option<S>,
}

/// Concatenates a collection of sequences.
///
/// Yields every element of the first sequence, then every element of the
/// second, and so on. A sequence is not started until all earlier ones are
/// exhausted, so stopping early never touches the later ones. An empty
/// collection gives an empty sequence.
///
/// For sequences of different types, use [`chain!`](crate::chain!).
///
/// # Examples
///
/// ```rust
/// use lazyfn::sequence::{Range, chain, collect, range};
///
/// let joined = chain([range(0, 2), range(10, 12)]);
/// assert_eq!(collect(joined), vec![0, 1, 10, 11]);
///
/// let nothing = chain(Vec::<Range<i32>>::new());
/// assert!(collect(nothing).is_empty());
/// ```
pub fn chain<I>(sequences: I) -> ChainAll<I::IntoIter, <I::Item as IntoSequence>::IntoSeq>
where
    I: IntoIterator,
    I::Item: IntoSequence,
{
    ChainAll {
        pending: Some(sequences.into_iter()),
        current: None,
    }
}

impl<I, S> ChainAll<I, S>
where
    I: Iterator,
    I::Item: IntoSequence<IntoSeq = S>,
    S: Sequence,
{
    fn advance(&mut self) -> Option<&mut S> {
        if self.current.is_none() {
            let next = self.pending.as_mut()?.next();
            let Some(next) = next else {
                self.pending = None;
                return None;
            };
            self.current = Some(next.into_sequence());
        }
        self.current.as_mut()
    }
}

impl<I, S> Sequence for ChainAll<I, S>
where
    I: Iterator,
    I::Item: IntoSequence<IntoSeq = S>,
    S: Sequence,
{
    type Item = S::Item;

    fn resume(&mut self) -> Option<Self::Item> {
        while let Some(current) = self.advance() {
            if let Some(element) = current.resume() {
                return Some(element);
            }
            self.current = None;
        }
        None
    }

    fn feed(&mut self, consumer: &mut dyn FnMut(Self::Item) -> bool) -> bool {
        while let Some(current) = self.advance() {
            if !current.feed(consumer) {
                return false;
            }
            self.current = None;
        }
        true
    }

    fn release(&mut self) {
        if let Some(mut current) = self.current.take() {
            current.release();
        }
        self.pending = None;
    }
}
