//! Back-to-front traversal of a finite sequence.

use std::fmt;

use super::{IntoSequence, Sequence};

enum ReverseState<S, T> {
    Pending(S),
    Buffered(Vec<T>),
    Released,
}

/// A sequence yielding its source's elements in reverse order.
///
/// Created by [`reverse`] and [`Sequence::reverse`].
pub struct Reverse<S: Sequence> {
    state: ReverseState<S, S::Item>,
}

impl<S: Sequence> Reverse<S> {
    pub(super) const fn new(source: S) -> Self {
        Self {
            state: ReverseState::Pending(source),
        }
    }

    fn buffer(&mut self) -> Option<&mut Vec<S::Item>> {
        if let ReverseState::Pending(source) = &mut self.state {
            let mut buffer = Vec::with_capacity(source.size_hint().0);
            source.feed(&mut |element| {
                buffer.push(element);
                true
            });
            source.release();
            tracing::trace!(
                target: "lazyfn::reverse",
                buffered = buffer.len(),
                "materialized reverse buffer"
            );
            self.state = ReverseState::Buffered(buffer);
        }
        match &mut self.state {
            ReverseState::Buffered(buffer) => Some(buffer),
            ReverseState::Pending(_) | ReverseState::Released => None,
        }
    }
}

/// Yields the elements of `sequence` from last to first.
///
/// Nothing is read until the first element is requested. At that point the
/// whole source is materialized into a buffer, which is then drained from the
/// back.
///
/// The source must be finite: reversing an infinite sequence never returns.
///
/// # Examples
///
/// ```rust
/// use lazyfn::sequence::{collect, range, reverse};
///
/// assert_eq!(collect(reverse(vec![1, 2, 3])), vec![3, 2, 1]);
/// assert_eq!(collect(reverse(reverse(range(0, 4)))), vec![0, 1, 2, 3]);
/// ```
#[inline]
pub fn reverse<S: IntoSequence>(sequence: S) -> Reverse<S::IntoSeq> {
    Reverse::new(sequence.into_sequence())
}

impl<S: Sequence> Sequence for Reverse<S> {
    type Item = S::Item;

    fn resume(&mut self) -> Option<S::Item> {
        let element = self.buffer()?.pop();
        if element.is_none() {
            self.state = ReverseState::Released;
        }
        element
    }

    fn release(&mut self) {
        if let ReverseState::Pending(source) = &mut self.state {
            source.release();
        }
        self.state = ReverseState::Released;
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.state {
            ReverseState::Pending(source) => source.size_hint(),
            ReverseState::Buffered(buffer) => (buffer.len(), Some(buffer.len())),
            ReverseState::Released => (0, Some(0)),
        }
    }
}

impl<S: Sequence> fmt::Debug for Reverse<S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match &self.state {
            ReverseState::Pending(_) => "Pending",
            ReverseState::Buffered(_) => "Buffered",
            ReverseState::Released => "Released",
        };
        formatter
            .debug_struct("Reverse")
            .field("state", &state)
            .finish()
    }
}
