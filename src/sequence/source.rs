//! Elementary sequence sources.

use std::fmt;
use std::marker::PhantomData;

use super::Sequence;

/// A sequence that produces nothing.
///
/// Created by [`empty`].
pub struct Empty<T> {
    _marker: PhantomData<fn() -> T>,
}

/// Creates a sequence that produces nothing.
///
/// # Examples
///
/// ```rust
/// use lazyfn::sequence::{Sequence, empty};
///
/// let mut nothing = empty::<i32>();
/// assert_eq!(nothing.resume(), None);
/// ```
#[inline]
#[must_use]
pub const fn empty<T>() -> Empty<T> {
    Empty {
        _marker: PhantomData,
    }
}

impl<T> Sequence for Empty<T> {
    type Item = T;

    #[inline]
    fn resume(&mut self) -> Option<T> {
        None
    }

    #[inline]
    fn release(&mut self) {}

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(0))
    }
}

impl<T> Clone for Empty<T> {
    fn clone(&self) -> Self {
        empty()
    }
}

impl<T> fmt::Debug for Empty<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Empty")
    }
}

/// A sequence of at most one element.
///
/// This is the sequence both containers turn into: a present value yields one
/// element, an absent one yields nothing.
#[derive(Debug, Clone)]
pub struct Single<T> {
    slot: Option<T>,
}

impl<T> Single<T> {
    /// Creates a sequence yielding the contents of `slot`, if any.
    #[inline]
    pub const fn new(slot: Option<T>) -> Self {
        Self { slot }
    }
}

/// Creates a sequence yielding exactly `value`.
///
/// # Examples
///
/// ```rust
/// use lazyfn::sequence::{collect, once};
///
/// assert_eq!(collect(once("hello")), vec!["hello"]);
/// ```
#[inline]
pub const fn once<T>(value: T) -> Single<T> {
    Single::new(Some(value))
}

impl<T> Sequence for Single<T> {
    type Item = T;

    #[inline]
    fn resume(&mut self) -> Option<T> {
        self.slot.take()
    }

    #[inline]
    fn release(&mut self) {
        self.slot = None;
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::from(self.slot.is_some());
        (remaining, Some(remaining))
    }
}

/// A sequence over the elements of an iterator.
///
/// Created by [`values`]; this is also what `Vec<T>` turns into.
#[derive(Debug, Clone)]
pub struct Values<I> {
    source: Option<I>,
}

/// Creates a sequence over anything that can be iterated.
///
/// # Examples
///
/// ```rust
/// use lazyfn::sequence::{sum, values};
///
/// assert_eq!(sum(values([1, 2, 3])), 6);
/// ```
#[inline]
pub fn values<I: IntoIterator>(iterable: I) -> Values<I::IntoIter> {
    Values {
        source: Some(iterable.into_iter()),
    }
}

impl<I: Iterator> Sequence for Values<I> {
    type Item = I::Item;

    fn resume(&mut self) -> Option<Self::Item> {
        let element = self.source.as_mut()?.next();
        if element.is_none() {
            self.source = None;
        }
        element
    }

    fn release(&mut self) {
        self.source = None;
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.source
            .as_ref()
            .map_or((0, Some(0)), Iterator::size_hint)
    }
}

/// A sequence driven by a stepping closure.
///
/// Created by [`from_fn`].
pub struct FromFn<F> {
    generator: Option<F>,
}

/// Creates a sequence from a closure that returns the next element, or
/// `None` when it is done.
///
/// The closure is dropped the first time it returns `None`, so it is never
/// called again.
///
/// # Examples
///
/// ```rust
/// use lazyfn::sequence::{Sequence, from_fn};
///
/// let mut state = 1;
/// let mut powers = from_fn(move || {
///     let current = state;
///     state *= 2;
///     Some(current)
/// });
///
/// let mut seen = Vec::new();
/// powers.for_each_while(|value| {
///     seen.push(value);
///     value < 8
/// });
/// assert_eq!(seen, vec![1, 2, 4, 8]);
/// ```
#[inline]
pub const fn from_fn<T, F>(generator: F) -> FromFn<F>
where
    F: FnMut() -> Option<T>,
{
    FromFn {
        generator: Some(generator),
    }
}

impl<T, F> Sequence for FromFn<F>
where
    F: FnMut() -> Option<T>,
{
    type Item = T;

    fn resume(&mut self) -> Option<T> {
        let element = (self.generator.as_mut()?)();
        if element.is_none() {
            self.generator = None;
        }
        element
    }

    fn release(&mut self) {
        self.generator = None;
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.generator.is_some() {
            (0, None)
        } else {
            (0, Some(0))
        }
    }
}

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("FromFn")
            .field("running", &self.generator.is_some())
            .finish()
    }
}
