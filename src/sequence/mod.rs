//! Lazy sequences with a push protocol and a pull adapter.
//!
//! A [`Sequence`] produces its elements on demand. Consumers drive it in one
//! of two ways:
//!
//! - **Push**: [`Sequence::feed`] hands every element to a consumer callback.
//!   The callback returns `true` to keep going and `false` to stop, and the
//!   sequence stops producing the moment it sees `false`.
//! - **Pull**: [`Sequence::resume`] advances the sequence by exactly one
//!   element. The [`Pull`] adapter wraps this step in an [`Iterator`] with an
//!   explicit [`Pull::stop`], which is what [`zip`] uses to pace two sequences
//!   independently.
//!
//! Combinators ([`map`], [`filter`], [`chain`], [`zip`], [`enumerate`],
//! [`reverse`]) build new sequences without consuming anything. Terminal
//! operations ([`reduce`], [`sum`], [`count`], [`all`], [`collect`]) drive the
//! pipeline to produce a value.
//!
//! # Examples
//!
//! ```rust
//! use lazyfn::sequence::{Sequence, filter, map, range, sum};
//!
//! let evens = filter(range(0, 10), |value: &i32| value % 2 == 0);
//! let squares = map(evens, |value| value * value);
//! assert_eq!(sum(squares), 0 + 4 + 16 + 36 + 64);
//!
//! // Early termination: the consumer stops after the first three elements.
//! let mut seen = Vec::new();
//! let exhausted = range(0, 1_000_000).for_each_while(|value| {
//!     seen.push(value);
//!     seen.len() < 3
//! });
//! assert!(!exhausted);
//! assert_eq!(seen, vec![0, 1, 2]);
//! ```

mod chain;
mod fold;
mod pull;
mod range;
mod reverse;
mod source;
mod transform;
mod zip;

pub use chain::{Chain, ChainAll, chain};
pub use fold::{all, collect, count, reduce, sum};
pub use pull::{Pull, pull};
pub use range::{Numeric, Range, range, step_range};
pub use reverse::{Reverse, reverse};
pub use source::{Empty, FromFn, Single, Values, empty, from_fn, once, values};
pub use transform::{Enumerate, Filter, Map, enumerate, filter, map};
pub use zip::{Zip, zip};

/// A lazy, possibly infinite, single-pass stream of values.
///
/// Every sequence is an explicit state machine: [`resume`](Self::resume)
/// advances it by one element, and [`feed`](Self::feed) pushes elements into
/// a consumer until it is exhausted or the consumer asks it to stop.
///
/// A sequence keeps its position between calls. Feeding it a second time
/// continues where the previous consumer stopped, and once a sequence is
/// exhausted or [released](Self::release) it stays empty.
///
/// # Laws
///
/// - **Order**: `feed` and repeated `resume` produce the same elements in the
///   same order.
/// - **Early termination**: after the consumer returns `false`, `feed`
///   produces no further element and returns `false`.
/// - **Fusion**: once `resume` returns `None`, it keeps returning `None`.
///
/// # Examples
///
/// ```rust
/// use lazyfn::sequence::{Sequence, range};
///
/// let mut numbers = range(0, 3);
/// assert_eq!(numbers.resume(), Some(0));
///
/// let mut rest = Vec::new();
/// assert!(numbers.feed(&mut |value| {
///     rest.push(value);
///     true
/// }));
/// assert_eq!(rest, vec![1, 2]);
/// assert_eq!(numbers.resume(), None);
/// ```
pub trait Sequence {
    /// The type of the elements produced.
    type Item;

    /// Resumes production up to exactly the next element.
    ///
    /// Returns `None` once the sequence is exhausted.
    fn resume(&mut self) -> Option<Self::Item>;

    /// Pushes elements into `consumer` until the sequence is exhausted or the
    /// consumer returns `false`.
    ///
    /// Returns `true` if the sequence ran to exhaustion and `false` if the
    /// consumer stopped it.
    fn feed(&mut self, consumer: &mut dyn FnMut(Self::Item) -> bool) -> bool {
        while let Some(element) = self.resume() {
            if !consumer(element) {
                return false;
            }
        }
        true
    }

    /// Releases any state the sequence holds. The sequence is exhausted
    /// afterwards.
    ///
    /// Release belongs to the owner: releasing a `&mut S` leaves the borrowed
    /// sequence where it stopped.
    fn release(&mut self);

    /// Returns bounds on the number of remaining elements.
    ///
    /// The bounds are conservative. An upper bound of `Some(0)` guarantees the
    /// sequence will not produce another element.
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, None)
    }

    /// Generic form of [`feed`](Self::feed) that accepts any closure.
    fn for_each_while<C>(&mut self, mut consumer: C) -> bool
    where
        Self: Sized,
        C: FnMut(Self::Item) -> bool,
    {
        self.feed(&mut consumer)
    }

    /// See [`map`].
    fn map<B, F>(self, function: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> B,
    {
        Map::new(self, function)
    }

    /// See [`filter`].
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    /// Yields this sequence's elements, then those of `other`.
    fn chain<S>(self, other: S) -> Chain<Self, S::IntoSeq>
    where
        Self: Sized,
        S: IntoSequence<Item = Self::Item>,
    {
        Chain::new(self, other.into_sequence())
    }

    /// See [`zip`].
    fn zip<S>(self, other: S) -> Zip<Self, S::IntoSeq>
    where
        Self: Sized,
        S: IntoSequence,
    {
        Zip::new(self, other.into_sequence())
    }

    /// See [`enumerate`].
    fn enumerate(self) -> Enumerate<Self>
    where
        Self: Sized,
    {
        Enumerate::new(self)
    }

    /// See [`reverse`].
    fn reverse(self) -> Reverse<Self>
    where
        Self: Sized,
    {
        Reverse::new(self)
    }

    /// See [`reduce`].
    fn reduce<A, F>(self, seed: A, combine: F) -> A
    where
        Self: Sized,
        F: FnMut(A, Self::Item) -> A,
    {
        reduce(self, seed, combine)
    }

    /// See [`sum`].
    fn sum(self) -> Self::Item
    where
        Self: Sized,
        Self::Item: Numeric,
    {
        sum(self)
    }

    /// See [`collect`].
    fn collect(self) -> Vec<Self::Item>
    where
        Self: Sized,
    {
        collect(self)
    }

    /// See [`pull`].
    fn pull(self) -> Pull<Self>
    where
        Self: Sized,
    {
        Pull::new(self)
    }
}

impl<S: Sequence + ?Sized> Sequence for &mut S {
    type Item = S::Item;

    #[inline]
    fn resume(&mut self) -> Option<Self::Item> {
        (**self).resume()
    }

    #[inline]
    fn feed(&mut self, consumer: &mut dyn FnMut(Self::Item) -> bool) -> bool {
        (**self).feed(consumer)
    }

    #[inline]
    fn release(&mut self) {}

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (**self).size_hint()
    }
}

impl<S: Sequence + ?Sized> Sequence for Box<S> {
    type Item = S::Item;

    #[inline]
    fn resume(&mut self) -> Option<Self::Item> {
        (**self).resume()
    }

    #[inline]
    fn feed(&mut self, consumer: &mut dyn FnMut(Self::Item) -> bool) -> bool {
        (**self).feed(consumer)
    }

    #[inline]
    fn release(&mut self) {
        (**self).release();
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (**self).size_hint()
    }
}

/// Conversion into a [`Sequence`].
///
/// This is the "sequence-producing" capability. Every sequence converts into
/// itself, and containers such as `Optional`, `Outcome`, `Vec` and `List`
/// convert into sequences of zero or more elements, so they can be passed
/// straight into any combinator.
///
/// # Examples
///
/// ```rust
/// use lazyfn::sequence::{IntoSequence, Sequence};
///
/// let mut numbers = vec![1, 2, 3].into_sequence();
/// assert_eq!(numbers.resume(), Some(1));
/// ```
pub trait IntoSequence {
    /// The type of the elements produced.
    type Item;

    /// The sequence this value turns into.
    type IntoSeq: Sequence<Item = Self::Item>;

    /// Converts this value into a sequence.
    fn into_sequence(self) -> Self::IntoSeq;
}

impl<S: Sequence> IntoSequence for S {
    type Item = S::Item;
    type IntoSeq = S;

    #[inline]
    fn into_sequence(self) -> Self::IntoSeq {
        self
    }
}

impl<T> IntoSequence for Vec<T> {
    type Item = T;
    type IntoSeq = Values<std::vec::IntoIter<T>>;

    #[inline]
    fn into_sequence(self) -> Self::IntoSeq {
        values(self)
    }
}

/// Concatenates any number of sequences, possibly of different types.
///
/// `chain!()` is an empty sequence, `chain!(a)` is `a` itself, and
/// `chain!(a, b, c)` yields all of `a`, then `b`, then `c`. Every argument
/// only needs to implement [`IntoSequence`](crate::sequence::IntoSequence)
/// with a common item type.
///
/// # Examples
///
/// ```rust
/// use lazyfn::chain;
/// use lazyfn::sequence::{collect, once, range};
///
/// let joined = chain!(range(0, 2), vec![10, 11], once(99));
/// assert_eq!(collect(joined), vec![0, 1, 10, 11, 99]);
///
/// let nothing: Vec<i32> = collect(chain!());
/// assert!(nothing.is_empty());
/// ```
#[macro_export]
macro_rules! chain {
    () => {
        $crate::sequence::empty()
    };

    ($sequence:expr $(,)?) => {
        $crate::sequence::IntoSequence::into_sequence($sequence)
    };

    ($sequence:expr, $($remaining:expr),+ $(,)?) => {
        $crate::sequence::Chain::new(
            $crate::sequence::IntoSequence::into_sequence($sequence),
            $crate::chain!($($remaining),+),
        )
    };
}
