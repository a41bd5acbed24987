//! Pairwise combination of two independently paced sequences.

use std::fmt;

use super::{IntoSequence, Pull, Sequence};

/// Pairs up the elements of two sequences.
///
/// Created by [`zip`] and [`Sequence::zip`]. Each side is held behind its own
/// [`Pull`] adapter, so the two sides advance one element per tick no matter
/// how their producers are structured.
pub struct Zip<A: Sequence, B: Sequence> {
    left: Pull<A>,
    right: Pull<B>,
}

impl<A: Sequence, B: Sequence> Zip<A, B> {
    pub(super) const fn new(left: A, right: B) -> Self {
        Self {
            left: Pull::new(left),
            right: Pull::new(right),
        }
    }

    fn finish(&mut self) {
        if self.left.is_stopped() && self.right.is_stopped() {
            return;
        }
        self.left.stop();
        self.right.stop();
        tracing::trace!(target: "lazyfn::pull", "zip finished, both sides released");
    }
}

/// Yields `(a, b)` pairs, taking one element from each sequence per tick.
///
/// The result ends as soon as either side is exhausted. Before each tick the
/// adapter checks whether either side is already known to be drained, so the
/// longer side is not advanced past the length of a shorter side that reports
/// its end. When the pairing ends, whether by exhaustion or because the
/// consumer stopped, both sides are released.
///
/// If the shorter side does not report its end (for example a [`from_fn`]
/// generator), the left side is pulled once more before the right side turns
/// up empty, and that extra left element is dropped.
///
/// [`from_fn`]: super::from_fn
///
/// # Examples
///
/// ```rust
/// use lazyfn::sequence::{collect, range, zip};
///
/// let pairs = zip(range(0, 10), range(0, 3));
/// assert_eq!(collect(pairs), vec![(0, 0), (1, 1), (2, 2)]);
///
/// let labelled = zip(vec!["a", "b", "c"], range(1, 100));
/// assert_eq!(collect(labelled), vec![("a", 1), ("b", 2), ("c", 3)]);
/// ```
#[inline]
pub fn zip<A, B>(left: A, right: B) -> Zip<A::IntoSeq, B::IntoSeq>
where
    A: IntoSequence,
    B: IntoSequence,
{
    Zip::new(left.into_sequence(), right.into_sequence())
}

impl<A: Sequence, B: Sequence> Sequence for Zip<A, B> {
    type Item = (A::Item, B::Item);

    fn resume(&mut self) -> Option<Self::Item> {
        if self.left.is_drained() || self.right.is_drained() {
            self.finish();
            return None;
        }
        let Some(left) = self.left.next() else {
            self.finish();
            return None;
        };
        let Some(right) = self.right.next() else {
            self.finish();
            return None;
        };
        Some((left, right))
    }

    fn feed(&mut self, consumer: &mut dyn FnMut(Self::Item) -> bool) -> bool {
        while let Some(pair) = self.resume() {
            if !consumer(pair) {
                self.finish();
                return false;
            }
        }
        true
    }

    fn release(&mut self) {
        self.finish();
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (left_lower, left_upper) = self.left.size_hint();
        let (right_lower, right_upper) = self.right.size_hint();
        let upper = match (left_upper, right_upper) {
            (Some(left), Some(right)) => Some(left.min(right)),
            (Some(bound), None) | (None, Some(bound)) => Some(bound),
            (None, None) => None,
        };
        (left_lower.min(right_lower), upper)
    }
}

impl<A: Sequence, B: Sequence> fmt::Debug for Zip<A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Zip")
            .field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::{collect, from_fn, map, range};
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_zip_does_not_advance_longer_left_side() {
        let produced = Cell::new(0);
        let left = map(range(0, 10), |value| {
            produced.set(produced.get() + 1);
            value
        });
        let pairs = collect(zip(left, range(0, 5)));
        assert_eq!(pairs, vec![(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)]);
        assert_eq!(produced.get(), 5);
    }

    #[rstest]
    fn test_zip_does_not_advance_longer_right_side() {
        let produced = Cell::new(0);
        let right = map(range(0, 10), |value| {
            produced.set(produced.get() + 1);
            value
        });
        assert_eq!(collect(zip(range(0, 2), right)).len(), 2);
        assert_eq!(produced.get(), 2);
    }

    #[rstest]
    fn test_zip_with_unbounded_sides_stops_on_first_exhaustion() {
        let mut remaining = 3;
        let short = from_fn(move || {
            if remaining == 0 {
                None
            } else {
                remaining -= 1;
                Some(remaining)
            }
        });
        let endless = from_fn(|| Some('x'));
        assert_eq!(collect(zip(short, endless)), vec![(2, 'x'), (1, 'x'), (0, 'x')]);
    }

    #[rstest]
    fn test_zip_drops_one_left_element_when_right_end_is_unknown() {
        let produced = Cell::new(0);
        let endless = from_fn(|| {
            produced.set(produced.get() + 1);
            Some(produced.get())
        });
        let mut remaining = 3;
        let short = from_fn(move || {
            remaining -= 1;
            (remaining >= 0).then_some(remaining)
        });
        assert_eq!(collect(zip(endless, short)).len(), 3);
        assert_eq!(produced.get(), 4);
    }

    #[rstest]
    fn test_zip_releases_after_consumer_stop() {
        let mut pairs = zip(range(0, 10), range(0, 10));
        let exhausted = pairs.for_each_while(|(left, _)| left < 1);
        assert!(!exhausted);
        assert!(pairs.left.is_stopped());
        assert!(pairs.right.is_stopped());
        assert_eq!(pairs.resume(), None);
    }

    #[rstest]
    fn test_zip_size_hint_takes_smaller_upper_bound() {
        let pairs = zip(vec![1, 2, 3], vec![4, 5]);
        assert_eq!(pairs.size_hint(), (2, Some(2)));
    }
}
