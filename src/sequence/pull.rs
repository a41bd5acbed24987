//! Pull adapter: step-wise consumption of a sequence.
//!
//! Push-style consumption lets the sequence drive the loop. That is enough
//! for a single pipeline, but pairing two sequences of unequal pace needs the
//! consumer to advance each one independently. [`Pull`] provides that:
//!
//! - [`Iterator::next`] resumes the underlying sequence up to exactly the
//!   next element.
//! - [`Pull::stop`] releases the sequence when the consumer abandons it.
//!
//! A `Pull` owns its sequence. It releases it on exhaustion, on `stop`, and
//! on drop, so no sequence state outlives the adapter that pulled from it.
//! A borrowed `&mut S` is left where the adapter stopped.
//!
//! # Examples
//!
//! ```rust
//! use lazyfn::sequence::{pull, range};
//!
//! let mut numbers = pull(range(0, 100));
//! assert_eq!(numbers.next(), Some(0));
//! assert_eq!(numbers.next(), Some(1));
//!
//! numbers.stop();
//! assert!(numbers.is_stopped());
//! assert_eq!(numbers.next(), None);
//! ```

use std::fmt;

use super::{IntoSequence, Sequence};

/// Step-wise view of a [`Sequence`].
///
/// Created by [`pull`] or [`Sequence::pull`].
pub struct Pull<S: Sequence> {
    source: Option<S>,
}

/// Wraps a sequence in a [`Pull`] adapter.
#[inline]
pub fn pull<S: IntoSequence>(sequence: S) -> Pull<S::IntoSeq> {
    Pull::new(sequence.into_sequence())
}

impl<S: Sequence> Pull<S> {
    /// Creates a pull adapter owning `source`.
    #[inline]
    pub const fn new(source: S) -> Self {
        Self {
            source: Some(source),
        }
    }

    /// Releases the underlying sequence.
    ///
    /// Subsequent calls to `next` return `None`. Stopping an adapter that is
    /// already stopped does nothing.
    pub fn stop(&mut self) {
        if let Some(mut source) = self.source.take() {
            source.release();
            tracing::trace!(target: "lazyfn::pull", "released pull source");
        }
    }

    /// Returns `true` once the adapter has been stopped or exhausted.
    #[inline]
    pub const fn is_stopped(&self) -> bool {
        self.source.is_none()
    }

    /// Returns `true` if the next call to `next` is known to return `None`
    /// without advancing the source.
    #[inline]
    pub fn is_drained(&self) -> bool {
        self.source
            .as_ref()
            .is_none_or(|source| source.size_hint().1 == Some(0))
    }
}

impl<S: Sequence> Iterator for Pull<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.source.as_mut()?.resume();
        if element.is_none() {
            self.stop();
        }
        element
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.source
            .as_ref()
            .map_or((0, Some(0)), Sequence::size_hint)
    }
}

impl<S: Sequence> std::iter::FusedIterator for Pull<S> {}

impl<S: Sequence> Drop for Pull<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

impl<S: Sequence> fmt::Debug for Pull<S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Pull")
            .field("stopped", &self.is_stopped())
            .finish()
    }
}
