//! Outcome - a success value or an error, never both.

use crate::sequence::{IntoSequence, Single};

use super::Unwrappable;

/// Either a success value or an error.
///
/// Build one with [`ok`], [`err`], or [`from_pair`]. As a sequence, an
/// `Outcome` yields its success value and skips errors, so a batch of outcomes
/// can be folded directly. The error side is reachable as its own sequence
/// through [`Outcome::error_sequence`], which lets callers harvest errors
/// independently of values.
///
/// A failure always carries an error: there is no way to build a `Failure`
/// without one.
///
/// # Examples
///
/// ```rust
/// use lazyfn::container::{Outcome, err, ok};
/// use lazyfn::sequence::{chain, collect};
///
/// let batch: Vec<Outcome<i32, &str>> = vec![ok(1), err("bad input"), ok(3)];
///
/// let successes = collect(chain(batch.clone()));
/// assert_eq!(successes, vec![1, 3]);
///
/// let failures = collect(chain(batch.into_iter().map(Outcome::error_sequence)));
/// assert_eq!(failures, vec!["bad input"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<T, E> {
    /// The operation succeeded with a value.
    Success(T),
    /// The operation failed with an error.
    Failure(E),
}

/// Creates a successful [`Outcome`].
#[inline]
pub const fn ok<T, E>(value: T) -> Outcome<T, E> {
    Outcome::Success(value)
}

/// Creates a failed [`Outcome`].
#[inline]
pub const fn err<T, E>(error: E) -> Outcome<T, E> {
    Outcome::Failure(error)
}

/// Lifts a value paired with an optional error into an [`Outcome`].
///
/// The error takes precedence: if it is present the result is a failure and
/// `value` is dropped, whatever it holds.
///
/// # Examples
///
/// ```rust
/// use lazyfn::container::{err, from_pair, ok};
///
/// assert_eq!(from_pair(5, None::<String>), ok(5));
/// assert_eq!(from_pair(0, Some("timeout")), err("timeout"));
/// ```
#[inline]
pub fn from_pair<T, E>(value: T, error: Option<E>) -> Outcome<T, E> {
    match error {
        Some(error) => Outcome::Failure(error),
        None => Outcome::Success(value),
    }
}

impl<T, E> Outcome<T, E> {
    /// Returns `true` for a success.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` for a failure.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Splits the outcome back into a value and an error, exactly one of
    /// which is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyfn::container::{err, ok};
    ///
    /// assert_eq!(ok::<_, &str>(1).into_pair(), (Some(1), None));
    /// assert_eq!(err::<i32, _>("no").into_pair(), (None, Some("no")));
    /// ```
    #[inline]
    pub fn into_pair(self) -> (Option<T>, Option<E>) {
        match self {
            Self::Success(value) => (Some(value), None),
            Self::Failure(error) => (None, Some(error)),
        }
    }

    /// Returns a sequence yielding the error of a failure, or nothing for a
    /// success.
    #[inline]
    pub fn error_sequence(self) -> Single<E> {
        Single::new(self.into_pair().1)
    }

    /// Borrows both sides.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Converts into a standard [`Result`].
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }
}

impl<T, E> Unwrappable for Outcome<T, E> {
    type Value = T;

    #[inline]
    fn into_value(self) -> Option<T> {
        self.into_pair().0
    }

    #[inline]
    fn holds_value(&self) -> bool {
        self.is_success()
    }
}

impl<T, E> IntoSequence for Outcome<T, E> {
    type Item = T;
    type IntoSeq = Single<T>;

    #[inline]
    fn into_sequence(self) -> Single<T> {
        Single::new(self.into_pair().0)
    }
}

impl<'a, T, E> IntoSequence for &'a Outcome<T, E> {
    type Item = &'a T;
    type IntoSeq = Single<&'a T>;

    #[inline]
    fn into_sequence(self) -> Single<&'a T> {
        Single::new(self.as_ref().into_pair().0)
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}
