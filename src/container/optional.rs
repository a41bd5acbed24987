//! Optional - a value that may or may not be present.

use crate::sequence::{IntoSequence, Single};

use super::Unwrappable;

/// A value that is either present or absent.
///
/// Build one with [`some`] or [`none`], inspect it with the free functions in
/// [`container`](crate::container), and feed it into any combinator: a
/// present value yields one element, an absent one yields nothing.
///
/// # Examples
///
/// ```rust
/// use lazyfn::container::{Optional, none, some};
/// use lazyfn::sequence::{collect, sum};
///
/// let present: Optional<i32> = some(42);
/// assert_eq!(collect(present), vec![42]);
///
/// let values = vec![some(1), none(), some(2)];
/// let total: i32 = values.into_iter().map(sum).sum();
/// assert_eq!(total, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Optional<T> {
    /// A value is present.
    Present(T),
    /// No value.
    #[default]
    Absent,
}

/// Creates an [`Optional`] holding `value`.
#[inline]
pub const fn some<T>(value: T) -> Optional<T> {
    Optional::Present(value)
}

/// Creates an empty [`Optional`].
#[inline]
#[must_use]
pub const fn none<T>() -> Optional<T> {
    Optional::Absent
}

impl<T> Optional<T> {
    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Borrows the contained value.
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Self::Present(value) => Optional::Present(value),
            Self::Absent => Optional::Absent,
        }
    }
}

impl<T> Unwrappable for Optional<T> {
    type Value = T;

    #[inline]
    fn into_value(self) -> Option<T> {
        self.into()
    }

    #[inline]
    fn holds_value(&self) -> bool {
        self.is_present()
    }
}

impl<T> IntoSequence for Optional<T> {
    type Item = T;
    type IntoSeq = Single<T>;

    #[inline]
    fn into_sequence(self) -> Single<T> {
        Single::new(self.into())
    }
}

impl<'a, T> IntoSequence for &'a Optional<T> {
    type Item = &'a T;
    type IntoSeq = Single<&'a T>;

    #[inline]
    fn into_sequence(self) -> Single<&'a T> {
        Single::new(self.as_ref().into())
    }
}

impl<T> From<Option<T>> for Optional<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    #[inline]
    fn from(optional: Optional<T>) -> Self {
        match optional {
            Optional::Present(value) => Some(value),
            Optional::Absent => None,
        }
    }
}
