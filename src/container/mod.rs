//! Single-value containers and the functions that inspect them.
//!
//! This module provides two containers that hold at most one value:
//!
//! - [`Optional`]: a value that is either present or absent.
//! - [`Outcome`]: either a success value or an error.
//!
//! Both containers expose themselves in two ways:
//!
//! - As sequences, through [`IntoSequence`](crate::sequence::IntoSequence):
//!   a container with a value yields that value, an empty one yields nothing.
//! - Through the [`Unwrappable`] capability, which the extraction functions
//!   ([`unwrap`], [`unwrap_or`], [`unwrap_or_else`], [`has_value`],
//!   [`is_empty`]) are written against. Neither container carries its own copy
//!   of these operations.
//!
//! # Examples
//!
//! ```rust
//! use lazyfn::chain;
//! use lazyfn::container::{has_value, none, ok, some, unwrap_or};
//! use lazyfn::sequence::sum;
//!
//! let total = sum(chain!(ok::<_, String>(10), some(20), none::<i32>()));
//! assert_eq!(total, 30);
//!
//! assert!(has_value(&some(1)));
//! assert_eq!(unwrap_or(none(), "anonymous"), "anonymous");
//! ```

mod optional;
mod outcome;

pub use optional::{Optional, none, some};
pub use outcome::{Outcome, err, from_pair, ok};

/// The "has a value or not" capability.
///
/// Implemented by [`Optional`] and [`Outcome`]. The extraction functions in
/// this module only depend on this trait, never on a concrete container.
///
/// # Laws
///
/// - `x.holds_value() == x.into_value().is_some()`
pub trait Unwrappable {
    /// The type of the value the container may hold.
    type Value;

    /// Consumes the container, returning its value if it has one.
    fn into_value(self) -> Option<Self::Value>;

    /// Returns `true` if the container has a value.
    fn holds_value(&self) -> bool;

    /// Returns the value together with a presence flag.
    #[inline]
    fn unwrap_pair(self) -> (Option<Self::Value>, bool)
    where
        Self: Sized,
    {
        let value = self.into_value();
        let present = value.is_some();
        (value, present)
    }
}

/// Extracts the value from a container.
///
/// Use this only when an empty container is a programming error. For graceful
/// handling, use [`unwrap_or`], [`unwrap_or_else`] or [`has_value`].
///
/// # Panics
///
/// Panics if the container is empty.
///
/// # Examples
///
/// ```rust
/// use lazyfn::container::{ok, some, unwrap};
///
/// assert_eq!(unwrap(some(5)), 5);
/// assert_eq!(unwrap(ok::<_, String>("done")), "done");
/// ```
///
/// ```rust,should_panic
/// use lazyfn::container::{none, unwrap};
///
/// let _: i32 = unwrap(none());
/// ```
#[inline]
#[track_caller]
pub fn unwrap<U: Unwrappable>(container: U) -> U::Value {
    match container.into_value() {
        Some(value) => value,
        None => panic!("called `unwrap` on an empty value"),
    }
}

/// Extracts the value from a container, or returns `default` if it is empty.
///
/// # Examples
///
/// ```rust
/// use lazyfn::container::{err, none, unwrap_or};
///
/// assert_eq!(unwrap_or(none(), 7), 7);
/// assert_eq!(unwrap_or(err::<i32, _>("boom"), 0), 0);
/// ```
#[inline]
pub fn unwrap_or<U: Unwrappable>(container: U, default: U::Value) -> U::Value {
    container.into_value().unwrap_or(default)
}

/// Extracts the value from a container, or computes a fallback.
///
/// `fallback` is only called when the container is empty, so its cost and side
/// effects are never paid on the happy path.
///
/// # Examples
///
/// ```rust
/// use lazyfn::container::{none, some, unwrap_or_else};
///
/// assert_eq!(unwrap_or_else(some(1), || unreachable!()), 1);
/// assert_eq!(unwrap_or_else(none(), || 2 + 2), 4);
/// ```
#[inline]
pub fn unwrap_or_else<U, F>(container: U, fallback: F) -> U::Value
where
    U: Unwrappable,
    F: FnOnce() -> U::Value,
{
    container.into_value().unwrap_or_else(fallback)
}

/// Returns `true` if the container has a value.
///
/// The complement of [`is_empty`].
///
/// # Examples
///
/// ```rust
/// use lazyfn::container::{err, has_value, ok};
///
/// assert!(has_value(&ok::<_, String>(1)));
/// assert!(!has_value(&err::<i32, _>("failed")));
/// ```
#[inline]
pub fn has_value<U: Unwrappable + ?Sized>(container: &U) -> bool {
    container.holds_value()
}

/// Returns `true` if the container is empty.
///
/// The complement of [`has_value`].
#[inline]
pub fn is_empty<U: Unwrappable + ?Sized>(container: &U) -> bool {
    !container.holds_value()
}

static_assertions::assert_impl_all!(Optional<u8>: Unwrappable, crate::sequence::IntoSequence, Clone, Copy);
static_assertions::assert_impl_all!(Outcome<u8, String>: Unwrappable, crate::sequence::IntoSequence, Clone);
