//! Numeric range generators.

use std::fmt;
use std::ops::Add;

use super::Sequence;

/// Numeric element types that ranges can step over and [`sum`](super::sum)
/// can add up.
///
/// Implemented for every primitive integer and floating-point type.
pub trait Numeric: Copy + PartialOrd + Add<Output = Self> {
    /// The additive identity.
    const ZERO: Self;

    /// The default range step.
    const ONE: Self;

    /// Returns `self + step`, or `None` if the addition would overflow or
    /// would not move the value.
    fn advance(self, step: Self) -> Option<Self>;
}

macro_rules! impl_numeric_for_integer {
    ($($integer:ty),* $(,)?) => {
        $(
            impl Numeric for $integer {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                #[inline]
                fn advance(self, step: Self) -> Option<Self> {
                    self.checked_add(step)
                }
            }
        )*
    };
}

macro_rules! impl_numeric_for_float {
    ($($float:ty),* $(,)?) => {
        $(
            impl Numeric for $float {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;

                #[inline]
                #[allow(clippy::float_cmp)]
                fn advance(self, step: Self) -> Option<Self> {
                    let next = self + step;
                    (next != self).then_some(next)
                }
            }
        )*
    };
}

impl_numeric_for_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_numeric_for_float!(f32, f64);

#[derive(Clone, Copy, PartialEq, Eq)]
enum Direction {
    Ascending,
    Descending,
}

/// An arithmetic progression from a start (inclusive) to an end (exclusive).
///
/// Created by [`range`] and [`step_range`].
#[derive(Clone)]
pub struct Range<T> {
    next: Option<T>,
    end: T,
    step: T,
    direction: Direction,
}

/// Creates the sequence `start, start + 1, ...` up to but excluding `end`.
///
/// If `start >= end` the sequence is empty.
///
/// # Examples
///
/// ```rust
/// use lazyfn::sequence::{collect, range, sum};
///
/// assert_eq!(collect(range(0, 5)), vec![0, 1, 2, 3, 4]);
/// assert_eq!(sum(range(0, 100)), 4950);
/// assert!(collect(range(5, 0)).is_empty());
/// assert_eq!(collect(range(0.5, 3.0)), vec![0.5, 1.5, 2.5]);
/// ```
#[inline]
pub fn range<T: Numeric>(start: T, end: T) -> Range<T> {
    step_range(start, end, T::ONE)
}

/// Creates the sequence `start, start + step, ...` up to but excluding `end`.
///
/// A positive step counts up while the value is below `end`, a negative step
/// counts down while it is above `end`. A zero step, a step pointing away from
/// `end`, or an unordered value such as `NaN` gives an empty sequence, so the
/// sequence can never loop forever. Stepping stops early if the next value
/// would overflow the element type.
///
/// # Examples
///
/// ```rust
/// use lazyfn::sequence::{collect, step_range};
///
/// assert_eq!(collect(step_range(0, 10, 3)), vec![0, 3, 6, 9]);
/// assert_eq!(collect(step_range(10, 0, -4)), vec![10, 6, 2]);
/// assert!(collect(step_range(0, 10, 0)).is_empty());
/// assert!(collect(step_range(0, 10, -1)).is_empty());
/// ```
pub fn step_range<T: Numeric>(start: T, end: T, step: T) -> Range<T> {
    let direction = if step > T::ZERO {
        Some(Direction::Ascending)
    } else if step < T::ZERO {
        Some(Direction::Descending)
    } else {
        None
    };

    let Some(direction) = direction else {
        return Range {
            next: None,
            end,
            step,
            direction: Direction::Ascending,
        };
    };

    let next = Some(start).filter(|value| within(*value, end, direction));
    Range {
        next,
        end,
        step,
        direction,
    }
}

#[inline]
fn within<T: Numeric>(value: T, end: T, direction: Direction) -> bool {
    match direction {
        Direction::Ascending => value < end,
        Direction::Descending => value > end,
    }
}

impl<T: Numeric> Sequence for Range<T> {
    type Item = T;

    fn resume(&mut self) -> Option<T> {
        let current = self.next?;
        self.next = current
            .advance(self.step)
            .filter(|value| within(*value, self.end, self.direction));
        Some(current)
    }

    fn release(&mut self) {
        self.next = None;
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.next.is_some() {
            (1, None)
        } else {
            (0, Some(0))
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Range<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Range")
            .field("next", &self.next)
            .field("end", &self.end)
            .field("step", &self.step)
            .finish()
    }
}
