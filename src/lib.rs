//! # lazyfn
//!
//! Lazy sequences and value containers for Rust.
//!
//! ## Overview
//!
//! The library is built around one abstraction, the [`Sequence`](sequence::Sequence):
//! a lazily-produced stream of values that can be driven by a consumer callback
//! (push) or stepped one element at a time through a [`Pull`](sequence::Pull)
//! iterator. On top of it sit:
//!
//! - **Sources**: `range`, `step_range`, `once`, `empty`, `values`, `from_fn`
//! - **Combinators**: `chain`, `map`, `filter`, `zip`, `enumerate`, `reverse`
//! - **Folds**: `reduce`, `sum`, `count`, `all`, `collect`
//! - **Containers**: [`Optional`](container::Optional) and
//!   [`Outcome`](container::Outcome), which are themselves sequences of zero
//!   or one element, plus `unwrap`-style extraction generic over both
//! - **Persistent List**: an immutable singly-linked list that converts to and
//!   from sequences
//!
//! Every sequence stops producing as soon as its consumer signals it is done,
//! and none of the combinators evaluate anything before a consumer asks.
//!
//! ## Feature Flags
//!
//! - `container`: `Optional`, `Outcome` and the extraction functions
//! - `persistent`: persistent `List`
//! - `serde`: `Serialize`/`Deserialize` for the containers
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use lazyfn::prelude::*;
//!
//! let evens = filter(range(0, 10), |value: &i32| value % 2 == 0);
//! let total = sum(chain!(evens, some(100), none::<i32>()));
//! assert_eq!(total, 0 + 2 + 4 + 6 + 8 + 100);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and functions.
///
/// # Usage
///
/// ```rust
/// use lazyfn::prelude::*;
/// ```
pub mod prelude {
    pub use crate::chain;
    pub use crate::sequence::*;

    #[cfg(feature = "container")]
    pub use crate::container::*;

    #[cfg(feature = "persistent")]
    pub use crate::persistent::*;
}

pub mod sequence;

#[cfg(feature = "container")]
pub mod container;

#[cfg(feature = "persistent")]
pub mod persistent;
