//! Persistent data structures.
//!
//! - [`List`]: an immutable singly-linked list with structural sharing, which
//!   converts to and from sequences.

mod error;
mod list;

pub use error::IndexOutOfRange;
pub use list::{Iter, List, ListSequence};
