//! Error types for persistent data structures.

/// Represents a lookup past the end of a [`List`](super::List).
///
/// # Examples
///
/// ```rust
/// use lazyfn::persistent::{IndexOutOfRange, List};
///
/// let list: List<i32> = [1, 2].into_iter().collect();
/// let error = list.get(5).unwrap_err();
/// assert_eq!(error, IndexOutOfRange { index: 5, length: 2 });
/// assert_eq!(format!("{error}"), "index 5 out of range for list of length 2");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfRange {
    /// The index that was requested.
    pub index: usize,
    /// The length of the list at the time of the lookup.
    pub length: usize,
}

impl std::fmt::Display for IndexOutOfRange {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "index {} out of range for list of length {}",
            self.index, self.length
        )
    }
}

impl std::error::Error for IndexOutOfRange {}
