//! Persistent (immutable) singly-linked list.
//!
//! [`List`] is a cons-list whose nodes are shared through `Rc`:
//!
//! - O(1) `prepend`, `head` and `tail`
//! - O(n) `get`, `append` and `filter`
//!
//! Every operation returns a new list and leaves the original untouched.
//! Prepending shares the whole original list:
//!
//! ```text
//! list:              1 -> 2 -> 3 -> nil
//! list.prepend(0):   0 -> [1 -> 2 -> 3 -> nil]
//! ```
//!
//! A list turns into a [`Sequence`](crate::sequence::Sequence), so it can be
//! fed to any combinator, and any sequence can be collected back into a list
//! with [`List::from_sequence`].
//!
//! # Examples
//!
//! ```rust
//! use lazyfn::persistent::List;
//! use lazyfn::sequence::{map, sum};
//!
//! let list = List::new().prepend(3).prepend(2).prepend(1);
//! assert_eq!(list.to_string(), "[1, 2, 3]");
//!
//! let extended = list.prepend(0);
//! assert_eq!(list.len(), 3);
//! assert_eq!(extended.len(), 4);
//!
//! assert_eq!(sum(map(&list, |value| value * 10)), 60);
//! ```

use std::fmt;
use std::rc::Rc;

use crate::sequence::{IntoSequence, Sequence, Values};

use super::IndexOutOfRange;

struct Node<T> {
    element: T,
    next: Option<Rc<Self>>,
}

/// A persistent singly-linked list.
#[derive(Clone)]
pub struct List<T> {
    head: Option<Rc<Node<T>>>,
    length: usize,
}

impl<T> List<T> {
    /// Creates an empty list.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            head: None,
            length: 0,
        }
    }

    /// Creates a list holding one element.
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self::new().prepend(element)
    }

    /// Returns a new list with `element` in front of this one.
    ///
    /// The new list shares every node of the original.
    #[inline]
    #[must_use]
    pub fn prepend(&self, element: T) -> Self {
        Self {
            head: Some(Rc::new(Node {
                element,
                next: self.head.clone(),
            })),
            length: self.length + 1,
        }
    }

    /// Returns the first element, if any.
    #[inline]
    pub fn head(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.element)
    }

    /// Returns the list without its first element. The tail of an empty list
    /// is empty.
    #[inline]
    #[must_use]
    pub fn tail(&self) -> Self {
        self.head.as_ref().map_or_else(Self::new, |node| Self {
            head: node.next.clone(),
            length: self.length - 1,
        })
    }

    /// Returns the number of elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the list has no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfRange`] if `index >= self.len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyfn::persistent::List;
    ///
    /// let list = List::singleton('a').prepend('b');
    /// assert_eq!(list.get(1), Ok(&'a'));
    /// assert!(list.get(2).is_err());
    /// ```
    pub fn get(&self, index: usize) -> Result<&T, IndexOutOfRange> {
        self.iter().nth(index).ok_or(IndexOutOfRange {
            index,
            length: self.length,
        })
    }

    /// Calls `action` on every element in order.
    pub fn each<F: FnMut(&T)>(&self, action: F) {
        self.iter().for_each(action);
    }

    /// Returns an iterator over references to the elements.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            current: self.head.as_deref(),
            remaining: self.length,
        }
    }
}

impl<T: Clone> List<T> {
    /// Returns a new list with `element` at the end.
    ///
    /// Appending copies every node, so it costs O(n).
    #[must_use]
    pub fn append(&self, element: T) -> Self {
        let mut elements: Vec<T> = self.iter().cloned().collect();
        elements.push(element);
        Self::from_vec(elements)
    }

    /// Returns a new list with only the elements matching `predicate`, in
    /// their original order.
    #[must_use]
    pub fn filter<P: FnMut(&T) -> bool>(&self, mut predicate: P) -> Self {
        Self::from_vec(
            self.iter()
                .filter(|element| predicate(element))
                .cloned()
                .collect(),
        )
    }
}

impl<T> List<T> {
    /// Collects a sequence into a list, preserving order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyfn::persistent::List;
    /// use lazyfn::sequence::range;
    ///
    /// let list = List::from_sequence(range(0, 3));
    /// assert_eq!(list.to_string(), "[0, 1, 2]");
    /// ```
    pub fn from_sequence<S: IntoSequence<Item = T>>(sequence: S) -> Self {
        Self::from_vec(crate::sequence::collect(sequence))
    }

    fn from_vec(mut elements: Vec<T>) -> Self {
        let length = elements.len();
        let mut head = None;
        while let Some(element) = elements.pop() {
            head = Some(Rc::new(Node {
                element,
                next: head,
            }));
        }
        Self { head, length }
    }
}

// Dropping a long spine recursively would overflow the stack.
impl<T> Drop for List<T> {
    fn drop(&mut self) {
        let mut current = self.head.take();
        while let Some(node) = current {
            current = match Rc::try_unwrap(node) {
                Ok(mut owned) => owned.next.take(),
                Err(_) => None,
            };
        }
    }
}

// Nodes are shared through `Rc`, so a list must stay on one thread.
static_assertions::assert_not_impl_any!(List<i32>: Send, Sync);
static_assertions::assert_impl_all!(List<String>: Clone, crate::sequence::IntoSequence);

/// An iterator over references to the elements of a [`List`].
pub struct Iter<'a, T> {
    current: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.current?;
        self.current = node.next.as_deref();
        self.remaining -= 1;
        Some(&node.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// A sequence over the elements of a [`List`], yielding clones.
///
/// Created by converting a `List<T>` with
/// [`IntoSequence`](crate::sequence::IntoSequence).
pub struct ListSequence<T> {
    list: List<T>,
}

impl<T: Clone> Sequence for ListSequence<T> {
    type Item = T;

    fn resume(&mut self) -> Option<T> {
        let element = self.list.head()?.clone();
        self.list = self.list.tail();
        Some(element)
    }

    fn release(&mut self) {
        self.list = List::new();
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T: Clone> IntoSequence for List<T> {
    type Item = T;
    type IntoSeq = ListSequence<T>;

    #[inline]
    fn into_sequence(self) -> ListSequence<T> {
        ListSequence { list: self }
    }
}

impl<'a, T> IntoSequence for &'a List<T> {
    type Item = &'a T;
    type IntoSeq = Values<Iter<'a, T>>;

    #[inline]
    fn into_sequence(self) -> Self::IntoSeq {
        crate::sequence::values(self.iter())
    }
}

impl<T> Default for List<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iterable: I) -> Self {
        Self::from_vec(iterable.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for List<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("[")?;
        for (index, element) in self.iter().enumerate() {
            if index > 0 {
                formatter.write_str(", ")?;
            }
            write!(formatter, "{element}")?;
        }
        formatter.write_str("]")
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for List<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for List<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <Vec<T> as serde::Deserialize>::deserialize(deserializer).map(Self::from_vec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::{collect, reverse};
    use rstest::rstest;

    #[rstest]
    fn test_prepend_shares_structure() {
        let base = List::singleton(2);
        let extended = base.prepend(1);
        assert_eq!(base.len(), 1);
        assert_eq!(extended.len(), 2);
        assert!(Rc::ptr_eq(
            extended.tail().head.as_ref().unwrap(),
            base.head.as_ref().unwrap()
        ));
    }

    #[rstest]
    fn test_append_leaves_original_untouched() {
        let list: List<i32> = [1, 2].into_iter().collect();
        let appended = list.append(3);
        assert_eq!(list.to_string(), "[1, 2]");
        assert_eq!(appended.to_string(), "[1, 2, 3]");
    }

    #[rstest]
    fn test_filter_keeps_order() {
        let list: List<i32> = (0..10).collect();
        assert_eq!(list.filter(|value| value % 3 == 0).to_string(), "[0, 3, 6, 9]");
    }

    #[rstest]
    fn test_tail_of_empty_is_empty() {
        assert!(List::<u8>::new().tail().is_empty());
    }

    #[rstest]
    fn test_each_visits_in_order() {
        let list: List<char> = "abc".chars().collect();
        let mut seen = String::new();
        list.each(|character| seen.push(*character));
        assert_eq!(seen, "abc");
    }

    #[rstest]
    fn test_owned_sequence_clones_elements() {
        let list: List<String> = ["x", "y"].into_iter().map(String::from).collect();
        let reversed = collect(reverse(list.clone()));
        assert_eq!(reversed, vec![String::from("y"), String::from("x")]);
        assert_eq!(list.len(), 2);
    }

    #[rstest]
    fn test_drop_of_long_list_does_not_overflow() {
        let list: List<u32> = (0..200_000).collect();
        assert_eq!(list.len(), 200_000);
        drop(list);
    }

    #[rstest]
    fn test_display_of_empty_list() {
        assert_eq!(List::<i32>::new().to_string(), "[]");
    }
}
