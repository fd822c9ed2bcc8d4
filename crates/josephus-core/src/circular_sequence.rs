//! Arena-backed circular sequence.

use std::{
    fmt::{self, Display},
    iter::FusedIterator,
};

/// Errors returned by positional access on a [`CircularSequence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SequenceError {
    /// The sequence has no elements.
    #[display("sequence is empty")]
    Empty,
    /// The index is not below the current length.
    #[display("index out of range: {index} (len {len})")]
    OutOfRange {
        /// Requested index.
        index: usize,
        /// Length of the sequence at the time of the call.
        len: usize,
    },
}

/// Slot handle into the node arena.
type Handle = usize;

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    prev: Handle,
    next: Handle,
}

/// A doubly linked ring stored in a dense arena.
///
/// Nodes are addressed by slot handles instead of owning pointers, so the
/// cyclic `prev`/`next` links never form an ownership cycle. Removing a node
/// swap-removes its slot and patches the handles that pointed at the moved
/// node, which keeps the arena exactly `len` slots long.
///
/// Positional indices are relative to the head: index 0 is the head, index
/// `len - 1` is the node just before it.
///
/// # Examples
///
/// ```
/// use josephus_core::CircularSequence;
///
/// let mut ring = CircularSequence::range(0, 5);
/// assert_eq!(ring.remove(1), Ok(1));
/// assert_eq!(ring.get(1), Ok(&2));
/// assert_eq!(ring.iter().copied().collect::<Vec<_>>(), [0, 2, 3, 4]);
/// ```
#[derive(Clone)]
pub struct CircularSequence<T> {
    nodes: Vec<Node<T>>,
    head: Option<Handle>,
}

impl<T> Default for CircularSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CircularSequence<T> {
    /// Creates an empty sequence.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            nodes: Vec::new(),
            head: None,
        }
    }

    /// Returns the number of live elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the sequence has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns a reference to the element `index` steps forward from the head.
    ///
    /// The walk starts from whichever end of the ring is closer, so at most
    /// `len / 2` links are followed.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::Empty`] if the sequence is empty and
    /// [`SequenceError::OutOfRange`] if `index >= len`.
    pub fn get(&self, index: usize) -> Result<&T, SequenceError> {
        let handle = self.locate(index)?;
        Ok(&self.nodes[handle].value)
    }

    /// Removes the element at `index` and returns it.
    ///
    /// Elements after `index` shift down by one. Removing index 0 makes the
    /// old successor the new head; removing the last element leaves the
    /// sequence empty.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::Empty`] if the sequence is empty and
    /// [`SequenceError::OutOfRange`] if `index >= len`.
    pub fn remove(&mut self, index: usize) -> Result<T, SequenceError> {
        let handle = self.locate(index)?;
        let Node { prev, next, .. } = self.nodes[handle];

        if self.nodes.len() == 1 {
            self.head = None;
        } else {
            self.nodes[prev].next = next;
            self.nodes[next].prev = prev;
            if index == 0 {
                self.head = Some(next);
            }
        }

        let last = self.nodes.len() - 1;
        let removed = self.nodes.swap_remove(handle);
        if handle != last {
            self.relocate(last, handle);
        }
        Ok(removed.value)
    }

    /// Returns an iterator over the elements, starting at the head.
    ///
    /// The iterator visits exactly `len` elements and then stops.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            cursor: self.head,
            remaining: self.nodes.len(),
        }
    }

    /// Patches every handle that referred to slot `from` after its node was
    /// moved into slot `to` by `swap_remove`.
    fn relocate(&mut self, from: Handle, to: Handle) {
        let Node { prev, next, .. } = self.nodes[to];
        let prev = if prev == from { to } else { prev };
        let next = if next == from { to } else { next };
        self.nodes[to].prev = prev;
        self.nodes[to].next = next;
        self.nodes[prev].next = to;
        self.nodes[next].prev = to;
        if self.head == Some(from) {
            self.head = Some(to);
        }
    }

    fn locate(&self, index: usize) -> Result<Handle, SequenceError> {
        let len = self.nodes.len();
        let Some(head) = self.head else {
            return Err(SequenceError::Empty);
        };
        if index >= len {
            return Err(SequenceError::OutOfRange { index, len });
        }

        let mut cursor = head;
        if index < len / 2 {
            for _ in 0..index {
                cursor = self.nodes[cursor].next;
            }
        } else {
            cursor = self.nodes[head].prev;
            for _ in 0..(len - index - 1) {
                cursor = self.nodes[cursor].prev;
            }
        }
        Ok(cursor)
    }
}

impl CircularSequence<usize> {
    /// Creates a sequence holding `start..stop` in ascending order.
    ///
    /// An empty range (`stop <= start`) yields an empty sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use josephus_core::CircularSequence;
    ///
    /// let ring = CircularSequence::range(2, 5);
    /// assert_eq!(ring.to_string(), "2 -> 3 -> 4");
    /// assert!(CircularSequence::range(5, 2).is_empty());
    /// ```
    #[must_use]
    pub fn range(start: usize, stop: usize) -> Self {
        (start..stop).collect()
    }
}

impl<T> FromIterator<T> for CircularSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut nodes = iter
            .into_iter()
            .enumerate()
            .map(|(i, value)| Node {
                value,
                prev: i.wrapping_sub(1),
                next: i + 1,
            })
            .collect::<Vec<_>>();

        let Some(last) = nodes.len().checked_sub(1) else {
            return Self::new();
        };
        nodes[0].prev = last;
        nodes[last].next = 0;
        Self {
            nodes,
            head: Some(0),
        }
    }
}

impl<T: PartialEq> PartialEq for CircularSequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for CircularSequence<T> {}

impl<T: fmt::Debug> fmt::Debug for CircularSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Display> Display for CircularSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            Display::fmt(value, f)?;
        }
        Ok(())
    }
}

impl<'a, T> IntoIterator for &'a CircularSequence<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the elements of a [`CircularSequence`], head first.
///
/// Created by [`CircularSequence::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    nodes: &'a [Node<T>],
    cursor: Option<Handle>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let nodes = self.nodes;
        let node = &nodes[self.cursor?];
        self.remaining -= 1;
        self.cursor = Some(node.next);
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
