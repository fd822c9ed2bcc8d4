use std::{collections::VecDeque, num::NonZero};

use josephus_core::CircularSequence;

/// Simulator state captured right before an elimination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Snapshot {
    pub(crate) survivors: CircularSequence<usize>,
    pub(crate) cursor: usize,
}

/// LIFO stack of snapshots with an optional capacity.
///
/// When full, pushing drops the oldest entry so the most recent eliminations
/// stay undoable.
#[derive(Debug, Clone)]
pub(crate) struct SnapshotStack<T> {
    stack: VecDeque<T>,
    capacity: Option<NonZero<usize>>,
}

impl<T> SnapshotStack<T> {
    #[must_use]
    pub(crate) fn new(capacity: Option<NonZero<usize>>) -> Self {
        Self {
            stack: VecDeque::new(),
            capacity,
        }
    }

    #[must_use]
    pub(crate) fn len(&self) -> usize {
        self.stack.len()
    }

    #[must_use]
    pub(crate) fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Pushes `item`, returning the evicted oldest entry if the stack was full.
    pub(crate) fn push(&mut self, item: T) -> Option<T> {
        let evicted = match self.capacity {
            Some(capacity) if self.stack.len() == capacity.get() => self.stack.pop_front(),
            _ => None,
        };
        self.stack.push_back(item);
        evicted
    }

    pub(crate) fn pop(&mut self) -> Option<T> {
        self.stack.pop_back()
    }
}
