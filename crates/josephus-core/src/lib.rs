//! Core data structures for the Josephus simulator.
//!
//! The crate provides [`CircularSequence`], a ring of values stored as a
//! doubly linked list inside a dense arena. It supports:
//!
//! - positional access and removal relative to a fixed head, walking from
//!   whichever end of the ring is closer
//! - bounded iteration from the head that visits each element exactly once
//! - cheap deep copies through [`Clone`], used for undo snapshots
//!
//! # Examples
//!
//! ```
//! use josephus_core::{CircularSequence, SequenceError};
//!
//! let mut ring = CircularSequence::range(0, 4);
//! assert_eq!(ring.remove(0), Ok(0));
//! assert_eq!(ring.get(0), Ok(&1));
//! assert_eq!(ring.get(3), Err(SequenceError::OutOfRange { index: 3, len: 3 }));
//! ```

pub mod circular_sequence;

pub use self::circular_sequence::{CircularSequence, Iter, SequenceError};
