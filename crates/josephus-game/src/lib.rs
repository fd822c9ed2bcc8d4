//! Josephus elimination simulation with undo.
//!
//! This crate drives the elimination process over a
//! [`CircularSequence`](josephus_core::CircularSequence) of identifiers:
//! every round advances a cursor by a fixed step and removes the identifier it
//! lands on, until a single survivor is left.
//!
//! Before each round the simulator can store a full copy of the ring and the
//! cursor, which makes [`EliminationSimulator::undo_last_elimination`] an
//! exact restore. Copies cost *O*(*n*) per round; use
//! [`HistoryPolicy::Bounded`] or [`HistoryPolicy::Disabled`] to limit that.
//!
//! # Example
//!
//! ```
//! use josephus_game::{Elimination, EliminationSimulator};
//!
//! let mut sim = EliminationSimulator::new(7, 3)?;
//! assert_eq!(sim.eliminate_next(), Elimination::Victim(2));
//! sim.undo_last_elimination();
//! assert!(sim.aliveness().iter().all(|&alive| alive));
//! # Ok::<(), josephus_game::SimulatorError>(())
//! ```

pub use self::{error::*, options::*, simulator::*};

mod error;
mod history;
mod options;
mod simulator;
