use std::num::NonZero;

use josephus_core::CircularSequence;

use crate::{
    HistoryPolicy, SimulatorError, SimulatorOptions,
    history::{Snapshot, SnapshotStack},
};

/// Result of a single elimination round.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Elimination {
    /// The identifier removed this round.
    Victim(usize),
    /// Only one identifier remains; nothing was removed.
    Finished,
}

impl Elimination {
    /// Returns the removed identifier, if any.
    #[must_use]
    pub fn victim(self) -> Option<usize> {
        match self {
            Self::Victim(victim) => Some(victim),
            Self::Finished => None,
        }
    }
}

/// A Josephus elimination process over identifiers `0..count`.
///
/// Each round advances the cursor `step` positions around the ring of
/// survivors (counting the cursor's own position as the first) and removes
/// the identifier it lands on, until one remains. Depending on the
/// [`HistoryPolicy`], a copy of the ring and cursor is saved before every
/// round so that eliminations can be undone.
///
/// # Example
///
/// ```
/// use josephus_game::{Elimination, EliminationSimulator};
///
/// let mut sim = EliminationSimulator::new(5, 2)?;
/// assert_eq!(sim.eliminate_next(), Elimination::Victim(1));
/// assert_eq!(sim.run_to_end(), [3, 0, 4]);
/// assert_eq!(sim.survivor(), Some(2));
///
/// assert!(sim.undo_last_elimination());
/// assert_eq!(sim.aliveness(), [false, false, true, false, true]);
/// # Ok::<(), josephus_game::SimulatorError>(())
/// ```
#[derive(Debug, Clone)]
pub struct EliminationSimulator {
    count: NonZero<usize>,
    step: NonZero<usize>,
    cursor: usize,
    survivors: CircularSequence<usize>,
    history_policy: HistoryPolicy,
    history: SnapshotStack<Snapshot>,
    victims: Vec<usize>,
}

impl EliminationSimulator {
    /// Creates a simulator with unbounded undo history.
    ///
    /// # Errors
    ///
    /// Returns [`SimulatorError::ZeroCount`] if `count` is zero and
    /// [`SimulatorError::ZeroStep`] if `step` is zero.
    pub fn new(count: usize, step: usize) -> Result<Self, SimulatorError> {
        Self::with_options(count, step, &SimulatorOptions::default())
    }

    /// Creates a simulator with the given options.
    ///
    /// # Errors
    ///
    /// Returns [`SimulatorError::ZeroCount`] if `count` is zero and
    /// [`SimulatorError::ZeroStep`] if `step` is zero.
    pub fn with_options(
        count: usize,
        step: usize,
        options: &SimulatorOptions,
    ) -> Result<Self, SimulatorError> {
        let count = NonZero::new(count).ok_or(SimulatorError::ZeroCount)?;
        let step = NonZero::new(step).ok_or(SimulatorError::ZeroStep)?;
        let history_policy = options.history_policy;
        Ok(Self {
            count,
            step,
            cursor: 0,
            survivors: CircularSequence::range(0, count.get()),
            history_policy,
            history: SnapshotStack::new(history_policy.capacity()),
            victims: Vec::new(),
        })
    }

    /// Returns the number of identifiers the simulation started with.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count.get()
    }

    /// Returns how many positions each round advances.
    #[must_use]
    pub fn step(&self) -> usize {
        self.step.get()
    }

    /// Returns the history policy in effect.
    #[must_use]
    pub fn history_policy(&self) -> HistoryPolicy {
        self.history_policy
    }

    /// Returns the current index into [`survivors`](Self::survivors).
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the ring of identifiers still alive.
    #[must_use]
    pub fn survivors(&self) -> &CircularSequence<usize> {
        &self.survivors
    }

    /// Returns the identifiers eliminated so far, oldest first.
    #[must_use]
    pub fn elimination_order(&self) -> &[usize] {
        &self.victims
    }

    /// Returns `true` once a single identifier remains.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.survivors.len() == 1
    }

    /// Returns the last remaining identifier, or `None` while more than one is alive.
    #[must_use]
    pub fn survivor(&self) -> Option<usize> {
        if self.is_terminal() {
            self.survivors.get(0).ok().copied()
        } else {
            None
        }
    }

    /// Returns one flag per original identifier, `true` if it is still alive.
    #[must_use]
    pub fn aliveness(&self) -> Vec<bool> {
        let mut aliveness = vec![false; self.count.get()];
        for &id in &self.survivors {
            aliveness[id] = true;
        }
        aliveness
    }

    /// Returns the number of eliminations that can currently be undone.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Returns `true` if [`undo_last_elimination`](Self::undo_last_elimination)
    /// would restore a previous state.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Runs one elimination round.
    ///
    /// Returns [`Elimination::Finished`] without changing anything once a
    /// single identifier remains.
    pub fn eliminate_next(&mut self) -> Elimination {
        if self.is_terminal() {
            return Elimination::Finished;
        }

        if !self.history_policy.is_disabled() {
            let snapshot = Snapshot {
                survivors: self.survivors.clone(),
                cursor: self.cursor,
            };
            if self.history.push(snapshot).is_some() {
                log::trace!("history full, dropped oldest snapshot");
            }
        }

        let len = self.survivors.len();
        self.cursor = (self.cursor + (self.step.get() - 1) % len) % len;
        // The cursor was just reduced modulo the live length, so removal cannot fail.
        #[expect(clippy::missing_panics_doc)]
        let victim = self
            .survivors
            .remove(self.cursor)
            .expect("cursor is within the survivor ring");
        self.cursor %= self.survivors.len();
        self.victims.push(victim);

        log::debug!(
            "eliminated {victim}, cursor now {}, {} remaining",
            self.cursor,
            self.survivors.len()
        );
        Elimination::Victim(victim)
    }

    /// Eliminates until one identifier remains and returns the victims, in order.
    pub fn run_to_end(&mut self) -> Vec<usize> {
        let mut victims = Vec::with_capacity(self.survivors.len() - 1);
        while let Elimination::Victim(victim) = self.eliminate_next() {
            victims.push(victim);
        }
        victims
    }

    /// Restores the state from before the most recent elimination.
    ///
    /// Returns `false` and does nothing when no snapshot is available.
    pub fn undo_last_elimination(&mut self) -> bool {
        let Some(Snapshot { survivors, cursor }) = self.history.pop() else {
            return false;
        };
        self.survivors = survivors;
        self.cursor = cursor;
        let victim = self.victims.pop();
        log::debug!(
            "undid elimination of {victim:?}, {} remaining",
            self.survivors.len()
        );
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_indexed(ids: &[usize]) -> Vec<usize> {
        ids.iter().map(|id| id + 1).collect()
    }

    #[test]
    fn test_five_with_step_two() {
        let mut sim = EliminationSimulator::new(5, 2).unwrap();
        let victims = sim.run_to_end();
        assert_eq!(one_indexed(&victims), [2, 4, 1, 5]);
        assert_eq!(sim.survivor(), Some(2));
        assert_eq!(sim.elimination_order(), victims);
    }

    #[test]
    fn test_single_entry_is_terminal_immediately() {
        for step in [1, 2, 7] {
            let mut sim = EliminationSimulator::new(1, step).unwrap();
            assert!(sim.is_terminal());
            assert_eq!(sim.survivor(), Some(0));
            assert_eq!(sim.eliminate_next(), Elimination::Finished);
            assert_eq!(sim.history_len(), 0);
            assert_eq!(sim.aliveness(), [true]);
        }
    }

    #[test]
    fn test_seven_with_step_three_undo() {
        let mut sim = EliminationSimulator::new(7, 3).unwrap();
        assert_eq!(sim.eliminate_next(), Elimination::Victim(2));
        assert!(!sim.aliveness()[2]);

        assert!(sim.undo_last_elimination());
        assert_eq!(sim.aliveness(), [true; 7]);
        assert_eq!(sim.cursor(), 0);
        assert!(sim.elimination_order().is_empty());
    }

    #[test]
    fn test_seven_with_step_three_order() {
        let mut sim = EliminationSimulator::new(7, 3).unwrap();
        assert_eq!(sim.run_to_end(), [2, 5, 1, 6, 4, 0]);
        assert_eq!(sim.survivor(), Some(3));
    }

    #[test]
    fn test_step_one_takes_cursor_position() {
        let mut sim = EliminationSimulator::new(4, 1).unwrap();
        assert_eq!(sim.run_to_end(), [0, 1, 2]);
        assert_eq!(sim.survivor(), Some(3));
    }

    #[test]
    fn test_step_larger_than_ring() {
        let mut sim = EliminationSimulator::new(3, 5).unwrap();
        assert_eq!(sim.run_to_end(), [1, 2]);
        assert_eq!(sim.survivor(), Some(0));
    }

    #[test]
    fn test_cursor_wraps_after_removing_last_index() {
        // 0 1 2 3 with step 4 lands on the last index first.
        let mut sim = EliminationSimulator::new(4, 4).unwrap();
        assert_eq!(sim.eliminate_next(), Elimination::Victim(3));
        assert_eq!(sim.cursor(), 0);
    }

    #[test]
    fn test_finished_does_not_mutate() {
        let mut sim = EliminationSimulator::new(3, 2).unwrap();
        sim.run_to_end();
        let history_len = sim.history_len();
        let aliveness = sim.aliveness();
        assert_eq!(sim.eliminate_next(), Elimination::Finished);
        assert_eq!(sim.history_len(), history_len);
        assert_eq!(sim.aliveness(), aliveness);
    }

    #[test]
    fn test_undo_with_empty_history_is_noop() {
        let mut sim = EliminationSimulator::new(4, 2).unwrap();
        assert!(!sim.can_undo());
        assert!(!sim.undo_last_elimination());
        assert_eq!(sim.aliveness(), [true; 4]);
        assert_eq!(sim.cursor(), 0);
    }

    #[test]
    fn test_undo_restores_terminal_state_back_to_active() {
        let mut sim = EliminationSimulator::new(5, 2).unwrap();
        sim.run_to_end();
        assert!(sim.is_terminal());
        assert!(sim.undo_last_elimination());
        assert!(!sim.is_terminal());
        assert_eq!(sim.survivor(), None);
        assert_eq!(sim.eliminate_next(), Elimination::Victim(4));
    }

    #[test]
    fn test_disabled_history_never_undoes() {
        let options = SimulatorOptions::default().history_policy(HistoryPolicy::Disabled);
        let mut sim = EliminationSimulator::with_options(5, 2, &options).unwrap();
        assert_eq!(sim.eliminate_next(), Elimination::Victim(1));
        assert!(!sim.can_undo());
        assert!(!sim.undo_last_elimination());
        assert_eq!(sim.elimination_order(), [1]);
        assert_eq!(sim.run_to_end(), [3, 0, 4]);
        assert_eq!(sim.survivor(), Some(2));
    }

    #[test]
    fn test_bounded_history_limits_undo_depth() {
        let options = SimulatorOptions::default()
            .history_policy(HistoryPolicy::Bounded(NonZero::new(2).unwrap()));
        let mut sim = EliminationSimulator::with_options(6, 2, &options).unwrap();
        for _ in 0..4 {
            assert!(sim.eliminate_next().is_victim());
        }
        assert_eq!(sim.history_len(), 2);

        assert!(sim.undo_last_elimination());
        assert!(sim.undo_last_elimination());
        assert!(!sim.undo_last_elimination());
        assert_eq!(sim.elimination_order().len(), 2);
        assert_eq!(sim.survivors().len(), 4);
    }

    #[test]
    fn test_rejects_zero_configuration() {
        assert_eq!(
            EliminationSimulator::new(0, 3).unwrap_err(),
            SimulatorError::ZeroCount
        );
        assert_eq!(
            EliminationSimulator::new(3, 0).unwrap_err(),
            SimulatorError::ZeroStep
        );
    }

    #[test]
    fn test_configuration_echo() {
        let sim = EliminationSimulator::new(9, 4).unwrap();
        assert_eq!(sim.count(), 9);
        assert_eq!(sim.step(), 4);
        assert!(sim.history_policy().is_unbounded());
    }

    #[test]
    fn test_elimination_victim_accessor() {
        assert_eq!(Elimination::Victim(3).victim(), Some(3));
        assert_eq!(Elimination::Finished.victim(), None);
        assert!(Elimination::Finished.is_finished());
    }
}
