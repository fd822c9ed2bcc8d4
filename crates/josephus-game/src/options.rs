use std::num::NonZero;

/// How many pre-elimination snapshots the simulator keeps for undo.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum HistoryPolicy {
    /// Keep every snapshot; any number of eliminations can be undone.
    #[default]
    Unbounded,
    /// Keep only the most recent snapshots, dropping the oldest first.
    Bounded(NonZero<usize>),
    /// Keep no snapshots; undo is always a no-op.
    Disabled,
}

impl HistoryPolicy {
    /// Returns the snapshot capacity, or `None` when unbounded or disabled.
    #[must_use]
    pub fn capacity(self) -> Option<NonZero<usize>> {
        match self {
            Self::Bounded(capacity) => Some(capacity),
            Self::Unbounded | Self::Disabled => None,
        }
    }
}

/// Options controlling an [`EliminationSimulator`](crate::EliminationSimulator).
///
/// # Example
///
/// ```
/// use josephus_game::{HistoryPolicy, SimulatorOptions};
///
/// let options = SimulatorOptions::default().history_policy(HistoryPolicy::Disabled);
/// assert!(options.history_policy.is_disabled());
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SimulatorOptions {
    /// Snapshot retention for undo.
    pub history_policy: HistoryPolicy,
}

impl SimulatorOptions {
    /// Sets the history policy.
    #[must_use]
    pub fn history_policy(mut self, policy: HistoryPolicy) -> Self {
        self.history_policy = policy;
        self
    }
}
