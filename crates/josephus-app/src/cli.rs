//! Command-line arguments.

use std::{num::NonZero, time::Duration};

use clap::Parser;
use josephus_game::{HistoryPolicy, SimulatorOptions};

/// Simulates the Josephus elimination game in the terminal.
///
/// People stand in a ring numbered from 1. Starting at person 1, every
/// STEP-th person is eliminated until only one survivor remains.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Number of people in the ring. Prompted for when omitted.
    #[arg(short = 'n', long, value_name = "COUNT")]
    pub count: Option<usize>,

    /// Eliminate every STEP-th person. Prompted for when omitted.
    #[arg(short = 'k', long, value_name = "STEP")]
    pub step: Option<usize>,

    /// Delay between automatic rounds, in milliseconds.
    #[arg(long, value_name = "MS", default_value_t = 1000)]
    pub interval_ms: u64,

    /// Read commands from stdin instead of advancing automatically.
    #[arg(short, long)]
    pub interactive: bool,

    /// Do not keep undo snapshots.
    #[arg(long, conflicts_with = "history_limit")]
    pub no_history: bool,

    /// Keep at most N undo snapshots, dropping the oldest.
    #[arg(long, value_name = "N")]
    pub history_limit: Option<NonZero<usize>>,
}

impl Args {
    /// Builds simulator options from the history flags.
    #[must_use]
    pub fn simulator_options(&self) -> SimulatorOptions {
        let policy = if self.no_history {
            HistoryPolicy::Disabled
        } else if let Some(limit) = self.history_limit {
            HistoryPolicy::Bounded(limit)
        } else {
            HistoryPolicy::Unbounded
        };
        SimulatorOptions::default().history_policy(policy)
    }

    /// Returns the delay between automatic rounds.
    #[must_use]
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}
