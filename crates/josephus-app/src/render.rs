//! Text rendering of the ring.

use std::fmt::Write as _;

use josephus_game::EliminationSimulator;

/// Entries per rendered row.
const ROW_WIDTH: usize = 20;

const ALIVE: char = 'o';
const ELIMINATED: char = 'x';

/// Renders the ring as rows of 1-based identifiers with an alive/eliminated
/// marker under each, followed by a status line.
///
/// ```text
///  1 2 3 4 5
///  o x o x o
/// Remaining: 3
/// ```
#[must_use]
pub fn render(sim: &EliminationSimulator) -> String {
    let aliveness = sim.aliveness();
    let width = sim.count().to_string().len() + 1;

    let mut out = String::new();
    for (row, flags) in aliveness.chunks(ROW_WIDTH).enumerate() {
        let first = row * ROW_WIDTH + 1;
        for id in first..first + flags.len() {
            let _ = write!(out, "{id:>width$}");
        }
        out.push('\n');
        for &alive in flags {
            let marker = if alive { ALIVE } else { ELIMINATED };
            let _ = write!(out, "{marker:>width$}");
        }
        out.push('\n');
    }

    match sim.survivor() {
        Some(survivor) => {
            let _ = writeln!(out, "Survivor: {}", survivor + 1);
        }
        None => {
            let _ = writeln!(out, "Remaining: {}", sim.survivors().len());
        }
    }
    out
}
