//! Terminal front end for the Josephus simulator.
#![allow(clippy::missing_errors_doc)]

use std::io::{BufRead, Write};

use josephus_game::EliminationSimulator;

pub use self::{
    cli::Args,
    error::AppError,
    session::{Command, Session},
};

pub mod cli;
mod error;
pub mod prompt;
pub mod render;
pub mod session;

/// Builds a simulator from `args`, prompting on `input` for missing values,
/// and runs it in the mode `args` selects.
pub fn run<R, W>(args: &Args, mut input: R, mut output: W) -> Result<(), AppError>
where
    R: BufRead,
    W: Write,
{
    let count = match args.count {
        Some(count) => count,
        None => prompt::read_number(&mut input, &mut output, "Enter number of people: ")?,
    };
    let step = match args.step {
        Some(step) => step,
        None => prompt::read_number(&mut input, &mut output, "Enter step: ")?,
    };

    let options = args.simulator_options();
    let sim = EliminationSimulator::with_options(count, step, &options)?;
    log::info!(
        "starting simulation: count={count}, step={step}, history={:?}",
        options.history_policy
    );

    let mut session = Session::new(sim, input, output, args.interval());
    if args.interactive {
        session.run_interactive()
    } else {
        session.run_auto()
    }
}
