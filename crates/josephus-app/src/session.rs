//! Driving a simulation from the terminal.

use std::{
    io::{BufRead, Write},
    thread,
    time::Duration,
};

use josephus_game::{Elimination, EliminationSimulator};

use crate::{AppError, render::render};

const HELP: &str = "commands: [enter]/n = next, u = undo, r = run to end, q = quit";

/// A command typed in interactive mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Eliminate the next person.
    Next,
    /// Undo the last elimination.
    Undo,
    /// Eliminate until one person remains.
    RunToEnd,
    /// Leave the session.
    Quit,
}

impl Command {
    /// Parses a trimmed input line, returning `None` for unknown commands.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        match line {
            "" | "n" | "next" => Some(Self::Next),
            "u" | "undo" => Some(Self::Undo),
            "r" | "run" => Some(Self::RunToEnd),
            "q" | "quit" | "exit" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Couples a simulator with the streams it is rendered to and driven from.
#[derive(Debug)]
pub struct Session<R, W> {
    sim: EliminationSimulator,
    input: R,
    output: W,
    interval: Duration,
}

impl<R, W> Session<R, W>
where
    R: BufRead,
    W: Write,
{
    /// Creates a session. `interval` is only used by [`run_auto`](Self::run_auto).
    #[must_use]
    pub fn new(sim: EliminationSimulator, input: R, output: W, interval: Duration) -> Self {
        Self {
            sim,
            input,
            output,
            interval,
        }
    }

    /// Returns the simulator being driven.
    #[must_use]
    pub fn simulator(&self) -> &EliminationSimulator {
        &self.sim
    }

    /// Advances one round per `interval` until a single survivor remains.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Io`] if writing to the output fails.
    pub fn run_auto(&mut self) -> Result<(), AppError> {
        self.draw()?;
        while !self.sim.is_terminal() {
            if !self.interval.is_zero() {
                thread::sleep(self.interval);
            }
            self.next()?;
        }
        Ok(())
    }

    /// Reads commands line by line until `quit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Io`] if reading or writing fails.
    pub fn run_interactive(&mut self) -> Result<(), AppError> {
        self.draw()?;
        writeln!(self.output, "{HELP}")?;
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                break;
            }
            let Some(command) = Command::parse(line.trim()) else {
                writeln!(self.output, "unknown command: {:?}", line.trim())?;
                writeln!(self.output, "{HELP}")?;
                continue;
            };
            log::trace!("command: {command:?}");

            match command {
                Command::Next => self.next()?,
                Command::Undo => self.undo()?,
                Command::RunToEnd => {
                    while !self.sim.is_terminal() {
                        let elimination = self.sim.eliminate_next();
                        self.report(elimination)?;
                    }
                    self.draw()?;
                }
                Command::Quit => break,
            }
        }
        Ok(())
    }

    fn next(&mut self) -> Result<(), AppError> {
        let elimination = self.sim.eliminate_next();
        self.report(elimination)?;
        if elimination.is_victim() {
            self.draw()?;
        }
        Ok(())
    }

    fn undo(&mut self) -> Result<(), AppError> {
        let last = self.sim.elimination_order().last().copied();
        match last {
            Some(victim) if self.sim.undo_last_elimination() => {
                writeln!(self.output, "Restored: {}", victim + 1)?;
                self.draw()?;
            }
            _ => writeln!(self.output, "Nothing to undo")?,
        }
        Ok(())
    }

    fn report(&mut self, elimination: Elimination) -> Result<(), AppError> {
        match elimination {
            Elimination::Victim(victim) => writeln!(self.output, "Eliminated: {}", victim + 1)?,
            Elimination::Finished => writeln!(self.output, "Already finished")?,
        }
        Ok(())
    }

    fn draw(&mut self) -> Result<(), AppError> {
        write!(self.output, "{}", render(&self.sim))?;
        Ok(())
    }
}
