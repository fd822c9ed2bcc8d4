use std::{io, process::ExitCode};

use josephus_game::SimulatorError;

/// Errors surfaced by the `josephus` binary.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum AppError {
    /// Reading input or writing output failed.
    #[display("I/O error: {_0}")]
    Io(#[from] io::Error),
    /// The ring configuration was rejected.
    #[display("invalid configuration: {_0}")]
    Simulator(#[from] SimulatorError),
    /// A prompted value was not a non-negative integer.
    #[display("invalid number: {input:?}")]
    InvalidNumber {
        /// The rejected input, trimmed.
        input: String,
    },
    /// Input ended while a value was still being prompted for.
    #[display("unexpected end of input")]
    UnexpectedEof,
}

impl AppError {
    /// Returns the process exit code for this error.
    ///
    /// Usage errors exit with 2, I/O failures with 1.
    #[must_use]
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Io(_) => ExitCode::FAILURE,
            Self::Simulator(_) | Self::InvalidNumber { .. } | Self::UnexpectedEof => {
                ExitCode::from(2)
            }
        }
    }
}
