//! Reading ring parameters from an interactive prompt.

use std::io::{BufRead, Write};

use crate::AppError;

/// Writes `prompt`, then reads one line from `input` and parses it as a number.
///
/// # Errors
///
/// Returns [`AppError::UnexpectedEof`] if `input` is exhausted,
/// [`AppError::InvalidNumber`] if the line is not a non-negative integer, and
/// [`AppError::Io`] if reading or writing fails.
pub fn read_number<R, W>(input: &mut R, output: &mut W, prompt: &str) -> Result<usize, AppError>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(AppError::UnexpectedEof);
    }
    let line = line.trim();
    line.parse().map_err(|_| AppError::InvalidNumber {
        input: line.to_owned(),
    })
}
