//! Josephus elimination simulator for the terminal.

use std::{io, process::ExitCode};

use clap::Parser as _;
use josephus_app::Args;

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let stdin = io::stdin();
    let stdout = io::stdout();
    match josephus_app::run(&args, stdin.lock(), stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::debug!("{err:?}");
            eprintln!("error: {err}");
            err.exit_code()
        }
    }
}
