//! FILENAME: app/src/main.rs
// PURPOSE: Entry point for the calc command-line tool.
// EXIT CODES: 0 all expressions evaluated, 1 some were rejected, 2 I/O failure.

mod cli;
mod logging;
mod runner;

use clap::Parser;
use cli::{Args, Config};
use runner::Runner;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    let config = Config::from(&args);
    logging::init(config.verbosity);

    log::info!("calc starting, mode={:?} json={}", config.mode, config.json);

    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut runner = Runner::new(config, stdout.lock(), stderr.lock());

    let result = if args.expressions.is_empty() {
        runner.run_lines(io::stdin().lock())
    } else {
        args.expressions
            .iter()
            .try_for_each(|expr| runner.run_expression(expr).map(|_| ()))
    };

    if let Err(e) = result {
        log::error!("I/O failure: {}", e);
        eprintln!("error: {}", e);
        return ExitCode::from(2);
    }

    if runner.failures() > 0 {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}
