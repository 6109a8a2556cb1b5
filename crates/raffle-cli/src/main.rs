//! `raffle` entry point.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use raffle_cli::config::Cli;
use raffle_core::entropy::OsEntropy;
use raffle_core::pacing::ThreadSleepPacer;
use tracing_subscriber::EnvFilter;

fn init_tracing(json: bool) {
    // Logs go to stderr so stdout carries only the report.
    let builder = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let stdin = Box::new(io::stdin().lock());
    let mut stdout = io::stdout().lock();

    match raffle_cli::run(&cli, &mut OsEntropy, &ThreadSleepPacer, stdin, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "draw failed");
            eprintln!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}
