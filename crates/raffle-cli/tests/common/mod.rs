//! Shared test helpers for CLI integration tests.
#![allow(dead_code)]

use std::io::Read;

use clap::Parser;
use raffle_cli::config::Cli;
use raffle_cli::error::AppError;
use raffle_core::entropy::EntropySource;
use raffle_test_support::{RecordingPacer, ScriptedEntropy};

/// Parse `args` as if they followed the binary name.
pub fn cli(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("raffle").chain(args.iter().copied()))
        .expect("test arguments must parse")
}

/// Run a draw over `stdin` with the given entropy source, returning stdout.
pub fn run_with_entropy(
    args: &[&str],
    stdin: &str,
    entropy: &mut dyn EntropySource,
) -> Result<String, AppError> {
    let stdin: Box<dyn Read + '_> = Box::new(stdin.as_bytes());
    let mut out = Vec::new();
    raffle_cli::run(&cli(args), entropy, &RecordingPacer::new(), stdin, &mut out)?;
    Ok(String::from_utf8(out).expect("output must be UTF-8"))
}

/// Run a draw over `stdin` with an entropy source that must not be touched.
pub fn run(args: &[&str], stdin: &str) -> Result<String, AppError> {
    let mut entropy = ScriptedEntropy::new(vec![]);
    run_with_entropy(args, stdin, &mut entropy)
}

/// The winner lines of a text report.
pub fn winners(report: &str) -> Vec<&str> {
    report
        .lines()
        .skip_while(|line| *line != "Results")
        .skip(1)
        .collect()
}
