//! Command-line and environment configuration.

use std::fmt;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use raffle_draw::domain::config::DrawConfig;
use raffle_draw::domain::record::Multiplier;
use raffle_draw::domain::seed::Seed;
use serde::Serialize;

use crate::error::AppError;

/// How results are written to standard output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report, one winner per line.
    Text,
    /// A single JSON document.
    Json,
}

/// Draw weighted-random winners from a CSV list of participants.
#[derive(Debug, Clone, Parser)]
#[command(name = "raffle", version, about, allow_negative_numbers = true)]
pub struct Cli {
    /// Input file, expected CSV with two columns: name and number of tickets.
    /// Number of tickets may contain a decimal part (see --multiplier).
    /// Standard input is used when no file is given.
    #[arg(long, env = "RAFFLE_INPUT", conflicts_with = "file")]
    pub input: Option<PathBuf>,

    /// Input file, as a positional alternative to --input.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Random seed for the shuffle. 0 derives a seed from system entropy.
    #[arg(long, env = "RAFFLE_SEED", default_value_t = 0)]
    pub seed: i64,

    /// Ticket size multiplier, between 1 and 10000. Use 100 to handle ticket
    /// sizes with two decimal places.
    #[arg(long, env = "RAFFLE_MULTIPLIER", default_value_t = 1)]
    pub multiplier: i64,

    /// Number of winning spots to print.
    #[arg(short = 'N', long = "N", env = "RAFFLE_N", default_value_t = 10)]
    pub winners: i64,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Emit log lines as JSON.
    #[arg(long)]
    pub log_json: bool,
}

impl Cli {
    /// The input path, if any, from either --input or the positional FILE.
    #[must_use]
    pub fn input_path(&self) -> Option<&Path> {
        self.input.as_deref().or(self.file.as_deref())
    }

    /// Validates the options into a draw configuration. Negative winner
    /// counts select nobody.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the multiplier is out of range.
    pub fn draw_config(&self) -> Result<DrawConfig, AppError> {
        let winners = usize::try_from(self.winners.max(0)).unwrap_or(usize::MAX);
        DrawConfig::new(self.seed, self.multiplier, winners).map_err(AppError::Config)
    }
}

/// The effective configuration of a finished draw, as reported to the user.
#[derive(Debug, Clone, Serialize)]
pub struct Configuration {
    /// Input path, empty for standard input.
    pub input: String,
    /// Seed actually used.
    pub seed: i64,
    /// Whether the seed came from system entropy.
    pub from_entropy: bool,
    /// Ticket multiplier.
    pub multiplier: Multiplier,
    /// Requested number of winners.
    #[serde(rename = "N")]
    pub winners: i64,
}

impl Configuration {
    /// Combines the parsed options with the seed the draw used.
    #[must_use]
    pub fn new(cli: &Cli, config: &DrawConfig, seed: Seed) -> Self {
        Self {
            input: cli
                .input_path()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
            seed: seed.value,
            from_entropy: seed.from_entropy,
            multiplier: config.multiplier,
            winners: cli.winners,
        }
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let source = if self.from_entropy {
            " (from system entropy)"
        } else {
            ""
        };
        writeln!(f, " --input='{}'", self.input)?;
        writeln!(f, " --seed={}{source}", self.seed)?;
        writeln!(f, " --multiplier={}", self.multiplier)?;
        writeln!(f, " --N={}", self.winners)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("raffle").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&[]);
        assert_eq!(cli.seed, 0);
        assert_eq!(cli.multiplier, 1);
        assert_eq!(cli.winners, 10);
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(cli.input_path().is_none());
    }

    #[test]
    fn test_explicit_values() {
        let cli = parse(&["--N=20", "--seed=1", "--multiplier=100", "baz.csv"]);
        assert_eq!(cli.winners, 20);
        assert_eq!(cli.seed, 1);
        assert_eq!(cli.multiplier, 100);
        assert_eq!(cli.input_path(), Some(Path::new("baz.csv")));
    }

    #[test]
    fn test_negative_seed_is_accepted() {
        let cli = parse(&["--seed", "-5026403773975906525"]);
        assert_eq!(cli.seed, -5_026_403_773_975_906_525);
    }

    #[test]
    fn test_short_n_flag() {
        assert_eq!(parse(&["-N", "3"]).winners, 3);
    }

    #[test]
    fn test_input_flag_and_positional_conflict() {
        let result = Cli::try_parse_from(["raffle", "--input", "a.csv", "b.csv"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert!(Cli::try_parse_from(["raffle", "--dummy"]).is_err());
    }

    #[test]
    fn test_multiplier_bounds() {
        for ok in ["1", "100", "10000"] {
            assert!(parse(&["--multiplier", ok]).draw_config().is_ok(), "{ok}");
        }
        for bad in ["0", "-1", "10001"] {
            let err = parse(&["--multiplier", bad]).draw_config().unwrap_err();
            assert!(
                err.to_string().contains("multiplier out of range"),
                "{bad}: {err}"
            );
        }
    }

    #[test]
    fn test_negative_winner_count_selects_nobody() {
        let config = parse(&["--N=-3"]).draw_config().unwrap();
        assert_eq!(config.winners, 0);
    }

    #[test]
    fn test_configuration_display_matches_report_layout() {
        let cli = parse(&["--input=people.csv", "--multiplier=100", "--N=2"]);
        let config = cli.draw_config().unwrap();
        let seed = Seed {
            value: 7,
            from_entropy: true,
        };
        assert_eq!(
            Configuration::new(&cli, &config, seed).to_string(),
            " --input='people.csv'\n --seed=7 (from system entropy)\n --multiplier=100\n --N=2\n"
        );
    }
}
