//! Command-line options and how they merge into a [`Config`].

use crate::config::Config;
use crate::error::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

#[derive(Parser, Debug)]
#[command(
    name = "ntype",
    version,
    about = "Type text automatically with optional noisy keystrokes."
)]
pub struct Cli {
    /// Text to type. Defaults to clipboard contents if omitted.
    #[arg(short, long)]
    pub text: Option<String>,

    /// Seconds to wait before typing begins [default: 5.0]
    #[arg(long, value_name = "SECONDS", allow_negative_numbers = true)]
    pub delay: Option<f64>,

    /// Characters per second typing speed [default: 10.0]
    #[arg(long, allow_negative_numbers = true)]
    pub cps: Option<f64>,

    /// Probability (0-1) to inject and erase a random snippet before each word [default: 0.2]
    #[arg(long = "noise-prob", value_name = "PROB", allow_negative_numbers = true)]
    pub noise_prob: Option<f64>,

    /// Seed for randomness to make behavior reproducible.
    #[arg(long)]
    pub seed: Option<u64>,

    /// JSON config file; flags given on the command line take precedence.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<String>,

    /// Write the resolved configuration to FILE and exit.
    #[arg(long, value_name = "FILE")]
    pub save_config: Option<String>,

    /// Print the keystrokes that would be sent instead of sending them.
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Defaults, then the config file (if any), then explicit flags.
    /// The merged result is validated.
    pub fn resolve_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };

        if let Some(text) = &self.text {
            config.literal_text = Some(text.clone());
        }
        if let Some(delay) = self.delay {
            config.start_delay = delay;
        }
        if let Some(cps) = self.cps {
            config.chars_per_second = cps;
        }
        if let Some(noise_prob) = self.noise_prob {
            config.noise_probability = noise_prob;
        }
        if self.seed.is_some() {
            config.random_seed = self.seed;
        }
        config.verbose |= self.verbose;

        config.validate()?;
        Ok(config)
    }

    /// A usage-style error, as clap would report a bad argument.
    pub fn usage_error(message: impl std::fmt::Display) -> clap::Error {
        Cli::command().error(ErrorKind::ValueValidation, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TyperError;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("ntype").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[]).resolve_config().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_flags_override_defaults() {
        let config = parse(&[
            "-t",
            "hello",
            "--delay",
            "0",
            "--cps",
            "25",
            "--noise-prob",
            "1",
            "--seed",
            "42",
            "-v",
        ])
        .resolve_config()
        .unwrap();

        assert_eq!(config.literal_text.as_deref(), Some("hello"));
        assert_eq!(config.start_delay, 0.0);
        assert_eq!(config.chars_per_second, 25.0);
        assert_eq!(config.noise_probability, 1.0);
        assert_eq!(config.random_seed, Some(42));
        assert!(config.verbose);
    }

    #[test]
    fn test_negative_values_reach_validation() {
        let err = parse(&["--cps", "-3"]).resolve_config().unwrap_err();
        assert!(matches!(err, TyperError::ConfigValidation(_)));
        assert_eq!(err.to_string(), "--cps must be greater than zero.");

        let err = parse(&["--delay", "-1"]).resolve_config().unwrap_err();
        assert_eq!(err.to_string(), "--delay must be zero or positive.");

        let err = parse(&["--noise-prob", "1.5"]).resolve_config().unwrap_err();
        assert_eq!(err.to_string(), "--noise-prob must be between 0 and 1.");
    }

    #[test]
    fn test_non_numeric_value_is_parse_error() {
        let args = ["ntype", "--cps", "fast"];
        assert!(Cli::try_parse_from(args).is_err());
    }
}
