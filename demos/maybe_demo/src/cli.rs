//! Command-line surface of the demo.
//!
//! The command line is the binary's only configuration layer: the log
//! filter can also come from `MAYBE_DEMO_LOG`, and running without a
//! subcommand selects the showcase.

use clap::{Parser, Subcommand};

/// Environment variable consulted when `--log-filter` is absent.
pub const LOG_FILTER_ENV: &str = "MAYBE_DEMO_LOG";

/// Command-line arguments accepted by `maybe-demo`.
#[derive(Debug, Parser)]
#[command(
    name = "maybe-demo",
    bin_name = "maybe-demo",
    about = "Walks through the states of the Maybe container",
    version
)]
pub struct CommandLine {
    /// Tracing filter directives for diagnostics written to standard error.
    #[arg(
        long,
        value_name = "FILTER",
        env = LOG_FILTER_ENV,
        default_value = "warn",
        global = true
    )]
    pub log_filter: String,
    /// Workflow to run; defaults to the showcase.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl CommandLine {
    /// The requested workflow, falling back to [`Commands::Showcase`].
    #[must_use]
    pub fn selected(&self) -> Commands {
        self.command.unwrap_or_default()
    }
}

/// Workflows offered by the demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Subcommand)]
pub enum Commands {
    /// Run every demonstration scenario and report each one.
    #[default]
    Showcase,
    /// Print the container the producer returns for a number.
    Produce {
        /// Input handed to the producer.
        #[arg(allow_negative_numbers = true)]
        number: i64,
    },
    /// Coerce the producer's container into a string parameter.
    Coerce {
        /// Input handed to the producer.
        #[arg(allow_negative_numbers = true)]
        number: i64,
    },
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use rstest::rstest;

    use super::{CommandLine, Commands};

    #[rstest]
    #[case(&["maybe-demo"], Commands::Showcase)]
    #[case(&["maybe-demo", "showcase"], Commands::Showcase)]
    #[case(&["maybe-demo", "produce", "42"], Commands::Produce { number: 42 })]
    #[case(&["maybe-demo", "produce", "-1"], Commands::Produce { number: -1 })]
    #[case(&["maybe-demo", "coerce", "23"], Commands::Coerce { number: 23 })]
    fn selects_the_requested_workflow(#[case] args: &[&str], #[case] expected: Commands) {
        let cli = CommandLine::try_parse_from(args).expect("arguments should parse");
        assert_eq!(cli.selected(), expected);
    }

    #[test]
    fn log_filter_defaults_to_warn() {
        let cli = CommandLine::try_parse_from(["maybe-demo", "produce", "0"])
            .expect("arguments should parse");
        assert_eq!(cli.log_filter, "warn");
    }

    #[test]
    fn log_filter_is_global() {
        let cli = CommandLine::try_parse_from(["maybe-demo", "coerce", "1", "--log-filter", "debug"])
            .expect("arguments should parse");
        assert_eq!(cli.log_filter, "debug");
    }

    #[test]
    fn rejects_non_numeric_input() {
        assert!(CommandLine::try_parse_from(["maybe-demo", "produce", "forty-two"]).is_err());
    }
}
