//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use crate::config::{PARALLELISM_ENV, RunConfig};
use clap::{Parser, Subcommand};

/// lambda-tour: closures, function references and iterator pipelines,
/// one runnable demo at a time.
#[derive(Parser, Debug)]
#[command(name = "lambda-tour")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Worker count for parallel sections.
    ///
    /// Defaults to rayon's global pool.
    #[arg(short, long, env = PARALLELISM_ENV, global = true)]
    pub parallelism: Option<usize>,

    /// Enable verbose (debug) logging on stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (text, json).
    #[arg(long, default_value = "text", global = true)]
    pub format: String,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List available demos.
    #[command(name = "list", alias = "ls")]
    List,

    /// Run a single demo.
    Run {
        /// Demo name (see `list`).
        demo: String,
    },

    /// Run every demo in order.
    All,
}

impl Cli {
    /// Returns the run configuration described by the flags.
    #[must_use]
    pub const fn run_config(&self) -> RunConfig {
        RunConfig::new().with_parallelism(self.parallelism)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_run_config_default() {
        let cli = Cli {
            parallelism: None,
            verbose: false,
            format: "text".to_string(),
            command: Commands::List,
        };
        assert_eq!(cli.run_config(), RunConfig::default());
    }

    #[test]
    fn test_run_config_parallelism() {
        let cli = Cli::try_parse_from(["lambda-tour", "run", "streams", "-p", "2"]).unwrap();
        assert_eq!(cli.run_config().parallelism, Some(2));
        assert!(matches!(cli.command, Commands::Run { ref demo } if demo == "streams"));
    }

    #[test]
    fn test_parallelism_env_name() {
        let command = Cli::command();
        let arg = command
            .get_arguments()
            .find(|a| a.get_id() == "parallelism")
            .unwrap();
        assert_eq!(
            arg.get_env(),
            Some(std::ffi::OsStr::new(PARALLELISM_ENV))
        );
    }

    #[test]
    fn test_list_alias() {
        let cli = Cli::try_parse_from(["lambda-tour", "ls"]).unwrap();
        assert!(matches!(cli.command, Commands::List));
    }
}
