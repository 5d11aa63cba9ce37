//! CLI command implementations.

use crate::cli::output::{
    DemoSummary, OutputFormat, format_demo_list, format_report, format_reports,
};
use crate::cli::parser::{Cli, Commands};
use crate::config::RunConfig;
use crate::demos::{all_demos, create_demo, run_demo};
use crate::error::Result;

/// Executes the CLI command.
///
/// # Arguments
///
/// * `cli` - Parsed CLI arguments.
///
/// # Returns
///
/// Result with output string on success.
///
/// # Errors
///
/// Returns an error if the demo name is unknown, the configuration is
/// invalid, or a demo fails.
pub fn execute(cli: &Cli) -> Result<String> {
    let format = OutputFormat::parse(&cli.format);
    let config = cli.run_config();

    match &cli.command {
        Commands::List => cmd_list(format),
        Commands::Run { demo } => cmd_run(&config, demo, format),
        Commands::All => cmd_all(&config, format),
    }
}

// ==================== Command Implementations ====================

fn cmd_list(format: OutputFormat) -> Result<String> {
    let summaries: Vec<DemoSummary> = all_demos()
        .iter()
        .map(|demo| DemoSummary::of(demo.as_ref()))
        .collect();
    format_demo_list(&summaries, format)
}

fn cmd_run(config: &RunConfig, name: &str, format: OutputFormat) -> Result<String> {
    config.validate()?;
    let demo = create_demo(name)?;
    let report = run_demo(demo.as_ref(), config)?;
    format_report(&report, format)
}

fn cmd_all(config: &RunConfig, format: OutputFormat) -> Result<String> {
    config.validate()?;
    let reports = all_demos()
        .iter()
        .map(|demo| run_demo(demo.as_ref(), config))
        .collect::<Result<Vec<_>>>()?;
    format_reports(&reports, format)
}
