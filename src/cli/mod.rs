//! CLI layer for lambda-tour.
//!
//! Provides the command-line interface using clap, with commands for
//! listing demos and running one or all of them.

pub mod commands;
pub mod output;
pub mod parser;

pub use commands::execute;
pub use output::OutputFormat;
pub use parser::{Cli, Commands};
