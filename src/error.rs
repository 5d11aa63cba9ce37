//! Error types for lambda-tour.
//!
//! This module provides the error hierarchy using `thiserror` for running
//! demos, configuring the worker pool, and executing CLI commands.

use thiserror::Error;

/// Result type alias for lambda-tour operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    /// Errors raised while a demo is running.
    #[error("demo error: {0}")]
    Demo(#[from] DemoError),

    /// CLI command errors.
    #[error("command error: {0}")]
    Command(#[from] CommandError),

    /// Configuration errors.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },
}

/// Errors raised by the demos themselves.
#[derive(Error, Debug)]
pub enum DemoError {
    /// A spawned thread panicked before it could be joined.
    #[error("worker thread panicked: {task}")]
    WorkerPanicked {
        /// Name of the task the thread was running.
        task: String,
    },

    /// The OS refused to start a thread.
    #[error("failed to spawn thread for {task}: {reason}")]
    SpawnFailed {
        /// Name of the task the thread would have run.
        task: String,
        /// OS error message.
        reason: String,
    },

    /// Text could not be parsed as an integer.
    #[error("cannot parse {input:?} as an integer: {reason}")]
    ParseInt {
        /// The offending input.
        input: String,
        /// Parser message.
        reason: String,
    },
}

/// CLI command-specific errors.
#[derive(Error, Debug)]
pub enum CommandError {
    /// No demo is registered under the given name.
    #[error("unknown demo: {name}")]
    UnknownDemo {
        /// Name that was requested.
        name: String,
    },

    /// A value could not be rendered in the requested output format.
    #[error("output format error: {0}")]
    OutputFormat(String),
}

impl From<serde_json::Error> for CommandError {
    fn from(err: serde_json::Error) -> Self {
        Self::OutputFormat(err.to_string())
    }
}

impl From<rayon::ThreadPoolBuildError> for Error {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        Self::Config {
            message: format!("failed to build worker pool: {err}"),
        }
    }
}
