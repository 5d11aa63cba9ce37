//! # lambda-tour
//!
//! A guided tour of closures, function references and iterator pipelines.
//!
//! Each demo is a self-contained program that builds a few in-memory values,
//! pushes them through closures and iterator adapters, and records what it
//! prints in a [`Transcript`]. Demos share nothing; any one can be run,
//! skipped or reordered without affecting the rest.
//!
//! ## Features
//!
//! - **Closures**: custom function-shaped traits, nesting, predefined shapes
//! - **Function paths**: methods, associated functions and constructors as values
//! - **Pipelines**: laziness, collectors, grouping, reductions
//! - **Parallelism**: the same pipelines on rayon, with unordered output

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![warn(unsafe_code)]

pub mod cli;
pub mod config;
pub mod core;
pub mod demos;
pub mod error;
pub mod functional;

// Re-export commonly used types at crate root
pub use error::{Error, Result};

// Re-export configuration
pub use config::{PARALLELISM_ENV, RunConfig, worker_label};

// Re-export core domain types
pub use core::{Container, Item, Person, Transcript};

// Re-export function shapes and collectors
pub use functional::{BinaryCalculator, Collector, StringJoiner, Task};

// Re-export demo types
pub use demos::{Demo, DemoReport, all_demos, available_demos, create_demo, run_demo};

// Re-export CLI types
pub use cli::{Cli, Commands, OutputFormat};
