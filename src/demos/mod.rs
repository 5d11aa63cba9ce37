//! The demonstrations.
//!
//! Each demo is an independent, self-contained walk through one topic. A demo
//! writes its output to a [`Transcript`] and shares no state with any other
//! demo; running them in any order or dropping one changes nothing else.
//!
//! - **lambdas**: closure syntax and function-shaped traits
//! - **method-refs**: function, method and constructor paths as values
//! - **streams**: iterator pipelines, laziness, collectors and reductions
//! - **flat-map**: flattening nested containers and parallel iteration

pub mod flat_map;
pub mod lambdas;
pub mod method_refs;
pub mod streams;

pub use flat_map::FlatMapDemo;
pub use lambdas::LambdasDemo;
pub use method_refs::MethodRefsDemo;
pub use streams::StreamsDemo;

use crate::config::RunConfig;
use crate::core::Transcript;
use crate::error::{CommandError, Result};
use serde::Serialize;

/// A runnable demonstration.
///
/// Implementations must be `Send + Sync`; a demo holds no state of its own
/// and may run its parallel sections on rayon workers.
pub trait Demo: Send + Sync {
    /// Name used to select the demo on the command line.
    fn name(&self) -> &'static str;

    /// One-line summary of what the demo shows.
    fn description(&self) -> &'static str {
        "No description available"
    }

    /// Returns whether two runs always produce the same transcript.
    ///
    /// Demos with a parallel section override this to return `false`.
    fn is_deterministic(&self) -> bool {
        true
    }

    /// Runs the demo, appending every printed line to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if a worker thread fails or the configured pool
    /// cannot be built.
    fn run(&self, config: &RunConfig, out: &Transcript) -> Result<()>;
}

/// The outcome of running one demo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoReport {
    /// Demo name.
    pub name: String,
    /// Whether the transcript is reproducible run to run.
    pub deterministic: bool,
    /// Printed lines, in order.
    pub lines: Vec<String>,
}

/// Runs `demo` with a fresh transcript.
///
/// # Errors
///
/// Returns whatever error the demo itself returns.
pub fn run_demo(demo: &dyn Demo, config: &RunConfig) -> Result<DemoReport> {
    tracing::debug!(demo = demo.name(), "starting demo");
    let out = Transcript::new();
    demo.run(config, &out)?;
    let lines = out.into_lines();
    tracing::debug!(demo = demo.name(), lines = lines.len(), "finished demo");
    Ok(DemoReport {
        name: demo.name().to_string(),
        deterministic: demo.is_deterministic(),
        lines,
    })
}

/// Creates a demo by name.
///
/// # Errors
///
/// Returns [`CommandError::UnknownDemo`] if the name is not recognized.
pub fn create_demo(name: &str) -> Result<Box<dyn Demo>> {
    match name.to_lowercase().as_str() {
        "lambdas" => Ok(Box::new(LambdasDemo)),
        "method-refs" | "method_refs" => Ok(Box::new(MethodRefsDemo)),
        "streams" => Ok(Box::new(StreamsDemo)),
        "flat-map" | "flat_map" => Ok(Box::new(FlatMapDemo)),
        _ => Err(CommandError::UnknownDemo {
            name: name.to_string(),
        }
        .into()),
    }
}

/// Lists available demo names in their canonical order.
#[must_use]
pub fn available_demos() -> Vec<&'static str> {
    vec!["lambdas", "method-refs", "streams", "flat-map"]
}

/// Every demo, in canonical order.
#[must_use]
pub fn all_demos() -> Vec<Box<dyn Demo>> {
    vec![
        Box::new(LambdasDemo),
        Box::new(MethodRefsDemo),
        Box::new(StreamsDemo),
        Box::new(FlatMapDemo),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_demo_known() {
        for name in available_demos() {
            let demo = create_demo(name).unwrap();
            assert_eq!(demo.name(), name);
        }
    }

    #[test]
    fn test_create_demo_aliases_and_case() {
        assert_eq!(create_demo("FLAT_MAP").unwrap().name(), "flat-map");
        assert_eq!(create_demo("Method_Refs").unwrap().name(), "method-refs");
    }

    #[test]
    fn test_create_demo_unknown() {
        let result = create_demo("monads");
        assert!(matches!(
            result,
            Err(crate::Error::Command(CommandError::UnknownDemo { .. }))
        ));
    }

    #[test]
    fn test_all_demos_matches_names() {
        let names: Vec<_> = all_demos().iter().map(|d| d.name()).collect();
        assert_eq!(names, available_demos());
    }

    #[test]
    fn test_descriptions_present() {
        for demo in all_demos() {
            assert_ne!(demo.description(), "No description available");
        }
    }

    #[test]
    fn test_run_demo_report() {
        let report = run_demo(&LambdasDemo, &RunConfig::default()).unwrap();
        assert_eq!(report.name, "lambdas");
        assert!(report.deterministic);
        assert!(!report.lines.is_empty());
    }
}
