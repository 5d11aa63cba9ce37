//! Output formatting for CLI commands.
//!
//! Supports text and JSON output formats.

use crate::demos::{Demo, DemoReport};
use crate::error::{CommandError, Error, Result};
use serde::Serialize;
use std::fmt::Write;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output.
    Json,
}

impl OutputFormat {
    /// Parses format from string.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Summary of a demo for listings.
#[derive(Debug, Clone, Serialize)]
pub struct DemoSummary {
    /// Demo name.
    pub name: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Whether the transcript is reproducible.
    pub deterministic: bool,
}

impl DemoSummary {
    /// Summarises a demo.
    #[must_use]
    pub fn of(demo: &dyn Demo) -> Self {
        Self {
            name: demo.name(),
            description: demo.description(),
            deterministic: demo.is_deterministic(),
        }
    }
}

/// Formats the demo listing.
///
/// # Errors
///
/// Returns [`CommandError::OutputFormat`] if JSON serialization fails.
pub fn format_demo_list(demos: &[DemoSummary], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format_demo_list_text(demos)),
        OutputFormat::Json => format_json(&demos),
    }
}

fn format_demo_list_text(demos: &[DemoSummary]) -> String {
    if demos.is_empty() {
        return "No demos found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str("Demos:\n");
    let _ = writeln!(output, "{:<14} {:<14} Description", "Name", "Deterministic");
    output.push_str(&"-".repeat(70));
    output.push('\n');

    for demo in demos {
        let _ = writeln!(
            output,
            "{:<14} {:<14} {}",
            demo.name,
            if demo.deterministic { "yes" } else { "no" },
            demo.description
        );
    }

    output
}

/// Formats a single demo run.
///
/// # Errors
///
/// Returns [`CommandError::OutputFormat`] if JSON serialization fails.
pub fn format_report(report: &DemoReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format_report_text(report)),
        OutputFormat::Json => format_json(report),
    }
}

fn format_report_text(report: &DemoReport) -> String {
    let mut output = String::new();
    for line in &report.lines {
        output.push_str(line);
        output.push('\n');
    }
    output
}

/// Formats several demo runs; text output separates them with a blank line.
///
/// # Errors
///
/// Returns [`CommandError::OutputFormat`] if JSON serialization fails.
pub fn format_reports(reports: &[DemoReport], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(reports
            .iter()
            .map(format_report_text)
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => format_json(&reports),
    }
}

/// Formats an error for display.
///
/// Infallible: the JSON form is built as a [`serde_json::Value`].
#[must_use]
pub fn format_error(error: &Error, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => error.to_string(),
        OutputFormat::Json => serde_json::json!({ "error": error.to_string() }).to_string(),
    }
}

/// Formats a value as pretty-printed JSON.
fn format_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value).map_err(CommandError::from)?)
}
