//! Ordered line sink shared by a demo and any worker threads it spawns.

use std::fmt::Display;
use std::sync::{Mutex, PoisonError};

/// Total width of a section banner, including the angle-bracket fill.
pub const BANNER_WIDTH: usize = 96;

/// Ordered transcript of the lines a demo prints.
///
/// `Transcript` is `Sync`, so closures running on rayon workers or spawned
/// threads can append through a shared reference. Lines keep the order in
/// which `line` calls acquired the lock.
///
/// # Examples
///
/// ```
/// use lambda_tour::core::Transcript;
///
/// let out = Transcript::new();
/// out.line("hello");
/// out.line(42);
/// assert_eq!(out.lines(), ["hello", "42"]);
/// ```
#[derive(Debug, Default)]
pub struct Transcript {
    lines: Mutex<Vec<String>>,
}

impl Transcript {
    /// Creates an empty transcript.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one line.
    pub fn line(&self, line: impl Display) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.to_string());
    }

    /// Appends a section banner such as `<<<<<<reduce>>>>>>`.
    pub fn banner(&self, title: &str) {
        self.line(banner(title));
    }

    /// Returns a snapshot of the lines written so far.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Consumes the transcript, returning its lines.
    #[must_use]
    pub fn into_lines(self) -> Vec<String> {
        self.lines
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of lines written so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns true if nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Renders a banner of [`BANNER_WIDTH`] characters around `title`.
///
/// Titles longer than the width still get at least three brackets per side.
#[must_use]
pub fn banner(title: &str) -> String {
    let fill = BANNER_WIDTH.saturating_sub(title.chars().count()).max(6);
    let left = fill / 2;
    format!("{}{title}{}", "<".repeat(left), ">".repeat(fill - left))
}

/// Renders items the way a list prints: `[a, b, c]`.
#[must_use]
pub fn bracketed<T: Display>(items: impl IntoIterator<Item = T>) -> String {
    let inner: Vec<String> = items.into_iter().map(|item| item.to_string()).collect();
    format!("[{}]", inner.join(", "))
}

/// Renders key/value pairs the way a map prints: `{k=v, k=v}`.
#[must_use]
pub fn braced<K: Display, V: Display>(pairs: impl IntoIterator<Item = (K, V)>) -> String {
    let inner: Vec<String> = pairs
        .into_iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect();
    format!("{{{}}}", inner.join(", "))
}
