//! Core domain models for lambda-tour.
//!
//! The value holders the demos push through their pipelines, plus the
//! transcript every demo writes to. These are pure in-memory types with no
//! I/O dependencies.

pub mod container;
pub mod person;
pub mod transcript;

pub use container::{Container, Item};
pub use person::Person;
pub use transcript::{BANNER_WIDTH, Transcript, banner, braced, bracketed};
