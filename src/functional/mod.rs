//! Reusable function shapes and reductions used across the demos.
//!
//! - **Shapes**: single-method traits ([`BinaryCalculator`], [`Task`]) that
//!   closures satisfy through blanket impls
//! - **Joiner**: [`StringJoiner`], a delimiter/prefix/suffix string builder
//! - **Collector**: [`Collector`], a supplier/accumulator/combiner/finisher
//!   reduction that runs sequentially or on rayon

pub mod collector;
pub mod joiner;
pub mod shapes;

pub use collector::Collector;
pub use joiner::StringJoiner;
pub use shapes::{BinaryCalculator, Task, calculate, run_on_thread};
