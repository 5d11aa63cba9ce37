//! Run configuration.
//!
//! Controls which rayon pool the parallel sections of a demo run on.

use crate::error::{Error, Result};

/// Environment variable that fixes the worker pool size.
pub const PARALLELISM_ENV: &str = "LAMBDA_TOUR_PARALLELISM";

/// Settings shared by every demo in a run.
///
/// # Examples
///
/// ```
/// use lambda_tour::RunConfig;
///
/// let config = RunConfig::new().with_parallelism(Some(2));
/// let threads = config.install(rayon::current_num_threads).unwrap();
/// assert_eq!(threads, 2);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunConfig {
    /// Worker count for parallel sections. `None` uses rayon's global pool.
    pub parallelism: Option<usize>,
}

impl RunConfig {
    /// Creates a configuration that uses the global pool.
    #[must_use]
    pub const fn new() -> Self {
        Self { parallelism: None }
    }

    /// Sets the worker count for parallel sections.
    #[must_use]
    pub const fn with_parallelism(mut self, parallelism: Option<usize>) -> Self {
        self.parallelism = parallelism;
        self
    }

    /// Checks that the configuration can be used.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if parallelism is zero.
    pub fn validate(&self) -> Result<()> {
        if self.parallelism == Some(0) {
            return Err(Error::Config {
                message: "parallelism must be > 0".to_string(),
            });
        }
        Ok(())
    }

    /// Runs `op` on the configured pool.
    ///
    /// With no fixed parallelism `op` runs directly and any rayon work it
    /// starts lands on the global pool. Otherwise a dedicated pool is built
    /// for the call.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the configuration is invalid or the pool
    /// cannot be built.
    pub fn install<OP, R>(&self, op: OP) -> Result<R>
    where
        OP: FnOnce() -> R + Send,
        R: Send,
    {
        self.validate()?;
        match self.parallelism {
            None => Ok(op()),
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()?;
                tracing::debug!(threads, "built dedicated worker pool");
                Ok(pool.install(op))
            }
        }
    }
}

/// Label for the thread currently executing: `worker-<n>` on a rayon pool,
/// otherwise the thread's name or `main`.
#[must_use]
pub fn worker_label() -> String {
    rayon::current_thread_index().map_or_else(
        || {
            std::thread::current()
                .name()
                .unwrap_or("main")
                .to_string()
        },
        |index| format!("worker-{index}"),
    )
}
