//! User-defined function shapes.
//!
//! Small single-method traits with blanket impls over the matching `Fn`
//! signature, so a named type and a closure can stand in for each other.

use crate::error::{DemoError, Result};
use std::thread;

/// An operation over two `f64` operands.
///
/// Every `Fn(f64, f64) -> f64` is a calculator.
///
/// # Examples
///
/// ```
/// use lambda_tour::functional::{BinaryCalculator, calculate};
///
/// assert_eq!(calculate(&|a: f64, b: f64| a * b, 3.0, 7.0), 21.0);
/// assert_eq!((|a: f64, b: f64| a - b).calculate(3.0, 7.0), -4.0);
/// ```
pub trait BinaryCalculator {
    /// Applies the operation.
    fn calculate(&self, lhs: f64, rhs: f64) -> f64;
}

impl<F> BinaryCalculator for F
where
    F: Fn(f64, f64) -> f64,
{
    fn calculate(&self, lhs: f64, rhs: f64) -> f64 {
        self(lhs, rhs)
    }
}

/// Applies `calc` to the two operands.
pub fn calculate(calc: &impl BinaryCalculator, lhs: f64, rhs: f64) -> f64 {
    calc.calculate(lhs, rhs)
}

/// A unit of work with no input and no result.
///
/// Implemented by named types and by every `Fn()` closure.
pub trait Task: Send + Sync {
    /// Runs the task.
    fn run(&self);
}

impl<F> Task for F
where
    F: Fn() + Send + Sync,
{
    fn run(&self) {
        self();
    }
}

/// Runs `task` on a freshly spawned, named thread and waits for it.
///
/// The task may borrow from the caller; the thread is scoped to this call.
pub fn run_on_thread<T: Task>(name: &str, task: &T) -> Result<()> {
    thread::scope(|scope| {
        let handle = thread::Builder::new()
            .name(name.to_string())
            .spawn_scoped(scope, || task.run())
            .map_err(|e| DemoError::SpawnFailed {
                task: name.to_string(),
                reason: e.to_string(),
            })?;
        tracing::debug!(thread = name, "spawned task thread");
        handle.join().map_err(|_| DemoError::WorkerPanicked {
            task: name.to_string(),
        })?;
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Counter<'a> {
        hits: &'a AtomicUsize,
    }

    impl Task for Counter<'_> {
        fn run(&self) {
            self.hits.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_calculate_with_closure() {
        assert!((calculate(&|a: f64, b: f64| a * b, 3.0, 7.0) - 21.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_calculate_with_fn_item() {
        fn hypot(a: f64, b: f64) -> f64 {
            a.hypot(b)
        }
        assert!((calculate(&hypot, 3.0, 4.0) - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_run_named_task_on_thread() {
        let hits = AtomicUsize::new(0);
        run_on_thread("counter", &Counter { hits: &hits }).unwrap();
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_run_closure_on_thread_sees_name() {
        let seen = std::sync::Mutex::new(None);
        run_on_thread("named-worker", &|| {
            *seen.lock().unwrap() = thread::current().name().map(str::to_string);
        })
        .unwrap();
        assert_eq!(seen.into_inner().unwrap().as_deref(), Some("named-worker"));
    }

    #[test]
    #[allow(clippy::panic)]
    fn test_run_on_thread_reports_panic() {
        fn explode() {
            panic!("boom");
        }
        let result = run_on_thread("doomed", &explode);
        assert!(matches!(
            result,
            Err(crate::Error::Demo(DemoError::WorkerPanicked { .. }))
        ));
    }
}
