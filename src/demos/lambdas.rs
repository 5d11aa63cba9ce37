//! Closure syntax and function-shaped traits.
//!
//! Walks from a named type implementing a one-method trait, to a closure
//! standing in for the same trait, to closures passed as arguments,
//! returned from closures, picked by a conditional, and finally the
//! everyday shapes: predicate, supplier, consumer and function.

use crate::config::RunConfig;
use crate::core::Transcript;
use crate::demos::Demo;
use crate::error::Result;
use crate::functional::{Task, calculate, run_on_thread};
use std::cmp::Ordering;

/// Closure syntax demo.
#[derive(Debug, Clone, Copy, Default)]
pub struct LambdasDemo;

/// A named type implementing [`Task`], the pre-closure way of passing
/// behaviour around.
struct Greeter<'a> {
    out: &'a Transcript,
}

impl Task for Greeter<'_> {
    fn run(&self) {
        self.out.line("hello from anonymous class");
    }
}

/// Picks a string ordering with a conditional expression.
///
/// Both arms are non-capturing closures, so they coerce to the same
/// function pointer type.
#[must_use]
pub fn string_order(ascending: bool) -> fn(&str, &str) -> Ordering {
    if ascending {
        |a: &str, b: &str| a.cmp(b)
    } else {
        |a: &str, b: &str| b.cmp(a)
    }
}

/// Builds a closure that returns another closure.
///
/// The outer closure is fallible; the inner one writes `called`.
fn nested_callable<'a>(out: &'a Transcript) -> impl Fn() -> Result<Box<dyn Fn() + 'a>> + 'a {
    move || {
        let inner: Box<dyn Fn() + 'a> = Box::new(move || out.line("called"));
        Ok(inner)
    }
}

/// Invokes a fallible callable, logging instead of propagating a failure.
fn call_logged<F>(callable: F)
where
    F: FnOnce() -> Result<()>,
{
    if let Err(err) = callable() {
        tracing::error!(error = %err, "nested callable failed");
    }
}

impl Demo for LambdasDemo {
    fn name(&self) -> &'static str {
        "lambdas"
    }

    fn description(&self) -> &'static str {
        "Closures as values: custom shapes, nesting, and predefined shapes"
    }

    fn run(&self, _config: &RunConfig, out: &Transcript) -> Result<()> {
        out.banner("old way of implementing interface");
        run_on_thread("greeter", &Greeter { out })?;

        out.banner("using lambda on functional interface");
        run_on_thread("lambda", &|| out.line("hello from lambda"))?;

        out.banner("using functional interfaces created by yourself");
        out.line(format!(
            "a * b = {:3.0}",
            calculate(&|a: f64, b: f64| a * b, 3.0, 7.0)
        ));

        // A closure whose body is another closure.
        let callable = nested_callable(out);
        call_logged(|| {
            let inner = callable()?;
            inner();
            Ok(())
        });

        let ascending = false;
        let cmp = string_order(ascending);
        tracing::debug!(
            ascending,
            ordering = ?cmp("a1", "b1"),
            "picked comparator by conditional"
        );

        out.banner("Predefined functional interfaces");
        let predicate = |s: &str| s.chars().count() > 5;
        out.line(format!(
            "czy string 'to jest test' zawiera wiecej niz 5 znakow? {}",
            predicate("to jest test")
        ));

        let supplier = || "string supplied by...";
        out.line(format!("string supplied: {}", supplier()));

        let consumer = |x: &str| out.line(format!("CONSUmer to lower case : {}", x.to_lowercase()));
        consumer("CONSUmer");

        let converter = |i: i32| i.to_string();
        out.line(format!("convert integer to string : {}", converter(3)));

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::banner;
    use crate::error::DemoError;

    #[test]
    fn test_string_order() {
        assert_eq!(string_order(true)("a", "b"), Ordering::Less);
        assert_eq!(string_order(false)("a", "b"), Ordering::Greater);

        let mut words = vec!["b1", "c2", "a1"];
        words.sort_by(|a, b| string_order(false)(a, b));
        assert_eq!(words, ["c2", "b1", "a1"]);
    }

    #[test]
    fn test_nested_callable() {
        let out = Transcript::new();
        let callable = nested_callable(&out);
        callable().unwrap()();
        assert_eq!(out.lines(), ["called"]);
    }

    #[test]
    fn test_call_logged_swallows_error() {
        let mut ran = false;
        call_logged(|| {
            ran = true;
            Err(DemoError::WorkerPanicked {
                task: "nested".to_string(),
            }
            .into())
        });
        assert!(ran);
    }

    #[test]
    fn test_transcript() {
        let out = Transcript::new();
        LambdasDemo.run(&RunConfig::default(), &out).unwrap();
        let expected = vec![
            banner("old way of implementing interface"),
            "hello from anonymous class".to_string(),
            banner("using lambda on functional interface"),
            "hello from lambda".to_string(),
            banner("using functional interfaces created by yourself"),
            "a * b =  21".to_string(),
            "called".to_string(),
            banner("Predefined functional interfaces"),
            "czy string 'to jest test' zawiera wiecej niz 5 znakow? true".to_string(),
            "string supplied: string supplied by...".to_string(),
            "CONSUmer to lower case : consumer".to_string(),
            "convert integer to string : 3".to_string(),
        ];
        assert_eq!(out.into_lines(), expected);
    }

    #[test]
    fn test_is_deterministic() {
        assert!(LambdasDemo.is_deterministic());
    }
}
