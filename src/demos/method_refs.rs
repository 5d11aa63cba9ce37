//! Named functions, methods and constructors used as values.

use crate::config::RunConfig;
use crate::core::{Transcript, bracketed};
use crate::demos::Demo;
use crate::error::Result;

/// Function, method and constructor reference demo.
#[derive(Debug, Clone, Copy, Default)]
pub struct MethodRefsDemo;

/// Built through a constructor path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Specimen {
    /// Where the value came from.
    pub origin: &'static str,
}

impl Specimen {
    /// Constructor used as a zero-argument supplier.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            origin: "Specimen::new",
        }
    }
}

impl Default for Specimen {
    fn default() -> Self {
        Self::new()
    }
}

/// Tuple struct whose name doubles as a `fn(i32) -> Celsius`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Celsius(pub i32);

trait Greet {
    fn greet(&self) -> String {
        "hello from the trait default".to_string()
    }
}

struct Plain;

impl Greet for Plain {}

struct Custom;

impl Greet for Custom {
    fn greet(&self) -> String {
        format!("hello from the override, not {:?}", <Plain as Greet>::greet(&Plain))
    }
}

/// Sorts ascending in place.
fn sort_ints(values: &mut [i32]) {
    values.sort_unstable();
}

impl Demo for MethodRefsDemo {
    fn name(&self) -> &'static str {
        "method-refs"
    }

    fn description(&self) -> &'static str {
        "Function, method and constructor paths passed where closures are expected"
    }

    fn run(&self, _config: &RunConfig, out: &Transcript) -> Result<()> {
        let consumer = |s: &str| out.line(s);
        consumer("hello from lambda");
        let consumer1: fn(&Transcript, String) = Transcript::line;
        consumer1(out, "Hello from method reference".to_string());

        out.banner("References to static methods");
        let mut array = [10, 2, 19, 5, 17];
        let consumer2: fn(&mut [i32]) = sort_ints;
        consumer2(&mut array);
        out.line(bracketed(&array));
        let list: Vec<i32> = array.iter().copied().collect();
        out.line(bracketed(&list));

        let mut array1 = [19, 5, 14, 3, 21, 4];
        let consumer3 = |a: &mut [i32]| a.sort_unstable();
        consumer3(array1.as_mut_slice());
        out.line(bracketed(&array1));

        out.banner("References to bound non-static methods");
        let s = "Trala Buha fdsa Gda dfsa A";
        // No bound method paths in Rust: the receiver is captured instead.
        let length: fn(&str) -> usize = str::len;
        let supplier = move || length(s);
        out.line(format!("s length from method reference: {}", supplier()));
        let supplier1 = || s.len();
        out.line(format!("s length from lambda: {}", supplier1()));

        out.banner("References to unbound non-static methods");
        let function: fn(&str) -> String = str::to_lowercase;
        out.line(format!(
            "STRING TO LOWER CASE with method reference: {}",
            function("STRING TO LOWER CASE")
        ));
        let function1 = |string: &str| string.to_lowercase();
        out.line(format!(
            "STRING TO LOWER CASE with lambda: {}",
            function1("STRING TO LOWER CASE")
        ));

        out.banner("References to constructors");
        let supplier2: fn() -> Specimen = Specimen::new;
        out.line(format!("{:?}", supplier2()));
        let readings: Vec<Celsius> = [12, 18].into_iter().map(Celsius).collect();
        out.line(format!("{readings:?}"));

        out.banner("References to instance methods in superclass and current class types");
        let default_ref: fn(&Plain) -> String = <Plain as Greet>::greet;
        out.line(format!("<Plain as Greet>::greet: {}", default_ref(&Plain)));
        let override_ref: fn(&Custom) -> String = <Custom as Greet>::greet;
        out.line(format!("<Custom as Greet>::greet: {}", override_ref(&Custom)));

        Ok(())
    }
}
