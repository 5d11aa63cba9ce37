//! Flattening nested collections, chaining optionals, and running a
//! pipeline on the worker pool.

use crate::config::{RunConfig, worker_label};
use crate::core::{Container, Item, Transcript};
use crate::demos::Demo;
use crate::error::Result;
use rayon::prelude::*;
use std::sync::{Mutex, PoisonError};

/// Flattening and parallel iteration demo.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatMapDemo;

/// Builds `foo1..=fooN`, each holding `bar1..=barM`.
///
/// # Examples
///
/// ```
/// use lambda_tour::demos::flat_map::build_containers;
///
/// let foos = build_containers(2, 2);
/// assert_eq!(foos.len(), 2);
/// assert_eq!(foos[1].name, "foo2");
/// assert_eq!(foos[1].items[0].name, "bar1");
/// ```
#[must_use]
pub fn build_containers(containers: usize, items_each: usize) -> Vec<Container> {
    let mut foos = Vec::with_capacity(containers);
    (1..=containers).for_each(|i| foos.push(Container::new(format!("foo{i}"))));
    foos.iter_mut().for_each(|foo| {
        (1..=items_each).for_each(|j| foo.push(Item::new(format!("bar{j}"))));
    });
    foos
}

/// Name of the first item of the first container, if both exist.
#[must_use]
pub fn first_item_name(foos: &[Container]) -> Option<&str> {
    foos.first()
        .and_then(Container::first)
        .map(|item| item.name.as_str())
}

/// Upper-cases `items` on the current rayon pool, tracing every stage with
/// the worker that ran it.
///
/// The returned values arrive in whatever order the workers finished, so
/// only their multiset is meaningful.
pub fn parallel_upper(items: &[&str], out: &Transcript) -> Vec<String> {
    let finished = Mutex::new(Vec::with_capacity(items.len()));
    items
        .par_iter()
        .filter(|a| {
            out.line(format!("filter: {a} [{}]", worker_label()));
            true
        })
        .map(|a| {
            out.line(format!("map: {a} [{}]", worker_label()));
            a.to_uppercase()
        })
        .for_each(|a| {
            out.line(format!("forEach: {a} [{}]", worker_label()));
            finished
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(a);
        });
    finished
        .into_inner()
        .unwrap_or_else(PoisonError::into_inner)
}

impl Demo for FlatMapDemo {
    fn name(&self) -> &'static str {
        "flat-map"
    }

    fn description(&self) -> &'static str {
        "Flattening nested containers, optional chaining, and parallel iteration order"
    }

    fn is_deterministic(&self) -> bool {
        false
    }

    fn run(&self, config: &RunConfig, out: &Transcript) -> Result<()> {
        let foos = build_containers(2, 2);

        out.banner("FlatMap");
        foos.iter()
            .flat_map(|foo| foo.items.iter())
            .for_each(|item| out.line(item));

        out.banner("another way of constructing such list");
        (1..3)
            .map(|i| Container::new(format!("foo{i}")))
            .map(|mut foo| {
                (1..3)
                    .map(|j| Item::new(format!("bar{j}")))
                    .for_each(|item| foo.push(item));
                foo
            })
            .flat_map(|foo| foo.items)
            .for_each(|item| out.line(item));

        out.banner("optional with flat map");
        if let Some(name) = first_item_name(&foos) {
            out.line(name);
        }

        out.banner("parallel streams");
        let my_list = ["a1", "a2", "b1", "c2", "c1"];
        let finished = config.install(|| {
            out.line(rayon::current_num_threads());
            parallel_upper(&my_list, out)
        })?;
        tracing::debug!(?finished, "parallel for-each completion order");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::banner;

    #[test]
    fn test_build_containers() {
        let foos = build_containers(2, 3);
        assert_eq!(foos.len(), 2);
        assert_eq!(foos[0].name, "foo1");
        let names: Vec<_> = foos[0].items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["bar1", "bar2", "bar3"]);
    }

    #[test]
    fn test_first_item_name() {
        assert_eq!(first_item_name(&build_containers(2, 2)), Some("bar1"));
        assert_eq!(first_item_name(&build_containers(1, 0)), None);
        assert_eq!(first_item_name(&[]), None);
    }

    #[test]
    fn test_parallel_upper_multiset() {
        let out = Transcript::new();
        let items = ["a1", "a2", "b1", "c2", "c1"];
        let mut finished = RunConfig::new()
            .with_parallelism(Some(4))
            .install(|| parallel_upper(&items, &out))
            .unwrap();
        finished.sort();
        assert_eq!(finished, ["A1", "A2", "B1", "C1", "C2"]);

        let lines = out.into_lines();
        assert_eq!(lines.len(), 15);
        let for_each = lines.iter().filter(|l| l.starts_with("forEach: ")).count();
        assert_eq!(for_each, 5);
        assert!(lines.iter().all(|l| l.contains("[worker-")));
    }

    #[test]
    fn test_transcript() {
        let out = Transcript::new();
        FlatMapDemo
            .run(&RunConfig::new().with_parallelism(Some(2)), &out)
            .unwrap();
        let lines = out.into_lines();

        let expected_prefix = vec![
            banner("FlatMap"),
            "Item{name='bar1'}".to_string(),
            "Item{name='bar2'}".to_string(),
            "Item{name='bar1'}".to_string(),
            "Item{name='bar2'}".to_string(),
            banner("another way of constructing such list"),
            "Item{name='bar1'}".to_string(),
            "Item{name='bar2'}".to_string(),
            "Item{name='bar1'}".to_string(),
            "Item{name='bar2'}".to_string(),
            banner("optional with flat map"),
            "bar1".to_string(),
            banner("parallel streams"),
            "2".to_string(),
        ];
        assert_eq!(lines[..expected_prefix.len()], expected_prefix[..]);
        assert_eq!(lines.len(), expected_prefix.len() + 15);
    }

    #[test]
    fn test_is_not_deterministic() {
        assert!(!FlatMapDemo.is_deterministic());
    }
}
