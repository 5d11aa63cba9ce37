//! Iterator pipelines: filtering, mapping, sorting, laziness, collecting
//! and reducing.
//!
//! Every section builds its input from literals, so the transcript is fixed
//! except for the final parallel reduction, whose accumulator and combiner
//! lines interleave differently from run to run.

use crate::config::RunConfig;
use crate::core::{Person, Transcript, braced, bracketed};
use crate::demos::Demo;
use crate::error::{DemoError, Result};
use crate::functional::{Collector, StringJoiner};
use rayon::prelude::*;
use std::collections::BTreeMap;

/// Pipeline, collector and reduction demo.
#[derive(Debug, Clone, Copy, Default)]
pub struct StreamsDemo;

/// Keeps items starting with `c`, upper-cases them and sorts the result.
///
/// # Examples
///
/// ```
/// use lambda_tour::demos::streams::c_items_sorted_upper;
///
/// assert_eq!(c_items_sorted_upper(&["a1", "a2", "b1", "c2", "c1"]), ["C1", "C2"]);
/// ```
#[must_use]
pub fn c_items_sorted_upper(items: &[&str]) -> Vec<String> {
    let mut upper: Vec<String> = items
        .iter()
        .filter(|item| item.starts_with('c'))
        .map(|item| item.to_uppercase())
        .collect();
    upper.sort();
    upper
}

/// Arithmetic mean, or `None` for an empty input.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn average(values: impl IntoIterator<Item = i64>) -> Option<f64> {
    let (sum, count) = values
        .into_iter()
        .fold((0_i64, 0_usize), |(sum, count), value| (sum + value, count + 1));
    (count > 0).then(|| sum as f64 / count as f64)
}

/// Parses the digits after the first character of each item and returns the
/// largest.
///
/// # Errors
///
/// Returns [`DemoError::ParseInt`] for the first item whose tail is not an
/// integer.
pub fn max_numeric_suffix(items: &[&str]) -> Result<Option<i32>> {
    let parsed = items
        .iter()
        .map(|item| item.get(1..).unwrap_or_default())
        .map(|tail| {
            tail.parse::<i32>().map_err(|e| DemoError::ParseInt {
                input: tail.to_string(),
                reason: e.to_string(),
            })
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(parsed.into_iter().max())
}

/// Groups people by age, keeping encounter order inside each group.
///
/// Groups iterate in ascending age order.
#[must_use]
pub fn group_by_age(persons: &[Person]) -> BTreeMap<u32, Vec<&Person>> {
    persons.iter().fold(BTreeMap::new(), |mut groups, person| {
        groups.entry(person.age).or_insert_with(Vec::new).push(person);
        groups
    })
}

/// Average age, or `None` for an empty slice.
#[must_use]
pub fn average_age(persons: &[Person]) -> Option<f64> {
    average(persons.iter().map(|p| i64::from(p.age)))
}

/// Maps age to name, joining names that share an age with `;`.
///
/// Entries iterate in ascending age order, so the rendered map is stable.
#[must_use]
pub fn names_by_age(persons: &[Person]) -> BTreeMap<u32, String> {
    let mut names: BTreeMap<u32, String> = BTreeMap::new();
    for person in persons {
        names
            .entry(person.age)
            .and_modify(|existing| {
                existing.push(';');
                existing.push_str(&person.name);
            })
            .or_insert_with(|| person.name.clone());
    }
    names
}

/// The oldest person; on a tie the later one wins.
#[must_use]
pub fn oldest(persons: &[Person]) -> Option<&Person> {
    persons
        .iter()
        .reduce(|left, right| if left.age > right.age { left } else { right })
}

/// Folds everyone into one person seeded with an empty name and age zero.
#[must_use]
pub fn fold_persons(persons: &[Person]) -> Person {
    persons.iter().fold(Person::default(), Person::absorb)
}

fn first_example(out: &Transcript) {
    out.banner("First example");
    let my_list = ["a1", "a2", "b1", "c2", "c1"];
    c_items_sorted_upper(&my_list)
        .into_iter()
        .for_each(|item| out.line(item));

    if let Some(first) = ["a1", "a2", "a3"].into_iter().next() {
        out.line(first);
    }
}

#[allow(clippy::cast_possible_truncation)]
fn primitive_streams(out: &Transcript) -> Result<()> {
    out.banner("Primitive streams");
    (1..4).for_each(|i| out.line(i));

    out.line("print average of 1, 2, 3:");
    if let Some(avg) = average([1, 2, 3].into_iter().map(|i| 2 * i + 1)) {
        out.line(format!("{avg:?}"));
    }

    out.line("transforming to int");
    if let Some(max) = max_numeric_suffix(&["a1", "a2", "a3"])? {
        out.line(max);
    }

    out.line("example of map to object: ");
    (1..4).map(|i| format!("a{i}")).for_each(|s| out.line(s));

    out.line("another example of primitive streams");
    [1.0_f64, 2.0, 3.0]
        .into_iter()
        .map(|d| d as i32)
        .map(|i| format!("a{i}"))
        .for_each(|s| out.line(s));
    Ok(())
}

/// Adapters do nothing until a consumer pulls; each element then travels
/// the whole chain before the next one starts.
fn laziness(out: &Transcript) {
    out.line("lazy init");
    let _never_pulled = ["d2", "a2", "c"].into_iter().filter(|s| {
        out.line(format!("filter: {s}"));
        true
    });

    ["d2", "a2", "c"]
        .into_iter()
        .filter(|s| {
            out.line(format!("filter: {s}"));
            true
        })
        .for_each(|s| out.line(format!("forEach: {s}")));

    let matched = ["d2", "a2", "c"]
        .into_iter()
        .map(|s| {
            out.line(format!("map: {s}"));
            s.to_uppercase()
        })
        .any(|s| {
            out.line(format!("anyMatch: {s}"));
            s.starts_with('A')
        });
    tracing::debug!(matched, "any short-circuited");
}

fn reuse(out: &Transcript) {
    out.banner("Reusing Streams");
    // An iterator is spent once consumed; a closure hands out fresh ones.
    let stream_supplier = || ["d2", "a2", "c"].into_iter().filter(|s| s.starts_with('a'));

    let any = stream_supplier().any(|s| {
        out.line(format!("anymatch: {s}"));
        true
    });
    let none_pred = |s: &str| {
        out.line(format!("nonematch: {s}"));
        true
    };
    let none = stream_supplier().all(|s| !none_pred(s));
    tracing::debug!(any, none, "reused pipeline twice");
}

fn advanced(out: &Transcript, persons: &[Person]) {
    out.banner("Advanced Streams");
    out.banner("collect");

    let lofp: Vec<&Person> = persons
        .iter()
        .filter(|p| p.name.starts_with('P'))
        .collect();
    out.line(format!("persons starting with p: {}", bracketed(&lofp)));

    for (age, group) in group_by_age(persons) {
        out.line(format!("age {age}: {}", bracketed(group)));
    }

    if let Some(avg) = average_age(persons) {
        out.line(format!("average age of persons: {avg}"));
    }

    let beer = Collector::joining(" and ", "", " can drink a beer.");
    out.line(beer.collect(
        persons
            .iter()
            .filter(|p| p.is_adult())
            .map(|p| p.name.clone()),
    ));

    out.line(format!("persons to map: {}", braced(names_by_age(persons))));

    let pnc = Collector::of(
        || StringJoiner::new(" | "),
        |joiner: &mut StringJoiner, person: &Person| {
            joiner.add(person.name.to_uppercase());
        },
        |mut left, right| {
            left.merge(&right);
            left
        },
        |joiner| joiner.to_string(),
    );
    out.line(pnc.collect(persons));
}

fn reduce(config: &RunConfig, out: &Transcript, persons: &[Person]) -> Result<()> {
    out.banner("reduce");
    out.line("print the oldest person");
    if let Some(person) = oldest(persons) {
        out.line(person);
    }

    let result = fold_persons(persons);
    out.line(format!(
        "reduce with identity - identity is returned as a result: {result}"
    ));

    // Sequential: one accumulator pass, nothing to combine.
    let sum = persons.iter().fold(0, |sum, person| {
        out.line(format!("sum: {sum} person: {person}"));
        sum + person.age
    });
    out.line(format!("sumOfAgeOfPersons: {sum}"));

    out.line("reduce with combiner in parallel stream");
    let parallel_sum = config.install(|| {
        persons
            .par_iter()
            .fold(
                || 0,
                |sum, person| {
                    out.line(format!("accumulator: sum: {sum} person: {person}"));
                    sum + person.age
                },
            )
            .reduce(
                || 0,
                |sum1, sum2| {
                    out.line(format!("combiner: sum1: {sum1} sum2: {sum2}"));
                    sum1 + sum2
                },
            )
    })?;
    out.line(format!("sumOfAgeOfPersonsParallel: {parallel_sum}"));
    Ok(())
}

impl Demo for StreamsDemo {
    fn name(&self) -> &'static str {
        "streams"
    }

    fn description(&self) -> &'static str {
        "Lazy pipelines, collectors, grouping and sequential vs parallel reduction"
    }

    fn is_deterministic(&self) -> bool {
        false
    }

    fn run(&self, config: &RunConfig, out: &Transcript) -> Result<()> {
        first_example(out);
        primitive_streams(out)?;
        laziness(out);
        reuse(out);

        let persons = Person::roster();
        advanced(out, &persons);
        reduce(config, out, &persons)
    }
}
