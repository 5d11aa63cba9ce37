//! Hand-assembled collectors.
//!
//! A [`Collector`] bundles the four functions a mutable reduction needs:
//! make an empty container, fold one element into it, merge two partial
//! containers, and turn the final container into the result. The same
//! collector can run sequentially or split across rayon workers.

use crate::functional::StringJoiner;
use rayon::prelude::*;

type Supplier<'f, A> = Box<dyn Fn() -> A + Send + Sync + 'f>;
type Accumulator<'f, A, T> = Box<dyn Fn(&mut A, T) + Send + Sync + 'f>;
type Combiner<'f, A> = Box<dyn Fn(A, A) -> A + Send + Sync + 'f>;
type Finisher<'f, A, R> = Box<dyn Fn(A) -> R + Send + Sync + 'f>;

/// A mutable reduction from elements of `T` into `R` via a container `A`.
///
/// # Examples
///
/// ```
/// use lambda_tour::functional::Collector;
///
/// let summer = Collector::of(|| 0, |acc: &mut i32, x: i32| *acc += x, |a, b| a + b, |acc| acc);
/// assert_eq!(summer.collect([1, 2, 3]), 6);
/// assert_eq!(summer.par_collect(vec![1, 2, 3]), 6);
/// ```
pub struct Collector<'f, T, A, R> {
    supplier: Supplier<'f, A>,
    accumulator: Accumulator<'f, A, T>,
    combiner: Combiner<'f, A>,
    finisher: Finisher<'f, A, R>,
}

impl<'f, T, A, R> Collector<'f, T, A, R> {
    /// Assembles a collector from its four functions.
    ///
    /// `combiner` must be associative for [`par_collect`](Self::par_collect)
    /// to agree with [`collect`](Self::collect).
    pub fn of(
        supplier: impl Fn() -> A + Send + Sync + 'f,
        accumulator: impl Fn(&mut A, T) + Send + Sync + 'f,
        combiner: impl Fn(A, A) -> A + Send + Sync + 'f,
        finisher: impl Fn(A) -> R + Send + Sync + 'f,
    ) -> Self {
        Self {
            supplier: Box::new(supplier),
            accumulator: Box::new(accumulator),
            combiner: Box::new(combiner),
            finisher: Box::new(finisher),
        }
    }

    /// Runs the reduction on the calling thread. The combiner is never used.
    pub fn collect<I>(&self, items: I) -> R
    where
        I: IntoIterator<Item = T>,
    {
        let mut container = (self.supplier)();
        for item in items {
            (self.accumulator)(&mut container, item);
        }
        (self.finisher)(container)
    }

    /// Runs the reduction on the current rayon pool.
    ///
    /// Each split gets its own container; partial containers are combined
    /// in encounter order.
    pub fn par_collect<I>(&self, items: I) -> R
    where
        I: IntoParallelIterator<Item = T>,
        T: Send,
        A: Send,
    {
        let container = items
            .into_par_iter()
            .fold(
                || (self.supplier)(),
                |mut container, item| {
                    (self.accumulator)(&mut container, item);
                    container
                },
            )
            .reduce(|| (self.supplier)(), |left, right| (self.combiner)(left, right));
        (self.finisher)(container)
    }
}

impl Collector<'static, String, StringJoiner, String> {
    /// A collector that joins strings with a delimiter, prefix, and suffix.
    ///
    /// # Examples
    ///
    /// ```
    /// use lambda_tour::functional::Collector;
    ///
    /// let joining = Collector::joining(" and ", "", " can drink a beer.");
    /// let line = joining.collect(["Paul".to_string(), "Patricia".to_string()]);
    /// assert_eq!(line, "Paul and Patricia can drink a beer.");
    /// ```
    #[must_use]
    pub fn joining(delimiter: &str, prefix: &str, suffix: &str) -> Self {
        let (delimiter, prefix, suffix) =
            (delimiter.to_string(), prefix.to_string(), suffix.to_string());
        Self::of(
            move || StringJoiner::with_affixes(delimiter.as_str(), prefix.as_str(), suffix.as_str()),
            |joiner, item| {
                joiner.add(item);
            },
            |mut left, right| {
                left.merge(&right);
                left
            },
            |joiner| joiner.to_string(),
        )
    }
}

impl<T, A, R> std::fmt::Debug for Collector<'_, T, A, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collector").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upper_names() -> Collector<'static, &'static str, StringJoiner, String> {
        Collector::of(
            || StringJoiner::new(" | "),
            |joiner, name: &str| {
                joiner.add(name.to_uppercase());
            },
            |mut left, right| {
                left.merge(&right);
                left
            },
            |joiner| joiner.to_string(),
        )
    }

    #[test]
    fn test_collect_sequential() {
        let names = ["Max", "Paul", "Patricia", "Dave"];
        assert_eq!(upper_names().collect(names), "MAX | PAUL | PATRICIA | DAVE");
    }

    #[test]
    fn test_par_collect_keeps_encounter_order() {
        let names = vec!["Max", "Paul", "Patricia", "Dave"];
        assert_eq!(
            upper_names().par_collect(names),
            "MAX | PAUL | PATRICIA | DAVE"
        );
    }

    #[test]
    fn test_collect_empty_input() {
        assert_eq!(upper_names().collect([]), "");
        assert_eq!(upper_names().par_collect(Vec::<&str>::new()), "");
    }

    #[test]
    fn test_sequential_collect_never_combines() {
        let combined = std::sync::atomic::AtomicUsize::new(0);
        let counting = Collector::of(
            Vec::new,
            |acc: &mut Vec<i32>, x| acc.push(x),
            |mut a, b| {
                combined.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
                a.extend(b);
                a
            },
            |acc| acc,
        );
        assert_eq!(counting.collect([3, 1, 2]), [3, 1, 2]);
        assert_eq!(combined.load(std::sync::atomic::Ordering::SeqCst), 0);
    }

    #[test]
    fn test_joining_with_affixes() {
        let joining = Collector::joining(", ", "{", "}");
        assert_eq!(joining.collect(Vec::new()), "{}");
        assert_eq!(
            joining.par_collect(vec!["a".to_string(), "b".to_string()]),
            "{a, b}"
        );
    }
}
