//! Delimited string builder with optional prefix and suffix.

use std::fmt;

/// Joins strings with a delimiter, wrapped in a prefix and suffix.
///
/// # Examples
///
/// ```
/// use lambda_tour::functional::StringJoiner;
///
/// let mut joiner = StringJoiner::with_affixes(", ", "{", "}");
/// joiner.add("a").add("b");
/// assert_eq!(joiner.to_string(), "{a, b}");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringJoiner {
    delimiter: String,
    prefix: String,
    suffix: String,
    parts: Vec<String>,
}

impl StringJoiner {
    /// Creates a joiner with no prefix or suffix.
    #[must_use]
    pub fn new(delimiter: impl Into<String>) -> Self {
        Self::with_affixes(delimiter, "", "")
    }

    /// Creates a joiner with a prefix and suffix.
    #[must_use]
    pub fn with_affixes(
        delimiter: impl Into<String>,
        prefix: impl Into<String>,
        suffix: impl Into<String>,
    ) -> Self {
        Self {
            delimiter: delimiter.into(),
            prefix: prefix.into(),
            suffix: suffix.into(),
            parts: Vec::new(),
        }
    }

    /// Appends one element.
    pub fn add(&mut self, part: impl Into<String>) -> &mut Self {
        self.parts.push(part.into());
        self
    }

    /// Appends the contents of `other` as a single element.
    ///
    /// `other`'s elements are joined with `other`'s delimiter; its prefix
    /// and suffix are dropped. Merging an empty joiner is a no-op.
    pub fn merge(&mut self, other: &Self) -> &mut Self {
        if !other.parts.is_empty() {
            self.parts.push(other.parts.join(&other.delimiter));
        }
        self
    }

    /// Number of elements added so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Returns true if no element has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl fmt::Display for StringJoiner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.prefix,
            self.parts.join(&self.delimiter),
            self.suffix
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_joiner_keeps_affixes() {
        let joiner = StringJoiner::with_affixes(",", "[", "]");
        assert!(joiner.is_empty());
        assert_eq!(joiner.to_string(), "[]");
    }

    #[test]
    fn test_add_joins_with_delimiter() {
        let mut joiner = StringJoiner::new(" | ");
        joiner.add("MAX").add("PAUL");
        assert_eq!(joiner.len(), 2);
        assert_eq!(joiner.to_string(), "MAX | PAUL");
    }

    #[test]
    fn test_merge_drops_other_affixes() {
        let mut left = StringJoiner::with_affixes(", ", "<", ">");
        left.add("a");
        let mut right = StringJoiner::with_affixes("-", "(", ")");
        right.add("b").add("c");
        left.merge(&right);
        assert_eq!(left.to_string(), "<a, b-c>");
        assert_eq!(left.len(), 2);
    }

    #[test]
    fn test_merge_empty_is_noop() {
        let mut left = StringJoiner::new(",");
        left.add("x");
        left.merge(&StringJoiner::new(","));
        assert_eq!(left.to_string(), "x");
    }
}
