//! Person record used as the subject of the stream demos.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A person with a name and an age.
///
/// # Examples
///
/// ```
/// use lambda_tour::core::Person;
///
/// let max = Person::new("Max", 14);
/// assert_eq!(max.to_string(), "name: Max age: 14");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    /// Person's name.
    pub name: String,

    /// Age in years.
    pub age: u32,
}

impl Person {
    /// Creates a new person.
    #[must_use]
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    /// The four people every stream demo works on, in encounter order.
    #[must_use]
    pub fn roster() -> Vec<Self> {
        vec![
            Self::new("Max", 14),
            Self::new("Paul", 24),
            Self::new("Patricia", 24),
            Self::new("Dave", 13),
        ]
    }

    /// Folds another person into this one, adding ages and appending names.
    /// The age sum saturates at `u32::MAX`.
    ///
    /// Used as the accumulator of a reduction seeded with [`Person::default`].
    #[must_use]
    pub fn absorb(mut self, other: &Self) -> Self {
        self.age = self.age.saturating_add(other.age);
        self.name.push_str(&other.name);
        self
    }

    /// Returns true if this person is at least 18.
    #[must_use]
    pub const fn is_adult(&self) -> bool {
        self.age >= 18
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "name: {} age: {}", self.name, self.age)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_display() {
        assert_eq!(Person::new("Dave", 13).to_string(), "name: Dave age: 13");
    }

    #[test]
    fn test_roster_order() {
        let names: Vec<_> = Person::roster().into_iter().map(|p| p.name).collect();
        assert_eq!(names, ["Max", "Paul", "Patricia", "Dave"]);
    }

    #[test]
    fn test_absorb_from_identity() {
        let folded = Person::roster()
            .iter()
            .fold(Person::default(), Person::absorb);
        assert_eq!(folded.age, 75);
        assert_eq!(folded.name, "MaxPaulPatriciaDave");
    }

    #[test]
    fn test_absorb_saturates() {
        let folded = Person::new("Old", u32::MAX).absorb(&Person::new("Older", 1));
        assert_eq!(folded.age, u32::MAX);
        assert_eq!(folded.name, "OldOlder");
    }

    #[test]
    fn test_is_adult() {
        assert!(Person::new("Paul", 24).is_adult());
        assert!(Person::new("Eve", 18).is_adult());
        assert!(!Person::new("Max", 14).is_adult());
    }
}
