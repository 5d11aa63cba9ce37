//! Nested container used by the flattening demo.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A labelled leaf held by a [`Container`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Item label.
    pub name: String,
}

impl Item {
    /// Creates a new item.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Item{{name='{}'}}", self.name)
    }
}

/// A labelled group holding an ordered list of items.
///
/// # Examples
///
/// ```
/// use lambda_tour::core::{Container, Item};
///
/// let mut foo = Container::new("foo1");
/// foo.push(Item::new("bar1"));
/// assert_eq!(foo.items.len(), 1);
/// assert_eq!(foo.items[0].to_string(), "Item{name='bar1'}");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    /// Container label.
    pub name: String,

    /// Items in insertion order.
    pub items: Vec<Item>,
}

impl Container {
    /// Creates an empty container.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
        }
    }

    /// Appends an item.
    pub fn push(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Returns the first item, if any.
    #[must_use]
    pub fn first(&self) -> Option<&Item> {
        self.items.first()
    }
}
