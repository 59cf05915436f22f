//! Tag selection state and AND-match tag filtering.
//!
//! # Invariants
//! - A selection never holds the same tag twice.
//! - Tag comparison is case-sensitive exact match.
//! - An empty selection passes every item through in source order.

use super::Entry;
use std::collections::BTreeSet;

/// Set of selected filter tags.
///
/// Iteration follows insertion order so serialized forms (URL query) are
/// deterministic; equality ignores order.
#[derive(Debug, Clone, Default)]
pub struct TagSelection {
    tags: Vec<String>,
}

impl TagSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a tag. Returns `false` if it was already selected.
    pub fn insert(&mut self, tag: impl Into<String>) -> bool {
        let tag = tag.into();
        if self.contains(&tag) {
            return false;
        }
        self.tags.push(tag);
        true
    }

    /// Removes a tag. Returns `false` if it was not selected.
    pub fn remove(&mut self, tag: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|current| current != tag);
        before != self.tags.len()
    }

    /// Flips one tag's membership. Returns `true` when the tag is now selected.
    pub fn toggle(&mut self, tag: &str) -> bool {
        if self.remove(tag) {
            false
        } else {
            self.tags.push(tag.to_string());
            true
        }
    }

    pub fn clear(&mut self) {
        self.tags.clear();
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|current| current == tag)
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.tags.iter().map(String::as_str)
    }

    /// Returns whether every selected tag appears in `tags`.
    pub fn is_subset_of(&self, tags: &[String]) -> bool {
        self.tags.iter().all(|wanted| tags.contains(wanted))
    }
}

impl PartialEq for TagSelection {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|tag| other.contains(tag))
    }
}

impl Eq for TagSelection {}

impl<S: Into<String>> FromIterator<S> for TagSelection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut selection = Self::new();
        for tag in iter {
            selection.insert(tag);
        }
        selection
    }
}

impl<S: Into<String>> Extend<S> for TagSelection {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for tag in iter {
            self.insert(tag);
        }
    }
}

/// Keeps items whose tags are a superset of `selection`.
pub fn filter_by_tags<'a, T, I>(items: I, selection: &TagSelection) -> Vec<&'a T>
where
    T: Entry + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items
        .into_iter()
        .filter(|item| selection.is_subset_of(item.tags()))
        .collect()
}

/// Returns the distinct tag vocabulary in first-seen order.
pub fn collect_tags<'a, T, I>(items: I) -> Vec<String>
where
    T: Entry + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut seen = BTreeSet::new();
    let mut ordered = Vec::new();
    for item in items {
        for tag in item.tags() {
            if seen.insert(tag.as_str()) {
                ordered.push(tag.clone());
            }
        }
    }
    ordered
}
