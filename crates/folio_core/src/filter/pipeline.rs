//! Combined filter state and the tag -> text -> sort pipeline.

use super::search::filter_by_text;
use super::sort::{sort_entries, SortMode};
use super::tags::{filter_by_tags, TagSelection};
use super::Entry;

/// Explicit, owned filter state for one listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub tags: TagSelection,
    pub search: String,
    pub sort: SortMode,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether this state filters anything out.
    ///
    /// Sort mode is ignored: it reorders but never drops items.
    pub fn is_unfiltered(&self) -> bool {
        self.tags.is_empty() && self.search.trim().is_empty()
    }
}

/// Derives a filtered, sorted view over `items`.
///
/// Order of stages is fixed: tag filter, text filter, then sort. The view
/// borrows from `items`; nothing is cloned or mutated.
pub fn apply<'a, T: Entry>(items: &'a [T], state: &FilterState) -> Vec<&'a T> {
    let tagged = filter_by_tags(items, &state.tags);
    let mut view = filter_by_text(tagged, &state.search);
    sort_entries(&mut view, state.sort);
    view
}
