//! Blog listing filter/search/sort session.

use crate::filter::{apply, FilterState, SortMode, TagSelection};
use crate::model::post::BlogPost;
use log::debug;

/// Page-scoped filter state for the blog listing.
///
/// Not mirrored into the URL; dropping the session resets it.
#[derive(Debug, Clone, Default)]
pub struct BlogFilterSession {
    state: FilterState,
}

impl BlogFilterSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn selected(&self) -> &TagSelection {
        &self.state.tags
    }

    /// Flips one tag. Returns `true` when now selected.
    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        let selected = self.state.tags.toggle(tag);
        debug!(
            "event=blog_filter_toggle module=session status=ok selected_tags={}",
            self.state.tags.len()
        );
        selected
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.state.search = search.into();
    }

    pub fn set_sort(&mut self, sort: SortMode) {
        self.state.sort = sort;
    }

    /// Restores the default state: no tags, empty search, newest first.
    pub fn reset(&mut self) {
        self.state = FilterState::default();
    }

    /// Recomputes the visible post view from scratch.
    pub fn visible<'a>(&self, posts: &'a [BlogPost]) -> Vec<&'a BlogPost> {
        apply(posts, &self.state)
    }
}
