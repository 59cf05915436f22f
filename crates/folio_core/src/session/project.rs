//! Project listing filter session with URL sync.
//!
//! # Responsibility
//! - Seed selected tags from the `filter` query parameter once, on mount.
//! - Write the selection back through `HistorySink::replace` on every change.
//!
//! # Invariants
//! - The URL is not re-read after mount.
//! - Non-`filter` query pairs present at mount are preserved on every write.

use crate::filter::{filter_by_tags, TagSelection};
use crate::model::project::Project;
use crate::query::{decode_filter_query, merge_filter_query, FilterLocation, HistorySink};
use log::debug;

/// Page-scoped tag filter state for the project grid.
///
/// Dropping the session is the reset on navigation away.
pub struct ProjectFilterSession<H: HistorySink> {
    history: H,
    mounted_at: FilterLocation,
    selected: TagSelection,
}

impl<H: HistorySink> ProjectFilterSession<H> {
    /// Reads the current location once and restores the selection from it.
    pub fn mount(history: H) -> Self {
        let mounted_at = history.location();
        let selected = decode_filter_query(&mounted_at.query);
        debug!(
            "event=project_filter_mount module=session status=ok restored_tags={}",
            selected.len()
        );
        Self {
            history,
            mounted_at,
            selected,
        }
    }

    pub fn selected(&self) -> &TagSelection {
        &self.selected
    }

    /// Flips one tag and syncs the URL. Returns `true` when now selected.
    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        let selected = self.selected.toggle(tag);
        self.sync_location();
        selected
    }

    /// Replaces the whole selection and syncs the URL.
    pub fn set_tags<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected = tags.into_iter().collect();
        self.sync_location();
    }

    /// Clears the selection and syncs the URL.
    pub fn clear(&mut self) {
        self.selected.clear();
        self.sync_location();
    }

    /// Derives the visible project view for the current selection.
    pub fn visible<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        filter_by_tags(projects, &self.selected)
    }

    /// Shareable href for the current selection.
    pub fn href(&self) -> String {
        self.location_for_selection().to_href()
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn into_history(self) -> H {
        self.history
    }

    fn location_for_selection(&self) -> FilterLocation {
        let query = merge_filter_query(&self.mounted_at.query, &self.selected);
        self.mounted_at.with_query(query)
    }

    fn sync_location(&mut self) {
        let location = self.location_for_selection();
        debug!(
            "event=project_filter_sync module=session status=ok selected_tags={}",
            self.selected.len()
        );
        self.history.replace(location);
    }
}

#[cfg(test)]
mod tests {
    use super::ProjectFilterSession;
    use crate::query::{HistorySink, MemoryHistory};

    #[test]
    fn mount_does_not_write_history() {
        let session = ProjectFilterSession::mount(MemoryHistory::from_href("/projects"));
        assert!(session.history().replacements().is_empty());
    }

    #[test]
    fn toggle_preserves_unrelated_query_pairs() {
        let history = MemoryHistory::from_href("/projects?view=grid&filter=Dart");
        let mut session = ProjectFilterSession::mount(history);
        session.toggle_tag("Flutter");
        assert_eq!(
            session.history().location().to_href(),
            "/projects?view=grid&filter=Dart&filter=Flutter"
        );
    }
}
