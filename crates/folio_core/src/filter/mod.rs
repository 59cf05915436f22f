//! In-memory filtering, search and sorting over content records.
//!
//! # Responsibility
//! - Derive read-only views (`Vec<&T>`) from immutable record slices.
//! - Keep every stage a pure function of (items, state).
//!
//! # Invariants
//! - Source slices are never mutated or reordered.
//! - Every stage is total; no stage returns an error.
//! - Stage order is tag filter, text filter, sort.

use crate::model::post::{sort_key_millis, BlogPost};
use crate::model::project::Project;

pub mod pipeline;
pub mod search;
pub mod sort;
pub mod tags;

pub use pipeline::{apply, FilterState};
pub use search::filter_by_text;
pub use sort::{compare_titles, sort_entries, ParseSortModeError, SortMode};
pub use tags::{collect_tags, filter_by_tags, TagSelection};

/// Read-only accessors the pipeline needs from a record.
pub trait Entry {
    fn title(&self) -> &str;
    /// Tags in authoring order.
    fn tags(&self) -> &[String];
    /// Secondary searchable text (post excerpt, project description).
    fn excerpt(&self) -> &str;
    /// Publish time in epoch milliseconds; `0` when unknown.
    fn sort_millis(&self) -> i64;
}

impl Entry for BlogPost {
    fn title(&self) -> &str {
        &self.title
    }

    fn tags(&self) -> &[String] {
        self.tag_slice()
    }

    fn excerpt(&self) -> &str {
        &self.excerpt
    }

    fn sort_millis(&self) -> i64 {
        sort_key_millis(self.date.as_deref())
    }
}

impl Entry for Project {
    fn title(&self) -> &str {
        &self.title
    }

    fn tags(&self) -> &[String] {
        &self.tech
    }

    fn excerpt(&self) -> &str {
        &self.description
    }

    // Projects carry no publish date.
    fn sort_millis(&self) -> i64 {
        0
    }
}
