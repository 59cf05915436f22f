//! Catalog listing service.
//!
//! # Responsibility
//! - Provide listing/lookup entry points over one loaded catalog.
//! - Keep presentation callers decoupled from pipeline stage functions.
//!
//! # Invariants
//! - Every listing call recomputes its view from the backing lists.
//! - Returned views borrow from the service's catalog.

use crate::catalog::Catalog;
use crate::filter::{apply, collect_tags, filter_by_tags, FilterState, TagSelection};
use crate::model::post::BlogPost;
use crate::model::project::Project;
use log::debug;

/// Read-only facade over a loaded catalog.
pub struct CatalogService {
    catalog: Catalog,
}

impl CatalogService {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Lists projects carrying every selected tag, in catalog order.
    pub fn projects(&self, selection: &TagSelection) -> Vec<&Project> {
        let view = filter_by_tags(&self.catalog.projects, selection);
        debug!(
            "event=projects_list module=service status=ok selected_tags={} total={} visible={}",
            selection.len(),
            self.catalog.projects.len(),
            view.len()
        );
        view
    }

    /// Lists posts through the full tag -> text -> sort pipeline.
    pub fn posts(&self, state: &FilterState) -> Vec<&BlogPost> {
        let view = apply(&self.catalog.posts, state);
        debug!(
            "event=posts_list module=service status=ok selected_tags={} search_len={} sort={} total={} visible={}",
            state.tags.len(),
            state.search.chars().count(),
            state.sort,
            self.catalog.posts.len(),
            view.len()
        );
        view
    }

    /// Distinct project tech tags in first-seen order.
    pub fn project_tags(&self) -> Vec<String> {
        collect_tags(&self.catalog.projects)
    }

    /// Distinct post tags in first-seen order.
    pub fn post_tags(&self) -> Vec<String> {
        collect_tags(&self.catalog.posts)
    }

    /// Finds one project by exact title.
    pub fn project(&self, title: &str) -> Option<&Project> {
        self.catalog
            .projects
            .iter()
            .find(|project| project.title == title)
    }

    /// Finds one post by exact title.
    pub fn post(&self, title: &str) -> Option<&BlogPost> {
        self.catalog.posts.iter().find(|post| post.title == title)
    }
}
