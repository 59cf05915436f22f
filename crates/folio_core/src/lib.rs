//! Core content and listing logic for the Folio portfolio site.
//! Presentation layers render views derived here; they own no filtering rules.

pub mod catalog;
pub mod filter;
pub mod logging;
pub mod model;
pub mod query;
pub mod service;
pub mod session;

pub use catalog::{Catalog, CatalogError, CatalogResult, CatalogValidationError};
pub use filter::{
    apply, collect_tags, filter_by_tags, filter_by_text, sort_entries, Entry, FilterState,
    ParseSortModeError, SortMode, TagSelection,
};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::post::{format_display_date, BlogPost, PublishDate};
pub use model::project::{LinkKind, Project, ProjectLinks};
pub use query::{
    decode_filter_query, encode_filter_query, FilterLocation, HistorySink, MemoryHistory,
};
pub use service::catalog_service::CatalogService;
pub use session::blog::BlogFilterSession;
pub use session::project::ProjectFilterSession;

/// Path of the project listing page; base for shareable filter links.
pub const PROJECTS_PATH: &str = "/projects";

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
