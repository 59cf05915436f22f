//! Static content catalog: load-once project and post lists.
//!
//! # Responsibility
//! - Parse authored content (JSON) into typed records.
//! - Validate authoring invariants before any view is derived.
//!
//! # Invariants
//! - A loaded `Catalog` is never mutated; callers only borrow from it.
//! - Titles are unique per list and tags are non-blank.
//! - Malformed post dates are reported in logs, not rejected.

use crate::model::post::BlogPost;
use crate::model::project::Project;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

mod load;
mod validate;

pub use validate::CatalogValidationError;

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog load failure.
#[derive(Debug)]
pub enum CatalogError {
    Io {
        path: String,
        source: std::io::Error,
    },
    Parse(serde_json::Error),
    Validation(CatalogValidationError),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "failed to read catalog `{path}`: {source}"),
            Self::Parse(err) => write!(f, "invalid catalog json: {err}"),
            Self::Validation(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::Validation(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

impl From<CatalogValidationError> for CatalogError {
    fn from(value: CatalogValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Immutable backing lists for every listing view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub posts: Vec<BlogPost>,
}

impl Catalog {
    /// Builds a catalog from in-memory lists, enforcing authoring invariants.
    pub fn new(projects: Vec<Project>, posts: Vec<BlogPost>) -> CatalogResult<Self> {
        let catalog = Self { projects, posts };
        validate::validate_catalog(&catalog)?;
        Ok(catalog)
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty() && self.posts.is_empty()
    }
}
