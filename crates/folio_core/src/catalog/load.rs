//! Catalog loading from JSON sources.
//!
//! # Side effects
//! - `load` reads one file from disk.
//! - Every entry point emits a `catalog_load` event with duration and status.

use super::validate::validate_catalog;
use super::{Catalog, CatalogError, CatalogResult};
use log::{error, info};
use std::path::Path;
use std::time::Instant;

const SAMPLE_CATALOG_JSON: &str = include_str!("../../content/sample_catalog.json");

impl Catalog {
    /// Parses and validates a catalog document.
    ///
    /// The document is an object with optional `projects` and `posts` arrays.
    pub fn from_json_str(raw: &str) -> CatalogResult<Self> {
        let started_at = Instant::now();
        match parse_and_validate(raw) {
            Ok(catalog) => {
                info!(
                    "event=catalog_load module=catalog status=ok source=inline duration_ms={} projects={} posts={}",
                    started_at.elapsed().as_millis(),
                    catalog.projects.len(),
                    catalog.posts.len()
                );
                Ok(catalog)
            }
            Err(err) => {
                error!(
                    "event=catalog_load module=catalog status=error source=inline duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }

    /// Reads, parses and validates a catalog file.
    pub fn load(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let started_at = Instant::now();
        let raw = std::fs::read_to_string(path).map_err(|source| {
            error!(
                "event=catalog_load module=catalog status=error source=file duration_ms={} error_code=catalog_read_failed error={}",
                started_at.elapsed().as_millis(),
                source
            );
            CatalogError::Io {
                path: path.display().to_string(),
                source,
            }
        })?;

        match parse_and_validate(&raw) {
            Ok(catalog) => {
                info!(
                    "event=catalog_load module=catalog status=ok source=file duration_ms={} projects={} posts={}",
                    started_at.elapsed().as_millis(),
                    catalog.projects.len(),
                    catalog.posts.len()
                );
                Ok(catalog)
            }
            Err(err) => {
                error!(
                    "event=catalog_load module=catalog status=error source=file duration_ms={} error_code=catalog_invalid error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }

    /// Returns the sample catalog bundled with the crate.
    pub fn sample() -> CatalogResult<Self> {
        Self::from_json_str(SAMPLE_CATALOG_JSON)
    }
}

fn parse_and_validate(raw: &str) -> CatalogResult<Catalog> {
    let catalog: Catalog = serde_json::from_str(raw)?;
    validate_catalog(&catalog)?;
    Ok(catalog)
}
