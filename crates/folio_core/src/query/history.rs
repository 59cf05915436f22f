//! Browser-history seam used for shareable filter URLs.
//!
//! # Responsibility
//! - Model the current location as `path` + `query`.
//! - Abstract history replacement behind `HistorySink` so sessions stay
//!   testable without a browser.
//!
//! # Invariants
//! - `replace` swaps the current entry; it never pushes or reloads.

/// Current location split into path and query (without `?`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterLocation {
    pub path: String,
    pub query: String,
}

impl FilterLocation {
    pub fn new(path: impl Into<String>, query: impl Into<String>) -> Self {
        let query = query.into();
        Self {
            path: path.into(),
            query: query.strip_prefix('?').unwrap_or(&query).to_string(),
        }
    }

    /// Splits an href like `/projects?filter=React#top`.
    ///
    /// Fragments are dropped.
    pub fn parse(href: &str) -> Self {
        let without_fragment = href.split_once('#').map_or(href, |(head, _)| head);
        match without_fragment.split_once('?') {
            Some((path, query)) => Self::new(path, query),
            None => Self::new(without_fragment, ""),
        }
    }

    /// Returns a copy with the query replaced.
    pub fn with_query(&self, query: impl Into<String>) -> Self {
        Self::new(self.path.clone(), query)
    }

    /// Renders `path` or `path?query`.
    pub fn to_href(&self) -> String {
        if self.query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, self.query)
        }
    }
}

/// Write-mostly location sink, read once on mount.
pub trait HistorySink {
    /// Returns the current location.
    fn location(&self) -> FilterLocation;
    /// Replaces the current history entry without navigation.
    fn replace(&mut self, location: FilterLocation);
}

/// In-process history that records every replacement.
#[derive(Debug, Clone, Default)]
pub struct MemoryHistory {
    current: FilterLocation,
    replacements: Vec<FilterLocation>,
}

impl MemoryHistory {
    pub fn new(initial: FilterLocation) -> Self {
        Self {
            current: initial,
            replacements: Vec::new(),
        }
    }

    pub fn from_href(href: &str) -> Self {
        Self::new(FilterLocation::parse(href))
    }

    /// Every location written through `replace`, oldest first.
    pub fn replacements(&self) -> &[FilterLocation] {
        &self.replacements
    }
}

impl HistorySink for MemoryHistory {
    fn location(&self) -> FilterLocation {
        self.current.clone()
    }

    fn replace(&mut self, location: FilterLocation) {
        self.current = location.clone();
        self.replacements.push(location);
    }
}

impl<H: HistorySink + ?Sized> HistorySink for &mut H {
    fn location(&self) -> FilterLocation {
        (**self).location()
    }

    fn replace(&mut self, location: FilterLocation) {
        (**self).replace(location)
    }
}
