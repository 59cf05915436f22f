//! Sort modes for filtered views.
//!
//! # Invariants
//! - Sorting is stable: ties keep their incoming order.
//! - Only the view is reordered; backing records are never touched.
//! - Missing/malformed dates sort as epoch zero.

use super::Entry;
use std::cmp::Ordering;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Ordering applied as the last pipeline stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortMode {
    /// Descending publish date.
    #[default]
    Newest,
    /// Ascending publish date.
    Oldest,
    /// Ascending title, locale-style collation.
    Title,
}

impl SortMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::Title => "title",
        }
    }
}

impl Display for SortMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown sort mode text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSortModeError(String);

impl Display for ParseSortModeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unsupported sort mode `{}`; expected newest|oldest|title",
            self.0
        )
    }
}

impl Error for ParseSortModeError {}

impl FromStr for SortMode {
    type Err = ParseSortModeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "newest" => Ok(Self::Newest),
            "oldest" => Ok(Self::Oldest),
            "title" => Ok(Self::Title),
            other => Err(ParseSortModeError(other.to_string())),
        }
    }
}

/// Reorders a view in place according to `mode`.
pub fn sort_entries<T: Entry>(view: &mut [&T], mode: SortMode) {
    match mode {
        SortMode::Newest => view.sort_by(|a, b| b.sort_millis().cmp(&a.sort_millis())),
        SortMode::Oldest => view.sort_by_key(|item| item.sort_millis()),
        SortMode::Title => view.sort_by(|a, b| compare_titles(a.title(), b.title())),
    }
}

/// Locale-style title comparison.
///
/// Primary key is the case-folded text; among case-only differences the
/// lowercase form sorts first, then raw code points break remaining ties.
pub fn compare_titles(left: &str, right: &str) -> Ordering {
    left.to_lowercase()
        .cmp(&right.to_lowercase())
        .then_with(|| {
            left.chars()
                .map(char::is_uppercase)
                .cmp(right.chars().map(char::is_uppercase))
        })
        .then_with(|| left.cmp(right))
}
