//! Free-text substring search over titles and excerpts.

use super::Entry;

/// Keeps items whose title or excerpt contains `query`, ignoring case.
///
/// Blank (empty or whitespace-only) queries pass every item through.
pub fn filter_by_text<'a, T, I>(items: I, query: &str) -> Vec<&'a T>
where
    T: Entry + 'a,
    I: IntoIterator<Item = &'a T>,
{
    if query.trim().is_empty() {
        return items.into_iter().collect();
    }

    let needle = query.to_lowercase();
    items
        .into_iter()
        .filter(|item| {
            item.title().to_lowercase().contains(&needle)
                || item.excerpt().to_lowercase().contains(&needle)
        })
        .collect()
}
