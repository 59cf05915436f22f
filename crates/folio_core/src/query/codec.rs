//! `filter` query parameter codec.
//!
//! # Responsibility
//! - Serialize a tag selection as repeated `filter` pairs.
//! - Read a selection back from an arbitrary query string.
//!
//! # Invariants
//! - Encoding follows `application/x-www-form-urlencoded`: space becomes `+`,
//!   bytes outside `[A-Za-z0-9*-._]` are percent-encoded.
//! - Decoding is total: malformed percent escapes stay literal.
//! - Pairs with other keys are never dropped when merging.

use crate::filter::TagSelection;

/// Query parameter name carrying one selected tag per occurrence.
pub const FILTER_PARAM: &str = "filter";

/// Encodes a selection as `filter=a&filter=b` in selection order.
///
/// Returns an empty string for an empty selection.
pub fn encode_filter_query(selection: &TagSelection) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    append_selection(&mut serializer, selection);
    serializer.finish()
}

/// Reads every non-empty `filter` value from `query`.
///
/// Accepts an optional leading `?`; duplicates collapse into one selection
/// entry.
pub fn decode_filter_query(query: &str) -> TagSelection {
    form_urlencoded::parse(strip_question(query).as_bytes())
        .filter(|(key, value)| *key == FILTER_PARAM && !value.is_empty())
        .map(|(_, value)| value.into_owned())
        .collect()
}

/// Replaces the `filter` pairs of `query` with `selection`.
///
/// Other pairs keep their relative order; filter pairs are appended.
pub fn merge_filter_query(query: &str, selection: &TagSelection) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    serializer.extend_pairs(
        form_urlencoded::parse(strip_question(query).as_bytes())
            .filter(|(key, _)| *key != FILTER_PARAM),
    );
    append_selection(&mut serializer, selection);
    serializer.finish()
}

fn append_selection(
    serializer: &mut form_urlencoded::Serializer<'_, String>,
    selection: &TagSelection,
) {
    for tag in selection.iter() {
        serializer.append_pair(FILTER_PARAM, tag);
    }
}

fn strip_question(query: &str) -> &str {
    query.strip_prefix('?').unwrap_or(query)
}

#[cfg(test)]
mod tests {
    use super::{decode_filter_query, encode_filter_query, merge_filter_query};
    use crate::filter::TagSelection;

    fn selection(tags: &[&str]) -> TagSelection {
        tags.iter().copied().collect()
    }

    #[test]
    fn encode_uses_plus_for_space_and_escapes_reserved() {
        let tags = selection(&["React Native", "CI/CD", "C#", "a&b=c", "C++"]);
        assert_eq!(
            encode_filter_query(&tags),
            "filter=React+Native&filter=CI%2FCD&filter=C%23&filter=a%26b%3Dc&filter=C%2B%2B"
        );
        assert_eq!(encode_filter_query(&TagSelection::new()), "");
    }

    #[test]
    fn decode_reverses_plus_and_percent_sequences() {
        let decoded =
            decode_filter_query("filter=React+Native&filter=CI%2fCD&filter=%C3%A9t%C3%A9");
        assert_eq!(decoded, selection(&["React Native", "CI/CD", "été"]));
    }

    #[test]
    fn decode_keeps_malformed_escapes_literal() {
        let decoded = decode_filter_query("filter=100%25&filter=%zz&filter=%4");
        assert_eq!(decoded, selection(&["100%", "%zz", "%4"]));
        assert!(decode_filter_query("filter=100%").contains("100%"));
        assert!(decode_filter_query("filter=%FF").contains("\u{FFFD}"));
    }

    #[test]
    fn merge_keeps_other_pairs_in_order() {
        assert_eq!(
            merge_filter_query("?view=grid&filter=Old&utm=x", &selection(&["New Tag"])),
            "view=grid&utm=x&filter=New+Tag"
        );
    }
}
