//! Blog post domain model and publish-date handling.
//!
//! # Responsibility
//! - Define the blog post record rendered by post cards.
//! - Parse raw authoring dates into sortable timestamps.
//! - Format dates for card display.
//!
//! # Invariants
//! - Date parsing never fails outward: missing or malformed dates sort as
//!   epoch zero.
//! - Date-only values (`YYYY-MM-DD`) are interpreted as UTC midnight.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

static DATE_ONLY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date-only regex"));

/// Blog post record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    /// Card heading; unique within the catalog.
    pub title: String,
    pub excerpt: String,
    pub image: String,
    /// External article URL.
    pub link: String,
    /// Raw authoring date, usually `YYYY-MM-DD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Free-form label such as `6 min read`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_time: Option<String>,
}

impl BlogPost {
    pub fn new(title: impl Into<String>, excerpt: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            excerpt: excerpt.into(),
            image: String::new(),
            link: String::new(),
            date: None,
            tags: None,
            read_time: None,
        }
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Tags as a slice; posts without tags yield an empty slice.
    pub fn tag_slice(&self) -> &[String] {
        self.tags.as_deref().unwrap_or(&[])
    }

    /// Parsed publish date, if present and well-formed.
    pub fn publish_date(&self) -> Option<PublishDate> {
        self.date.as_deref().and_then(PublishDate::parse)
    }
}

/// Parsed publish timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PublishDate(OffsetDateTime);

impl PublishDate {
    /// Parses `YYYY-MM-DD` or an RFC 3339 datetime.
    ///
    /// Returns `None` for blank or unrecognized input.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        if DATE_ONLY_RE.is_match(trimmed) {
            return Date::parse(trimmed, format_description!("[year]-[month]-[day]"))
                .ok()
                .map(|date| Self(date.midnight().assume_utc()));
        }
        OffsetDateTime::parse(trimmed, &Rfc3339).ok().map(Self)
    }

    /// Milliseconds since the Unix epoch.
    pub fn epoch_millis(self) -> i64 {
        (self.0.unix_timestamp_nanos() / 1_000_000) as i64
    }

    pub fn date(self) -> Date {
        self.0.date()
    }
}

/// Sort key for a raw date: epoch milliseconds, or `0` when missing/malformed.
pub fn sort_key_millis(raw: Option<&str>) -> i64 {
    raw.and_then(PublishDate::parse)
        .map(PublishDate::epoch_millis)
        .unwrap_or(0)
}

/// Formats a raw date for card display, e.g. `May 10, 2024`.
///
/// Missing dates render as an empty string; unparseable dates are returned
/// unchanged so authoring mistakes stay visible.
pub fn format_display_date(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return String::new();
    };
    PublishDate::parse(raw)
        .and_then(|parsed| {
            parsed
                .date()
                .format(format_description!(
                    "[month repr:short] [day padding:none], [year]"
                ))
                .ok()
        })
        .unwrap_or_else(|| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::{format_display_date, sort_key_millis, BlogPost, PublishDate};

    #[test]
    fn parses_date_only_as_utc_midnight() {
        let parsed = PublishDate::parse("1970-01-02").unwrap();
        assert_eq!(parsed.epoch_millis(), 86_400_000);
    }

    #[test]
    fn parses_rfc3339_datetime() {
        let parsed = PublishDate::parse("2024-05-10T12:00:00Z").unwrap();
        let midnight = PublishDate::parse("2024-05-10").unwrap();
        assert_eq!(parsed.epoch_millis() - midnight.epoch_millis(), 43_200_000);
    }

    #[test]
    fn malformed_and_missing_dates_sort_as_epoch_zero() {
        assert_eq!(sort_key_millis(None), 0);
        assert_eq!(sort_key_millis(Some("")), 0);
        assert_eq!(sort_key_millis(Some("not a date")), 0);
        assert_eq!(sort_key_millis(Some("2024-13-45")), 0);
    }

    #[test]
    fn display_date_uses_short_month_format() {
        assert_eq!(format_display_date(Some("2024-05-10")), "May 10, 2024");
        assert_eq!(format_display_date(Some("2023-12-05")), "Dec 5, 2023");
        assert_eq!(format_display_date(None), "");
        assert_eq!(format_display_date(Some("someday")), "someday");
    }

    #[test]
    fn post_deserializes_camel_case_read_time() {
        let raw = r#"{
            "title": "Mastering TypeScript",
            "excerpt": "Advanced patterns",
            "image": "cover.jpeg",
            "link": "https://blog.test/ts",
            "readTime": "10 min read"
        }"#;
        let post: BlogPost = serde_json::from_str(raw).unwrap();
        assert_eq!(post.read_time.as_deref(), Some("10 min read"));
        assert!(post.tag_slice().is_empty());
        assert!(post.publish_date().is_none());
    }
}
