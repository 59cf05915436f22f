//! Project domain model.
//!
//! # Responsibility
//! - Define the portfolio project record rendered by project cards.
//! - Keep outbound link kinds typed and in stable display order.
//!
//! # Invariants
//! - `title` is unique within one catalog (enforced at catalog load).
//! - `tech` order is authoring order and is preserved for rendering.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Kind of outbound link a project card can render.
///
/// Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    Live,
    Github,
    Playstore,
    Appstore,
    Docs,
    Youtube,
}

const ALL_LINK_KINDS: [LinkKind; 6] = [
    LinkKind::Live,
    LinkKind::Github,
    LinkKind::Playstore,
    LinkKind::Appstore,
    LinkKind::Docs,
    LinkKind::Youtube,
];

impl LinkKind {
    /// Returns every link kind in display order.
    pub fn all() -> &'static [LinkKind] {
        &ALL_LINK_KINDS
    }

    /// Stable lowercase key, matching the serialized form.
    pub fn key(self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Github => "github",
            Self::Playstore => "playstore",
            Self::Appstore => "appstore",
            Self::Docs => "docs",
            Self::Youtube => "youtube",
        }
    }

    /// Human-readable label for link buttons.
    pub fn label(self) -> &'static str {
        match self {
            Self::Live => "Live",
            Self::Github => "GitHub",
            Self::Playstore => "Play Store",
            Self::Appstore => "App Store",
            Self::Docs => "Docs",
            Self::Youtube => "YouTube",
        }
    }
}

impl Display for LinkKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Optional outbound URLs for one project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playstore: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appstore: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
}

impl ProjectLinks {
    /// Returns the URL for one link kind, if present.
    pub fn get(&self, kind: LinkKind) -> Option<&str> {
        let value = match kind {
            LinkKind::Live => &self.live,
            LinkKind::Github => &self.github,
            LinkKind::Playstore => &self.playstore,
            LinkKind::Appstore => &self.appstore,
            LinkKind::Docs => &self.docs,
            LinkKind::Youtube => &self.youtube,
        };
        value.as_deref()
    }

    /// Iterates present links in display order.
    pub fn iter(&self) -> impl Iterator<Item = (LinkKind, &str)> + '_ {
        LinkKind::all()
            .iter()
            .filter_map(move |kind| self.get(*kind).map(|url| (*kind, url)))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

/// Portfolio project record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Card heading; unique within the catalog.
    pub title: String,
    pub description: String,
    /// Image reference (path or URL), rendered as-is.
    pub image: String,
    /// Technology tags in authoring order.
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default)]
    pub links: ProjectLinks,
}

impl Project {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            image: String::new(),
            tech: Vec::new(),
            links: ProjectLinks::default(),
        }
    }

    /// Builder-style helper that replaces the tech tag list.
    pub fn with_tech<I, S>(mut self, tech: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tech = tech.into_iter().map(Into::into).collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{LinkKind, Project, ProjectLinks};

    #[test]
    fn links_iterate_in_display_order() {
        let links = ProjectLinks {
            youtube: Some("https://youtube.test/v".to_string()),
            github: Some("https://github.test/r".to_string()),
            live: Some("https://live.test".to_string()),
            ..ProjectLinks::default()
        };
        let kinds: Vec<LinkKind> = links.iter().map(|(kind, _)| kind).collect();
        assert_eq!(
            kinds,
            vec![LinkKind::Live, LinkKind::Github, LinkKind::Youtube]
        );
        assert!(!links.is_empty());
        assert!(ProjectLinks::default().is_empty());
    }

    #[test]
    fn project_deserializes_with_missing_optional_links() {
        let raw = r#"{
            "title": "FinView API",
            "description": "API for income statements",
            "image": "/images/projects/finview-api.png",
            "tech": ["Python", "FastAPI"],
            "links": { "docs": "https://finview.test/docs" }
        }"#;
        let project: Project = serde_json::from_str(raw).unwrap();
        assert_eq!(project.tech, vec!["Python", "FastAPI"]);
        assert_eq!(
            project.links.get(LinkKind::Docs),
            Some("https://finview.test/docs")
        );
        assert_eq!(project.links.get(LinkKind::Live), None);
    }
}
