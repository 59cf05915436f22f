use super::Catalog;
use crate::model::post::PublishDate;
use log::warn;
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Authoring-time catalog invariant violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogValidationError {
    EmptyProjectTitle,
    DuplicateProjectTitle(String),
    EmptyPostTitle,
    DuplicatePostTitle(String),
    /// `(record title, offending tag)`.
    BlankTag { title: String, tag: String },
}

impl Display for CatalogValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyProjectTitle => write!(f, "project title must not be empty"),
            Self::DuplicateProjectTitle(title) => {
                write!(f, "project title is duplicated: {title}")
            }
            Self::EmptyPostTitle => write!(f, "post title must not be empty"),
            Self::DuplicatePostTitle(title) => write!(f, "post title is duplicated: {title}"),
            Self::BlankTag { title, tag } => {
                write!(f, "blank tag `{tag}` on `{title}`")
            }
        }
    }
}

impl Error for CatalogValidationError {}

pub(super) fn validate_catalog(catalog: &Catalog) -> Result<(), CatalogValidationError> {
    let mut project_titles = BTreeSet::new();
    for project in &catalog.projects {
        if project.title.trim().is_empty() {
            return Err(CatalogValidationError::EmptyProjectTitle);
        }
        if !project_titles.insert(project.title.as_str()) {
            return Err(CatalogValidationError::DuplicateProjectTitle(
                project.title.clone(),
            ));
        }
        require_non_blank_tags(&project.title, &project.tech)?;
    }

    let mut post_titles = BTreeSet::new();
    for post in &catalog.posts {
        if post.title.trim().is_empty() {
            return Err(CatalogValidationError::EmptyPostTitle);
        }
        if !post_titles.insert(post.title.as_str()) {
            return Err(CatalogValidationError::DuplicatePostTitle(post.title.clone()));
        }
        require_non_blank_tags(&post.title, post.tag_slice())?;

        if let Some(raw) = post.date.as_deref() {
            if PublishDate::parse(raw).is_none() {
                // Sorting degrades this post to epoch zero.
                warn!(
                    "event=catalog_validate module=catalog status=warn reason=unparseable_date title_len={}",
                    post.title.chars().count()
                );
            }
        }
    }

    Ok(())
}

fn require_non_blank_tags(title: &str, tags: &[String]) -> Result<(), CatalogValidationError> {
    match tags.iter().find(|tag| tag.trim().is_empty()) {
        Some(tag) => Err(CatalogValidationError::BlankTag {
            title: title.to_string(),
            tag: tag.clone(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::CatalogValidationError;
    use crate::catalog::Catalog;
    use crate::model::post::BlogPost;
    use crate::model::project::Project;

    #[test]
    fn rejects_duplicate_project_titles() {
        let err = Catalog::new(
            vec![Project::new("Vitrine", "a"), Project::new("Vitrine", "b")],
            Vec::new(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            crate::catalog::CatalogError::Validation(
                CatalogValidationError::DuplicateProjectTitle(_)
            )
        ));
    }

    #[test]
    fn rejects_blank_post_tags() {
        let post = BlogPost::new("Web3", "intro").with_tags(["Blockchain", " "]);
        let err = Catalog::new(Vec::new(), vec![post]).unwrap_err();
        assert!(err.to_string().contains("blank tag"));
    }

    #[test]
    fn accepts_malformed_dates() {
        let post = BlogPost::new("Drafts", "later").with_date("sometime soon");
        assert!(Catalog::new(Vec::new(), vec![post]).is_ok());
    }
}
