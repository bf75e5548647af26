use maud::Markup;

use crate::html::render_document;
use crate::slug::page_slug;

/// A fully assembled page ready to be audited and written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitePage {
    pub slug: String,
    pub title: String,
    pub document: String,
}

impl SitePage {
    /// Builds a page whose slug derives from its title.
    pub fn new(title: &str, content: Markup) -> Self {
        Self::with_slug(&page_slug(title), title, content)
    }

    /// Builds a page under an explicit slug. The slug is sanitized the same
    /// way derived ones are, so callers cannot smuggle in path separators.
    pub fn with_slug(slug: &str, title: &str, content: Markup) -> Self {
        Self {
            slug: page_slug(slug),
            title: title.to_string(),
            document: render_document(title, content),
        }
    }

    pub fn filename(&self) -> String {
        format!("{}.html", self.slug)
    }
}
