//! Anchor extraction and the pre-publish link audit.
//!
//! Generated pages carry two classes of links: in-page fragments used by the
//! section navigation, and outbound absolute links. Anything else in an
//! `href` is a mistake the build should refuse to publish.

use std::collections::HashSet;

use scraper::{Html, Selector};
use thiserror::Error;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// `#fragment` reference to an element of the same page.
    Fragment,
    /// Absolute `http(s)` link to another site.
    Hyperlink,
    /// `mailto:` address.
    Email,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedLink {
    pub href: String,
    pub text: Option<String>,
    pub kind: Option<LinkKind>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditSummary {
    pub anchors: usize,
    pub fragments: usize,
    pub external: usize,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuditError {
    #[error("anchor {text:?} has an empty href")]
    EmptyHref { text: String },
    #[error("fragment link #{fragment} has no matching element id")]
    DanglingFragment { fragment: String },
    #[error("href {href:?} is not an absolute http(s) url")]
    NotAbsolute { href: String },
    #[error("unsupported scheme {scheme:?} in href {href:?}")]
    UnsupportedScheme { scheme: String, href: String },
}

/// Collects every `<a href=...>` of a rendered document, classified where the
/// href is well formed.
pub fn extract_links(document: &str) -> Vec<ExtractedLink> {
    let doc = Html::parse_document(document);
    let anchor_sel = Selector::parse("a").ok();

    let mut links = Vec::new();
    let Some(sel) = anchor_sel else {
        return links;
    };
    for element in doc.select(&sel) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        let href = href.trim().to_string();
        let text: String = element.text().collect::<String>().trim().to_string();
        links.push(ExtractedLink {
            kind: classify(&href),
            text: (!text.is_empty()).then_some(text),
            href,
        });
    }
    links
}

/// Verifies every anchor of a rendered document: fragments must resolve to an
/// element id in the same page, everything else must be an absolute http(s)
/// link or a mailto address. Returns on the first violation.
pub fn audit_document(document: &str) -> Result<AuditSummary, AuditError> {
    let ids = collect_ids(document);
    let links = extract_links(document);

    let mut summary = AuditSummary {
        anchors: links.len(),
        fragments: 0,
        external: 0,
    };

    for link in links {
        if link.href.is_empty() {
            return Err(AuditError::EmptyHref {
                text: link.text.unwrap_or_default(),
            });
        }
        match link.kind {
            Some(LinkKind::Fragment) => {
                let fragment = &link.href[1..];
                if !ids.contains(fragment) {
                    return Err(AuditError::DanglingFragment {
                        fragment: fragment.to_string(),
                    });
                }
                summary.fragments += 1;
            }
            Some(LinkKind::Hyperlink) => summary.external += 1,
            Some(LinkKind::Email) => {}
            None => {
                return Err(match Url::parse(&link.href) {
                    Ok(url) => AuditError::UnsupportedScheme {
                        scheme: url.scheme().to_string(),
                        href: link.href,
                    },
                    Err(_) => AuditError::NotAbsolute { href: link.href },
                });
            }
        }
    }

    Ok(summary)
}

fn classify(href: &str) -> Option<LinkKind> {
    if let Some(fragment) = href.strip_prefix('#') {
        return (!fragment.is_empty()).then_some(LinkKind::Fragment);
    }
    if let Some(address) = href.strip_prefix("mailto:") {
        return (!address.is_empty()).then_some(LinkKind::Email);
    }
    match Url::parse(href) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Some(LinkKind::Hyperlink),
        _ => None,
    }
}

fn collect_ids(document: &str) -> HashSet<String> {
    let doc = Html::parse_document(document);
    let mut ids = HashSet::new();
    if let Ok(sel) = Selector::parse("[id]") {
        for element in doc.select(&sel) {
            if let Some(id) = element.value().attr("id") {
                ids.insert(id.to_string());
            }
        }
    }
    ids
}
