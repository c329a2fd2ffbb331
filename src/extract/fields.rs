//! Per-block field extraction.
//!
//! A block yields a [`NewsRecord`] only when both its title and its link are
//! found; description and timestamp fall back to fixed sentinels.

use tracing::debug;

use super::document::Node;
use super::locator::Locator;
use crate::models::NewsRecord;
use crate::utils::{collapse_whitespace, truncate_for_log};

/// Substituted when a block has no description.
pub const NO_DESCRIPTION: &str = "No description available";
/// Substituted when a block has no timestamp.
pub const NO_DATE: &str = "No date available";

/// Compiled locators for the fields inside one block.
#[derive(Debug, Clone)]
pub struct FieldLocators {
    pub title: Locator,
    pub link: Locator,
    pub link_attribute: String,
    pub description: Locator,
    pub timestamp: Locator,
    /// When set, read the timestamp from this attribute before falling back
    /// to the node text.
    pub timestamp_attribute: Option<String>,
}

/// Raw values pulled out of a block before normalization.
struct CandidateRecord<'a> {
    title: String,
    link: &'a str,
    description: Option<String>,
    timestamp: Option<String>,
}

impl CandidateRecord<'_> {
    fn normalize(self, base_origin: &str) -> NewsRecord {
        NewsRecord {
            title: self.title,
            link: resolve_link(self.link, base_origin),
            publication_date: self.timestamp.unwrap_or_else(|| NO_DATE.to_string()),
            description: self.description.unwrap_or_else(|| NO_DESCRIPTION.to_string()),
        }
    }
}

/// Extract one record from `block`, or `None` if its title or link is missing.
///
/// A description or timestamp node that is present but blank yields an empty
/// string; only a missing node gets the sentinel.
pub fn extract(
    block: Node<'_>,
    fields: &FieldLocators,
    base_origin: &str,
) -> Option<NewsRecord> {
    let Some(title) = block
        .find_first(&fields.title)
        .map(Node::text)
        .filter(|t| !t.is_empty())
    else {
        debug!(block = %truncate_for_log(&block.text(), 80), "Skipping block without title");
        return None;
    };

    let Some(link) = block
        .find_all(&fields.link, usize::MAX)
        .filter_map(|n| n.attribute(&fields.link_attribute))
        .find(|href| !href.trim().is_empty())
    else {
        debug!(title = %truncate_for_log(&title, 80), "Skipping block without link");
        return None;
    };

    let description = block.find_first(&fields.description).map(Node::text);

    let timestamp = block.find_first(&fields.timestamp).map(|node| {
        fields
            .timestamp_attribute
            .as_deref()
            .and_then(|attr| node.attribute(attr))
            .map(collapse_whitespace)
            .unwrap_or_else(|| node.text())
    });

    let candidate = CandidateRecord {
        title,
        link,
        description,
        timestamp,
    };
    Some(candidate.normalize(base_origin))
}

/// Make `raw` absolute. Values starting with `http` pass through; anything
/// else is appended verbatim to `base_origin`.
pub fn resolve_link(raw: &str, base_origin: &str) -> String {
    let raw = raw.trim();
    let has_scheme = raw.get(..4).is_some_and(|prefix| prefix.eq_ignore_ascii_case("http"));
    if has_scheme {
        raw.to_string()
    } else {
        format!("{base_origin}{raw}")
    }
}
