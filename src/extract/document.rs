//! Read-only document model over a parsed HTML tree.
//!
//! Parsing is delegated to `scraper` (html5ever), which recovers from
//! malformed markup the way browsers do. The only input it cannot tokenize is
//! a byte blob that is not valid UTF-8.

use scraper::{ElementRef, Html};
use tracing::debug;

use super::locator::Locator;
use crate::error::{Error, Result};
use crate::utils::collapse_whitespace;

/// An immutable, parsed markup document.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parse a raw markup blob.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedInput`] if the bytes are not valid UTF-8.
    pub fn parse(raw: &[u8]) -> Result<Self> {
        let text = std::str::from_utf8(raw).map_err(|e| Error::MalformedInput(e.to_string()))?;
        Ok(Self::parse_str(text))
    }

    /// Parse markup that is already decoded. Never fails: html5ever repairs
    /// whatever it is given.
    pub fn parse_str(markup: &str) -> Self {
        let html = Html::parse_document(markup);
        if !html.errors.is_empty() {
            debug!(count = html.errors.len(), "Recovered from markup errors");
        }
        Self { html }
    }

    /// First node in document order matching `locator`, if any.
    pub fn find_first(&self, locator: &Locator) -> Option<Node<'_>> {
        self.html.select(locator.selector()).next().map(Node::new)
    }
}

/// A borrowed element of a [`Document`].
#[derive(Clone, Copy, Debug)]
pub struct Node<'a> {
    element: ElementRef<'a>,
}

impl<'a> Node<'a> {
    pub(crate) fn new(element: ElementRef<'a>) -> Self {
        Self { element }
    }

    /// Element name, e.g. `"div"`.
    pub fn label(self) -> &'a str {
        self.element.value().name()
    }

    /// Value of attribute `name`, if present.
    pub fn attribute(self, name: &str) -> Option<&'a str> {
        self.element.value().attr(name)
    }

    /// Concatenated descendant text, trimmed and whitespace-collapsed.
    pub fn text(self) -> String {
        collapse_whitespace(&self.element.text().collect::<String>())
    }

    /// First descendant matching `locator`.
    pub fn find_first(self, locator: &Locator) -> Option<Node<'a>> {
        self.element.select(locator.selector()).next().map(Node::new)
    }

    /// Descendants matching `locator` in document order, at most `limit` of
    /// them. The iterator is lazy: unread matches are never visited.
    pub fn find_all<'s>(
        self,
        locator: &'s Locator,
        limit: usize,
    ) -> impl Iterator<Item = Node<'a>> + 's
    where
        'a: 's,
    {
        self.element.select(locator.selector()).take(limit).map(Node::new)
    }
}
