//! Keyword filtering and result limiting.
//!
//! Matching is case-insensitive substring containment on the title or the
//! description, so `"BTC"` matches `"BTCUSD"`.

use crate::models::NewsRecord;

/// Maximum number of records returned per document.
pub const DEFAULT_MAX_RECORDS: usize = 8;

/// An ordered set of lowercase keyword terms. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSet {
    terms: Vec<String>,
}

impl KeywordSet {
    /// Build a set from raw terms. Terms are trimmed and lowercased; blank
    /// ones are dropped. Returns `None` when nothing is left, meaning "no
    /// filter".
    pub fn new<I, S>(terms: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let terms: Vec<String> = terms
            .into_iter()
            .map(|t| t.as_ref().trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();
        if terms.is_empty() {
            None
        } else {
            Some(Self { terms })
        }
    }

    /// Parse comma-separated user input such as `"etf, halving"`.
    pub fn parse(input: &str) -> Option<Self> {
        Self::new(input.split(','))
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Whether any term occurs in the title or the description.
    pub fn matches(&self, record: &NewsRecord) -> bool {
        let title = record.title.to_lowercase();
        let description = record.description.to_lowercase();
        self.terms
            .iter()
            .any(|term| title.contains(term.as_str()) || description.contains(term.as_str()))
    }
}

/// Keep records matching `keywords`, preserving order. `None` keeps all.
pub fn filter<'k, I>(
    records: I,
    keywords: Option<&'k KeywordSet>,
) -> impl Iterator<Item = NewsRecord> + 'k
where
    I: Iterator<Item = NewsRecord> + 'k,
{
    records.filter(move |record| keywords.is_none_or(|k| k.matches(record)))
}

/// Take the first `max_records` records. Stops pulling from `records` once
/// the cap is reached.
pub fn limit<I>(records: I, max_records: usize) -> impl Iterator<Item = NewsRecord>
where
    I: Iterator<Item = NewsRecord>,
{
    records.take(max_records)
}
