//! Data models for extracted news and the reports built from them.
//!
//! - [`NewsRecord`]: one validated news entry from a page snapshot
//! - [`NewsReport`]: the records for one subject plus run metadata

use serde::{Deserialize, Serialize};

/// A single news entry.
///
/// `title` is never empty and `link` is always absolute. Missing
/// descriptions and dates carry fixed sentinel strings rather than being
/// absent.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NewsRecord {
    /// Headline text.
    pub title: String,
    /// Absolute URL of the story.
    pub link: String,
    /// Publication time as shown on the page, e.g. `"2 hours ago"`.
    pub publication_date: String,
    /// Short teaser text.
    pub description: String,
}

/// The result of one extraction run, as written to JSON.
#[derive(Debug, Deserialize, Serialize)]
pub struct NewsReport {
    /// Subject symbol, e.g. `"BTC"`.
    pub subject: String,
    /// The date of the run in `YYYY-MM-DD` format.
    pub local_date: String,
    /// The local time of the run.
    pub local_time: String,
    /// Keyword terms applied, empty when unfiltered.
    pub keywords: Vec<String>,
    /// Extracted records in page order.
    pub articles: Vec<NewsRecord>,
}
