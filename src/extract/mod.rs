//! The news extraction pipeline.
//!
//! ```text
//! Document → locate_region → decompose → fields::extract → filter → limit
//! ```
//!
//! Everything after region location runs as one lazy iterator chain: blocks
//! are pulled one at a time and scanning stops as soon as `max_records`
//! records survive filtering, or after `max_blocks` candidates, whichever
//! comes first.
//!
//! # Submodules
//!
//! - [`document`]: parsed document and node queries
//! - [`locator`]: configurable node predicates and region location
//! - [`decompose`]: region to block sequence
//! - [`fields`]: block to [`NewsRecord`]
//! - [`filter`]: keyword filter and result limiter

pub mod decompose;
pub mod document;
pub mod fields;
pub mod filter;
pub mod locator;

use tracing::{info, instrument, warn};
use url::Url;

use crate::config::ExtractionConfig;
use crate::error::{Error, Result};
use crate::models::NewsRecord;
use document::Document;
use fields::FieldLocators;
use filter::KeywordSet;
use locator::{Locator, locate_region};

/// A compiled extraction pipeline, reusable across documents.
#[derive(Debug, Clone)]
pub struct Extractor {
    region: Locator,
    block: Locator,
    fields: FieldLocators,
    base_origin: String,
    max_blocks: usize,
    max_records: usize,
}

impl Extractor {
    /// Compile every selector in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSelector`] or [`Error::InvalidBaseOrigin`]
    /// before any document is touched.
    pub fn new(config: &ExtractionConfig) -> Result<Self> {
        let s = &config.selectors;
        Url::parse(&config.base_origin).map_err(|source| Error::InvalidBaseOrigin {
            origin: config.base_origin.clone(),
            source,
        })?;
        Ok(Self {
            region: s.region.compile("region")?,
            block: s.block.compile("block")?,
            fields: FieldLocators {
                title: s.title.compile("title")?,
                link: s.link.compile("link")?,
                link_attribute: s.link_attribute.clone(),
                description: s.description.compile("description")?,
                timestamp: s.timestamp.compile("timestamp")?,
                timestamp_attribute: s.timestamp_attribute.clone(),
            },
            base_origin: config.base_origin.clone(),
            max_blocks: config.max_blocks,
            max_records: config.max_records,
        })
    }

    /// Extract up to `max_records` records from `document`, in page order.
    ///
    /// A document without the news region yields no records.
    #[instrument(
        level = "info",
        skip_all,
        fields(keywords = keywords.map_or(0, |k| k.terms().len()))
    )]
    pub fn extract_news(
        &self,
        document: &Document,
        keywords: Option<&KeywordSet>,
    ) -> Vec<NewsRecord> {
        let region = match locate_region(document, &self.region) {
            Ok(region) => region,
            Err(e) => {
                warn!(error = %e, "Could not find news region; returning no records");
                return Vec::new();
            }
        };

        let candidates = decompose::decompose(region, &self.block, self.max_blocks)
            .filter_map(|block| fields::extract(block, &self.fields, &self.base_origin));
        let filtered = filter::filter(candidates, keywords);
        let records: Vec<NewsRecord> = filter::limit(filtered, self.max_records).collect();

        info!(count = records.len(), "Extracted news records");
        records
    }

    /// Parse `raw` markup and extract from it.
    ///
    /// # Errors
    ///
    /// Only [`Error::MalformedInput`]; structural absence yields `Ok` with
    /// fewer (or zero) records.
    pub fn extract_from_markup(
        &self,
        raw: &[u8],
        keywords: Option<&KeywordSet>,
    ) -> Result<Vec<NewsRecord>> {
        let document = Document::parse(raw)?;
        Ok(self.extract_news(&document, keywords))
    }
}
