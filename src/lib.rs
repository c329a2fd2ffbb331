//! # Coin News
//!
//! Extracts a bounded, keyword-filtered list of news records from a saved
//! coin page.
//!
//! ## Architecture
//!
//! 1. **Snapshot**: the [`scrapers`] collaborator fetches pages and loads them
//! 2. **Parse**: raw markup becomes an immutable [`extract::document::Document`]
//! 3. **Extract**: the [`extract::Extractor`] locates the news region, splits it
//!    into blocks, pulls fields, filters by keyword and caps the result
//! 4. **Output**: [`outputs`] renders records to the terminal or a JSON report
//!
//! Selectors are configuration ([`config`]), so a change in page markup is a
//! config edit rather than a code change.
//!
//! ```
//! use coin_news::config::AppConfig;
//! use coin_news::extract::{Extractor, filter::KeywordSet};
//!
//! let config = AppConfig::builtin().unwrap();
//! let extractor = Extractor::new(&config.extraction).unwrap();
//! let keywords = KeywordSet::parse("etf");
//! let records = extractor
//!     .extract_from_markup(b"<html><body></body></html>", keywords.as_ref())
//!     .unwrap();
//! assert!(records.is_empty());
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod models;
pub mod outputs;
pub mod scrapers;
pub mod utils;

pub use error::{Error, Result};
pub use extract::Extractor;
pub use models::{NewsRecord, NewsReport};
