//! YAML configuration: selectors, limits, fetch settings and the subject registry.
//!
//! The shape of the source markup is the most fragile external dependency,
//! so every selector lives here rather than in code. When no file is given,
//! the built-in CoinGecko configuration (`config/coingecko.yaml`) is used.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

use crate::error::{Error, Result};
use crate::extract::decompose::DEFAULT_MAX_BLOCKS;
use crate::extract::filter::DEFAULT_MAX_RECORDS;
use crate::extract::locator::LocatorSpec;

const BUILTIN_CONFIG: &str = include_str!("../config/coingecko.yaml");

/// Top-level configuration file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    pub extraction: ExtractionConfig,
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub subjects: Vec<Subject>,
}

/// Everything the extraction pipeline needs.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExtractionConfig {
    /// Origin prepended to relative links.
    pub base_origin: String,
    /// Candidate blocks scanned per document.
    #[serde(default = "default_max_blocks")]
    pub max_blocks: usize,
    /// Records returned per document.
    #[serde(default = "default_max_records")]
    pub max_records: usize,
    pub selectors: SelectorConfig,
}

/// Locators for the region, the repeating blocks and the fields in a block.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SelectorConfig {
    pub region: LocatorSpec,
    pub block: LocatorSpec,
    pub title: LocatorSpec,
    #[serde(default = "default_link")]
    pub link: LocatorSpec,
    #[serde(default = "default_link_attribute")]
    pub link_attribute: String,
    pub description: LocatorSpec,
    #[serde(default = "default_timestamp")]
    pub timestamp: LocatorSpec,
    #[serde(default)]
    pub timestamp_attribute: Option<String>,
}

/// Settings for downloading page snapshots.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FetchConfig {
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Pause between consecutive requests.
    #[serde(default = "default_pause_ms")]
    pub pause_ms: u64,
    /// Upper bound of the random delay added to each pause.
    #[serde(default = "default_jitter_ms")]
    pub jitter_ms: u64,
    #[serde(default = "default_snapshot_dir")]
    pub snapshot_dir: PathBuf,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            pause_ms: default_pause_ms(),
            jitter_ms: default_jitter_ms(),
            snapshot_dir: default_snapshot_dir(),
        }
    }
}

/// A page the collaborator knows how to fetch and load.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Subject {
    pub symbol: String,
    pub url: String,
    /// File name of the snapshot inside the snapshot directory.
    pub file: PathBuf,
}

fn default_max_blocks() -> usize {
    DEFAULT_MAX_BLOCKS
}

fn default_max_records() -> usize {
    DEFAULT_MAX_RECORDS
}

fn default_link() -> LocatorSpec {
    LocatorSpec::from("a[href]")
}

fn default_link_attribute() -> String {
    "href".to_string()
}

fn default_timestamp() -> LocatorSpec {
    LocatorSpec::from("time")
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/110.0.0.0 Safari/537.36".to_string()
}

fn default_pause_ms() -> u64 {
    2000
}

fn default_jitter_ms() -> u64 {
    250
}

fn default_snapshot_dir() -> PathBuf {
    PathBuf::from("web")
}

impl AppConfig {
    /// The built-in CoinGecko configuration.
    pub fn builtin() -> Result<Self> {
        Ok(serde_yaml::from_str(BUILTIN_CONFIG)?)
    }

    /// Load a YAML configuration file.
    #[instrument(level = "info", skip_all, fields(path = %path.display()))]
    pub async fn load(path: &Path) -> Result<Self> {
        let raw = tokio::fs::read_to_string(path).await?;
        let config: Self = serde_yaml::from_str(&raw)?;
        info!(subjects = config.subjects.len(), "Loaded configuration");
        Ok(config)
    }

    /// Load `path` if given, otherwise the built-in configuration.
    pub async fn load_or_builtin(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path).await,
            None => Self::builtin(),
        }
    }

    /// Look up a subject by symbol, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownSubject`] listing the valid symbols.
    pub fn subject(&self, symbol: &str) -> Result<&Subject> {
        let wanted = symbol.trim().to_uppercase();
        self.subjects
            .iter()
            .find(|s| s.symbol.to_uppercase() == wanted)
            .ok_or_else(|| Error::UnknownSubject {
                symbol: wanted,
                choices: self.symbols().join(", "),
            })
    }

    /// Registered symbols in configuration order.
    pub fn symbols(&self) -> Vec<&str> {
        self.subjects.iter().map(|s| s.symbol.as_str()).collect()
    }

    /// Where the snapshot for `subject` is stored.
    pub fn snapshot_path(&self, subject: &Subject) -> PathBuf {
        self.fetch.snapshot_dir.join(&subject.file)
    }
}
