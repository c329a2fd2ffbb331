//! Error types for the extraction pipeline and its I/O glue.
//!
//! Only [`Error::MalformedInput`] is fatal to an extraction call. A missing
//! news region is reported as [`Error::RegionNotFound`] by the locator, but
//! the orchestrator turns it into an empty result.

/// Error type for extraction, configuration and snapshot operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The raw markup could not be tokenized at all.
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// The region selector matched nothing in the document.
    #[error("News region not found (selector `{0}`)")]
    RegionNotFound(String),

    /// A configured selector failed to compile.
    #[error("Invalid {field} selector `{selector}`: {reason}")]
    InvalidSelector {
        field: &'static str,
        selector: String,
        reason: String,
    },

    /// The base origin used to absolutize links is not a URL.
    #[error("Invalid base origin `{origin}`: {source}")]
    InvalidBaseOrigin {
        origin: String,
        source: url::ParseError,
    },

    /// The requested subject is not in the registry.
    #[error("Unknown subject `{symbol}`; choose from: {choices}")]
    UnknownSubject { symbol: String, choices: String },

    /// The configuration file could not be parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] serde_yaml::Error),

    /// A report could not be serialized.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Result type alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_selector_message() {
        let err = Error::InvalidSelector {
            field: "title",
            selector: "div[".to_string(),
            reason: "unexpected end".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid title selector `div[`: unexpected end"
        );
    }

    #[test]
    fn test_unknown_subject_lists_choices() {
        let err = Error::UnknownSubject {
            symbol: "XYZ".to_string(),
            choices: "BTC, ETH".to_string(),
        };
        assert!(err.to_string().contains("BTC, ETH"));
    }
}
