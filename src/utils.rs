//! Utility functions for text normalization, time classification and file system checks.
//!
//! - Whitespace collapsing for node text
//! - String truncation for logging
//! - Time-of-day classification for report file naming
//! - Output directory validation

use chrono::NaiveTime;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs as stdfs;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

use crate::error::Result;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Collapse every run of whitespace (including non-breaking spaces) into a
/// single space and trim both ends.
///
/// # Examples
///
/// ```
/// use coin_news::utils::collapse_whitespace;
/// assert_eq!(collapse_whitespace("  Bitcoin\n\t ETF  "), "Bitcoin ETF");
/// ```
pub fn collapse_whitespace(s: &str) -> String {
    WHITESPACE_RUN.replace_all(s.trim(), " ").into_owned()
}

/// Truncate a string for logging purposes.
///
/// Long strings are cut to at most `max` bytes (backing off to a char
/// boundary) with an ellipsis and the number of dropped bytes appended.
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}…(+{} bytes)", &s[..end], s.len() - end)
}

/// Classify a local time into `"morning"`, `"afternoon"` or `"evening"`.
///
/// - **Morning**: 00:00 - 08:00
/// - **Afternoon**: 08:00 - 16:00
/// - **Evening**: 16:00 - 24:00
pub fn time_of_day(tod: NaiveTime) -> &'static str {
    let morning_high = NaiveTime::from_hms_opt(8, 0, 0).unwrap_or(NaiveTime::MIN);
    let afternoon_high = NaiveTime::from_hms_opt(16, 0, 0).unwrap_or(NaiveTime::MIN);

    if tod < morning_high {
        "morning"
    } else if tod < afternoon_high {
        "afternoon"
    } else {
        "evening"
    }
}

/// Ensure a directory exists and is writable.
///
/// Creates the directory if needed, then writes and removes a scratch file.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or is not writable.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn ensure_writable_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).await?;
    let scratch_path = path.join("..__write_check__");
    stdfs::File::create(&scratch_path)?;
    let _ = stdfs::remove_file(&scratch_path);
    info!("Output directory is writable");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("a  b"), "a b");
        assert_eq!(collapse_whitespace("\n  Bitcoin \t\n ETF \n"), "Bitcoin ETF");
        assert_eq!(collapse_whitespace("A\u{00A0}\u{00A0}B"), "A B");
        assert_eq!(collapse_whitespace("   "), "");
    }

    #[test]
    fn test_truncate_for_log_short_string() {
        assert_eq!(truncate_for_log("Hello, world!", 100), "Hello, world!");
    }

    #[test]
    fn test_truncate_for_log_long_string() {
        let s = "a".repeat(500);
        let result = truncate_for_log(&s, 100);
        assert!(result.starts_with(&"a".repeat(100)));
        assert!(result.contains("…(+400 bytes)"));
    }

    #[test]
    fn test_truncate_for_log_respects_char_boundary() {
        // "é" is two bytes; cutting at 1 must back off to 0.
        let result = truncate_for_log("éé", 1);
        assert_eq!(result, "…(+4 bytes)");
    }

    #[test]
    fn test_time_of_day_boundaries() {
        let at = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
        assert_eq!(time_of_day(at(0, 0)), "morning");
        assert_eq!(time_of_day(at(7, 59)), "morning");
        assert_eq!(time_of_day(at(8, 0)), "afternoon");
        assert_eq!(time_of_day(at(15, 59)), "afternoon");
        assert_eq!(time_of_day(at(16, 0)), "evening");
        assert_eq!(time_of_day(at(23, 59)), "evening");
    }

    #[tokio::test]
    async fn test_ensure_writable_dir_creates_directory() {
        let dir = std::env::temp_dir().join(format!("coin_news_utils_{}", std::process::id()));
        ensure_writable_dir(&dir).await.unwrap();
        assert!(dir.is_dir());
        let _ = std::fs::remove_dir_all(&dir);
    }
}
