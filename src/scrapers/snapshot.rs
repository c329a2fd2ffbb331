//! Page snapshots: download subject pages to disk and read them back.
//!
//! Fetching is sequential with a pause between requests so the source site is
//! not hammered. Failures for one subject are logged and skipped without
//! failing the batch.

use futures::stream::{self, StreamExt};
use rand::{Rng, rng};
use reqwest::Client;
use std::io::ErrorKind;
use std::path::Path;
use std::time::Duration;
use tokio::fs;
use tokio::time::sleep;
use tracing::{debug, error, info, instrument, warn};

use crate::config::{AppConfig, FetchConfig, Subject};
use crate::error::Result;

/// Download every registered subject page into the snapshot directory.
///
/// # Returns
///
/// The number of pages saved.
///
/// # Errors
///
/// Returns an error only if the HTTP client cannot be built or the snapshot
/// directory cannot be created.
#[instrument(level = "info", skip_all, fields(dir = %config.fetch.snapshot_dir.display()))]
pub async fn fetch_and_save_pages(config: &AppConfig) -> Result<usize> {
    let client = Client::builder().user_agent(&config.fetch.user_agent).build()?;
    fs::create_dir_all(&config.fetch.snapshot_dir).await?;

    let client = &client;
    let total = config.subjects.len();
    let saved: Vec<bool> = stream::iter(config.subjects.iter().enumerate())
        .then(|(i, subject)| async move {
            let path = config.snapshot_path(subject);
            let ok = match fetch_page(client, subject, &path).await {
                Ok(bytes) => {
                    info!(symbol = %subject.symbol, bytes, path = %path.display(), "Saved page");
                    true
                }
                Err(e) => {
                    error!(
                        symbol = %subject.symbol,
                        url = %subject.url,
                        error = %e,
                        "Fetch failed"
                    );
                    false
                }
            };
            if i + 1 < total {
                let pause = pause_duration(&config.fetch);
                debug!(?pause, "Pausing between requests");
                sleep(pause).await;
            }
            ok
        })
        .collect()
        .await;

    let count = saved.iter().filter(|ok| **ok).count();
    info!(saved = count, total, "Finished fetching pages");
    Ok(count)
}

/// Fetch one subject page and write its raw bytes to `path`.
#[instrument(level = "info", skip_all, fields(symbol = %subject.symbol))]
async fn fetch_page(client: &Client, subject: &Subject, path: &Path) -> Result<usize> {
    let body = client
        .get(&subject.url)
        .send()
        .await?
        .error_for_status()?
        .bytes()
        .await?;
    fs::write(path, &body).await?;
    Ok(body.len())
}

/// Configured pause plus random jitter.
pub fn pause_duration(fetch: &FetchConfig) -> Duration {
    let jitter_ms: u64 = if fetch.jitter_ms == 0 {
        0
    } else {
        rng().random_range(0..=fetch.jitter_ms)
    };
    Duration::from_millis(fetch.pause_ms + jitter_ms)
}

/// Read a saved snapshot.
///
/// A missing file is not an error: it is logged and reported as `None`, so
/// the caller can treat it as "no news".
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn load_snapshot(path: &Path) -> Result<Option<Vec<u8>>> {
    match fs::read(path).await {
        Ok(bytes) => {
            debug!(bytes = bytes.len(), "Loaded snapshot");
            Ok(Some(bytes))
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!("Snapshot not found; fetch it first with --fetch");
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("coin_news_{}_{}", std::process::id(), name))
    }

    #[tokio::test]
    async fn test_load_snapshot_reads_bytes() {
        let path = temp_path("snapshot.html");
        std::fs::write(&path, b"<html></html>").unwrap();
        let bytes = load_snapshot(&path).await.unwrap();
        assert_eq!(bytes.as_deref(), Some(&b"<html></html>"[..]));
        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn test_load_snapshot_missing_is_none() {
        let path = temp_path("does_not_exist.html");
        assert!(load_snapshot(&path).await.unwrap().is_none());
    }

    #[test]
    fn test_pause_duration_bounds() {
        let fetch = FetchConfig {
            pause_ms: 100,
            jitter_ms: 50,
            ..Default::default()
        };
        for _ in 0..20 {
            let pause = pause_duration(&fetch);
            assert!(pause >= Duration::from_millis(100));
            assert!(pause <= Duration::from_millis(150));
        }

        let fixed = FetchConfig {
            pause_ms: 0,
            jitter_ms: 0,
            ..Default::default()
        };
        assert_eq!(pause_duration(&fixed), Duration::ZERO);
    }

    #[tokio::test]
    async fn test_fetch_with_no_subjects_saves_nothing() {
        let mut config = AppConfig::builtin().unwrap();
        config.subjects.clear();
        config.fetch.snapshot_dir = temp_path("empty_snapshots");
        assert_eq!(fetch_and_save_pages(&config).await.unwrap(), 0);
        assert!(config.fetch.snapshot_dir.is_dir());
        let _ = std::fs::remove_dir_all(&config.fetch.snapshot_dir);
    }
}
