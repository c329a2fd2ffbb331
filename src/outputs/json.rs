//! JSON report output.
//!
//! Reports are grouped by date, one file per subject and edition:
//! ```text
//! json_output_dir/
//! └── 2025-05-06/
//!     ├── BTC_morning.json
//!     └── ETH_evening.json
//! ```

use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{error, info, instrument};

use crate::error::Result;
use crate::models::NewsReport;

/// Path a report is written to inside `json_output_dir`.
pub fn report_path(report: &NewsReport, time_of_day: &str, json_output_dir: &Path) -> PathBuf {
    json_output_dir
        .join(&report.local_date)
        .join(format!("{}_{}.json", report.subject, time_of_day))
}

/// Write a [`NewsReport`] as pretty-printed JSON.
///
/// Creates `{json_output_dir}/{local_date}/` if needed and returns the path
/// of the written file.
#[instrument(level = "info", skip_all, fields(json_output_dir = %json_output_dir.display()))]
pub async fn write_report(
    report: &NewsReport,
    time_of_day: &str,
    json_output_dir: &Path,
) -> Result<PathBuf> {
    let json = serde_json::to_string_pretty(report)?;
    let path = report_path(report, time_of_day, json_output_dir);

    if let Some(dir) = path.parent() {
        if let Err(e) = fs::create_dir_all(dir).await {
            error!(dir = %dir.display(), error = %e, "Failed to create JSON dir");
            return Err(e.into());
        }
    }

    fs::write(&path, json).await?;
    info!(path = %path.display(), articles = report.articles.len(), "Wrote JSON report");
    Ok(path)
}
