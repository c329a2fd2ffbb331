//! # Coin News
//!
//! Command-line front end for the extraction pipeline.
//!
//! ## Usage
//!
//! ```sh
//! coin_news --fetch BTC -k etf,halving
//! ```
//!
//! ## Flow
//!
//! 1. **Config**: load selectors and the subject registry, compile selectors
//! 2. **Fetch** (optional): refresh every subject snapshot on disk
//! 3. **Extract**: load the chosen subject's snapshot and run the pipeline
//! 4. **Output**: print records and optionally write a JSON report

use chrono::Local;
use clap::Parser;
use std::error::Error;
use std::io;
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

use coin_news::cli::{self, Cli, OutputFormat};
use coin_news::config::AppConfig;
use coin_news::extract::Extractor;
use coin_news::extract::filter::KeywordSet;
use coin_news::models::NewsReport;
use coin_news::outputs::{console, json};
use coin_news::scrapers::snapshot::{fetch_and_save_pages, load_snapshot};
use coin_news::utils::{ensure_writable_dir, time_of_day};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    // ---- Config ----
    let config = AppConfig::load_or_builtin(args.config.as_deref()).await?;
    let extractor = Extractor::new(&config.extraction)?;

    // ---- Fetch ----
    if args.fetch {
        let saved = fetch_and_save_pages(&config).await?;
        info!(saved, total = config.subjects.len(), "Snapshots refreshed");
    }

    // ---- Subject and keywords ----
    let (symbol, keyword_input) = match args.symbol {
        Some(symbol) => (symbol, args.keywords),
        None => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut output = io::stdout();
            let question = format!(
                "Enter cryptocurrency symbol ({}): ",
                config.symbols().join("/")
            );
            let symbol = cli::prompt(&question, &mut input, &mut output)?;
            let keywords = cli::prompt(
                "Enter keywords (comma-separated) or press Enter to skip: ",
                &mut input,
                &mut output,
            )?;
            (symbol, Some(keywords))
        }
    };
    let keywords = keyword_input.as_deref().and_then(KeywordSet::parse);

    let subject = match config.subject(&symbol) {
        Ok(subject) => subject,
        Err(e) => {
            error!(error = %e, "Invalid subject");
            return Err(e.into());
        }
    };

    // ---- Extract ----
    let path = config.snapshot_path(subject);
    let records = match load_snapshot(&path).await? {
        Some(raw) => extractor.extract_from_markup(&raw, keywords.as_ref())?,
        None => Vec::new(),
    };

    // ---- Output ----
    match args.format {
        OutputFormat::Text => print!("{}", console::render(&subject.symbol, &records)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&records)?),
    }

    if let Some(dir) = args.json_output_dir.as_deref() {
        ensure_writable_dir(dir).await?;
        let now = Local::now();
        let report = NewsReport {
            subject: subject.symbol.clone(),
            local_date: now.date_naive().to_string(),
            local_time: now.time().to_string(),
            keywords: keywords.as_ref().map(|k| k.terms().to_vec()).unwrap_or_default(),
            articles: records,
        };
        json::write_report(&report, time_of_day(now.time()), dir).await?;
    }

    let elapsed = start_time.elapsed();
    info!(?elapsed, "Execution complete");
    Ok(())
}
