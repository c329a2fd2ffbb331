//! Command-line interface definitions.
//!
//! When the subject symbol is omitted the binary falls back to prompting for
//! it (and for keywords) on stdin.

use clap::{Parser, ValueEnum};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// How extracted records are printed to stdout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Extract the latest keyword-filtered news for a coin from a saved page.
///
/// # Examples
///
/// ```sh
/// # Refresh every snapshot, then show Bitcoin ETF news
/// coin_news --fetch BTC -k etf
///
/// # Use a custom selector file and write a JSON report
/// coin_news -c my_selectors.yaml -j ./reports ETH
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Subject symbol, e.g. BTC (prompted for when omitted)
    pub symbol: Option<String>,

    /// Comma-separated keywords; records must mention at least one
    #[arg(short, long)]
    pub keywords: Option<String>,

    /// Path to a YAML configuration file (defaults to the built-in CoinGecko config)
    #[arg(short, long, env = "COIN_NEWS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Download fresh snapshots for every subject before extracting
    #[arg(short, long)]
    pub fetch: bool,

    /// Output format for stdout
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Optional directory to also write a JSON report into
    #[arg(short, long)]
    pub json_output_dir: Option<PathBuf>,
}

/// Print `question` and read one trimmed line from `input`.
pub fn prompt<R: BufRead, W: Write>(
    question: &str,
    input: &mut R,
    output: &mut W,
) -> io::Result<String> {
    write!(output, "{question}")?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from(["coin_news", "btc", "--keywords", "etf,halving", "--fetch"]);
        assert_eq!(cli.symbol.as_deref(), Some("btc"));
        assert_eq!(cli.keywords.as_deref(), Some("etf,halving"));
        assert!(cli.fetch);
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(cli.json_output_dir.is_none());
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from([
            "coin_news",
            "-k",
            "sol",
            "-c",
            "sel.yaml",
            "-j",
            "/tmp/json",
            "--format",
            "json",
            "SOL",
        ]);
        assert_eq!(cli.symbol.as_deref(), Some("SOL"));
        assert_eq!(cli.config, Some(PathBuf::from("sel.yaml")));
        assert_eq!(cli.json_output_dir, Some(PathBuf::from("/tmp/json")));
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_cli_symbol_optional() {
        let cli = Cli::parse_from(["coin_news"]);
        assert!(cli.symbol.is_none());
        assert!(!cli.fetch);
    }

    #[test]
    fn test_prompt_reads_trimmed_line() {
        let mut input = io::Cursor::new("  eth \nignored\n");
        let mut output = Vec::new();
        let answer = prompt("Symbol: ", &mut input, &mut output).unwrap();
        assert_eq!(answer, "eth");
        assert_eq!(output, b"Symbol: ");
    }
}
