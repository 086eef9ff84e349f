//! CLI argument definitions for the TradeHUD ribbon.
//!
//! # Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--gateway` | `http://127.0.0.1:8015` | Base URL of the consolidated gateway |
//! | `--ticker` | none | Ticker submitted on startup |
//! | `--timeout-ms` | `8000` | Gateway request timeout in ms |
//! | `--log-file` | none | Append tracing output to this file |
//!
//! # Examples
//!
//! ```bash
//! # Open the ribbon and type a ticker, Enter to submit
//! tradehud
//!
//! # Submit AAPL immediately against a non-default gateway
//! tradehud --ticker AAPL --gateway http://127.0.0.1:9000
//! ```

use std::path::PathBuf;

use clap::Parser;

/// TradeHUD - single-ticker strategy ribbon for the terminal.
#[derive(Debug, Parser)]
#[command(name = "tradehud", version, about)]
pub struct Cli {
    /// Base URL of the consolidated gateway process.
    #[arg(long, default_value = "http://127.0.0.1:8015")]
    pub gateway: String,

    /// Ticker to submit on startup.
    #[arg(long)]
    pub ticker: Option<String>,

    /// Gateway request timeout in milliseconds.
    #[arg(long, default_value_t = 8_000)]
    pub timeout_ms: u64,

    /// Append tracing output to this file. The terminal owns stderr while
    /// the alternate screen is active, so logs go to a file or nowhere.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
