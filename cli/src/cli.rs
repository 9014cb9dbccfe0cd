use std::path::PathBuf;

use clap::Parser;

use market::types::{Pair, Timeframe};

/// Command-line surface of the analytics loop. Everything here is
/// validated into an `AnalyticsConfig` before any computation runs.
#[derive(Debug, Parser)]
#[clap(name = "pairwatch", version)]
pub struct Cli {
    /// SQLite database URL shared with the ingestor (falls back to
    /// DATABASE_URL, then a local file).
    #[clap(long)]
    pub db: Option<String>,

    /// Pair to analyze as <y_symbol>/<x_symbol>; y is regressed on x.
    #[clap(long, default_value = "ethusdt/btcusdt")]
    pub pair: Pair,

    /// Resampling timeframe: 1s, 1m or 5m
    #[clap(long, default_value_t = Timeframe::M1)]
    pub timeframe: Timeframe,

    /// Rolling window length for z-score and correlation
    #[clap(long, default_value_t = analytics::config::DEFAULT_WINDOW)]
    pub window: usize,

    /// Absolute z-score above which the alert fires
    #[clap(long, default_value_t = 2.0)]
    pub threshold: f64,

    /// Seconds between refreshes
    #[clap(long, default_value_t = 10)]
    pub interval_secs: u64,

    /// Run a single refresh, write the snapshot as CSV to this path,
    /// and exit
    #[clap(long)]
    pub export: Option<PathBuf>,
}

pub fn database_url(cli: &Cli) -> String {
    cli.db
        .clone()
        .or_else(|| std::env::var("DATABASE_URL").ok())
        .unwrap_or_else(|| "sqlite://pairwatch.db?mode=rwc".to_string())
}
