pub mod binance;

use std::sync::Arc;

use clap::Parser;

use common::logger::init_logger;
use store::sqlite_store::SqliteTickStore;

/// Tick ingestor: subscribes to Binance trade streams and appends every
/// trade to the shared SQLite store. Runs independently of the analytics
/// loop; the store file is the only thing the two processes share.
#[derive(Debug, Parser)]
#[clap(name = "pairwatch-ingest", version)]
struct Cli {
    /// SQLite database URL shared with the analytics CLI (falls back to
    /// DATABASE_URL, then a local file).
    #[clap(long)]
    db: Option<String>,

    /// Symbols to subscribe to (lowercase Binance stream names)
    #[clap(
        long,
        value_delimiter = ',',
        default_values_t = [String::from("btcusdt"), String::from("ethusdt")]
    )]
    symbols: Vec<String>,
}

fn database_url(cli: &Cli) -> String {
    cli.db
        .clone()
        .or_else(|| std::env::var("DATABASE_URL").ok())
        .unwrap_or_else(|| "sqlite://pairwatch.db?mode=rwc".to_string())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger("ingest");

    let cli = Cli::parse();
    let store = Arc::new(SqliteTickStore::new(&database_url(&cli)).await?);

    let mut tasks = Vec::with_capacity(cli.symbols.len());
    for symbol in cli.symbols {
        let store: Arc<dyn store::TickStore> = store.clone();
        tasks.push(tokio::spawn(binance::run_trade_stream(store, symbol)));
    }

    for task in tasks {
        task.await?;
    }

    Ok(())
}
