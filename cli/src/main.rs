pub mod cli;
pub mod refresh;

use std::fs::File;
use std::time::Duration;

use clap::Parser;
use tokio::time::{self, MissedTickBehavior};
use tracing::{error, info, warn};

use analytics::config::AnalyticsConfig;
use analytics::export;
use analytics::snapshot::Snapshot;
use common::logger::init_logger;
use market::types::Pair;
use store::sqlite_store::SqliteTickStore;

use crate::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger("pairwatch");

    let args = Cli::parse();

    // Reject bad combinations before touching the store or the pipeline.
    let cfg = AnalyticsConfig::new(args.timeframe, args.window, args.threshold)?;

    let store = SqliteTickStore::new(&cli::database_url(&args)).await?;

    if let Some(path) = &args.export {
        let snapshot = refresh::refresh(&store, &args.pair, &cfg).await?;

        let file = File::create(path)?;
        export::write_csv(file, &snapshot)?;

        info!(
            path = %path.display(),
            rows = snapshot.aligned.len(),
            "snapshot exported"
        );
        return Ok(());
    }

    let mut interval = time::interval(Duration::from_secs(args.interval_secs.max(1)));
    // A slow refresh must not queue extra cycles behind itself.
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut last: Option<Snapshot> = None;

    loop {
        interval.tick().await;

        match refresh::refresh(&store, &args.pair, &cfg).await {
            Ok(snapshot) => {
                report(&args.pair, &snapshot);
                last = Some(snapshot);
            }
            Err(e) => match &last {
                Some(prev) => warn!(
                    error = %e,
                    stale_rows = prev.aligned.len(),
                    "store unavailable; keeping previous snapshot"
                ),
                None => error!(error = %e, "store unavailable and no snapshot yet"),
            },
        }
    }
}

fn report(pair: &Pair, snapshot: &Snapshot) {
    let Some(point) = snapshot.aligned.last() else {
        info!(pair = %pair.id(), "waiting for overlapping data from both legs");
        return;
    };

    let latest_zscore = snapshot.zscore.iter().rev().find_map(|z| *z);

    info!(
        pair = %pair.id(),
        ts = %format_ts(point.ts_ms),
        y_close = point.y,
        x_close = point.x,
        hedge_slope = snapshot.hedge.map(|h| h.slope),
        zscore = latest_zscore,
        adf_p = snapshot.adf.map(|a| a.p_value),
        corr = snapshot.correlation.last().copied().flatten(),
        "refresh"
    );

    if snapshot.alert.breached {
        warn!(
            pair = %pair.id(),
            magnitude = snapshot.alert.magnitude,
            "z-score breached the alert threshold"
        );
    }
}

fn format_ts(ts_ms: i64) -> String {
    chrono::DateTime::<chrono::Utc>::from_timestamp_millis(ts_ms)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| ts_ms.to_string())
}
