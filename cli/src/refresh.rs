//! One refresh cycle.

use analytics::config::AnalyticsConfig;
use analytics::snapshot::{Snapshot, compute_snapshot};
use market::types::Pair;
use store::TickStore;

/// Read the full tick history for both legs and recompute every stage.
///
/// Pure pull model: nothing is carried over from previous refreshes. A
/// store failure aborts this cycle with an error so the caller can keep
/// the previous snapshot instead of replacing it with a partial one.
pub async fn refresh<S: TickStore + ?Sized>(
    store: &S,
    pair: &Pair,
    cfg: &AnalyticsConfig,
) -> anyhow::Result<Snapshot> {
    let ticks_y = store.read(&pair.y, None).await?;
    let ticks_x = store.read(&pair.x, None).await?;

    Ok(compute_snapshot(cfg, &ticks_y, &ticks_x))
}
