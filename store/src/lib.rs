pub mod sqlite_store;

use market::types::Tick;

/// Read/append boundary over the persisted tick history.
///
/// Ingestion and analytics run as independent processes sharing only
/// this store, so the implementation must guarantee a reader never
/// observes a partially written row.
#[async_trait::async_trait]
pub trait TickStore: Send + Sync {
    /// Persist one trade. Append-only; rows are never updated.
    async fn append(&self, tick: &Tick) -> anyhow::Result<()>;

    /// Ticks for `symbol` ordered by timestamp (arrival order within
    /// equal timestamps). `since_ms` is inclusive; `None` reads the
    /// full history. Duplicate timestamps may appear; the resampler's
    /// bucket rule absorbs them.
    async fn read(&self, symbol: &str, since_ms: Option<i64>) -> anyhow::Result<Vec<Tick>>;
}
