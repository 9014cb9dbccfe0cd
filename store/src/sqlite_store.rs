//! SqliteTickStore
//! ----------------
//! SQLite-backed implementation of the `TickStore` trait. Both the
//! ingestor and the analytics loop open this store independently; SQLite
//! transactional appends are what make the shared-file design safe
//! without any locking of our own.

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};
use tracing::info;

use crate::TickStore;
use market::types::Tick;

pub struct SqliteTickStore {
    pool: SqlitePool,
}

impl SqliteTickStore {
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Connect to `url` and ensure the schema exists.
    pub async fn new(url: &str) -> anyhow::Result<Self> {
        let pool = SqlitePool::connect(url).await?;

        let store = Self::from_pool(pool);
        store.ensure_schema().await?;

        info!(url, "tick store ready");
        Ok(store)
    }

    /// Create the ticks table and its read index if missing.
    ///
    /// `id` is the insertion rowid: reads order by `(ts_ms, id)` so
    /// arrival order survives duplicate timestamps, which is what the
    /// resampler's tie-break relies on.
    pub async fn ensure_schema(&self) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS ticks (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                ts_ms INTEGER NOT NULL,
                symbol TEXT NOT NULL,
                price REAL NOT NULL,
                qty REAL NOT NULL
            );
        "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_ticks_symbol_ts ON ticks (symbol, ts_ms);",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl TickStore for SqliteTickStore {
    async fn append(&self, tick: &Tick) -> anyhow::Result<()> {
        sqlx::query("INSERT INTO ticks (ts_ms, symbol, price, qty) VALUES (?, ?, ?, ?)")
            .bind(tick.ts_ms)
            .bind(&tick.symbol)
            .bind(tick.price)
            .bind(tick.qty)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn read(&self, symbol: &str, since_ms: Option<i64>) -> anyhow::Result<Vec<Tick>> {
        let rows = match since_ms {
            Some(since) => {
                sqlx::query(
                    "SELECT ts_ms, symbol, price, qty FROM ticks \
                     WHERE symbol = ? AND ts_ms >= ? ORDER BY ts_ms, id",
                )
                .bind(symbol)
                .bind(since)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query(
                    "SELECT ts_ms, symbol, price, qty FROM ticks \
                     WHERE symbol = ? ORDER BY ts_ms, id",
                )
                .bind(symbol)
                .fetch_all(&self.pool)
                .await?
            }
        };

        let mut ticks = Vec::with_capacity(rows.len());
        for row in rows {
            ticks.push(Tick {
                ts_ms: row.get("ts_ms"),
                symbol: row.get("symbol"),
                price: row.get("price"),
                qty: row.get("qty"),
            });
        }

        Ok(ticks)
    }
}
