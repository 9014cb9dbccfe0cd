use sqlx::SqlitePool;

use market::types::Tick;
use store::TickStore;
use store::sqlite_store::SqliteTickStore;

fn tick(symbol: &str, ts_ms: i64, price: f64) -> Tick {
    Tick {
        symbol: symbol.into(),
        price,
        qty: 0.5,
        ts_ms,
    }
}

async fn store_with_schema(pool: SqlitePool) -> SqliteTickStore {
    let store = SqliteTickStore::from_pool(pool);
    store.ensure_schema().await.expect("schema");
    store
}

#[sqlx::test]
async fn append_then_read_returns_timestamp_order(pool: SqlitePool) -> anyhow::Result<()> {
    let store = store_with_schema(pool).await;

    // appended out of order, as network jitter would deliver them
    store.append(&tick("btcusdt", 2_000, 101.0)).await?;
    store.append(&tick("btcusdt", 1_000, 100.0)).await?;
    store.append(&tick("btcusdt", 3_000, 102.0)).await?;

    let ticks = store.read("btcusdt", None).await?;

    assert_eq!(ticks.len(), 3);
    assert_eq!(
        ticks.iter().map(|t| t.ts_ms).collect::<Vec<_>>(),
        vec![1_000, 2_000, 3_000]
    );
    assert_eq!(ticks[0].price, 100.0);
    assert_eq!(ticks[0].qty, 0.5);

    Ok(())
}

#[sqlx::test]
async fn duplicate_timestamps_keep_arrival_order(pool: SqlitePool) -> anyhow::Result<()> {
    let store = store_with_schema(pool).await;

    store.append(&tick("btcusdt", 1_000, 100.0)).await?;
    store.append(&tick("btcusdt", 1_000, 100.5)).await?;
    store.append(&tick("btcusdt", 1_000, 100.2)).await?;

    let ticks = store.read("btcusdt", None).await?;

    assert_eq!(
        ticks.iter().map(|t| t.price).collect::<Vec<_>>(),
        vec![100.0, 100.5, 100.2]
    );

    Ok(())
}

#[sqlx::test]
async fn since_filter_is_inclusive(pool: SqlitePool) -> anyhow::Result<()> {
    let store = store_with_schema(pool).await;

    store.append(&tick("btcusdt", 1_000, 100.0)).await?;
    store.append(&tick("btcusdt", 2_000, 101.0)).await?;
    store.append(&tick("btcusdt", 3_000, 102.0)).await?;

    let ticks = store.read("btcusdt", Some(2_000)).await?;

    assert_eq!(
        ticks.iter().map(|t| t.ts_ms).collect::<Vec<_>>(),
        vec![2_000, 3_000]
    );

    Ok(())
}

#[sqlx::test]
async fn symbols_are_isolated(pool: SqlitePool) -> anyhow::Result<()> {
    let store = store_with_schema(pool).await;

    store.append(&tick("btcusdt", 1_000, 100.0)).await?;
    store.append(&tick("ethusdt", 1_000, 300.0)).await?;

    let btc = store.read("btcusdt", None).await?;
    let eth = store.read("ethusdt", None).await?;

    assert_eq!(btc.len(), 1);
    assert_eq!(eth.len(), 1);
    assert_eq!(btc[0].symbol, "btcusdt");
    assert_eq!(eth[0].price, 300.0);

    Ok(())
}

#[sqlx::test]
async fn empty_store_reads_as_no_data(pool: SqlitePool) -> anyhow::Result<()> {
    let store = store_with_schema(pool).await;

    assert!(store.read("btcusdt", None).await?.is_empty());

    Ok(())
}

#[sqlx::test]
async fn schema_creation_is_idempotent(pool: SqlitePool) -> anyhow::Result<()> {
    let store = store_with_schema(pool).await;
    store.ensure_schema().await?;

    store.append(&tick("btcusdt", 1_000, 100.0)).await?;
    assert_eq!(store.read("btcusdt", None).await?.len(), 1);

    Ok(())
}
