//! Binance trade-stream client.
//!
//! One task per symbol: connect to `<symbol>@trade`, decode each trade
//! event, append it to the store. The loop never gives up: on any
//! connection or stream error it waits a fixed delay and reconnects,
//! and the analytics side simply reads whatever made it into the store.

use std::sync::Arc;
use std::time::Duration;

use futures::StreamExt;
use serde::Deserialize;
use tokio_tungstenite::connect_async;
use tracing::{debug, error, info, warn};

use market::types::Tick;
use store::TickStore;

const WS_BASE: &str = "wss://fstream.binance.com/ws";
const RECONNECT_DELAY: Duration = Duration::from_secs(5);

/// Wire shape of a Binance `<symbol>@trade` event. Price and quantity
/// arrive as strings.
#[derive(Debug, Deserialize)]
struct TradeEvent {
    #[serde(rename = "e")]
    event: String,
    /// Trade time, epoch milliseconds.
    #[serde(rename = "T")]
    trade_time_ms: i64,
    #[serde(rename = "p")]
    price: String,
    #[serde(rename = "q")]
    qty: String,
}

impl TradeEvent {
    fn into_tick(self, symbol: &str) -> Option<Tick> {
        let price: f64 = self.price.parse().ok()?;
        let qty: f64 = self.qty.parse().ok()?;
        if price <= 0.0 {
            return None;
        }

        Some(Tick {
            symbol: symbol.to_string(),
            price,
            qty,
            ts_ms: self.trade_time_ms,
        })
    }
}

/// Subscribe to one symbol's trade stream and persist every trade.
pub async fn run_trade_stream(store: Arc<dyn TickStore>, symbol: String) {
    let url = format!("{WS_BASE}/{symbol}@trade");

    loop {
        info!(%symbol, "connecting to trade stream");

        match connect_async(&url).await {
            Ok((ws, _)) => {
                info!(%symbol, "trade stream connected");
                let (_, mut read) = ws.split();

                while let Some(msg) = read.next().await {
                    let msg = match msg {
                        Ok(m) => m,
                        Err(e) => {
                            warn!(%symbol, error = %e, "websocket error, reconnecting");
                            break;
                        }
                    };

                    if !msg.is_text() {
                        continue;
                    }
                    let Ok(raw) = msg.to_text() else { continue };

                    let Ok(trade) = serde_json::from_str::<TradeEvent>(raw) else {
                        continue;
                    };
                    if trade.event != "trade" {
                        continue;
                    }

                    let Some(tick) = trade.into_tick(&symbol) else {
                        continue;
                    };

                    debug!(%symbol, price = tick.price, qty = tick.qty, "trade");

                    if let Err(e) = store.append(&tick).await {
                        error!(%symbol, error = %e, "failed to persist tick");
                    }
                }
            }
            Err(e) => {
                error!(%symbol, error = %e, "connection failed");
            }
        }

        tokio::time::sleep(RECONNECT_DELAY).await;
    }
}
