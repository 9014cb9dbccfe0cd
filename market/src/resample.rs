//! Tick-to-bar resampling.
//!
//! Converts an irregular stream of trades into a fixed-interval close
//! series. Buckets with no trades are skipped rather than forward-filled,
//! so the output is sparse wherever the market was quiet; the aligner
//! drops unmatched buckets downstream instead of this stage inventing
//! synthetic prices.

use std::collections::btree_map::{BTreeMap, Entry};

use crate::types::{PricePoint, PriceSeries, Tick, Timeframe};

/// Bucket `ticks` by `floor(ts / width) * width` and keep the close of
/// each bucket.
///
/// The close is the price of the tick with the latest timestamp inside
/// the bucket; when several ticks share that timestamp, the one seen
/// last in input order wins. An empty tick set produces an empty series
/// ("no data yet" is a normal steady state, not an error).
///
/// Deterministic and idempotent for a given tick set and timeframe.
pub fn resample(ticks: &[Tick], timeframe: Timeframe) -> PriceSeries {
    // bucket start -> (tick ts, close); BTreeMap keeps buckets ordered
    // no matter how jittered the input is.
    let mut buckets: BTreeMap<i64, (i64, f64)> = BTreeMap::new();

    for tick in ticks {
        let bucket = timeframe.bucket(tick.ts_ms);

        match buckets.entry(bucket) {
            Entry::Vacant(slot) => {
                slot.insert((tick.ts_ms, tick.price));
            }
            Entry::Occupied(mut slot) => {
                // `>=` gives the arrival-order tie-break for equal timestamps.
                if tick.ts_ms >= slot.get().0 {
                    slot.insert((tick.ts_ms, tick.price));
                }
            }
        }
    }

    buckets
        .into_iter()
        .map(|(ts_ms, (_, close))| PricePoint { ts_ms, close })
        .collect()
}
