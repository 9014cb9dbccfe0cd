//! Flat tabular export of a snapshot.
//!
//! One row per aligned timestamp, one column per series. Undefined
//! values serialize as empty fields (never as zero), so a re-parse
//! reproduces both the numbers and the gaps exactly.

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use crate::snapshot::Snapshot;

/// One aligned timestamp of the snapshot, flattened for CSV.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub ts_ms: i64,
    pub y_close: f64,
    pub x_close: f64,
    pub spread: Option<f64>,
    pub zscore: Option<f64>,
    pub correlation: Option<f64>,
}

/// Flatten the per-aligned-point series into rows.
pub fn rows(snapshot: &Snapshot) -> Vec<Row> {
    snapshot
        .aligned
        .iter()
        .enumerate()
        .map(|(i, point)| Row {
            ts_ms: point.ts_ms,
            y_close: point.y,
            x_close: point.x,
            spread: snapshot.spread.as_ref().map(|s| s[i]),
            zscore: snapshot.zscore[i],
            correlation: snapshot.correlation[i],
        })
        .collect()
}

pub fn write_csv<W: Write>(writer: W, snapshot: &Snapshot) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows(snapshot) {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn read_csv<R: Read>(reader: R) -> Result<Vec<Row>, csv::Error> {
    csv::Reader::from_reader(reader).deserialize().collect()
}
