use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A single trade event as persisted by ingestion.
///
/// Ticks are append-only and may arrive boundedly out of order
/// (network jitter); duplicate timestamps are possible and resolved
/// by the resampler's bucket rule.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub symbol: String,
    pub price: f64,
    pub qty: f64,
    pub ts_ms: i64,
}

/// The two legs of a pairs trade. `y` is regressed on `x`.
#[derive(Debug, Clone, Eq, PartialEq, std::hash::Hash)]
pub struct Pair {
    pub y: String,
    pub x: String,
}

impl Pair {
    pub fn new(y: String, x: String) -> Self {
        Self { y, x }
    }

    pub fn id(&self) -> String {
        format!("{}/{}", self.y, self.x)
    }
}

#[derive(Debug, Error)]
#[error("invalid pair '{0}', expected <y_symbol>/<x_symbol>")]
pub struct ParsePairError(String);

impl FromStr for Pair {
    type Err = ParsePairError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((y, x)) if !y.is_empty() && !x.is_empty() => {
                Ok(Pair::new(y.to_string(), x.to_string()))
            }
            _ => Err(ParsePairError(s.to_string())),
        }
    }
}

/// Resampling granularity. Selected per query; raw ticks are never
/// pre-aggregated, so any timeframe can be derived from the same store.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Timeframe {
    S1,
    #[default]
    M1,
    M5,
}

impl Timeframe {
    pub const fn width_ms(self) -> i64 {
        match self {
            Timeframe::S1 => 1_000,
            Timeframe::M1 => 60_000,
            Timeframe::M5 => 300_000,
        }
    }

    /// Start of the bucket containing `ts_ms`.
    pub const fn bucket(self, ts_ms: i64) -> i64 {
        let width = self.width_ms();
        ts_ms.div_euclid(width) * width
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Timeframe::S1 => "1s",
            Timeframe::M1 => "1m",
            Timeframe::M5 => "5m",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Error)]
#[error("invalid timeframe '{0}', expected one of: 1s, 1m, 5m")]
pub struct ParseTimeframeError(String);

impl FromStr for Timeframe {
    type Err = ParseTimeframeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1s" => Ok(Timeframe::S1),
            "1m" => Ok(Timeframe::M1),
            "5m" => Ok(Timeframe::M5),
            other => Err(ParseTimeframeError(other.to_string())),
        }
    }
}

/// One bucket of a resampled series: bucket start and the close price
/// (last trade observed inside the bucket).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PricePoint {
    pub ts_ms: i64,
    pub close: f64,
}

/// Resampled close series for one symbol at one timeframe.
///
/// Invariant: strictly increasing bucket timestamps, no duplicates.
pub type PriceSeries = Vec<PricePoint>;

/// One timestamp present in both legs' price series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AlignedPoint {
    pub ts_ms: i64,
    pub y: f64,
    pub x: f64,
}

/// Inner join of two price series on bucket timestamps.
///
/// Invariant: monotonic timestamps, `len <= min(len_y, len_x)`.
pub type AlignedSeries = Vec<AlignedPoint>;
