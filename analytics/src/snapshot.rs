//! Full-refresh pipeline assembly.
//!
//! `compute_snapshot` is the single entry point the runner calls: raw
//! ticks in, fully recomputed statistics out. Every stage is a pure
//! function and nothing survives between refreshes; the hedge ratio in
//! particular is re-estimated from scratch each time, never carried
//! forward.

use market::align::align;
use market::resample::resample;
use market::types::{AlignedSeries, PriceSeries, Tick};
use tracing::debug;

use crate::adf::{self, AdfResult};
use crate::alert::{self, AlertState};
use crate::config::AnalyticsConfig;
use crate::hedge::{self, HedgeRatio};
use crate::{rolling, spread, zscore};

/// One refresh worth of pipeline output.
///
/// Per-point undefined values are explicit `None`s so consumers render
/// gaps instead of fabricating zeros.
#[derive(Clone, Debug, Default)]
pub struct Snapshot {
    pub series_y: PriceSeries,
    pub series_x: PriceSeries,
    pub aligned: AlignedSeries,
    pub hedge: Option<HedgeRatio>,
    /// Aligned 1:1 with `aligned`; `None` when the hedge is undefined.
    pub spread: Option<Vec<f64>>,
    pub zscore: Vec<Option<f64>>,
    pub correlation: Vec<Option<f64>>,
    pub adf: Option<AdfResult>,
    pub alert: AlertState,
}

/// Recompute every stage from raw ticks.
pub fn compute_snapshot(cfg: &AnalyticsConfig, ticks_y: &[Tick], ticks_x: &[Tick]) -> Snapshot {
    let series_y = resample(ticks_y, cfg.timeframe);
    let series_x = resample(ticks_x, cfg.timeframe);
    let aligned = align(&series_y, &series_x);

    let hedge = hedge::estimate(&aligned);
    let spread = spread::compute(&aligned, hedge);

    let zscore = match &spread {
        Some(spread) => zscore::from_spread(spread, cfg.window),
        None => vec![None; aligned.len()],
    };

    let correlation = rolling::corr(&aligned, cfg.window);

    let adf = spread.as_deref().and_then(adf::adf_test);

    let latest_zscore = aligned
        .iter()
        .zip(&zscore)
        .rev()
        .find_map(|(point, z)| z.map(|z| (point.ts_ms, z)));
    let alert = alert::evaluate(latest_zscore, cfg.alert_threshold);

    debug!(
        aligned_len = aligned.len(),
        hedge_defined = hedge.is_some(),
        breached = alert.breached,
        "snapshot recomputed"
    );

    Snapshot {
        series_y,
        series_x,
        aligned,
        hedge,
        spread,
        zscore,
        correlation,
        adf,
        alert,
    }
}
