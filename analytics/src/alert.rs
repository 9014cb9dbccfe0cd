//! Threshold alerting on the latest z-score.

/// Current alert signal, derived fresh on every refresh. Not a history:
/// each refresh re-evaluates from scratch, edge-triggered, with no
/// hysteresis or debounce that could mask a genuine breach.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AlertState {
    pub breached: bool,
    /// `|z|` of the latest defined z-score, if any.
    pub magnitude: Option<f64>,
    /// Bucket timestamp the latest defined z-score belongs to.
    pub ts_ms: Option<i64>,
}

/// Compare the latest defined z-score against the threshold.
///
/// An undefined z-score can never raise the alert: missing data fails
/// safe to no-alert. A magnitude exactly at the threshold does not
/// breach; only a strict excess does.
pub fn evaluate(latest_zscore: Option<(i64, f64)>, threshold: f64) -> AlertState {
    match latest_zscore {
        Some((ts_ms, z)) => AlertState {
            breached: z.abs() > threshold,
            magnitude: Some(z.abs()),
            ts_ms: Some(ts_ms),
        },
        None => AlertState::default(),
    }
}
