use market::types::Timeframe;
use thiserror::Error;

/// Default rolling window length for z-score and correlation.
///
/// Chosen independently of the timeframe: a shorter timeframe simply
/// covers a shorter wall-clock span with the same sample count.
pub const DEFAULT_WINDOW: usize = 20;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A window of 1 would make the sample-std divisor zero, so no
    /// position could ever be defined.
    #[error("rolling window must be at least 2 samples, got {0}")]
    WindowTooSmall(usize),

    #[error("alert threshold must be positive and finite, got {0}")]
    InvalidThreshold(f64),
}

/// Immutable per-refresh configuration.
///
/// Validated once at the boundary; the pipeline itself never sees an
/// invalid combination. Changing any field simply takes effect on the
/// next refresh, since no pipeline state depends on it.
#[derive(Clone, Copy, Debug)]
pub struct AnalyticsConfig {
    pub timeframe: Timeframe,
    pub window: usize,
    pub alert_threshold: f64,
}

impl AnalyticsConfig {
    pub fn new(
        timeframe: Timeframe,
        window: usize,
        alert_threshold: f64,
    ) -> Result<Self, ConfigError> {
        if window < 2 {
            return Err(ConfigError::WindowTooSmall(window));
        }
        if !alert_threshold.is_finite() || alert_threshold <= 0.0 {
            return Err(ConfigError::InvalidThreshold(alert_threshold));
        }

        Ok(Self {
            timeframe,
            window,
            alert_threshold,
        })
    }
}
