use crate::rolling;

/// Number of standard deviations each spread value sits from its rolling
/// mean.
///
/// Undefined wherever the rolling stats are undefined (unfull window) or
/// the window is flat (`std == 0`). The sentinel keeps NaN and infinity
/// out of the alert path entirely: "no signal yet" is never a number.
pub fn zscore_series(spread: &[f64], stats: &[Option<(f64, f64)>]) -> Vec<Option<f64>> {
    spread
        .iter()
        .zip(stats)
        .map(|(value, stat)| match stat {
            Some((mean, std)) if *std > 0.0 => Some((value - mean) / std),
            _ => None,
        })
        .collect()
}

/// Convenience wrapper: rolling stats plus z-score in one pass.
pub fn from_spread(spread: &[f64], window: usize) -> Vec<Option<f64>> {
    let stats = rolling::mean_std(spread, window);
    zscore_series(spread, &stats)
}
