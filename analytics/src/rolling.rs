//! Trailing-window statistics.
//!
//! Every function here follows the same fill rule: a window of `n`
//! requires exactly `n` samples, so the first `n - 1` output positions
//! are undefined. Sliding windows, never expanding ones.

use market::types::AlignedSeries;

/// Guard for flat windows in the correlation denominator.
const VAR_EPS: f64 = 1e-12;

/// Rolling mean and sample standard deviation (Bessel-corrected,
/// divisor `n - 1`) over trailing windows of exactly `n` samples.
pub fn mean_std(series: &[f64], n: usize) -> Vec<Option<(f64, f64)>> {
    let mut out = vec![None; series.len()];
    if n < 2 || series.len() < n {
        return out;
    }

    for i in (n - 1)..series.len() {
        let window = &series[i + 1 - n..=i];

        let mean = window.iter().sum::<f64>() / n as f64;
        let ss = window
            .iter()
            .map(|v| {
                let d = v - mean;
                d * d
            })
            .sum::<f64>();
        let std = (ss / (n - 1) as f64).sqrt();

        out[i] = Some((mean, std));
    }

    out
}

/// Rolling Pearson correlation of the two aligned legs over trailing
/// windows of exactly `n` pairs.
///
/// Undefined while the window is unfull and wherever either leg is flat
/// across the window (zero variance leaves the coefficient meaningless).
pub fn corr(aligned: &AlignedSeries, n: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; aligned.len()];
    if n < 2 || aligned.len() < n {
        return out;
    }

    for i in (n - 1)..aligned.len() {
        let window = &aligned[i + 1 - n..=i];
        let inv_n = 1.0 / n as f64;

        let mean_y = window.iter().map(|p| p.y).sum::<f64>() * inv_n;
        let mean_x = window.iter().map(|p| p.x).sum::<f64>() * inv_n;

        let mut cov = 0.0;
        let mut var_y = 0.0;
        let mut var_x = 0.0;
        for p in window {
            let dy = p.y - mean_y;
            let dx = p.x - mean_x;
            cov += dy * dx;
            var_y += dy * dy;
            var_x += dx * dx;
        }

        if var_y < VAR_EPS || var_x < VAR_EPS {
            continue;
        }

        out[i] = Some(cov / (var_y * var_x).sqrt());
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use market::types::AlignedPoint;

    fn aligned(points: &[(f64, f64)]) -> AlignedSeries {
        points
            .iter()
            .enumerate()
            .map(|(i, &(y, x))| AlignedPoint {
                ts_ms: i as i64 * 60_000,
                y,
                x,
            })
            .collect()
    }

    #[test]
    fn leading_positions_are_undefined() {
        let series = vec![1.0, 2.0, 3.0, 4.0, 5.0];

        let stats = mean_std(&series, 3);

        assert!(stats[0].is_none());
        assert!(stats[1].is_none());
        for stat in &stats[2..] {
            assert!(stat.is_some());
        }
    }

    #[test]
    fn window_slides_instead_of_expanding() {
        // trailing 4 of [0, 0, 0, 3]: mean 0.75, sample std 1.5
        let series = vec![0.0, 0.0, 0.0, 0.0, 3.0];

        let stats = mean_std(&series, 4);

        let (mean, std) = stats[4].unwrap();
        assert!((mean - 0.75).abs() < 1e-9);
        assert!((std - 1.5).abs() < 1e-9);
    }

    #[test]
    fn flat_window_has_zero_std() {
        let series = vec![2.0, 2.0, 2.0, 2.0];

        let (mean, std) = mean_std(&series, 4)[3].unwrap();

        assert!((mean - 2.0).abs() < 1e-12);
        assert_eq!(std, 0.0);
    }

    #[test]
    fn series_shorter_than_window_is_all_undefined() {
        let series = vec![1.0, 2.0];

        assert!(mean_std(&series, 5).iter().all(Option::is_none));
    }

    #[test]
    fn perfectly_linear_legs_correlate_to_one() {
        let series = aligned(&[(300.0, 100.0), (303.0, 101.0), (306.0, 102.0), (309.0, 103.0)]);

        let corr = corr(&series, 4);

        assert!(corr[..3].iter().all(Option::is_none));
        assert!((corr[3].unwrap() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn inverse_legs_correlate_to_minus_one() {
        let series = aligned(&[(310.0, 100.0), (307.0, 101.0), (304.0, 102.0), (301.0, 103.0)]);

        let corr = corr(&series, 4);

        assert!((corr[3].unwrap() + 1.0).abs() < 1e-9);
    }

    #[test]
    fn flat_leg_makes_correlation_undefined() {
        let series = aligned(&[(300.0, 100.0), (303.0, 100.0), (306.0, 100.0), (309.0, 100.0)]);

        assert!(corr(&series, 4).iter().all(Option::is_none));
    }
}
