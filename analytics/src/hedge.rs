//! Ordinary-least-squares hedge ratio.
//!
//! Fits `y = intercept + slope * x` over the **full** aligned history,
//! with no trailing-window truncation. The fit is recomputed from scratch on
//! every refresh and never smoothed against the previous value.

use market::types::AlignedSeries;

/// Guard against a degenerate regressor. Compared against the summed
/// squared deviations of `x`, so a constant leg fails cleanly instead
/// of dividing by (almost) zero.
const VAR_EPS: f64 = 1e-9;

/// Slope and intercept of the OLS fit of `y` on `x`.
///
/// Only the slope enters the traded spread; the intercept is reported
/// for inspection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HedgeRatio {
    pub slope: f64,
    pub intercept: f64,
}

/// Estimate the hedge ratio over all currently aligned points.
///
/// Returns `None` for fewer than two points or a zero-variance
/// regressor; downstream stages treat that as "no spread available
/// yet", never as a fatal error.
pub fn estimate(aligned: &AlignedSeries) -> Option<HedgeRatio> {
    let n = aligned.len();
    if n < 2 {
        return None;
    }

    let inv_n = 1.0 / n as f64;
    let mean_x = aligned.iter().map(|p| p.x).sum::<f64>() * inv_n;
    let mean_y = aligned.iter().map(|p| p.y).sum::<f64>() * inv_n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    for p in aligned {
        let dx = p.x - mean_x;
        cov += dx * (p.y - mean_y);
        var_x += dx * dx;
    }

    if var_x < VAR_EPS {
        return None;
    }

    let slope = cov / var_x;
    Some(HedgeRatio {
        slope,
        intercept: mean_y - slope * mean_x,
    })
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
    fn perfect_linear_relation_recovers_slope_and_intercept() {
        let series = aligned(&[(300.0, 100.0), (303.0, 101.0), (306.0, 102.0), (309.0, 103.0)]);

        let hedge = estimate(&series).unwrap();

        assert!((hedge.slope - 3.0).abs() < 1e-9);
        assert!(hedge.intercept.abs() < 1e-6);
    }

    #[test]
    fn affine_relation_recovers_intercept() {
        let series = aligned(&[(25.0, 10.0), (27.0, 11.0), (29.0, 12.0), (31.0, 13.0)]);

        let hedge = estimate(&series).unwrap();

        assert!((hedge.slope - 2.0).abs() < 1e-9);
        assert!((hedge.intercept - 5.0).abs() < 1e-6);
    }

    #[test]
    fn estimation_is_deterministic() {
        let series = aligned(&[(300.0, 100.0), (305.0, 101.5), (302.0, 100.7), (309.0, 103.1)]);

        let first = estimate(&series).unwrap();
        let second = estimate(&series).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn undefined_below_two_points() {
        assert!(estimate(&aligned(&[])).is_none());
        assert!(estimate(&aligned(&[(300.0, 100.0)])).is_none());
    }

    #[test]
    fn undefined_for_constant_regressor() {
        let series = aligned(&[(300.0, 100.0), (303.0, 100.0), (306.0, 100.0)]);

        assert!(estimate(&series).is_none());
    }
}
