use market::types::AlignedSeries;

use crate::hedge::HedgeRatio;

/// Market-neutral spread, aligned 1:1 with the input series:
///
/// ```text
/// spread_t = y_t - slope * x_t
/// ```
///
/// The intercept stays out of the traded spread. An undefined hedge
/// ratio propagates (no hedge, no spread) rather than defaulting to a
/// zero spread.
pub fn compute(aligned: &AlignedSeries, hedge: Option<HedgeRatio>) -> Option<Vec<f64>> {
    let hedge = hedge?;
    Some(aligned.iter().map(|p| p.y - hedge.slope * p.x).collect())
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
    fn perfectly_hedged_series_has_zero_spread() {
        let series = aligned(&[(300.0, 100.0), (303.0, 101.0), (306.0, 102.0), (309.0, 103.0)]);
        let hedge = HedgeRatio { slope: 3.0, intercept: 0.0 };

        let spread = compute(&series, Some(hedge)).unwrap();

        assert_eq!(spread.len(), 4);
        for value in spread {
            assert!(value.abs() < 1e-9);
        }
    }

    #[test]
    fn deviation_shows_up_in_the_spread() {
        let series = aligned(&[(309.0, 103.0), (315.0, 104.0)]);
        let hedge = HedgeRatio { slope: 3.0, intercept: 0.0 };

        let spread = compute(&series, Some(hedge)).unwrap();

        assert!((spread[0] - 0.0).abs() < 1e-9);
        assert!((spread[1] - 3.0).abs() < 1e-9);
    }

    #[test]
    fn undefined_hedge_propagates() {
        let series = aligned(&[(300.0, 100.0), (303.0, 101.0)]);

        assert!(compute(&series, None).is_none());
    }
}
