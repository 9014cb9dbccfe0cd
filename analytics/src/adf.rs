//! Augmented Dickey-Fuller stationarity test.
//!
//! Runs the constant-plus-one-lag ADF regression over the most recent
//! portion of the spread:
//!
//! ```text
//! dy_t = alpha + gamma * y_{t-1} + phi * dy_{t-1} + e_t
//! ```
//!
//! The test statistic is the t-ratio of `gamma`; under the unit-root
//! null it follows the Dickey-Fuller distribution, so the p-value comes
//! from tabulated critical values (constant case) interpolated by sample
//! size. Lower p-values mean stronger evidence of mean reversion.
//!
//! The result is purely informational and gates nothing downstream.

/// Cap on how far back the test looks, so refreshes stay cheap on a
/// growing history.
pub const MAX_LOOKBACK: usize = 3_000;

/// Below this many samples the regression has no meaningful power and
/// the result is undefined.
pub const MIN_SAMPLES: usize = 20;

/// Singular-design guard for the normal-equations determinant.
const DET_EPS: f64 = 1e-12;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AdfResult {
    pub statistic: f64,
    pub p_value: f64,
}

/// Run the test over the trailing `MAX_LOOKBACK` samples of `spread`.
///
/// Returns `None` when fewer than `MIN_SAMPLES` samples are available or
/// the regression is degenerate (e.g. a perfectly flat spread).
pub fn adf_test(spread: &[f64]) -> Option<AdfResult> {
    let series = &spread[spread.len().saturating_sub(MAX_LOOKBACK)..];
    if series.len() < MIN_SAMPLES {
        return None;
    }

    // First differences: diffs[t] = series[t + 1] - series[t].
    let diffs: Vec<f64> = series.windows(2).map(|w| w[1] - w[0]).collect();

    // One observation per t in 1..diffs.len():
    //   response   dy_t      = diffs[t]
    //   regressors [1, y_{t-1}, dy_{t-1}] = [1, series[t], diffs[t - 1]]
    let n_obs = diffs.len() - 1;

    // The design is only three columns wide, so accumulate X'X and X'y
    // directly instead of materializing the matrix.
    let mut xtx = [[0.0f64; 3]; 3];
    let mut xty = [0.0f64; 3];
    for t in 1..diffs.len() {
        let row = [1.0, series[t], diffs[t - 1]];
        for a in 0..3 {
            xty[a] += row[a] * diffs[t];
            for b in 0..3 {
                xtx[a][b] += row[a] * row[b];
            }
        }
    }

    let inv = invert3(&xtx)?;
    let beta = [
        inv[0][0] * xty[0] + inv[0][1] * xty[1] + inv[0][2] * xty[2],
        inv[1][0] * xty[0] + inv[1][1] * xty[1] + inv[1][2] * xty[2],
        inv[2][0] * xty[0] + inv[2][1] * xty[1] + inv[2][2] * xty[2],
    ];

    let mut rss = 0.0;
    for t in 1..diffs.len() {
        let fit = beta[0] + beta[1] * series[t] + beta[2] * diffs[t - 1];
        let e = diffs[t] - fit;
        rss += e * e;
    }

    let dof = n_obs.checked_sub(3).filter(|d| *d > 0)?;
    let sigma2 = rss / dof as f64;
    let se = (sigma2 * inv[1][1]).sqrt();
    if !se.is_finite() || se <= 0.0 {
        return None;
    }

    let statistic = beta[1] / se;
    let p_value = p_from_statistic(statistic, n_obs);

    Some(AdfResult { statistic, p_value })
}

/// Invert a symmetric 3x3 via the adjugate. `None` on a singular design
/// (constant spread makes the `y_{t-1}` column collinear with the
/// intercept).
fn invert3(m: &[[f64; 3]; 3]) -> Option<[[f64; 3]; 3]> {
    let cof = [
        [
            m[1][1] * m[2][2] - m[1][2] * m[2][1],
            m[1][2] * m[2][0] - m[1][0] * m[2][2],
            m[1][0] * m[2][1] - m[1][1] * m[2][0],
        ],
        [
            m[0][2] * m[2][1] - m[0][1] * m[2][2],
            m[0][0] * m[2][2] - m[0][2] * m[2][0],
            m[0][1] * m[2][0] - m[0][0] * m[2][1],
        ],
        [
            m[0][1] * m[1][2] - m[0][2] * m[1][1],
            m[0][2] * m[1][0] - m[0][0] * m[1][2],
            m[0][0] * m[1][1] - m[0][1] * m[1][0],
        ],
    ];

    let det = m[0][0] * cof[0][0] + m[0][1] * cof[0][1] + m[0][2] * cof[0][2];
    if det.abs() < DET_EPS {
        return None;
    }

    let mut inv = [[0.0f64; 3]; 3];
    for a in 0..3 {
        for b in 0..3 {
            // adjugate = transposed cofactors
            inv[a][b] = cof[b][a] / det;
        }
    }
    Some(inv)
}

/// Dickey-Fuller critical values for the constant case, by sample size:
/// (n, 1%, 5%, 10%).
const CRITS: &[(usize, f64, f64, f64)] = &[
    (25, -3.75, -3.00, -2.63),
    (50, -3.58, -2.93, -2.60),
    (100, -3.51, -2.89, -2.58),
    (250, -3.46, -2.88, -2.57),
    (500, -3.44, -2.87, -2.57),
];

/// Map the t-ratio to an approximate p-value: piecewise-linear through
/// the tabulated quantiles plus a loose anchor at statistic zero.
fn p_from_statistic(statistic: f64, n: usize) -> f64 {
    let (c1, c5, c10) = interpolate_crits(n);

    let anchors = [(c1, 0.01), (c5, 0.05), (c10, 0.10), (0.0, 0.95)];

    if statistic <= anchors[0].0 {
        return 0.005;
    }
    for w in anchors.windows(2) {
        let (s1, p1) = w[0];
        let (s2, p2) = w[1];
        if statistic <= s2 {
            let t = (statistic - s1) / (s2 - s1);
            return p1 + t * (p2 - p1);
        }
    }
    0.99
}

fn interpolate_crits(n: usize) -> (f64, f64, f64) {
    if n <= CRITS[0].0 {
        return (CRITS[0].1, CRITS[0].2, CRITS[0].3);
    }
    for w in CRITS.windows(2) {
        let (n1, c1_1, c5_1, c10_1) = w[0];
        let (n2, c1_2, c5_2, c10_2) = w[1];
        if n >= n1 && n <= n2 {
            let t = (n - n1) as f64 / (n2 - n1) as f64;
            let lerp = |a: f64, b: f64| a + t * (b - a);
            return (lerp(c1_1, c1_2), lerp(c5_1, c5_2), lerp(c10_1, c10_2));
        }
    }
    let last = CRITS.last().unwrap();
    (last.1, last.2, last.3)
}
