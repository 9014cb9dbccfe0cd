//! Cross-series alignment.

use crate::types::{AlignedPoint, AlignedSeries, PriceSeries};

/// Inner-join two resampled series on bucket timestamp.
///
/// Both inputs are ordered (resampler invariant), so this is a linear
/// two-pointer merge. An empty result is valid and means "no overlap
/// yet"; downstream stages treat it as missing data, not as an error.
pub fn align(series_y: &PriceSeries, series_x: &PriceSeries) -> AlignedSeries {
    let mut aligned = Vec::with_capacity(series_y.len().min(series_x.len()));

    let (mut i, mut j) = (0, 0);
    while i < series_y.len() && j < series_x.len() {
        let (py, px) = (&series_y[i], &series_x[j]);

        if py.ts_ms == px.ts_ms {
            aligned.push(AlignedPoint {
                ts_ms: py.ts_ms,
                y: py.close,
                x: px.close,
            });
            i += 1;
            j += 1;
        } else if py.ts_ms < px.ts_ms {
            i += 1;
        } else {
            j += 1;
        }
    }

    aligned
}
