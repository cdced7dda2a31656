//! Statistical helpers for ensemble correlation analysis.
//!
//! Plain slice-in, value-out functions for the moments and correlation
//! measures the pipeline needs, plus the autocorrelation-corrected
//! significance test, [`corrected_pearson`]. Degenerate inputs (too short,
//! zero variance) yield `None` rather than NaN so callers can distinguish
//! "undefined" from "computed".

mod regression;
mod significance;

pub use regression::ols_slope;
pub use significance::{CorrelationTest, corrected_pearson, effective_sample_size};

/// Arithmetic mean of a slice. Returns 0.0 if empty.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Sample variance with N-1 denominator.
/// Returns 0.0 if fewer than 2 elements.
pub fn variance(data: &[f64]) -> f64 {
    let n = data.len();
    if n < 2 {
        return 0.0;
    }
    let nf = n as f64;
    let mean = data.iter().sum::<f64>() / nf;
    data.iter().map(|&x| (x - mean) * (x - mean)).sum::<f64>() / (nf - 1.0)
}

/// Sample standard deviation with N-1 denominator.
/// Returns 0.0 if fewer than 2 elements.
pub fn sd(data: &[f64]) -> f64 {
    variance(data).sqrt()
}

/// Pearson correlation coefficient.
///
/// Filters to indices where both `x[i]` and `y[i]` are finite.
/// Returns `None` if fewer than 3 finite pairs or if either series is
/// constant (zero denominator).
pub fn pearson_correlation(x: &[f64], y: &[f64]) -> Option<f64> {
    let pairs: Vec<(f64, f64)> = x
        .iter()
        .zip(y.iter())
        .filter(|(xi, yi)| xi.is_finite() && yi.is_finite())
        .map(|(xi, yi)| (*xi, *yi))
        .collect();

    if pairs.len() < 3 {
        return None;
    }

    let n = pairs.len() as f64;
    let mx: f64 = pairs.iter().map(|(xi, _)| xi).sum::<f64>() / n;
    let my: f64 = pairs.iter().map(|(_, yi)| yi).sum::<f64>() / n;

    let mut sum_xy = 0.0;
    let mut sum_xx = 0.0;
    let mut sum_yy = 0.0;
    for &(xi, yi) in &pairs {
        let dx = xi - mx;
        let dy = yi - my;
        sum_xy += dx * dy;
        sum_xx += dx * dx;
        sum_yy += dy * dy;
    }

    let denom = (sum_xx * sum_yy).sqrt();
    if denom == 0.0 {
        return None;
    }

    Some(sum_xy / denom)
}

/// Lag-1 autocorrelation of a series.
///
/// Mean-centers the data and returns the ratio of the lag-1 autocovariance
/// to the lag-0 autocovariance. Returns 0.0 for series shorter than 2 or
/// with zero variance. The value is not clamped: a negatively
/// autocorrelated series legitimately reports a negative coefficient and
/// the effective-sample-size clamp handles the consequences.
pub fn lag1_autocorrelation(data: &[f64]) -> f64 {
    let n = data.len();
    if n < 2 {
        return 0.0;
    }
    let mean = data.iter().sum::<f64>() / n as f64;
    let centered: Vec<f64> = data.iter().map(|&x| x - mean).collect();

    let sum_sq: f64 = centered.iter().map(|&x| x * x).sum();
    if sum_sq < f64::EPSILON {
        return 0.0;
    }

    let sum_cross: f64 = centered.windows(2).map(|w| w[0] * w[1]).sum();
    sum_cross / sum_sq
}
