//! Autocorrelation-corrected Pearson significance testing.
//!
//! Smoothed or red-noise series carry far fewer independent observations
//! than their nominal length, so a Student-t test against `N - 2` degrees
//! of freedom overstates confidence badly. Following Bretherton et al.
//! (1999), the nominal count is replaced by an effective sample size
//! derived from the lag-1 autocorrelations of both series before the
//! t-test is evaluated.

use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::{lag1_autocorrelation, pearson_correlation};

/// Result of an autocorrelation-corrected correlation test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorrelationTest {
    /// Pearson correlation coefficient.
    r: f64,
    /// Two-sided p-value against `n_eff - 2` degrees of freedom.
    p_value: f64,
    /// Effective sample size after the autocorrelation correction.
    n_eff: f64,
}

impl CorrelationTest {
    pub(crate) fn new(r: f64, p_value: f64, n_eff: f64) -> Self {
        Self { r, p_value, n_eff }
    }

    /// Returns the Pearson correlation coefficient.
    pub fn r(&self) -> f64 {
        self.r
    }

    /// Returns the two-sided p-value.
    pub fn p_value(&self) -> f64 {
        self.p_value
    }

    /// Returns the effective sample size.
    pub fn n_eff(&self) -> f64 {
        self.n_eff
    }
}

/// Effective sample size `N (1 - r1 r2) / (1 + r1 r2)`.
///
/// Clamped to at most the nominal count `N` (anti-correlated series cannot
/// claim more observations than exist) and at least 2. With `r1 r2 = 0`
/// this is exactly `N` and the corrected test reduces to the ordinary
/// Pearson significance test.
pub fn effective_sample_size(n: usize, r1: f64, r2: f64) -> f64 {
    let nf = n as f64;
    let rho = r1 * r2;
    let denom = 1.0 + rho;
    let n_eff = if denom.abs() < f64::EPSILON {
        nf
    } else {
        nf * (1.0 - rho) / denom
    };
    n_eff.clamp(2.0, nf.max(2.0))
}

/// Runs the corrected correlation test on two aligned, equal-length series.
///
/// Computes the Pearson `r`, the lag-1 autocorrelation of each series, the
/// effective sample size, and the two-sided p-value from a Student-t
/// distribution with `n_eff - 2` degrees of freedom using
/// `t = r sqrt((n_eff - 2) / (1 - r^2))`.
///
/// Returns `None` when the test is undefined: fewer than 3 points, a
/// constant series, or an effective sample size so small the t-distribution
/// has no degrees of freedom left. Callers record such members as missing
/// rather than failing the run.
pub fn corrected_pearson(x: &[f64], y: &[f64]) -> Option<CorrelationTest> {
    let r = pearson_correlation(x, y)?;
    let n = x.len().min(y.len());
    let r1 = lag1_autocorrelation(x);
    let r2 = lag1_autocorrelation(y);
    let n_eff = effective_sample_size(n, r1, r2);
    let p_value = students_t_p(r, n_eff)?;
    Some(CorrelationTest::new(r, p_value, n_eff))
}

/// Two-sided p-value for a correlation `r` under `n_eff - 2` dof.
fn students_t_p(r: f64, n_eff: f64) -> Option<f64> {
    let dof = n_eff - 2.0;
    if dof <= 0.0 {
        return None;
    }
    let denom = 1.0 - r * r;
    if denom <= 0.0 {
        // |r| = 1: the statistic diverges and the test saturates.
        return Some(0.0);
    }
    let t = r * (dof / denom).sqrt();
    let dist = StudentsT::new(0.0, 1.0, dof).ok()?;
    Some(2.0 * (1.0 - dist.cdf(t.abs())))
}
