//! Correlation run configuration.

use nereus_align::{AlignConfig, DEFAULT_MIN_OVERLAP};

/// Configuration for a per-ensemble correlation run.
///
/// # Example
///
/// ```
/// use nereus_pipeline::CorrelateConfig;
///
/// let config = CorrelateConfig::new().with_lag(3).with_smooth(12);
/// assert_eq!(config.lag(), 3);
/// assert_eq!(config.smooth(), 12);
/// ```
#[derive(Debug, Clone)]
pub struct CorrelateConfig {
    /// Steps by which the response lags the predictor (0 = none).
    lag: usize,
    /// Moving-average window in time steps (0 = none).
    smooth: usize,
    /// Minimum overlap length required after smoothing and lagging.
    min_overlap: usize,
}

impl CorrelateConfig {
    /// Creates a configuration with no lag, no smoothing, and the default
    /// minimum overlap.
    pub fn new() -> Self {
        Self {
            lag: 0,
            smooth: 0,
            min_overlap: DEFAULT_MIN_OVERLAP,
        }
    }

    /// Sets the lag in time steps.
    pub fn with_lag(mut self, lag: usize) -> Self {
        self.lag = lag;
        self
    }

    /// Sets the moving-average window length.
    pub fn with_smooth(mut self, smooth: usize) -> Self {
        self.smooth = smooth;
        self
    }

    /// Sets the minimum overlap length.
    pub fn with_min_overlap(mut self, min_overlap: usize) -> Self {
        self.min_overlap = min_overlap;
        self
    }

    /// Returns the lag.
    pub fn lag(&self) -> usize {
        self.lag
    }

    /// Returns the smoothing window length.
    pub fn smooth(&self) -> usize {
        self.smooth
    }

    /// Returns the minimum overlap length.
    pub fn min_overlap(&self) -> usize {
        self.min_overlap
    }

    pub(crate) fn align_config(&self) -> AlignConfig {
        AlignConfig::new()
            .with_smooth(self.smooth)
            .with_lag(self.lag)
            .with_min_overlap(self.min_overlap)
    }
}

impl Default for CorrelateConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = CorrelateConfig::default();
        assert_eq!(config.lag(), 0);
        assert_eq!(config.smooth(), 0);
        assert_eq!(config.min_overlap(), DEFAULT_MIN_OVERLAP);
    }

    #[test]
    fn builder_chaining() {
        let config = CorrelateConfig::new()
            .with_lag(6)
            .with_smooth(12)
            .with_min_overlap(10);
        assert_eq!(config.lag(), 6);
        assert_eq!(config.smooth(), 12);
        assert_eq!(config.min_overlap(), 10);
    }

    #[test]
    fn align_config_carries_all_fields() {
        let align = CorrelateConfig::new()
            .with_lag(2)
            .with_smooth(3)
            .align_config();
        assert_eq!(align.lag(), 2);
        assert_eq!(align.smooth(), 3);
        assert_eq!(align.min_overlap(), DEFAULT_MIN_OVERLAP);
    }
}
