//! Error types for the nereus-align crate.

/// Error type for all fallible operations in the nereus-align crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AlignError {
    /// Returned when the two input series have different lengths.
    #[error("series length mismatch: x has {x}, y has {y}")]
    LengthMismatch {
        /// Length of the predictor series.
        x: usize,
        /// Length of the response series.
        y: usize,
    },

    /// Returned when smoothing and lagging leave too few overlapping points.
    #[error("insufficient overlap after smoothing/lag: {have} points, need at least {need}")]
    InsufficientOverlap {
        /// Points remaining after smoothing and lagging.
        have: usize,
        /// Configured minimum.
        need: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_mismatch_display() {
        let err = AlignError::LengthMismatch { x: 10, y: 12 };
        assert_eq!(err.to_string(), "series length mismatch: x has 10, y has 12");
    }

    #[test]
    fn insufficient_overlap_display() {
        let err = AlignError::InsufficientOverlap { have: 1, need: 3 };
        assert_eq!(
            err.to_string(),
            "insufficient overlap after smoothing/lag: 1 points, need at least 3"
        );
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<AlignError>();
    }
}
