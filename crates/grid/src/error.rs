//! Error types for the nereus-grid crate.

/// Error type for all fallible operations in the nereus-grid crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GridError {
    /// Returned when a region code is not one of the four known systems.
    #[error("unknown upwelling system '{name}': expected one of CalCS, CanCS, BenCS, HumCS")]
    UnknownRegion {
        /// The unrecognized region code.
        name: String,
    },

    /// Returned when a geometry field does not match the grid shape.
    #[error("{field} shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        /// Name of the offending field.
        field: &'static str,
        /// Expected `(nlat, nlon)` shape.
        expected: (usize, usize),
        /// Actual `(nlat, nlon)` shape.
        got: (usize, usize),
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_region_display() {
        let err = GridError::UnknownRegion {
            name: "XxCS".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unknown upwelling system 'XxCS': expected one of CalCS, CanCS, BenCS, HumCS"
        );
    }

    #[test]
    fn shape_mismatch_display() {
        let err = GridError::ShapeMismatch {
            field: "TAREA",
            expected: (5, 8),
            got: (5, 7),
        };
        assert_eq!(
            err.to_string(),
            "TAREA shape mismatch: expected (5, 8), got (5, 7)"
        );
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<GridError>();
    }
}
