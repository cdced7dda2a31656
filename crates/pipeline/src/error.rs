//! Error types for the nereus-pipeline crate.

/// Error type for all fallible operations in the nereus-pipeline crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PipelineError {
    /// Returned when the predictor and response collections differ in size.
    #[error("member count mismatch: {x} predictor series, {y} response series")]
    MemberCountMismatch {
        /// Number of predictor series.
        x: usize,
        /// Number of response series.
        y: usize,
    },

    /// Returned when a member exists in one collection but not the other.
    #[error("member '{member}' not found in {location} series")]
    MissingMember {
        /// The unmatched member id.
        member: String,
        /// Which collection lacked it (`"predictor"` or `"response"`).
        location: String,
    },

    /// Returned when a member id appears twice in one collection.
    #[error("duplicate member '{member}' in {location} series")]
    DuplicateMember {
        /// The repeated member id.
        member: String,
        /// Which collection repeated it.
        location: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn member_count_mismatch_display() {
        let err = PipelineError::MemberCountMismatch { x: 34, y: 33 };
        assert_eq!(
            err.to_string(),
            "member count mismatch: 34 predictor series, 33 response series"
        );
    }

    #[test]
    fn missing_member_display() {
        let err = PipelineError::MissingMember {
            member: "017".to_string(),
            location: "predictor".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "member '017' not found in predictor series"
        );
    }

    #[test]
    fn duplicate_member_display() {
        let err = PipelineError::DuplicateMember {
            member: "002".to_string(),
            location: "response".to_string(),
        };
        assert_eq!(err.to_string(), "duplicate member '002' in response series");
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<PipelineError>();
    }
}
