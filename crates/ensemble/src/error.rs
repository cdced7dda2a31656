//! Error types for the nereus-ensemble crate.

/// Error type for all fallible operations in the nereus-ensemble crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum EnsembleError {
    /// Returned when an ensemble is constructed with no members.
    #[error("ensemble contains no members")]
    NoMembers,

    /// Returned when member ids and member fields differ in count.
    #[error("member count mismatch: {ids} ids, {fields} fields")]
    MemberCountMismatch {
        /// Number of member identifiers.
        ids: usize,
        /// Number of member field arrays.
        fields: usize,
    },

    /// Returned when a member identifier appears more than once.
    #[error("duplicate member id '{id}'")]
    DuplicateMember {
        /// The repeated identifier.
        id: String,
    },

    /// Returned when a member's field shape differs from the first member's.
    #[error("member '{member}' shape mismatch: expected {expected:?}, got {got:?}")]
    MemberShapeMismatch {
        /// The offending member.
        member: String,
        /// Expected `(time, nlat, nlon)` shape.
        expected: (usize, usize, usize),
        /// Actual shape.
        got: (usize, usize, usize),
    },

    /// Returned when a mask or area field does not match the grid shape.
    #[error("grid shape mismatch: expected {expected:?}, got {got:?}")]
    GridShapeMismatch {
        /// Expected `(nlat, nlon)` shape.
        expected: (usize, usize),
        /// Actual shape.
        got: (usize, usize),
    },

    /// Returned when aggregation finds no valid cells at some time step.
    ///
    /// A zero-area region almost always means the mask upstream went wrong,
    /// so this is an error rather than a silent NaN.
    #[error("empty region for member '{member}' at time step {time}: no valid cells to average")]
    EmptyRegion {
        /// The member being aggregated.
        member: String,
        /// Time index at which the region was empty.
        time: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_members_display() {
        assert_eq!(
            EnsembleError::NoMembers.to_string(),
            "ensemble contains no members"
        );
    }

    #[test]
    fn member_count_mismatch_display() {
        let err = EnsembleError::MemberCountMismatch { ids: 3, fields: 2 };
        assert_eq!(err.to_string(), "member count mismatch: 3 ids, 2 fields");
    }

    #[test]
    fn duplicate_member_display() {
        let err = EnsembleError::DuplicateMember {
            id: "012".to_string(),
        };
        assert_eq!(err.to_string(), "duplicate member id '012'");
    }

    #[test]
    fn empty_region_display() {
        let err = EnsembleError::EmptyRegion {
            member: "004".to_string(),
            time: 17,
        };
        assert_eq!(
            err.to_string(),
            "empty region for member '004' at time step 17: no valid cells to average"
        );
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<EnsembleError>();
    }
}
