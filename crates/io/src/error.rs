//! Error types for nereus-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the nereus-io crate.
///
/// Any failure here is fatal for the run: a missing file or variable means
/// the configuration points at the wrong data, and there is no meaningful
/// partial result to degrade to.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required input file does not exist on disk.
    #[error("data not found: {}", path.display())]
    DataNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an error originating from the NetCDF library.
    #[error("netcdf error: {reason}")]
    Netcdf {
        /// Description of the underlying NetCDF failure.
        reason: String,
    },

    /// Returned when a required variable is not present in a file.
    #[error("variable '{name}' not found in {}", path.display())]
    MissingVariable {
        /// Name of the missing variable.
        name: String,
        /// Path to the file that was inspected.
        path: PathBuf,
    },

    /// Returned when a variable has an unexpected number of dimensions or
    /// an unexpected dimension size.
    #[error("dimension '{name}' mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Name of the dimension or the check that failed.
        name: String,
        /// Expected size.
        expected: usize,
        /// Actual size.
        got: usize,
    },

    /// Returned when one or more validation checks fail.
    #[error("{count} validation error(s): {details}")]
    Validation {
        /// Number of accumulated validation failures.
        count: usize,
        /// Human-readable summary of the failures.
        details: String,
    },
}

impl From<netcdf::Error> for IoError {
    fn from(e: netcdf::Error) -> Self {
        IoError::Netcdf {
            reason: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_data_not_found() {
        let err = IoError::DataNotFound {
            path: PathBuf::from("/data/missing.nc"),
        };
        assert_eq!(err.to_string(), "data not found: /data/missing.nc");
    }

    #[test]
    fn display_netcdf() {
        let err = IoError::Netcdf {
            reason: "bad header".to_string(),
        };
        assert_eq!(err.to_string(), "netcdf error: bad header");
    }

    #[test]
    fn display_missing_variable() {
        let err = IoError::MissingVariable {
            name: "TAREA".to_string(),
            path: PathBuf::from("/data/calcs.nc"),
        };
        assert_eq!(err.to_string(), "variable 'TAREA' not found in /data/calcs.nc");
    }

    #[test]
    fn display_dimension_mismatch() {
        let err = IoError::DimensionMismatch {
            name: "FG_CO2 dimensions".to_string(),
            expected: 4,
            got: 3,
        };
        assert_eq!(
            err.to_string(),
            "dimension 'FG_CO2 dimensions' mismatch: expected 4, got 3"
        );
    }

    #[test]
    fn display_validation() {
        let err = IoError::Validation {
            count: 2,
            details: "empty member dimension; empty time dimension".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "2 validation error(s): empty member dimension; empty time dimension"
        );
    }

    #[test]
    fn from_netcdf_error() {
        let nc_err = netcdf::Error::Str("test nc error".to_string());
        let err: IoError = nc_err.into();
        assert!(matches!(err, IoError::Netcdf { .. }));
        assert!(err.to_string().contains("test nc error"));
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<IoError>();
    }
}
