//! Scalar series reader: climate indices and area-weighted residual files.

use std::path::Path;

use tracing::info;

use nereus_ensemble::ScalarSeries;

use crate::error::IoError;
use crate::netcdf_read;

/// Read a per-member scalar time series from a NetCDF file.
///
/// Two layouts are accepted:
///
/// - 2-D `member x time`: plain climate indices and area-weighted
///   residual files; `mode` must be `None`.
/// - 3-D `mode x member x time`: principal-component variables from an
///   EOF decomposition; `mode` selects which one (EOF1 is mode 0).
///
/// The returned series carry `var_name` as their name tag and zero-padded
/// member-dimension positions as member identifiers, matching the gridded
/// reader.
///
/// # Errors
///
/// Returns [`IoError`] on a missing file or variable, an unexpected
/// dimension count, a `mode` argument that disagrees with the layout, or
/// an out-of-range mode.
pub fn read_index(
    path: &Path,
    var_name: &str,
    mode: Option<usize>,
) -> Result<Vec<ScalarSeries>, IoError> {
    let file = netcdf_read::open_file(path)?;
    let ndims = netcdf_read::variable(&file, var_name, path)?.dimensions().len();

    let (data, n_members, nt) = match (ndims, mode) {
        (2, None) => {
            let (data, shape) = netcdf_read::read_flat_f64(&file, var_name, 2, path)?;
            (data, shape[0], shape[1])
        }
        (2, Some(m)) => {
            return Err(IoError::Validation {
                count: 1,
                details: format!(
                    "mode {m} requested but '{var_name}' has no mode dimension"
                ),
            });
        }
        (3, Some(m)) => {
            let (data, shape) = netcdf_read::read_flat_f64(&file, var_name, 3, path)?;
            let (n_modes, n_members, nt) = (shape[0], shape[1], shape[2]);
            if m >= n_modes {
                return Err(IoError::DimensionMismatch {
                    name: "mode".to_string(),
                    expected: n_modes,
                    got: m,
                });
            }
            let stride = n_members * nt;
            (data[m * stride..(m + 1) * stride].to_vec(), n_members, nt)
        }
        (3, None) => {
            return Err(IoError::Validation {
                count: 1,
                details: format!(
                    "'{var_name}' has a mode dimension; select one with a mode index"
                ),
            });
        }
        (got, _) => {
            return Err(IoError::DimensionMismatch {
                name: format!("{var_name} dimensions"),
                expected: 2,
                got,
            });
        }
    };

    if n_members == 0 || nt == 0 {
        return Err(IoError::Validation {
            count: 1,
            details: format!(
                "{var_name} has an empty dimension: {n_members} members, {nt} time steps"
            ),
        });
    }

    let series = (0..n_members)
        .map(|m| {
            ScalarSeries::new(
                netcdf_read::member_id(m),
                var_name,
                data[m * nt..(m + 1) * nt].to_vec(),
            )
        })
        .collect();

    info!(
        path = %path.display(),
        var = var_name,
        n_members,
        n_times = nt,
        mode = ?mode,
        "scalar series loaded"
    );

    Ok(series)
}
