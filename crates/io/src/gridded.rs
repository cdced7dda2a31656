//! Gridded ensemble reader.

use std::path::Path;

use ndarray::Array3;
use tracing::info;

use nereus_ensemble::EnsembleField;
use nereus_grid::GridGeometry;

use crate::error::IoError;
use crate::netcdf_read;

/// Configuration for reading a gridded ensemble subset.
///
/// Defaults name the geometry variables the way POP-style model output
/// does; use the builder methods when a file deviates.
#[derive(Debug, Clone)]
pub struct GriddedConfig {
    /// NetCDF variable name for cell-center latitude.
    lat_var: String,
    /// NetCDF variable name for zonal cell width (centimeters).
    dxt_var: String,
    /// NetCDF variable name for the region-ownership mask.
    region_mask_var: String,
    /// NetCDF variable name for cell area.
    tarea_var: String,
}

impl Default for GriddedConfig {
    fn default() -> Self {
        Self {
            lat_var: "TLAT".into(),
            dxt_var: "DXT".into(),
            region_mask_var: "REGION_MASK".into(),
            tarea_var: "TAREA".into(),
        }
    }
}

impl GriddedConfig {
    /// Set the latitude variable name.
    pub fn with_lat_var(mut self, name: impl Into<String>) -> Self {
        self.lat_var = name.into();
        self
    }

    /// Set the cell-width variable name.
    pub fn with_dxt_var(mut self, name: impl Into<String>) -> Self {
        self.dxt_var = name.into();
        self
    }

    /// Set the region-ownership mask variable name.
    pub fn with_region_mask_var(mut self, name: impl Into<String>) -> Self {
        self.region_mask_var = name.into();
        self
    }

    /// Set the cell-area variable name.
    pub fn with_tarea_var(mut self, name: impl Into<String>) -> Self {
        self.tarea_var = name.into();
        self
    }

    /// Returns the latitude variable name.
    pub fn lat_var(&self) -> &str {
        &self.lat_var
    }

    /// Returns the cell-width variable name.
    pub fn dxt_var(&self) -> &str {
        &self.dxt_var
    }

    /// Returns the region-ownership mask variable name.
    pub fn region_mask_var(&self) -> &str {
        &self.region_mask_var
    }

    /// Returns the cell-area variable name.
    pub fn tarea_var(&self) -> &str {
        &self.tarea_var
    }
}

/// Read one variable's gridded ensemble subset.
///
/// The file must contain the four 2-D geometry fields and a 4-D
/// `member x time x nlat x nlon` variable named `var_name`, all on one
/// grid. Geometry is read once; member identifiers are zero-padded
/// positions along the member dimension.
///
/// # Errors
///
/// Returns [`IoError`] on a missing file or variable, a dimension-count
/// mismatch, a grid-shape mismatch between the data variable and the
/// geometry, or an empty member/time dimension.
pub fn read_gridded(
    path: &Path,
    var_name: &str,
    config: &GriddedConfig,
) -> Result<(GridGeometry, EnsembleField), IoError> {
    let file = netcdf_read::open_file(path)?;

    // -- Geometry, read once ------------------------------------------------

    let tlat = netcdf_read::read_2d_f64(&file, config.lat_var(), path)?;
    let dxt = netcdf_read::read_2d_f64(&file, config.dxt_var(), path)?;
    let region_mask = netcdf_read::read_2d_i32(&file, config.region_mask_var(), path)?;
    let tarea = netcdf_read::read_2d_f64(&file, config.tarea_var(), path)?;

    let geometry =
        GridGeometry::new(tlat, dxt, region_mask, tarea).map_err(|e| IoError::Validation {
            count: 1,
            details: e.to_string(),
        })?;
    let (nlat, nlon) = geometry.shape();

    // -- Ensemble variable --------------------------------------------------

    let (data, shape) = netcdf_read::read_flat_f64(&file, var_name, 4, path)?;
    let (n_members, nt) = (shape[0], shape[1]);

    if shape[2] != nlat {
        return Err(IoError::DimensionMismatch {
            name: format!("{var_name} nlat"),
            expected: nlat,
            got: shape[2],
        });
    }
    if shape[3] != nlon {
        return Err(IoError::DimensionMismatch {
            name: format!("{var_name} nlon"),
            expected: nlon,
            got: shape[3],
        });
    }
    if n_members == 0 || nt == 0 {
        return Err(IoError::Validation {
            count: 1,
            details: format!(
                "{var_name} has an empty dimension: {n_members} members, {nt} time steps"
            ),
        });
    }

    let stride = nt * nlat * nlon;
    let mut members = Vec::with_capacity(n_members);
    let mut arrays = Vec::with_capacity(n_members);
    for m in 0..n_members {
        let slice = data[m * stride..(m + 1) * stride].to_vec();
        let arr = Array3::from_shape_vec((nt, nlat, nlon), slice).map_err(|e| IoError::Netcdf {
            reason: format!("{var_name}: {e}"),
        })?;
        members.push(netcdf_read::member_id(m));
        arrays.push(arr);
    }

    let field = EnsembleField::new(members, arrays).map_err(|e| IoError::Validation {
        count: 1,
        details: e.to_string(),
    })?;

    info!(
        path = %path.display(),
        var = var_name,
        n_members,
        n_times = nt,
        nlat,
        nlon,
        "gridded ensemble loaded"
    );

    Ok((geometry, field))
}
