//! Offshore-distance region mask.

use ndarray::Array2;

use crate::ebus::Ebus;
use crate::error::GridError;
use crate::geometry::GridGeometry;

/// Default offshore distance threshold in kilometers.
pub const DEFAULT_OFFSHORE_KM: f64 = 800.0;

/// Model grids store cell widths in centimeters.
const CM_PER_KM: f64 = 100_000.0;

/// Region-ownership code marking land, the coastline anchor of a grid row.
const COASTLINE_CODE: i32 = 0;

/// Boolean overlay selecting the cells of one EBUS analysis region.
///
/// A cell is retained iff its latitude falls in the system's 10-degree band
/// and its cumulative from-coast distance is within the offshore threshold.
/// The mask is an additive overlay: [`RegionMask::apply`] writes NaN outside
/// the region into a copy of any field, and the geometry it was derived from
/// is never touched. Computed once per `(EBUS, offshore distance)` pair and
/// reused for every variable and ensemble member of that system.
#[derive(Debug, Clone)]
pub struct RegionMask {
    /// True where a cell belongs to the analysis region.
    valid: Array2<bool>,
    /// Remaining distance back to the coastline in km; NaN where undefined.
    dist_to_coast: Array2<f64>,
}

impl RegionMask {
    /// Derives the mask for `ebus` from a grid geometry.
    ///
    /// Construction steps:
    /// 1. cell widths are converted from centimeters to kilometers;
    /// 2. rows without a coastline cell (region-ownership code 0) carry no
    ///    distance-to-coast and are invalidated wholesale; land cells
    ///    themselves contribute no width;
    /// 3. per row, widths are summed from the offshore edge toward the
    ///    coastline (a reverse cumulative sum along the longitude axis),
    ///    giving each cell its remaining distance back to the coast;
    /// 4. the final mask intersects the latitude band with
    ///    `distance <= offshore_km`.
    ///
    /// A threshold of 0 yields an empty region; that is valid here and only
    /// surfaces as an error when something tries to aggregate over it.
    pub fn compute(geometry: &GridGeometry, ebus: Ebus, offshore_km: f64) -> Self {
        let (nlat, nlon) = geometry.shape();
        let (lat1, lat2) = ebus.lat_bounds();
        let region = geometry.region_mask();

        // Step 1 + 2: widths in km, NaN where no distance is defined.
        let mut width_km = Array2::from_elem((nlat, nlon), f64::NAN);
        for i in 0..nlat {
            let has_coast = (0..nlon).any(|j| region[[i, j]] == COASTLINE_CODE);
            if !has_coast {
                continue;
            }
            for j in 0..nlon {
                if region[[i, j]] != COASTLINE_CODE {
                    width_km[[i, j]] = geometry.dxt()[[i, j]] / CM_PER_KM;
                }
            }
        }

        // Step 3: suffix sum per row. The coastline sits at the high-index
        // edge of each row, so accumulating from the last column backward
        // gives "remaining distance back to coast" at every ocean cell.
        let mut dist_to_coast = Array2::from_elem((nlat, nlon), f64::NAN);
        for i in 0..nlat {
            let mut acc = 0.0;
            for j in (0..nlon).rev() {
                let w = width_km[[i, j]];
                if w.is_nan() {
                    continue;
                }
                acc += w;
                dist_to_coast[[i, j]] = acc;
            }
        }

        // Step 4: latitude band AND distance threshold.
        let mut valid = Array2::from_elem((nlat, nlon), false);
        for i in 0..nlat {
            for j in 0..nlon {
                let lat = geometry.tlat()[[i, j]];
                let d = dist_to_coast[[i, j]];
                valid[[i, j]] = lat >= lat1 && lat <= lat2 && d.is_finite() && d <= offshore_km;
            }
        }

        Self {
            valid,
            dist_to_coast,
        }
    }

    /// Returns the boolean validity field.
    pub fn valid(&self) -> &Array2<bool> {
        &self.valid
    }

    /// Returns the remaining-distance-to-coast field in kilometers.
    ///
    /// NaN marks cells in coastline-less rows and land cells.
    pub fn dist_to_coast(&self) -> &Array2<f64> {
        &self.dist_to_coast
    }

    /// Returns the `(nlat, nlon)` shape of the mask.
    pub fn shape(&self) -> (usize, usize) {
        self.valid.dim()
    }

    /// Returns the number of cells in the analysis region.
    pub fn n_valid(&self) -> usize {
        self.valid.iter().filter(|&&v| v).count()
    }

    /// Intersects a field with the mask, writing NaN outside the region.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::ShapeMismatch`] if the field's shape differs
    /// from the mask's.
    pub fn apply(&self, field: &Array2<f64>) -> Result<Array2<f64>, GridError> {
        if field.dim() != self.valid.dim() {
            return Err(GridError::ShapeMismatch {
                field: "field",
                expected: self.valid.dim(),
                got: field.dim(),
            });
        }

        let mut out = field.clone();
        for ((i, j), v) in out.indexed_iter_mut() {
            if !self.valid[[i, j]] {
                *v = f64::NAN;
            }
        }
        Ok(out)
    }
}
