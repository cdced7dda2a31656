//! Immutable per-region grid geometry.

use ndarray::Array2;

use crate::error::GridError;

/// Static geometry of one regional grid subset.
///
/// Holds the 2-D curvilinear latitude field (`TLAT`), zonal cell width in
/// centimeters (`DXT`), integer region-ownership mask (`REGION_MASK`), and
/// cell area (`TAREA`). Constructed once per region and shared read-only
/// across every ensemble member and variable; nothing here is mutated after
/// construction.
#[derive(Debug, Clone)]
pub struct GridGeometry {
    /// Cell-center latitude in degrees north.
    tlat: Array2<f64>,
    /// Zonal cell width in centimeters (model source units).
    dxt: Array2<f64>,
    /// Region-ownership code per cell; 0 marks land, the coastline anchor.
    region_mask: Array2<i32>,
    /// Cell area in model source units.
    tarea: Array2<f64>,
}

impl GridGeometry {
    /// Creates a new `GridGeometry` after checking that all four fields
    /// share one `(nlat, nlon)` shape.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::ShapeMismatch`] naming the first field whose
    /// shape differs from `TLAT`'s.
    pub fn new(
        tlat: Array2<f64>,
        dxt: Array2<f64>,
        region_mask: Array2<i32>,
        tarea: Array2<f64>,
    ) -> Result<Self, GridError> {
        let expected = tlat.dim();
        if dxt.dim() != expected {
            return Err(GridError::ShapeMismatch {
                field: "DXT",
                expected,
                got: dxt.dim(),
            });
        }
        if region_mask.dim() != expected {
            return Err(GridError::ShapeMismatch {
                field: "REGION_MASK",
                expected,
                got: region_mask.dim(),
            });
        }
        if tarea.dim() != expected {
            return Err(GridError::ShapeMismatch {
                field: "TAREA",
                expected,
                got: tarea.dim(),
            });
        }

        Ok(Self {
            tlat,
            dxt,
            region_mask,
            tarea,
        })
    }

    /// Returns the cell-center latitude field (degrees north).
    pub fn tlat(&self) -> &Array2<f64> {
        &self.tlat
    }

    /// Returns the zonal cell width field (centimeters).
    pub fn dxt(&self) -> &Array2<f64> {
        &self.dxt
    }

    /// Returns the region-ownership mask.
    pub fn region_mask(&self) -> &Array2<i32> {
        &self.region_mask
    }

    /// Returns the cell area field.
    pub fn tarea(&self) -> &Array2<f64> {
        &self.tarea
    }

    /// Returns the `(nlat, nlon)` grid shape.
    pub fn shape(&self) -> (usize, usize) {
        self.tlat.dim()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    fn uniform(nlat: usize, nlon: usize, v: f64) -> Array2<f64> {
        Array2::from_elem((nlat, nlon), v)
    }

    #[test]
    fn construction_ok() {
        let geo = GridGeometry::new(
            uniform(3, 4, 40.0),
            uniform(3, 4, 1.0e7),
            Array2::zeros((3, 4)),
            uniform(3, 4, 2.0),
        )
        .expect("matching shapes");
        assert_eq!(geo.shape(), (3, 4));
        assert_eq!(geo.tlat()[[0, 0]], 40.0);
        assert_eq!(geo.tarea()[[2, 3]], 2.0);
    }

    #[test]
    fn dxt_shape_mismatch() {
        let err = GridGeometry::new(
            uniform(3, 4, 40.0),
            uniform(3, 5, 1.0e7),
            Array2::zeros((3, 4)),
            uniform(3, 4, 2.0),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            GridError::ShapeMismatch {
                field: "DXT",
                expected: (3, 4),
                got: (3, 5),
            }
        ));
    }

    #[test]
    fn region_mask_shape_mismatch() {
        let err = GridGeometry::new(
            uniform(3, 4, 40.0),
            uniform(3, 4, 1.0e7),
            Array2::zeros((2, 4)),
            uniform(3, 4, 2.0),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            GridError::ShapeMismatch {
                field: "REGION_MASK",
                ..
            }
        ));
    }

    #[test]
    fn tarea_shape_mismatch() {
        let err = GridGeometry::new(
            uniform(3, 4, 40.0),
            uniform(3, 4, 1.0e7),
            Array2::zeros((3, 4)),
            uniform(4, 4, 2.0),
        )
        .unwrap_err();
        assert!(matches!(err, GridError::ShapeMismatch { field: "TAREA", .. }));
    }
}
