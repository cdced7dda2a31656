//! Per-member gridded field container.

use ndarray::Array3;
use nereus_grid::RegionMask;

use crate::error::EnsembleError;

/// One variable's gridded values for every ensemble member.
///
/// Each member holds a `time x nlat x nlon` array; all members share one
/// grid, one time axis, and (after masking) one missing-value footprint.
/// Member identifiers are unique; their order is preserved throughout the
/// pipeline and defines the order of the output records.
#[derive(Debug, Clone)]
pub struct EnsembleField {
    members: Vec<String>,
    data: Vec<Array3<f64>>,
}

impl EnsembleField {
    /// Creates a new `EnsembleField` after validating member/field
    /// consistency.
    ///
    /// # Errors
    ///
    /// Returns [`EnsembleError::NoMembers`] for an empty ensemble,
    /// [`EnsembleError::MemberCountMismatch`] when ids and arrays differ in
    /// count, [`EnsembleError::DuplicateMember`] on a repeated id, and
    /// [`EnsembleError::MemberShapeMismatch`] when any member's shape
    /// differs from the first member's.
    pub fn new(members: Vec<String>, data: Vec<Array3<f64>>) -> Result<Self, EnsembleError> {
        if members.is_empty() {
            return Err(EnsembleError::NoMembers);
        }
        if members.len() != data.len() {
            return Err(EnsembleError::MemberCountMismatch {
                ids: members.len(),
                fields: data.len(),
            });
        }
        for (i, id) in members.iter().enumerate() {
            if members[..i].contains(id) {
                return Err(EnsembleError::DuplicateMember { id: id.clone() });
            }
        }
        let expected = data[0].dim();
        for (id, arr) in members.iter().zip(data.iter()) {
            if arr.dim() != expected {
                return Err(EnsembleError::MemberShapeMismatch {
                    member: id.clone(),
                    expected,
                    got: arr.dim(),
                });
            }
        }

        Ok(Self { members, data })
    }

    /// Returns the member identifiers, in input order.
    pub fn members(&self) -> &[String] {
        &self.members
    }

    /// Returns the number of ensemble members.
    pub fn n_members(&self) -> usize {
        self.members.len()
    }

    /// Returns the number of time steps.
    pub fn n_times(&self) -> usize {
        self.data[0].dim().0
    }

    /// Returns the `(nlat, nlon)` grid shape.
    pub fn grid_shape(&self) -> (usize, usize) {
        let (_, nlat, nlon) = self.data[0].dim();
        (nlat, nlon)
    }

    /// Returns one member's field by position.
    pub fn values(&self, idx: usize) -> &Array3<f64> {
        &self.data[idx]
    }

    pub(crate) fn data_mut(&mut self, idx: usize) -> &mut Array3<f64> {
        &mut self.data[idx]
    }

    /// Intersects every member's field with a region mask, writing NaN
    /// outside the region. The receiver is untouched.
    ///
    /// # Errors
    ///
    /// Returns [`EnsembleError::GridShapeMismatch`] if the mask's shape
    /// differs from the field's grid.
    pub fn masked(&self, mask: &RegionMask) -> Result<EnsembleField, EnsembleError> {
        if mask.shape() != self.grid_shape() {
            return Err(EnsembleError::GridShapeMismatch {
                expected: self.grid_shape(),
                got: mask.shape(),
            });
        }

        let valid = mask.valid();
        let data = self
            .data
            .iter()
            .map(|arr| {
                let mut out = arr.clone();
                for ((_, i, j), v) in out.indexed_iter_mut() {
                    if !valid[[i, j]] {
                        *v = f64::NAN;
                    }
                }
                out
            })
            .collect();

        Ok(Self {
            members: self.members.clone(),
            data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array3;
    use nereus_grid::{Ebus, GridGeometry, RegionMask};

    fn two_member_field() -> EnsembleField {
        let a = Array3::from_elem((2, 2, 3), 1.0);
        let b = Array3::from_elem((2, 2, 3), 2.0);
        EnsembleField::new(vec!["000".into(), "001".into()], vec![a, b]).expect("valid field")
    }

    #[test]
    fn accessors() {
        let field = two_member_field();
        assert_eq!(field.n_members(), 2);
        assert_eq!(field.n_times(), 2);
        assert_eq!(field.grid_shape(), (2, 3));
        assert_eq!(field.members(), &["000".to_string(), "001".to_string()]);
        assert_eq!(field.values(1)[[0, 0, 0]], 2.0);
    }

    #[test]
    fn empty_ensemble_rejected() {
        let err = EnsembleField::new(vec![], vec![]).unwrap_err();
        assert!(matches!(err, EnsembleError::NoMembers));
    }

    #[test]
    fn count_mismatch_rejected() {
        let a = Array3::from_elem((1, 1, 1), 0.0);
        let err = EnsembleField::new(vec!["000".into(), "001".into()], vec![a]).unwrap_err();
        assert!(matches!(
            err,
            EnsembleError::MemberCountMismatch { ids: 2, fields: 1 }
        ));
    }

    #[test]
    fn duplicate_member_rejected() {
        let a = Array3::from_elem((1, 1, 1), 0.0);
        let err =
            EnsembleField::new(vec!["000".into(), "000".into()], vec![a.clone(), a]).unwrap_err();
        assert!(matches!(err, EnsembleError::DuplicateMember { ref id } if id == "000"));
    }

    #[test]
    fn shape_mismatch_rejected() {
        let a = Array3::from_elem((2, 2, 3), 0.0);
        let b = Array3::from_elem((2, 2, 4), 0.0);
        let err = EnsembleField::new(vec!["000".into(), "001".into()], vec![a, b]).unwrap_err();
        assert!(matches!(
            err,
            EnsembleError::MemberShapeMismatch { ref member, .. } if member == "001"
        ));
    }

    #[test]
    fn masked_overlays_nan_for_all_members() {
        use ndarray::{Array2, array};

        // 2x3 grid: only the middle column of the coastal row survives an
        // 800 km threshold with 500 km cells.
        let tlat = array![[40.0, 40.0, 40.0], [50.0, 50.0, 50.0]];
        let dxt = Array2::from_elem((2, 3), 5.0e7);
        let region_mask = array![[1, 1, 0], [1, 1, 1]];
        let tarea = Array2::from_elem((2, 3), 1.0);
        let geo = GridGeometry::new(tlat, dxt, region_mask, tarea).unwrap();
        let mask = RegionMask::compute(&geo, Ebus::California, 800.0);

        let field = two_member_field();
        let masked = field.masked(&mask).expect("matching shapes");

        for m in 0..2 {
            // Coastal-row ocean cells within range survive.
            assert!(masked.values(m)[[0, 0, 1]].is_finite());
            // Row without coastline is gone, as is the land cell.
            assert!(masked.values(m)[[0, 1, 1]].is_nan());
            assert!(masked.values(m)[[0, 0, 2]].is_nan());
        }
        // Original untouched.
        assert!(field.values(0)[[0, 1, 1]].is_finite());
    }
}
