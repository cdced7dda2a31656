//! Ensemble-mean removal.

use crate::field::EnsembleField;

impl EnsembleField {
    /// Subtracts the cross-member ensemble mean at every (time, cell)
    /// position, leaving each member's internal-variability residual.
    ///
    /// The mean at a position is taken over the members with a finite value
    /// there; members missing at that position stay missing and do not
    /// shrink the mean (standard missing-data exclusion, not zero-fill).
    /// Positions where every member is missing stay missing everywhere.
    ///
    /// Residuals sum to zero across the member axis at every position with
    /// data, up to floating-point error.
    pub fn residuals(&self) -> EnsembleField {
        let mut out = self.clone();
        let (nt, nlat, nlon) = self.values(0).dim();
        let n_members = self.n_members();

        for t in 0..nt {
            for i in 0..nlat {
                for j in 0..nlon {
                    let mut sum = 0.0;
                    let mut count = 0usize;
                    for m in 0..n_members {
                        let v = self.values(m)[[t, i, j]];
                        if v.is_finite() {
                            sum += v;
                            count += 1;
                        }
                    }
                    if count == 0 {
                        continue;
                    }
                    let mean = sum / count as f64;
                    for m in 0..n_members {
                        let v = &mut out.data_mut(m)[[t, i, j]];
                        if v.is_finite() {
                            *v -= mean;
                        }
                    }
                }
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::Array3;

    fn field_from(values: &[f64]) -> EnsembleField {
        // One (1 x 1 x 1) grid cell per member.
        let members = (0..values.len()).map(|i| format!("{i:03}")).collect();
        let data = values
            .iter()
            .map(|&v| Array3::from_elem((1, 1, 1), v))
            .collect();
        EnsembleField::new(members, data).expect("valid field")
    }

    #[test]
    fn subtracts_the_member_mean() {
        let res = field_from(&[1.0, 2.0, 6.0]).residuals();
        assert_relative_eq!(res.values(0)[[0, 0, 0]], -2.0);
        assert_relative_eq!(res.values(1)[[0, 0, 0]], -1.0);
        assert_relative_eq!(res.values(2)[[0, 0, 0]], 3.0);
    }

    #[test]
    fn residuals_sum_to_zero_across_members() {
        let nt = 4;
        let (nlat, nlon) = (3, 5);
        let n_members = 7;

        // Deterministic but varied values.
        let members = (0..n_members).map(|m| format!("{m:03}")).collect();
        let data = (0..n_members)
            .map(|m| {
                Array3::from_shape_fn((nt, nlat, nlon), |(t, i, j)| {
                    (m as f64 + 1.0) * ((t * nlat * nlon + i * nlon + j) as f64).sin() + m as f64
                })
            })
            .collect();
        let field = EnsembleField::new(members, data).expect("valid field");

        let res = field.residuals();
        for t in 0..nt {
            for i in 0..nlat {
                for j in 0..nlon {
                    let sum: f64 = (0..n_members).map(|m| res.values(m)[[t, i, j]]).sum();
                    assert!(
                        sum.abs() < 1e-10,
                        "residual sum {sum} at ({t},{i},{j}) not ~0"
                    );
                }
            }
        }
    }

    #[test]
    fn missing_members_are_excluded_from_the_mean() {
        let res = field_from(&[1.0, f64::NAN, 3.0]).residuals();
        // Mean over the two finite members is 2.
        assert_relative_eq!(res.values(0)[[0, 0, 0]], -1.0);
        assert!(res.values(1)[[0, 0, 0]].is_nan());
        assert_relative_eq!(res.values(2)[[0, 0, 0]], 1.0);
    }

    #[test]
    fn fully_missing_position_stays_missing() {
        let res = field_from(&[f64::NAN, f64::NAN]).residuals();
        assert!(res.values(0)[[0, 0, 0]].is_nan());
        assert!(res.values(1)[[0, 0, 0]].is_nan());
    }

    #[test]
    fn member_order_is_preserved() {
        let field = field_from(&[5.0, 7.0]);
        let res = field.residuals();
        assert_eq!(res.members(), field.members());
    }
}
