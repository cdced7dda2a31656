//! Area-weighted spatial reduction.

use ndarray::Array2;
use tracing::debug;

use crate::error::EnsembleError;
use crate::field::EnsembleField;
use crate::series::ScalarSeries;

/// Reduces a (typically masked, residual) ensemble field to one scalar
/// series per member by area-weighted spatial averaging.
///
/// Per member and time step the value is
/// `sum(field * area) / sum(area)` over the cells where the field is
/// finite: a weighted mean in which a large cell counts for
/// proportionally more than a small one. Cells outside the region mask are
/// NaN in the field and therefore drop out of both sums.
///
/// # Errors
///
/// Returns [`EnsembleError::GridShapeMismatch`] if `tarea` does not match
/// the field's grid, or [`EnsembleError::EmptyRegion`] if some time step
/// has no valid cells at all: a zero-area denominator signals an upstream
/// masking bug and must never silently become NaN.
pub fn area_weighted_series(
    field: &EnsembleField,
    tarea: &Array2<f64>,
    name: &str,
) -> Result<Vec<ScalarSeries>, EnsembleError> {
    if tarea.dim() != field.grid_shape() {
        return Err(EnsembleError::GridShapeMismatch {
            expected: field.grid_shape(),
            got: tarea.dim(),
        });
    }

    let nt = field.n_times();
    let (nlat, nlon) = field.grid_shape();
    let mut out = Vec::with_capacity(field.n_members());

    for (m, member) in field.members().iter().enumerate() {
        let values = field.values(m);
        let mut series = Vec::with_capacity(nt);

        for t in 0..nt {
            let mut weighted = 0.0;
            let mut total_area = 0.0;
            for i in 0..nlat {
                for j in 0..nlon {
                    let v = values[[t, i, j]];
                    let a = tarea[[i, j]];
                    if v.is_finite() && a.is_finite() {
                        weighted += v * a;
                        total_area += a;
                    }
                }
            }
            if total_area == 0.0 {
                return Err(EnsembleError::EmptyRegion {
                    member: member.clone(),
                    time: t,
                });
            }
            series.push(weighted / total_area);
        }

        debug!(member = %member, n_times = nt, "area-weighted series computed");
        out.push(ScalarSeries::new(member.clone(), name, series));
    }

    Ok(out)
}
