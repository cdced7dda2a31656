//! NetCDF writers for series and correlation records.

use std::path::Path;

use tracing::info;

use nereus_ensemble::ScalarSeries;
use nereus_pipeline::CorrelationRecord;

use crate::error::IoError;

/// Write per-member scalar series (area-weighted residuals) to NetCDF.
///
/// Layout: dimensions `member x time`, an integer `member` coordinate, and
/// one `f64` variable named `var_name` holding the series row-per-member.
/// [`read_index`](crate::read_index) reads the file back.
///
/// # Errors
///
/// Returns [`IoError::Validation`] for an empty collection,
/// [`IoError::DimensionMismatch`] when series lengths differ, and
/// [`IoError::Netcdf`] on write failures.
pub fn write_series(path: &Path, series: &[ScalarSeries], var_name: &str) -> Result<(), IoError> {
    if series.is_empty() {
        return Err(IoError::Validation {
            count: 1,
            details: "no series to write".to_string(),
        });
    }
    let nt = series[0].len();
    for s in series {
        if s.len() != nt {
            return Err(IoError::DimensionMismatch {
                name: format!("time for member '{}'", s.member()),
                expected: nt,
                got: s.len(),
            });
        }
    }

    let mut file = netcdf::create(path)?;
    file.add_dimension("member", series.len())?;
    file.add_dimension("time", nt)?;

    write_member_coordinate(&mut file, series.len())?;

    {
        let flat: Vec<f64> = series
            .iter()
            .flat_map(|s| s.values().iter().copied())
            .collect();
        let mut var = file.add_variable::<f64>(var_name, &["member", "time"])?;
        var.put_values(&flat, ..)?;
    }

    info!(
        path = %path.display(),
        var = var_name,
        n_members = series.len(),
        n_times = nt,
        "series written"
    );
    Ok(())
}

/// Write an ensemble's correlation records to NetCDF.
///
/// Layout is the output contract: a `member` dimension with columns `m`
/// (regression slope), `r` (Pearson correlation), `p` (corrected two-sided
/// p-value), and `n_eff` (effective sample size). Missing members carry
/// NaN in every column.
///
/// # Errors
///
/// Returns [`IoError::Validation`] for an empty collection and
/// [`IoError::Netcdf`] on write failures.
pub fn write_records(path: &Path, records: &[CorrelationRecord]) -> Result<(), IoError> {
    if records.is_empty() {
        return Err(IoError::Validation {
            count: 1,
            details: "no records to write".to_string(),
        });
    }

    let mut file = netcdf::create(path)?;
    file.add_dimension("member", records.len())?;

    write_member_coordinate(&mut file, records.len())?;

    let slopes: Vec<f64> = records.iter().map(CorrelationRecord::slope).collect();
    let rs: Vec<f64> = records.iter().map(CorrelationRecord::r).collect();
    let ps: Vec<f64> = records.iter().map(CorrelationRecord::p_value).collect();
    let n_effs: Vec<f64> = records.iter().map(CorrelationRecord::n_eff).collect();

    put_member_column(&mut file, "m", &slopes)?;
    put_member_column(&mut file, "r", &rs)?;
    put_member_column(&mut file, "p", &ps)?;
    put_member_column(&mut file, "n_eff", &n_effs)?;

    info!(
        path = %path.display(),
        n_members = records.len(),
        n_missing = records.iter().filter(|r| r.is_missing()).count(),
        "correlation records written"
    );
    Ok(())
}

/// Add the integer `member` coordinate variable.
fn write_member_coordinate(file: &mut netcdf::FileMut, n: usize) -> Result<(), IoError> {
    let idx: Vec<i32> = (0..n as i32).collect();
    let mut var = file.add_variable::<i32>("member", &["member"])?;
    var.put_values(&idx, ..)?;
    Ok(())
}

/// Add one `f64` column over the `member` dimension.
fn put_member_column(
    file: &mut netcdf::FileMut,
    name: &str,
    values: &[f64],
) -> Result<(), IoError> {
    let mut var = file.add_variable::<f64>(name, &["member"])?;
    var.put_values(values, ..)?;
    Ok(())
}
