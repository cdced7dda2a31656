//! Low-level NetCDF extraction helpers.

use std::path::Path;

use ndarray::Array2;

use crate::error::IoError;

/// Open a NetCDF file at `path`, returning [`IoError::DataNotFound`] if the
/// path does not exist on disk.
pub(crate) fn open_file(path: &Path) -> Result<netcdf::File, IoError> {
    if !path.exists() {
        return Err(IoError::DataNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(netcdf::open(path)?)
}

/// Look up a variable, returning [`IoError::MissingVariable`] if absent.
pub(crate) fn variable<'f>(
    file: &'f netcdf::File,
    name: &str,
    path: &Path,
) -> Result<netcdf::Variable<'f>, IoError> {
    file.variable(name).ok_or_else(|| IoError::MissingVariable {
        name: name.to_string(),
        path: path.to_path_buf(),
    })
}

/// Read a 2-D `f64` variable into an `Array2`.
pub(crate) fn read_2d_f64(
    file: &netcdf::File,
    name: &str,
    path: &Path,
) -> Result<Array2<f64>, IoError> {
    let var = variable(file, name, path)?;
    let dims = var.dimensions();
    if dims.len() != 2 {
        return Err(IoError::DimensionMismatch {
            name: format!("{name} dimensions"),
            expected: 2,
            got: dims.len(),
        });
    }
    let shape = (dims[0].len(), dims[1].len());
    let data = var.get_values::<f64, _>(..)?;
    Array2::from_shape_vec(shape, data).map_err(|e| IoError::Netcdf {
        reason: format!("{name}: {e}"),
    })
}

/// Read a 2-D integer variable into an `Array2<i32>`.
pub(crate) fn read_2d_i32(
    file: &netcdf::File,
    name: &str,
    path: &Path,
) -> Result<Array2<i32>, IoError> {
    let var = variable(file, name, path)?;
    let dims = var.dimensions();
    if dims.len() != 2 {
        return Err(IoError::DimensionMismatch {
            name: format!("{name} dimensions"),
            expected: 2,
            got: dims.len(),
        });
    }
    let shape = (dims[0].len(), dims[1].len());
    let data = var.get_values::<i32, _>(..)?;
    Array2::from_shape_vec(shape, data).map_err(|e| IoError::Netcdf {
        reason: format!("{name}: {e}"),
    })
}

/// Read an n-D `f64` variable as flat data plus its dimension sizes,
/// checking the dimension count.
pub(crate) fn read_flat_f64(
    file: &netcdf::File,
    name: &str,
    ndims: usize,
    path: &Path,
) -> Result<(Vec<f64>, Vec<usize>), IoError> {
    let var = variable(file, name, path)?;
    let dims = var.dimensions();
    if dims.len() != ndims {
        return Err(IoError::DimensionMismatch {
            name: format!("{name} dimensions"),
            expected: ndims,
            got: dims.len(),
        });
    }
    let shape: Vec<usize> = dims.iter().map(|d| d.len()).collect();
    let data = var.get_values::<f64, _>(..)?;
    Ok((data, shape))
}

/// Zero-padded member identifier for a member-dimension index.
pub(crate) fn member_id(index: usize) -> String {
    format!("{index:03}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn member_ids_are_zero_padded() {
        assert_eq!(member_id(0), "000");
        assert_eq!(member_id(7), "007");
        assert_eq!(member_id(33), "033");
        assert_eq!(member_id(1000), "1000");
    }

    #[test]
    fn missing_file_is_data_not_found() {
        let err = open_file(Path::new("/nonexistent/file.nc")).unwrap_err();
        assert!(matches!(err, IoError::DataNotFound { .. }));
    }
}
