//! # nereus-io
//!
//! Read gridded ensemble subsets and scalar climate-index series from
//! NetCDF files, and write area-weighted residual series and correlation
//! records back out. Bridges external file formats into the `ndarray` and
//! slice-based APIs of the analysis crates.
//!
//! Grid geometry (`TLAT`, `DXT`, `REGION_MASK`, `TAREA`) is read once per
//! file as plain 2-D fields; the upstream convention of duplicating static
//! coordinates along the member dimension does not exist here.

mod error;
mod gridded;
mod index;
mod netcdf_read;
mod writer;

pub use error::IoError;
pub use gridded::{GriddedConfig, read_gridded};
pub use index::read_index;
pub use writer::{write_records, write_series};
