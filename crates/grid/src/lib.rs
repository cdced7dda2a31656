//! # nereus-grid
//!
//! Regional geometry for eastern boundary upwelling systems: the fixed
//! four-system region table, the immutable per-region grid geometry, and the
//! offshore-distance region mask derived from it.
//!
//! The mask construction follows the Chavez (2009) equal-region comparison:
//! a 10-degree latitude band per system, intersected with a
//! distance-to-coast filter computed by summing cell widths from the
//! offshore edge of each grid row back toward the coastline.

mod ebus;
mod error;
mod geometry;
mod mask;

pub use ebus::Ebus;
pub use error::GridError;
pub use geometry::GridGeometry;
pub use mask::{DEFAULT_OFFSHORE_KM, RegionMask};
