//! Route path construction.

use crate::domain::{GeoPoint, LonLat};

use super::bounds::BoundsAccumulator;

/// Converts route geometry into the display-order path the line follows.
///
/// Order and cardinality are preserved exactly: the solver's geometry is
/// trusted, so nothing is deduplicated, simplified, or validated here.
pub struct PathBuilder;

impl PathBuilder {
    /// Build the path from `path_coords`, adding every point to `bounds`.
    ///
    /// An empty input yields an empty path and leaves `bounds` untouched.
    pub fn build(path_coords: &[LonLat], bounds: &mut BoundsAccumulator) -> Vec<GeoPoint> {
        let path: Vec<GeoPoint> = path_coords.iter().map(|c| c.to_display()).collect();
        bounds.extend(path.iter().copied());
        path
    }
}
