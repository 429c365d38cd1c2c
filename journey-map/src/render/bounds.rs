//! Camera-fit bounds.

use crate::domain::{BoundingBox, GeoPoint};

/// Running set of points that must be visible once the camera is fitted.
///
/// Both the route path and every placed marker feed into it. Points are
/// kept, not just the running box, so duplicates and order survive for
/// inspection.
#[derive(Debug, Clone, Default)]
pub struct BoundsAccumulator {
    points: Vec<GeoPoint>,
}

impl BoundsAccumulator {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one point.
    pub fn push(&mut self, point: GeoPoint) {
        self.points.push(point);
    }

    /// Add every point from `points`.
    pub fn extend<I: IntoIterator<Item = GeoPoint>>(&mut self, points: I) {
        self.points.extend(points);
    }

    /// All points added so far.
    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    /// Returns the number of points added.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if nothing has been added.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The box to fit the camera to, or `None` if there is nothing to show.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        BoundingBox::from_points(&self.points)
    }
}
