//! Geographic coordinate types.
//!
//! The route solver stores coordinates as `[longitude, latitude]` (GeoJSON
//! order), while the map displays them as `(latitude, longitude)`. The two
//! orders get distinct types so they cannot be mixed up; the only conversion
//! between them is [`LonLat::to_display`].

use serde::{Deserialize, Serialize};

/// A coordinate in storage order: longitude first.
///
/// Deserializes from a two-element JSON array `[lon, lat]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct LonLat {
    /// Longitude in degrees
    pub lon: f64,
    /// Latitude in degrees
    pub lat: f64,
}

impl LonLat {
    /// Creates a coordinate from longitude and latitude.
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Converts to display order by swapping the axes.
    pub fn to_display(self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon)
    }
}

impl From<[f64; 2]> for LonLat {
    fn from([lon, lat]: [f64; 2]) -> Self {
        Self { lon, lat }
    }
}

impl From<LonLat> for [f64; 2] {
    fn from(c: LonLat) -> Self {
        [c.lon, c.lat]
    }
}

/// A point in display order: latitude first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lng: f64,
}

impl GeoPoint {
    /// Creates a point from latitude and longitude.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// The smallest axis-aligned box containing a set of points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    /// Minimum latitude and longitude
    pub south_west: GeoPoint,
    /// Maximum latitude and longitude
    pub north_east: GeoPoint,
}

impl BoundingBox {
    /// Computes the bounding box of `points`.
    ///
    /// Returns `None` for an empty slice.
    pub fn from_points(points: &[GeoPoint]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bbox = BoundingBox {
            south_west: *first,
            north_east: *first,
        };
        for p in rest {
            bbox.south_west.lat = bbox.south_west.lat.min(p.lat);
            bbox.south_west.lng = bbox.south_west.lng.min(p.lng);
            bbox.north_east.lat = bbox.north_east.lat.max(p.lat);
            bbox.north_east.lng = bbox.north_east.lng.max(p.lng);
        }
        Some(bbox)
    }

    /// Returns the center of the box.
    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(
            (self.south_west.lat + self.north_east.lat) / 2.0,
            (self.south_west.lng + self.north_east.lng) / 2.0,
        )
    }

    /// Returns true if `point` lies inside the box (edges included).
    #[cfg(test)]
    pub(crate) fn contains(&self, point: &GeoPoint) -> bool {
        (self.south_west.lat..=self.north_east.lat).contains(&point.lat)
            && (self.south_west.lng..=self.north_east.lng).contains(&point.lng)
    }
}
