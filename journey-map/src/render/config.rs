//! Rendering configuration.

use std::time::Duration;

use crate::domain::GeoPoint;

/// Style of the animated route line.
#[derive(Debug, Clone, PartialEq)]
pub struct LineConfig {
    /// Color the line starts with.
    pub default_color: String,
    /// Color the line switches to once the landmark trigger fires.
    pub triggered_color: String,
    /// Stroke width in pixels.
    pub weight: u32,
    /// Stroke opacity, 0.0 to 1.0.
    pub opacity: f64,
}

impl Default for LineConfig {
    fn default() -> Self {
        Self {
            default_color: "#007bff".to_string(),
            triggered_color: "#f39c12".to_string(), // orange
            weight: 6,
            opacity: 0.9,
        }
    }
}

/// Configuration parameters for rendering a journey.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Route line style.
    pub line: LineConfig,
    /// Stop name that triggers the color change.
    /// Matched as a case-insensitive substring of step endpoint names.
    pub landmark: String,
    /// Fraction of the path that must already be revealed before the
    /// trigger can fire. Strictly greater than, not equal.
    pub trigger_fraction: f64,
    /// Where the map looks before the camera is fitted to the route.
    pub initial_center: GeoPoint,
    /// Zoom level before the camera is fitted to the route.
    pub initial_zoom: u8,
    /// Time between animation frames.
    pub frame_interval: Duration,
}

impl RenderConfig {
    /// Returns a copy with a different landmark.
    pub fn with_landmark(mut self, landmark: impl Into<String>) -> Self {
        self.landmark = landmark.into();
        self
    }

    /// Returns a copy with a different frame interval.
    pub fn with_frame_interval(mut self, frame_interval: Duration) -> Self {
        self.frame_interval = frame_interval;
        self
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            line: LineConfig::default(),
            landmark: "Semanggi".to_string(),
            trigger_fraction: 0.5,
            initial_center: GeoPoint::new(-6.2, 106.8), // Jakarta
            initial_zoom: 12,
            frame_interval: Duration::from_millis(16), // ~60 Hz
        }
    }
}
