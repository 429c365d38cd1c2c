//! Display surface abstraction.
//!
//! The map widget (tiles, camera, DOM) lives outside this crate. Rendering
//! talks to it only through [`DisplaySurface`], so the same engine can
//! drive a browser map, a recorder for tests, or a logger.

use serde::Serialize;
use tracing::{debug, info};

use crate::domain::{BoundingBox, GeoPoint};

use super::markers::MarkerSpec;

/// Stroke style of the route line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineStyle {
    /// CSS color
    pub color: String,
    /// Stroke width in pixels
    pub weight: u32,
    /// Stroke opacity
    pub opacity: f64,
}

/// Operations the map widget provides.
///
/// A surface holds at most one route line. All calls come from a single
/// control flow; implementations need no internal locking.
pub trait DisplaySurface {
    /// Point the camera at `center` with the given zoom.
    fn set_view(&mut self, center: GeoPoint, zoom: u8);

    /// Create the route line, initially without points, and attach it.
    fn create_line(&mut self, style: &LineStyle);

    /// Append a point to the end of the route line.
    fn append_point(&mut self, point: GeoPoint);

    /// Re-create the route line with a new style, keeping its points.
    fn restyle_line(&mut self, style: &LineStyle);

    /// Place a marker. Markers are never moved or removed.
    fn place_marker(&mut self, marker: &MarkerSpec);

    /// Move the camera so the whole box is visible.
    fn fit_bounds(&mut self, bounds: &BoundingBox);
}

/// A single recorded surface call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum SurfaceCommand {
    SetView { center: GeoPoint, zoom: u8 },
    CreateLine { style: LineStyle },
    AppendPoint { point: GeoPoint },
    RestyleLine { style: LineStyle },
    PlaceMarker { marker: MarkerSpec },
    FitBounds { bounds: BoundingBox },
}

/// The route line as a recording surface currently shows it.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedLine {
    /// Current style
    pub style: LineStyle,
    /// Points appended so far
    pub points: Vec<GeoPoint>,
}

/// In-memory surface that records every call.
///
/// The command list serializes to JSON, so a browser client can replay a
/// render one command per animation frame.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    commands: Vec<SurfaceCommand>,
    line: Option<RecordedLine>,
}

impl RecordingSurface {
    /// Create an empty recording.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call so far, in order.
    pub fn commands(&self) -> &[SurfaceCommand] {
        &self.commands
    }

    /// The route line, if one has been created.
    pub fn line(&self) -> Option<&RecordedLine> {
        self.line.as_ref()
    }

    /// Markers placed so far, in placement order.
    pub fn markers(&self) -> impl Iterator<Item = &MarkerSpec> {
        self.commands.iter().filter_map(|c| match c {
            SurfaceCommand::PlaceMarker { marker } => Some(marker),
            _ => None,
        })
    }

    /// Every box the camera was fitted to.
    pub fn fitted_bounds(&self) -> Vec<BoundingBox> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                SurfaceCommand::FitBounds { bounds } => Some(*bounds),
                _ => None,
            })
            .collect()
    }

    /// Consume the recording, returning its commands.
    pub fn into_commands(self) -> Vec<SurfaceCommand> {
        self.commands
    }
}

impl DisplaySurface for RecordingSurface {
    fn set_view(&mut self, center: GeoPoint, zoom: u8) {
        self.commands.push(SurfaceCommand::SetView { center, zoom });
    }

    fn create_line(&mut self, style: &LineStyle) {
        self.line = Some(RecordedLine {
            style: style.clone(),
            points: Vec::new(),
        });
        self.commands.push(SurfaceCommand::CreateLine {
            style: style.clone(),
        });
    }

    fn append_point(&mut self, point: GeoPoint) {
        if let Some(line) = self.line.as_mut() {
            line.points.push(point);
        }
        self.commands.push(SurfaceCommand::AppendPoint { point });
    }

    fn restyle_line(&mut self, style: &LineStyle) {
        if let Some(line) = self.line.as_mut() {
            line.style = style.clone();
        }
        self.commands.push(SurfaceCommand::RestyleLine {
            style: style.clone(),
        });
    }

    fn place_marker(&mut self, marker: &MarkerSpec) {
        self.commands.push(SurfaceCommand::PlaceMarker {
            marker: marker.clone(),
        });
    }

    fn fit_bounds(&mut self, bounds: &BoundingBox) {
        self.commands.push(SurfaceCommand::FitBounds { bounds: *bounds });
    }
}

/// Surface wrapper that logs each call before forwarding it.
///
/// Point appends log at debug level since there is one per frame.
#[derive(Debug, Clone, Default)]
pub struct TracingSurface<S> {
    inner: S,
}

impl<S: DisplaySurface> TracingSurface<S> {
    /// Wrap `inner`.
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    /// The wrapped surface.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Unwrap, returning the wrapped surface.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: DisplaySurface> DisplaySurface for TracingSurface<S> {
    fn set_view(&mut self, center: GeoPoint, zoom: u8) {
        info!(lat = center.lat, lng = center.lng, zoom, "Set initial view");
        self.inner.set_view(center, zoom);
    }

    fn create_line(&mut self, style: &LineStyle) {
        info!(color = %style.color, weight = style.weight, "Create route line");
        self.inner.create_line(style);
    }

    fn append_point(&mut self, point: GeoPoint) {
        debug!(lat = point.lat, lng = point.lng, "Append route point");
        self.inner.append_point(point);
    }

    fn restyle_line(&mut self, style: &LineStyle) {
        info!(color = %style.color, "Restyle route line");
        self.inner.restyle_line(style);
    }

    fn place_marker(&mut self, marker: &MarkerSpec) {
        info!(
            category = ?marker.category,
            icon_class = marker.icon.class_name,
            icon_size = marker.icon.size,
            lat = marker.position.lat,
            lng = marker.position.lng,
            "Place marker"
        );
        self.inner.place_marker(marker);
    }

    fn fit_bounds(&mut self, bounds: &BoundingBox) {
        info!(
            south = bounds.south_west.lat,
            west = bounds.south_west.lng,
            north = bounds.north_east.lat,
            east = bounds.north_east.lng,
            "Fit camera to route"
        );
        self.inner.fit_bounds(bounds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::markers::MarkerCategory;
    use askama::Template;

    #[derive(Template)]
    #[template(source = "{{ html|safe }}", ext = "html")]
    struct StaticLabel {
        html: &'static str,
    }

    fn style(color: &str) -> LineStyle {
        LineStyle {
            color: color.to_string(),
            weight: 6,
            opacity: 0.9,
        }
    }

    #[test]
    fn restyle_keeps_points() {
        let mut surface = RecordingSurface::new();
        surface.create_line(&style("#007bff"));
        surface.append_point(GeoPoint::new(1.0, 2.0));
        surface.append_point(GeoPoint::new(3.0, 4.0));
        surface.restyle_line(&style("#f39c12"));
        surface.append_point(GeoPoint::new(5.0, 6.0));

        let line = surface.line().unwrap();
        assert_eq!(line.style.color, "#f39c12");
        assert_eq!(line.points.len(), 3);
        assert_eq!(line.points[2], GeoPoint::new(5.0, 6.0));
        assert_eq!(surface.commands().len(), 5);
    }

    #[test]
    fn records_markers_and_bounds() {
        let mut surface = RecordingSurface::new();
        let marker = MarkerSpec::new(
            GeoPoint::new(1.0, 2.0),
            MarkerCategory::Stop,
            &StaticLabel { html: "<b>A</b>" },
        )
        .unwrap();
        surface.place_marker(&marker);
        let bounds = BoundingBox::from_points(&[marker.position]).unwrap();
        surface.fit_bounds(&bounds);

        assert_eq!(surface.markers().collect::<Vec<_>>(), vec![&marker]);
        assert_eq!(surface.fitted_bounds(), vec![bounds]);
        assert!(surface.line().is_none());
    }

    #[test]
    fn commands_serialize_with_op_tag() {
        let mut surface = RecordingSurface::new();
        surface.set_view(GeoPoint::new(-6.2, 106.8), 12);
        surface.append_point(GeoPoint::new(1.0, 2.0));

        let json = serde_json::to_value(surface.commands()).unwrap();
        assert_eq!(json[0]["op"], "set_view");
        assert_eq!(json[0]["zoom"], 12);
        assert_eq!(json[1]["op"], "append_point");
        assert_eq!(json[1]["point"]["lat"], 1.0);
        assert_eq!(json[1]["point"]["lng"], 2.0);
    }

    #[test]
    fn placed_marker_serializes_icon() {
        let mut surface = RecordingSurface::new();
        let marker = MarkerSpec::new(
            GeoPoint::new(1.0, 2.0),
            MarkerCategory::Start,
            &StaticLabel {
                html: "<b>Origin stop</b>",
            },
        )
        .unwrap();
        surface.place_marker(&marker);

        let json = serde_json::to_value(surface.commands()).unwrap();
        let placed = &json[0]["marker"];
        assert_eq!(json[0]["op"], "place_marker");
        assert_eq!(placed["category"], "start");
        assert_eq!(placed["icon"]["color"], "#2ecc71");
        assert_eq!(placed["icon"]["size"], 20);
        assert_eq!(placed["icon"]["class_name"], "grab-point");
        assert_eq!(placed["popup_anchor"], serde_json::json!([0, -10]));
        assert!(
            placed["icon_html"]
                .as_str()
                .unwrap()
                .contains("background:#2ecc71")
        );
        assert_eq!(placed["label_html"], "<b>Origin stop</b>");
    }

    #[test]
    fn tracing_surface_forwards() {
        let mut surface = TracingSurface::new(RecordingSurface::new());
        surface.set_view(GeoPoint::new(0.0, 0.0), 3);
        surface.create_line(&style("#007bff"));
        surface.append_point(GeoPoint::new(1.0, 1.0));

        assert_eq!(surface.inner().commands().len(), 3);
        let recording = surface.into_inner();
        assert_eq!(recording.line().unwrap().points.len(), 1);
    }
}
