//! Stop, transfer, origin and destination markers.
//!
//! Markers come from the step list, not from the animated path, with one
//! exception: origin and destination sit on the first and last path points.
//! Nothing is deduplicated. The same location may carry a stop marker and
//! the destination marker at once.

use askama::Template;
use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::{GeoPoint, Journey, LonLat, TransferStep, TravelStep};

use super::bounds::BoundsAccumulator;
use super::surface::DisplaySurface;

/// Visual kind of a marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerCategory {
    /// Journey origin
    Start,
    /// Journey destination
    End,
    /// Corridor change
    Transit,
    /// Stop boarded, alighted, or passed through
    Stop,
}

/// How a marker category is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IconStyle {
    /// Fill and glow color
    pub color: &'static str,
    /// Diameter in pixels
    pub size: u32,
    /// Border width in pixels
    pub border: u32,
    /// Glow radius in pixels
    pub glow: u32,
    /// CSS class on the icon element
    pub class_name: &'static str,
}

/// Inline HTML for an icon: a bordered, glowing dot.
#[derive(Template)]
#[template(
    source = "<div style=\"width:{{ icon.size }}px;height:{{ icon.size }}px;\
              background:{{ icon.color }};border:{{ icon.border }}px solid white;\
              border-radius:50%;box-shadow:0 0 {{ icon.glow }}px {{ icon.color }};\"></div>",
    ext = "html"
)]
struct IconTemplate<'a> {
    icon: &'a IconStyle,
}

/// Popup for a stop boarded, alighted, or passed through.
#[derive(Template)]
#[template(source = "<b>{{ name }}</b><br>Corridor {{ corridor }}", ext = "html")]
struct StopLabel<'a> {
    name: &'a str,
    corridor: &'a str,
}

/// Popup for a corridor change.
#[derive(Template)]
#[template(
    source = "<b>Transit:</b> {{ stop }}<br>{{ from }} → {{ to }}",
    ext = "html"
)]
struct TransitLabel<'a> {
    stop: &'a str,
    from: &'a str,
    to: &'a str,
}

#[derive(Template)]
#[template(source = "<b>Origin stop</b>", ext = "html")]
struct StartLabel;

#[derive(Template)]
#[template(source = "<b>Destination stop</b>", ext = "html")]
struct EndLabel;

impl IconStyle {
    /// Offset of the popup tip from the icon's anchor: centered, half the
    /// icon height above.
    pub fn popup_anchor(&self) -> (i32, i32) {
        (0, -((self.size / 2) as i32))
    }

    /// Inline HTML for the icon.
    pub fn html(&self) -> Result<String, askama::Error> {
        IconTemplate { icon: self }.render()
    }
}

impl MarkerCategory {
    /// Icon for this category.
    pub fn icon(self) -> IconStyle {
        match self {
            MarkerCategory::Start => IconStyle {
                color: "#2ecc71",
                size: 20,
                border: 3,
                glow: 4,
                class_name: "grab-point",
            },
            MarkerCategory::End => IconStyle {
                color: "#e74c3c",
                size: 20,
                border: 3,
                glow: 4,
                class_name: "grab-point",
            },
            MarkerCategory::Transit => IconStyle {
                color: "#8e44ad",
                size: 24,
                border: 3,
                glow: 6,
                class_name: "grab-point-transit",
            },
            MarkerCategory::Stop => IconStyle {
                color: "#007bff",
                size: 10,
                border: 2,
                glow: 2,
                class_name: "grab-stop",
            },
        }
    }
}

/// A marker to place on the map.
///
/// Carries everything a map widget needs to draw it: the icon style, the
/// icon's own HTML, where its popup opens, and the popup content.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerSpec {
    /// Where the marker sits
    pub position: GeoPoint,
    /// What it looks like
    pub category: MarkerCategory,
    /// Icon for the category
    pub icon: IconStyle,
    /// Inline HTML drawing the icon
    pub icon_html: String,
    /// Popup offset from the icon anchor
    pub popup_anchor: (i32, i32),
    /// Popup content
    pub label_html: String,
}

impl MarkerSpec {
    /// Build a marker of `category` at `position`, rendering its icon and
    /// popup label.
    pub fn new(
        position: GeoPoint,
        category: MarkerCategory,
        label: &impl Template,
    ) -> Result<Self, askama::Error> {
        let icon = category.icon();
        Ok(Self {
            position,
            category,
            icon,
            icon_html: icon.html()?,
            popup_anchor: icon.popup_anchor(),
            label_html: label.render()?,
        })
    }
}

/// Places every marker for a journey.
///
/// Placement is synchronous and follows step order. Each placed marker is
/// also added to the bounds accumulator.
pub struct MarkerPlacer<'a, D: ?Sized> {
    surface: &'a mut D,
    bounds: &'a mut BoundsAccumulator,
    placed: Vec<MarkerSpec>,
}

impl<'a, D: DisplaySurface + ?Sized> MarkerPlacer<'a, D> {
    /// Create a placer drawing onto `surface`.
    pub fn new(surface: &'a mut D, bounds: &'a mut BoundsAccumulator) -> Self {
        Self {
            surface,
            bounds,
            placed: Vec::new(),
        }
    }

    /// Place all markers for `journey` and return them in placement order.
    ///
    /// `path` is the display path from [`PathBuilder`](super::PathBuilder);
    /// origin and destination markers are placed only when it has more
    /// than one point.
    pub fn place_all(mut self, journey: &Journey, path: &[GeoPoint]) -> Vec<MarkerSpec> {
        for step in journey.steps() {
            if let Some(travel) = step.as_travel() {
                self.place_travel(journey, travel);
            } else if let Some(transfer) = step.as_transfer() {
                self.place_transfer(transfer);
            }
        }

        if let [first, .., last] = path {
            self.place(*first, MarkerCategory::Start, &StartLabel);
            self.place(*last, MarkerCategory::End, &EndLabel);
        }

        debug!(markers = self.placed.len(), "Placed journey markers");
        self.placed
    }

    fn place_travel(&mut self, journey: &Journey, step: &TravelStep) {
        for stop in [&step.from, &step.to] {
            if let Some(coords) = stop.coords {
                self.place_stop(coords, &stop.name, &step.corridor);
            }
        }

        for name in &step.passed_stops {
            match resolve_passed_stop(journey, name) {
                Some(coords) => self.place_stop(coords, name, &step.corridor),
                None => debug!(stop = %name, "No coordinates for passed stop, skipping"),
            }
        }
    }

    fn place_transfer(&mut self, step: &TransferStep) {
        match step.coords {
            Some(coords) => self.place(
                coords.to_display(),
                MarkerCategory::Transit,
                &TransitLabel {
                    stop: &step.stop_name,
                    from: &step.from_corridor,
                    to: &step.to_corridor,
                },
            ),
            None => debug!(stop = %step.stop_name, "No coordinates for transfer, skipping"),
        }
    }

    fn place_stop(&mut self, coords: LonLat, name: &str, corridor: &str) {
        self.place(
            coords.to_display(),
            MarkerCategory::Stop,
            &StopLabel { name, corridor },
        );
    }

    fn place(&mut self, position: GeoPoint, category: MarkerCategory, label: &impl Template) {
        let marker = match MarkerSpec::new(position, category, label) {
            Ok(marker) => marker,
            Err(e) => {
                warn!(error = %e, ?category, "Failed to render marker, skipping");
                return;
            }
        };
        self.surface.place_marker(&marker);
        self.bounds.push(position);
        self.placed.push(marker);
    }
}

/// Location of a passed-through stop.
///
/// Uses the first travel step endpoint carrying the name. Returns `None`
/// when no step mentions it or that endpoint has no coordinates.
pub fn resolve_passed_stop(journey: &Journey, name: &str) -> Option<LonLat> {
    journey.find_endpoint(name)?.coords
}
