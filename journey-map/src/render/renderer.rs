//! Render orchestration.

use serde::Serialize;
use tracing::{info, warn};

use crate::domain::{BoundingBox, Journey};
use crate::wire::{JourneyInput, convert_journey};

use super::animate::{AnimationOutcome, JourneyAnimator};
use super::bounds::BoundsAccumulator;
use super::config::RenderConfig;
use super::markers::{MarkerPlacer, MarkerSpec};
use super::path::PathBuilder;
use super::scheduler::{CancelToken, Scheduler};
use super::surface::DisplaySurface;

/// Everything placed by [`Renderer::render`], plus the animation still to run.
#[derive(Debug)]
pub struct Rendered<'j> {
    /// Animator for the route line, with nothing revealed yet.
    pub animator: JourneyAnimator<'j>,
    /// Markers in placement order.
    pub markers: Vec<MarkerSpec>,
    /// Path points followed by marker positions.
    pub bounds: BoundsAccumulator,
    /// Box the camera was fitted to, if anything was placed.
    pub fitted: Option<BoundingBox>,
}

/// Summary of one render pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderReport {
    /// True when the input had nothing to render and the map was untouched.
    pub skipped: bool,
    /// Number of markers placed.
    pub markers: usize,
    /// Number of points in the route path.
    pub path_len: usize,
    /// Number of points revealed before the animation ended.
    pub points_revealed: usize,
    /// Whether the landmark color change happened.
    pub color_changed: bool,
    /// Final line color, if a path was animated.
    pub final_color: Option<String>,
    /// Box the camera was fitted to.
    pub fitted_bounds: Option<BoundingBox>,
    /// How the animation ended. `None` when skipped.
    pub outcome: Option<AnimationOutcome>,
}

impl RenderReport {
    fn skipped() -> Self {
        Self {
            skipped: true,
            markers: 0,
            path_len: 0,
            points_revealed: 0,
            color_changed: false,
            final_color: None,
            fitted_bounds: None,
            outcome: None,
        }
    }
}

/// Renders journeys onto a display surface.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    /// Create a renderer with the given configuration.
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// The renderer's configuration.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Turn solver output into a journey, or explain why there is none.
    ///
    /// Returns `None`, after logging a warning, when there is no input or
    /// the input has no step list. This is the only precondition for
    /// rendering.
    pub fn prepare(&self, input: Option<&JourneyInput>) -> Option<Journey> {
        match convert_journey(input) {
            Ok(journey) => Some(journey),
            Err(e) => {
                let solver_error = input.and_then(|i| i.error.as_deref());
                warn!(error = %e, solver_error, "No route result to visualize");
                None
            }
        }
    }

    /// Place the static parts of `journey` on `surface`.
    ///
    /// Sets the initial view, places all markers, and fits the camera once
    /// to the path and markers together. The returned animator has not
    /// revealed anything yet; drive it with [`JourneyAnimator::run`].
    pub fn render<'j, D>(&self, journey: &'j Journey, surface: &mut D) -> Rendered<'j>
    where
        D: DisplaySurface + ?Sized,
    {
        surface.set_view(self.config.initial_center, self.config.initial_zoom);

        let mut bounds = BoundsAccumulator::new();
        let path = PathBuilder::build(journey.path_coords(), &mut bounds);
        let animator = JourneyAnimator::new(journey, path, &self.config);

        let markers =
            MarkerPlacer::new(&mut *surface, &mut bounds).place_all(journey, animator.path());

        let fitted = bounds.bounding_box();
        if let Some(bbox) = &fitted {
            surface.fit_bounds(bbox);
        }

        info!(
            steps = journey.steps().len(),
            path_points = animator.path().len(),
            markers = markers.len(),
            "Rendered journey"
        );

        Rendered {
            animator,
            markers,
            bounds,
            fitted,
        }
    }

    /// Render solver output and run the line animation to the end.
    ///
    /// Never fails: bad input is logged and leaves the surface untouched.
    pub async fn render_journey<D, S>(
        &self,
        input: Option<&JourneyInput>,
        surface: &mut D,
        scheduler: &mut S,
        cancel: &CancelToken,
    ) -> RenderReport
    where
        D: DisplaySurface + ?Sized,
        S: Scheduler,
    {
        let Some(journey) = self.prepare(input) else {
            return RenderReport::skipped();
        };

        let Rendered {
            mut animator,
            markers,
            fitted,
            ..
        } = self.render(&journey, &mut *surface);

        let outcome = animator.run(surface, scheduler, cancel).await;
        let path_len = animator.path().len();

        RenderReport {
            skipped: false,
            markers: markers.len(),
            path_len,
            points_revealed: animator.revealed_count(),
            color_changed: animator.has_triggered(),
            final_color: (path_len > 0).then(|| animator.current_color().to_string()),
            fitted_bounds: fitted,
            outcome: Some(outcome),
        }
    }
}
