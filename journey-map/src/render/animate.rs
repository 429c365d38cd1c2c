//! Progressive route line animation.
//!
//! The line is revealed one path point per frame. Once more than a set
//! fraction of the path is showing, and the journey passes through the
//! landmark stop, the line switches color for good.

use tracing::{debug, info};

use crate::domain::{GeoPoint, Journey};

use super::config::{LineConfig, RenderConfig};
use super::scheduler::{CancelToken, Scheduler};
use super::surface::{DisplaySurface, LineStyle};

/// Result of a single animation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// A point was revealed and more remain; schedule another tick.
    Continue,
    /// Every point is showing. No further ticks are needed.
    Finished,
}

/// How an animation run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationOutcome {
    /// Every point was revealed.
    Completed,
    /// The cancel token fired first.
    Cancelled,
}

/// Mutable animation progress, owned by one animator.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationState {
    /// Number of path points appended to the line so far.
    pub revealed_count: usize,
    /// Color the line is currently drawn in.
    pub current_color: String,
    /// Whether the color change has happened. Never reset.
    pub triggered: bool,
    /// Whether the line has been created on the surface.
    line_created: bool,
}

/// Drives the route line animation for one render.
///
/// Borrows the journey so the landmark check always runs against the full
/// step list, independent of how much of the path is revealed.
#[derive(Debug)]
pub struct JourneyAnimator<'j> {
    journey: &'j Journey,
    path: Vec<GeoPoint>,
    line: LineConfig,
    landmark: String,
    trigger_fraction: f64,
    state: AnimationState,
}

impl<'j> JourneyAnimator<'j> {
    /// Create an animator for `path`, with nothing revealed yet.
    pub fn new(journey: &'j Journey, path: Vec<GeoPoint>, config: &RenderConfig) -> Self {
        Self {
            journey,
            path,
            state: AnimationState {
                revealed_count: 0,
                current_color: config.line.default_color.clone(),
                triggered: false,
                line_created: false,
            },
            line: config.line.clone(),
            landmark: config.landmark.clone(),
            trigger_fraction: config.trigger_fraction,
        }
    }

    /// The full path being animated.
    pub fn path(&self) -> &[GeoPoint] {
        &self.path
    }

    /// Current progress.
    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    /// Number of points revealed so far.
    pub fn revealed_count(&self) -> usize {
        self.state.revealed_count
    }

    /// Color the line is currently drawn in.
    pub fn current_color(&self) -> &str {
        &self.state.current_color
    }

    /// Whether the color change has happened.
    pub fn has_triggered(&self) -> bool {
        self.state.triggered
    }

    /// Returns true once every point is revealed. An empty path is finished
    /// from the start.
    pub fn is_finished(&self) -> bool {
        self.state.revealed_count >= self.path.len()
    }

    fn style(&self) -> LineStyle {
        LineStyle {
            color: self.state.current_color.clone(),
            weight: self.line.weight,
            opacity: self.line.opacity,
        }
    }

    /// Whether the color change should fire on this tick.
    ///
    /// Progress is measured before the tick's point is appended.
    fn should_trigger(&self) -> bool {
        let threshold = self.path.len() as f64 * self.trigger_fraction;
        self.state.revealed_count as f64 > threshold
            && self.journey.mentions_landmark(&self.landmark)
    }

    /// Reveal the next point.
    ///
    /// The first tick creates the line. On the tick where the trigger
    /// fires, the line is restyled before that tick's point is appended,
    /// so the point is drawn in the new color. Ticking a finished animator
    /// does nothing.
    pub fn tick<D: DisplaySurface + ?Sized>(&mut self, surface: &mut D) -> TickOutcome {
        let Some(&point) = self.path.get(self.state.revealed_count) else {
            return TickOutcome::Finished;
        };

        if !self.state.line_created {
            surface.create_line(&self.style());
            self.state.line_created = true;
        }

        if !self.state.triggered && self.should_trigger() {
            self.state.triggered = true;
            self.state.current_color = self.line.triggered_color.clone();
            info!(
                landmark = %self.landmark,
                revealed = self.state.revealed_count,
                total = self.path.len(),
                color = %self.state.current_color,
                "Landmark passed, recoloring route line"
            );
            surface.restyle_line(&self.style());
        }

        surface.append_point(point);
        self.state.revealed_count += 1;

        if self.is_finished() {
            TickOutcome::Finished
        } else {
            TickOutcome::Continue
        }
    }

    /// Run the animation until every point is revealed or `cancel` fires.
    ///
    /// Suspends on `scheduler` between ticks. Resumes from wherever the
    /// animator currently is, so a renderer may tick once synchronously
    /// before handing over. Cancellation is checked before every tick.
    pub async fn run<D, S>(
        &mut self,
        surface: &mut D,
        scheduler: &mut S,
        cancel: &CancelToken,
    ) -> AnimationOutcome
    where
        D: DisplaySurface + ?Sized,
        S: Scheduler,
    {
        while !self.is_finished() {
            if self.state.revealed_count > 0 {
                scheduler.schedule_next().await;
            }
            if cancel.is_cancelled() {
                info!(
                    revealed = self.state.revealed_count,
                    total = self.path.len(),
                    "Route animation cancelled"
                );
                return AnimationOutcome::Cancelled;
            }
            self.tick(surface);
        }

        debug!(
            points = self.path.len(),
            triggered = self.state.triggered,
            "Route animation complete"
        );
        AnimationOutcome::Completed
    }
}
