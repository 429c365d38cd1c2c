//! Journey visualization engine.
//!
//! Turns a journey into map primitives: an animated route line, markers
//! for every stop the rider meets, and a camera fit around all of it.
//! Everything goes through the [`DisplaySurface`] and [`Scheduler`] seams,
//! so the engine runs the same against a browser map or a test recorder.
//!
//! Rendering order for one journey:
//! 1. The path is built from the route geometry ([`PathBuilder`])
//! 2. Markers are placed from the step list ([`MarkerPlacer`])
//! 3. The camera is fitted once to the path and markers together
//! 4. The line is revealed frame by frame ([`JourneyAnimator`])

mod animate;
mod bounds;
mod config;
mod markers;
mod path;
mod renderer;
mod scheduler;
mod surface;


pub use animate::{AnimationOutcome, AnimationState, JourneyAnimator, TickOutcome};
pub use bounds::BoundsAccumulator;
pub use config::{LineConfig, RenderConfig};
pub use markers::{IconStyle, MarkerCategory, MarkerPlacer, MarkerSpec, resolve_passed_stop};
pub use path::PathBuilder;
pub use renderer::{RenderReport, Rendered, Renderer};
pub use scheduler::{CancelToken, ImmediateScheduler, IntervalScheduler, Scheduler};
pub use surface::{
    DisplaySurface, LineStyle, RecordedLine, RecordingSurface, SurfaceCommand, TracingSurface,
};
