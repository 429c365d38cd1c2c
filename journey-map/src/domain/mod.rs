//! Domain types for journey rendering.
//!
//! A journey is trusted input from the route solver. These types only
//! describe its shape; they do not validate that coordinates are sensible
//! or that consecutive steps connect.

mod geo;
mod journey;

pub use geo::{BoundingBox, GeoPoint, LonLat};
pub use journey::{Journey, JourneyStep, StopRef, TransferStep, TravelStep};
