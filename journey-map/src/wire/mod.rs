//! Route solver output.
//!
//! The solver hands over its result as JSON. Key characteristics:
//! - Field names are the solver's own (`detailed_journey`, `koridor`,
//!   `dari`, `ke`, `melewati`, ...)
//! - Coordinates are `[lon, lat]` arrays and may be null when the solver
//!   could not locate a stop
//! - Corridors are sometimes numbers rather than strings
//! - Unknown keys and unknown step types are ignored

mod convert;
mod error;
mod types;

pub use convert::convert_journey;
pub use error::InputError;
pub use types::{JourneyInput, WireCorridor, WireStep, WireTransferStep, WireTravelStep};
