//! Journey types.
//!
//! A `Journey` is a computed transit route: an ordered list of travel and
//! transfer steps, plus the raw route geometry that the line is drawn from.
//! The geometry is independent of the step endpoints; a corridor segment
//! usually contributes many more points than its two stops.

use super::LonLat;

/// A named stop, with coordinates when the solver could locate it.
#[derive(Debug, Clone, PartialEq)]
pub struct StopRef {
    /// Stop name as shown to the rider
    pub name: String,
    /// Location in storage order, if known
    pub coords: Option<LonLat>,
}

impl StopRef {
    /// Creates a stop reference.
    pub fn new(name: impl Into<String>, coords: Option<LonLat>) -> Self {
        Self {
            name: name.into(),
            coords,
        }
    }
}

/// A ride along one corridor between two stops.
#[derive(Debug, Clone, PartialEq)]
pub struct TravelStep {
    /// Boarding stop
    pub from: StopRef,
    /// Alighting stop
    pub to: StopRef,
    /// Corridor ridden
    pub corridor: String,
    /// Intermediate stops passed without alighting, in travel order.
    ///
    /// These are names only; coordinates are resolved against the
    /// endpoints of the journey's travel steps.
    pub passed_stops: Vec<String>,
}

/// A change of corridor at a single stop.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferStep {
    /// Stop where the change happens
    pub stop_name: String,
    /// Location in storage order, if known
    pub coords: Option<LonLat>,
    /// Corridor being left
    pub from_corridor: String,
    /// Corridor being joined
    pub to_corridor: String,
}

/// One step of a journey.
#[derive(Debug, Clone, PartialEq)]
pub enum JourneyStep {
    /// Riding along a corridor
    Travel(TravelStep),
    /// Changing corridor
    Transfer(TransferStep),
}

impl JourneyStep {
    /// Returns the travel step, if this is one.
    pub fn as_travel(&self) -> Option<&TravelStep> {
        match self {
            JourneyStep::Travel(step) => Some(step),
            JourneyStep::Transfer(_) => None,
        }
    }

    /// Returns the transfer step, if this is one.
    pub fn as_transfer(&self) -> Option<&TransferStep> {
        match self {
            JourneyStep::Travel(_) => None,
            JourneyStep::Transfer(step) => Some(step),
        }
    }
}

/// A complete computed journey.
///
/// Read-only input to rendering: nothing in this crate mutates a journey
/// after construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Journey {
    steps: Vec<JourneyStep>,
    path_coords: Vec<LonLat>,
}

impl Journey {
    /// Creates a journey from its steps and route geometry.
    pub fn new(steps: Vec<JourneyStep>, path_coords: Vec<LonLat>) -> Self {
        Self { steps, path_coords }
    }

    /// Returns all steps in order.
    pub fn steps(&self) -> &[JourneyStep] {
        &self.steps
    }

    /// Returns the route geometry in storage order.
    pub fn path_coords(&self) -> &[LonLat] {
        &self.path_coords
    }

    /// Iterates over the travel steps in order.
    pub fn travel_steps(&self) -> impl Iterator<Item = &TravelStep> {
        self.steps.iter().filter_map(JourneyStep::as_travel)
    }

    /// Iterates over the transfer steps in order.
    pub fn transfer_steps(&self) -> impl Iterator<Item = &TransferStep> {
        self.steps.iter().filter_map(JourneyStep::as_transfer)
    }

    /// Finds the endpoint named `name`.
    ///
    /// Scans travel steps in order and returns the endpoint of the first
    /// step whose `from` or `to` name matches exactly (`from` is checked
    /// first). Returns `None` when no step mentions the name. An empty
    /// name never matches, so unnamed endpoints are never found.
    pub fn find_endpoint(&self, name: &str) -> Option<&StopRef> {
        if name.is_empty() {
            return None;
        }
        self.travel_steps().find_map(|step| {
            if step.from.name == name {
                Some(&step.from)
            } else if step.to.name == name {
                Some(&step.to)
            } else {
                None
            }
        })
    }

    /// Returns true if any travel step starts or ends at a stop whose name
    /// contains `landmark`, ignoring case.
    pub fn mentions_landmark(&self, landmark: &str) -> bool {
        let needle = landmark.to_lowercase();
        self.travel_steps().any(|step| {
            step.from.name.to_lowercase().contains(&needle)
                || step.to.name.to_lowercase().contains(&needle)
        })
    }
}
