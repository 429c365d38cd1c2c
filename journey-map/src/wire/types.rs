//! Route solver DTOs.
//!
//! These types map directly to the solver's JSON output. They use `Option`
//! liberally because the solver omits keys or sends null when it could not
//! resolve a stop.

use std::fmt;
use std::path::Path;

use serde::Deserialize;

use crate::domain::LonLat;

use super::error::InputError;

/// The solver's result for one route request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JourneyInput {
    /// Ordered travel and transfer steps.
    #[serde(default)]
    pub detailed_journey: Option<Vec<WireStep>>,

    /// Full route geometry as `[lon, lat]` pairs.
    #[serde(default, alias = "pathCoords")]
    pub path_coords: Option<Vec<LonLat>>,

    /// Error message, set instead of a route when the solver failed.
    #[serde(default)]
    pub error: Option<String>,
}

impl JourneyInput {
    /// Parses solver output from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, InputError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses solver output from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| InputError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}

/// One step of `detailed_journey`, tagged by its `type` key.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WireStep {
    /// `"type": "travel"`
    Travel(WireTravelStep),
    /// `"type": "transfer"`
    Transfer(WireTransferStep),
    /// Any other step type; carries nothing we can draw.
    #[serde(other)]
    Unknown,
}

/// A ride along one corridor.
#[derive(Debug, Clone, Deserialize)]
pub struct WireTravelStep {
    /// Corridor ridden.
    #[serde(default)]
    pub koridor: Option<WireCorridor>,

    /// Boarding stop name.
    #[serde(default)]
    pub dari: Option<String>,

    /// Alighting stop name.
    #[serde(default)]
    pub ke: Option<String>,

    /// Intermediate stops passed through.
    #[serde(default)]
    pub melewati: Option<Vec<String>>,

    /// Boarding stop location.
    #[serde(default)]
    pub coords_dari: Option<LonLat>,

    /// Alighting stop location.
    #[serde(default)]
    pub coords_ke: Option<LonLat>,
}

/// A change of corridor at a stop.
#[derive(Debug, Clone, Deserialize)]
pub struct WireTransferStep {
    /// Stop name.
    #[serde(default)]
    pub halte: Option<String>,

    /// Corridor being left.
    #[serde(default)]
    pub dari_koridor: Option<WireCorridor>,

    /// Corridor being joined.
    #[serde(default)]
    pub ke_koridor: Option<WireCorridor>,

    /// Stop location.
    #[serde(default)]
    pub coords: Option<LonLat>,
}

/// A corridor identifier, which the solver sends as either a string
/// (`"9A"`) or a bare number (`1`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum WireCorridor {
    Text(String),
    Number(serde_json::Number),
}

impl fmt::Display for WireCorridor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WireCorridor::Text(s) => f.write_str(s),
            WireCorridor::Number(n) => write!(f, "{n}"),
        }
    }
}
