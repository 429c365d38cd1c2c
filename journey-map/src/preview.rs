//! Settings for the command-line preview.
//!
//! The preview binary replays a saved solver result against a logging
//! surface. It is configured entirely through environment variables.

use std::path::PathBuf;
use std::time::Duration;

use crate::render::RenderConfig;

/// Error returned when preview settings are missing or malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PreviewConfigError {
    /// `JOURNEY_FILE` is not set
    #[error("JOURNEY_FILE must point to a solver result JSON file")]
    MissingJourneyFile,

    /// `FRAME_INTERVAL_MS` is not a positive integer
    #[error("FRAME_INTERVAL_MS must be a positive integer, got {0:?}")]
    InvalidFrameInterval(String),
}

/// Preview binary settings.
#[derive(Debug, Clone)]
pub struct PreviewConfig {
    /// Solver result to render.
    pub journey_file: PathBuf,

    /// Rendering parameters.
    pub render: RenderConfig,
}

impl PreviewConfig {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, PreviewConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`, which maps a variable name to its
    /// value.
    ///
    /// - `JOURNEY_FILE` (required): path to the solver result
    /// - `FRAME_INTERVAL_MS` (optional): milliseconds between frames
    /// - `LANDMARK` (optional): stop name that triggers the color change
    pub fn from_lookup<F>(lookup: F) -> Result<Self, PreviewConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let journey_file = lookup("JOURNEY_FILE")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .ok_or(PreviewConfigError::MissingJourneyFile)?;

        let mut render = RenderConfig::default();

        if let Some(raw) = lookup("FRAME_INTERVAL_MS") {
            let millis = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|ms| *ms > 0)
                .ok_or_else(|| PreviewConfigError::InvalidFrameInterval(raw.clone()))?;
            render = render.with_frame_interval(Duration::from_millis(millis));
        }

        if let Some(landmark) = lookup("LANDMARK").filter(|v| !v.trim().is_empty()) {
            render = render.with_landmark(landmark.trim());
        }

        Ok(Self {
            journey_file,
            render,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn journey_file_required() {
        let err = PreviewConfig::from_lookup(lookup(&[])).unwrap_err();
        assert_eq!(err, PreviewConfigError::MissingJourneyFile);

        let err = PreviewConfig::from_lookup(lookup(&[("JOURNEY_FILE", "")])).unwrap_err();
        assert_eq!(err, PreviewConfigError::MissingJourneyFile);
    }

    #[test]
    fn defaults() {
        let config =
            PreviewConfig::from_lookup(lookup(&[("JOURNEY_FILE", "route.json")])).unwrap();
        assert_eq!(config.journey_file, PathBuf::from("route.json"));
        assert_eq!(config.render.frame_interval, Duration::from_millis(16));
        assert_eq!(config.render.landmark, "Semanggi");
    }

    #[test]
    fn overrides() {
        let config = PreviewConfig::from_lookup(lookup(&[
            ("JOURNEY_FILE", "route.json"),
            ("FRAME_INTERVAL_MS", " 40 "),
            ("LANDMARK", "Harmoni"),
        ]))
        .unwrap();
        assert_eq!(config.render.frame_interval, Duration::from_millis(40));
        assert_eq!(config.render.landmark, "Harmoni");
    }

    #[test]
    fn invalid_frame_interval() {
        for bad in ["0", "-5", "fast"] {
            let err = PreviewConfig::from_lookup(lookup(&[
                ("JOURNEY_FILE", "route.json"),
                ("FRAME_INTERVAL_MS", bad),
            ]))
            .unwrap_err();
            assert_eq!(
                err,
                PreviewConfigError::InvalidFrameInterval(bad.to_string())
            );
        }
    }
}
