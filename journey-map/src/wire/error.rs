//! Input error types.

use std::path::PathBuf;

/// Errors reading or interpreting the solver's journey output.
///
/// None of these are fatal to the page: rendering code logs them and shows
/// nothing.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// No journey was provided at all
    #[error("no journey to render")]
    MissingJourney,

    /// The journey has no step list
    #[error("journey has no detailed_journey steps")]
    MissingSteps,

    /// The journey JSON could not be parsed
    #[error("invalid journey JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The journey file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(InputError::MissingJourney.to_string(), "no journey to render");
        assert_eq!(
            InputError::MissingSteps.to_string(),
            "journey has no detailed_journey steps"
        );

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = InputError::from(json_err);
        assert!(err.to_string().starts_with("invalid journey JSON: "));

        let err = InputError::Io {
            path: PathBuf::from("/tmp/journey.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(err.to_string(), "failed to read /tmp/journey.json: gone");
    }
}
