use thiserror::Error;

/// Setup mistakes. These abort initialisation of a pinned region.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("travel distance must be a positive length in px, got {0:?}")]
    InvalidTravelDistance(String),
    #[error("pinned region has no element to measure")]
    MissingRegion,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnimationError {
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigError),
    /// Element not laid out yet or detached. Recovered on the next tick.
    #[error("measurement unavailable: {0}")]
    Measurement(String),
    #[error("no viewport available in this environment")]
    EnvironmentUnavailable,
}

impl AnimationError {
    /// Only configuration errors are allowed to stop a section from animating.
    pub fn is_fatal(&self) -> bool {
        matches!(self, AnimationError::Configuration(_))
    }
}
