use thiserror::Error;

/// Asset loading failures. Surfaced once to the caller, never retried.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("asset not found: {0}")]
    NotFound(String),

    #[error("failed to parse asset {path}: {reason}")]
    Parse { path: String, reason: String },

    #[error("load task failed: {0}")]
    Join(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Invalid camera path configuration, rejected before any camera mutation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("animation speed must be positive and finite, got {0}")]
    NonPositiveSpeed(f32),

    #[error("look mode `angle` requires pan/tilt angles")]
    MissingAngles,

    #[error("path is incomplete: {0}")]
    IncompletePath(&'static str),
}

/// Preset store failures. No slot content is mutated on error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PresetError {
    #[error("preset slot {0} is empty or out of range")]
    NotFound(usize),

    #[error("invalid editor state: {0}")]
    InvalidState(&'static str),
}

#[derive(Debug, Error)]
pub enum CarvisError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Preset(#[from] PresetError),

    #[error("unknown vehicle id: {0}")]
    UnknownVehicle(String),

    #[error("vehicle {0} is not preloaded")]
    NotPreloaded(String),
}
