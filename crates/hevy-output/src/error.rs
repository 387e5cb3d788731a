//! Error types for payload assembly and request preparation.

use thiserror::Error;

/// The workout handed to the payload builder is structurally unusable.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// No workout object was supplied.
    #[error("workout data is missing or not an object")]
    MissingWorkout,

    /// The workout has no `exercises` list.
    #[error("workout data has no exercises list")]
    MissingExercises,

    /// The workout object does not have the mapped-workout shape.
    #[error("invalid workout data: {0}")]
    InvalidWorkout(#[from] serde_json::Error),

    /// Unmapped exercises were rejected by policy.
    #[error("{} exercise(s) could not be mapped: {}", .0.len(), .0.join(", "))]
    UnmappedExercises(Vec<String>),
}

/// Required request configuration is absent.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Hevy API key is required")]
    MissingApiKey,
}
