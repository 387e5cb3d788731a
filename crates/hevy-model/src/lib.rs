//! Data model shared by the workout import stages.
//!
//! The parser produces [`WorkoutRecord`] values, the mapper annotates them
//! into [`MappedWorkout`] values, and the payload builder consumes those.

pub mod mapping;
pub mod options;
pub mod workout;

pub use mapping::{
    Confidence, MappedExercise, MappedWorkout, MappingReport, MappingResult, MappingStats,
};
pub use options::{DEFAULT_ROUTINE_NAME, ParseOptions, UnmappedPolicy};
pub use workout::{ExerciseRecord, SetRecord, WorkoutRecord};
