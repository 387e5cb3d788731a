//! Workout text ingestion.
//!
//! This crate turns already-decoded workout log text into a
//! [`WorkoutRecord`](hevy_model::WorkoutRecord). It performs no I/O: document
//! decoding lives behind the [`TextSource`] trait and is supplied by the caller.
//!
//! # Input format
//!
//! ```text
//! Workout: Full Body Strength
//! Date: 2024-01-15
//!
//! Exercise: Bench Press
//! Sets: 3
//! Reps: 8, 8, 8
//! Weight: 135, 135, 140
//! ```
//!
//! Keywords are case-insensitive. Missing fields fall back to defaults
//! instead of failing the parse.
//!
//! # Example
//!
//! ```ignore
//! use hevy_ingest::parse_workout;
//!
//! let workout = parse_workout("Workout: Legs\nExercise: Squat\nSets: 2\nReps: 5, 5")?;
//! assert_eq!(workout.exercises[0].sets.len(), 2);
//! ```

mod block;
mod error;
mod numeric;
mod parser;
mod source;

// === Error Types ===
pub use error::{ParseError, Result};

// === Parsing ===
pub use block::{MAX_SET_COUNT, parse_exercise_block};
pub use numeric::{parse_real, parse_reals, parse_unsigned, parse_unsigneds};
pub use parser::{WorkoutParser, parse_exercises, parse_workout};

// === Decoder Boundary ===
pub use source::TextSource;
