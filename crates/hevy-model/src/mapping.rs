//! Name-resolution results and the annotated exercise types.
//!
//! A [`MappedExercise`] always carries the original [`ExerciseRecord`]
//! untouched next to the three mapping fields, so downstream stages can
//! tell which values came from the source text and which from the lookup.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::workout::{ExerciseRecord, WorkoutRecord};

/// Grade of a name-resolution decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// Normalized name equals a lookup key.
    Exact,
    /// Normalized name contains a key, or a key contains the name.
    Partial,
    /// No key matched.
    Unmapped,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Partial => "partial",
            Self::Unmapped => "unmapped",
        }
    }

    pub fn is_mapped(&self) -> bool {
        !matches!(self, Self::Unmapped)
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of resolving one exercise name.
///
/// `id` is `None` exactly when `confidence` is [`Confidence::Unmapped`];
/// the constructors are the only way to build one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingResult {
    id: Option<String>,
    title: String,
    confidence: Confidence,
}

impl MappingResult {
    pub fn exact(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            title: title.into(),
            confidence: Confidence::Exact,
        }
    }

    pub fn partial(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            title: title.into(),
            confidence: Confidence::Partial,
        }
    }

    /// Fallback result; the title echoes the name as written.
    pub fn unmapped(original_name: impl Into<String>) -> Self {
        Self {
            id: None,
            title: original_name.into(),
            confidence: Confidence::Unmapped,
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn confidence(&self) -> Confidence {
        self.confidence
    }
}

/// An exercise record annotated with its mapping decision.
///
/// Serializes flat: the original record fields followed by
/// `canonical_id`, `canonical_title` and `confidence`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappedExercise {
    #[serde(flatten)]
    exercise: ExerciseRecord,
    canonical_id: Option<String>,
    canonical_title: String,
    confidence: Confidence,
}

impl MappedExercise {
    pub fn new(exercise: ExerciseRecord, mapping: MappingResult) -> Self {
        let MappingResult {
            id,
            title,
            confidence,
        } = mapping;
        Self {
            exercise,
            canonical_id: id,
            canonical_title: title,
            confidence,
        }
    }

    /// The record as produced by the parser.
    pub fn exercise(&self) -> &ExerciseRecord {
        &self.exercise
    }

    pub fn exercise_name(&self) -> &str {
        &self.exercise.exercise_name
    }

    pub fn canonical_id(&self) -> Option<&str> {
        self.canonical_id.as_deref()
    }

    pub fn canonical_title(&self) -> &str {
        &self.canonical_title
    }

    pub fn confidence(&self) -> Confidence {
        self.confidence
    }

    pub fn is_mapped(&self) -> bool {
        self.canonical_id.is_some()
    }

    pub fn into_exercise(self) -> ExerciseRecord {
        self.exercise
    }
}

/// Counts over one batch of mapping decisions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingStats {
    pub total: usize,
    pub mapped: usize,
    pub unmapped: usize,
}

impl MappingStats {
    pub fn from_exercises(exercises: &[MappedExercise]) -> Self {
        let mapped = exercises.iter().filter(|e| e.is_mapped()).count();
        Self {
            total: exercises.len(),
            mapped,
            unmapped: exercises.len() - mapped,
        }
    }
}

/// Result of mapping a batch of exercises.
///
/// Always satisfies `stats.mapped + stats.unmapped == stats.total == exercises.len()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappingReport {
    exercises: Vec<MappedExercise>,
    unmapped: Vec<String>,
    stats: MappingStats,
}

impl MappingReport {
    /// Build a report, deriving the unmapped list and stats from the exercises.
    pub fn from_exercises(exercises: Vec<MappedExercise>) -> Self {
        let unmapped = exercises
            .iter()
            .filter(|e| !e.is_mapped())
            .map(|e| e.exercise_name().to_string())
            .collect();
        let stats = MappingStats::from_exercises(&exercises);
        Self {
            exercises,
            unmapped,
            stats,
        }
    }

    pub fn exercises(&self) -> &[MappedExercise] {
        &self.exercises
    }

    /// Original names of exercises that failed to map, in input order.
    pub fn unmapped(&self) -> &[String] {
        &self.unmapped
    }

    pub fn stats(&self) -> MappingStats {
        self.stats
    }

    pub fn into_exercises(self) -> Vec<MappedExercise> {
        self.exercises
    }
}

/// A workout whose exercises have been through the mapper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappedWorkout {
    #[serde(default)]
    pub routine_name: String,
    #[serde(default)]
    pub workout_date: String,
    pub exercises: Vec<MappedExercise>,
}

impl MappedWorkout {
    /// Carry the workout metadata over and attach the annotated exercises.
    pub fn new(workout: &WorkoutRecord, exercises: Vec<MappedExercise>) -> Self {
        Self {
            routine_name: workout.routine_name.clone(),
            workout_date: workout.workout_date.clone(),
            exercises,
        }
    }

    pub fn stats(&self) -> MappingStats {
        MappingStats::from_exercises(&self.exercises)
    }

    pub fn unmapped_names(&self) -> Vec<&str> {
        self.exercises
            .iter()
            .filter(|e| !e.is_mapped())
            .map(MappedExercise::exercise_name)
            .collect()
    }
}
