//! Mapping engine implementation.

use hevy_model::{
    Confidence, ExerciseRecord, MappedExercise, MappedWorkout, MappingReport, MappingResult,
    WorkoutRecord,
};
use tracing::{debug, info, warn};

use crate::table::{LookupEntry, LookupTable};
use crate::utils::normalize_name;

/// Resolves exercise names against an injected [`LookupTable`].
#[derive(Debug, Clone, Default)]
pub struct ExerciseMapper {
    table: LookupTable,
}

impl ExerciseMapper {
    pub fn new(table: LookupTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &LookupTable {
        &self.table
    }

    /// Resolve one exercise name. Never fails.
    ///
    /// An exact key match always wins over substring matches. Otherwise the
    /// first entry in table order whose key contains, or is contained in,
    /// the normalized name is returned as `partial`. This is first-hit, not
    /// best-hit: with the built-in table "incline bench press machine"
    /// resolves through "bench press" because that entry comes first.
    pub fn map_exercise(&self, name: &str) -> MappingResult {
        let normalized = normalize_name(name);
        if normalized.is_empty() {
            debug!(name, "blank exercise name is unmapped");
            return MappingResult::unmapped(name);
        }

        if let Some(entry) = self.table.get(&normalized) {
            debug!(name, id = %entry.id, "exact match");
            return MappingResult::exact(&entry.id, &entry.title);
        }

        if let Some(entry) = self.first_partial(&normalized) {
            debug!(name, key = %entry.key, id = %entry.id, "partial match");
            return MappingResult::partial(&entry.id, &entry.title);
        }

        debug!(name, "no lookup entry matched");
        MappingResult::unmapped(name)
    }

    fn first_partial(&self, normalized: &str) -> Option<&LookupEntry> {
        self.table
            .iter()
            .find(|entry| normalized.contains(&entry.key) || entry.key.contains(normalized))
    }

    /// Map a batch of exercises, preserving order and original fields.
    pub fn map_workout_exercises(&self, exercises: &[ExerciseRecord]) -> MappingReport {
        let mapped: Vec<MappedExercise> = exercises
            .iter()
            .map(|exercise| {
                let mapping = self.map_exercise(&exercise.exercise_name);
                if mapping.confidence() == Confidence::Unmapped {
                    warn!(exercise = %exercise.exercise_name, "exercise could not be mapped");
                }
                MappedExercise::new(exercise.clone(), mapping)
            })
            .collect();
        let report = MappingReport::from_exercises(mapped);
        let stats = report.stats();
        info!(
            total = stats.total,
            mapped = stats.mapped,
            unmapped = stats.unmapped,
            "mapped exercises"
        );
        report
    }

    /// Map every exercise of a workout into a new [`MappedWorkout`].
    pub fn map_workout(&self, workout: &WorkoutRecord) -> MappedWorkout {
        let report = self.map_workout_exercises(&workout.exercises);
        MappedWorkout::new(workout, report.into_exercises())
    }
}
