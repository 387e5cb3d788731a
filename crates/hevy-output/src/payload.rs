//! Hevy routine payload assembly.

use hevy_model::{DEFAULT_ROUTINE_NAME, MappedExercise, MappedWorkout, SetRecord, UnmappedPolicy};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use crate::error::ValidationError;

/// Kind of set in the Hevy schema. The parser only produces working sets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SetType {
    #[default]
    Normal,
}

/// One set in the outbound payload.
///
/// `distance_meters`, `duration_seconds` and `rpe` are always `null` for
/// sets parsed from a log; they are present because the service schema
/// requires the keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayloadSet {
    #[serde(rename = "type")]
    pub set_type: SetType,
    pub weight_kg: f64,
    pub reps: u32,
    pub distance_meters: Option<f64>,
    pub duration_seconds: Option<u32>,
    pub rpe: Option<f64>,
}

impl From<&SetRecord> for PayloadSet {
    fn from(set: &SetRecord) -> Self {
        Self {
            set_type: SetType::Normal,
            weight_kg: set.weight_kg,
            reps: set.reps,
            distance_meters: None,
            duration_seconds: None,
            rpe: None,
        }
    }
}

/// One exercise in the outbound payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayloadExercise {
    /// 0-based position in the workout.
    pub index: usize,
    /// `null` when the exercise could not be mapped.
    pub exercise_template_id: Option<String>,
    pub title: String,
    pub notes: String,
    pub sets: Vec<PayloadSet>,
}

impl PayloadExercise {
    fn new(index: usize, exercise: &MappedExercise) -> Self {
        let source = exercise.exercise();
        Self {
            index,
            exercise_template_id: exercise.canonical_id().map(str::to_string),
            title: exercise.canonical_title().to_string(),
            notes: source.notes.clone(),
            sets: source.sets.iter().map(PayloadSet::from).collect(),
        }
    }
}

/// Request body for creating a routine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payload {
    pub title: String,
    pub exercises: Vec<PayloadExercise>,
}

/// Build the request body for a mapped workout.
///
/// Unmapped exercises are kept with a `null` template id; use
/// [`check_unmapped`] first to reject them locally.
pub fn build_payload(workout: &MappedWorkout) -> Payload {
    let title = if workout.routine_name.trim().is_empty() {
        debug!("empty routine name, using default title");
        DEFAULT_ROUTINE_NAME.to_string()
    } else {
        workout.routine_name.clone()
    };
    let exercises: Vec<PayloadExercise> = workout
        .exercises
        .iter()
        .enumerate()
        .map(|(index, exercise)| PayloadExercise::new(index, exercise))
        .collect();
    info!(
        title = %title,
        exercises = exercises.len(),
        sets = exercises.iter().map(|e| e.sets.len()).sum::<usize>(),
        "built payload"
    );
    Payload { title, exercises }
}

/// Build the request body from an untyped mapped-workout value.
///
/// # Errors
///
/// - [`ValidationError::MissingWorkout`] when `value` is not an object
/// - [`ValidationError::MissingExercises`] when it has no `exercises` array
/// - [`ValidationError::InvalidWorkout`] when the object does not deserialize
pub fn build_payload_from_json(value: &Value) -> Result<Payload, ValidationError> {
    let object = value.as_object().ok_or(ValidationError::MissingWorkout)?;
    if !object.get("exercises").is_some_and(Value::is_array) {
        return Err(ValidationError::MissingExercises);
    }
    let workout: MappedWorkout = serde_json::from_value(value.clone())?;
    Ok(build_payload(&workout))
}

/// Apply `policy` to the unmapped exercises of `workout`.
///
/// # Errors
///
/// Returns [`ValidationError::UnmappedExercises`] under
/// [`UnmappedPolicy::Reject`] when any exercise lacks a template id.
pub fn check_unmapped(workout: &MappedWorkout, policy: UnmappedPolicy) -> Result<(), ValidationError> {
    let unmapped = workout.unmapped_names();
    match policy {
        UnmappedPolicy::Reject if !unmapped.is_empty() => Err(ValidationError::UnmappedExercises(
            unmapped.into_iter().map(str::to_string).collect(),
        )),
        _ => Ok(()),
    }
}
