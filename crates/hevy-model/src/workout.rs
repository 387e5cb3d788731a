//! Records produced by the workout parser.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One performed set. `set_index` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SetRecord {
    pub set_index: u32,
    pub reps: u32,
    pub weight_kg: f64,
}

impl SetRecord {
    pub fn new(set_index: u32, reps: u32, weight_kg: f64) -> Self {
        Self {
            set_index,
            reps,
            weight_kg,
        }
    }
}

/// An exercise as written in the source text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseRecord {
    /// Name exactly as it appeared after the `Exercise:` marker (trimmed).
    pub exercise_name: String,
    /// Sets in source order.
    pub sets: Vec<SetRecord>,
    #[serde(default)]
    pub notes: String,
}

impl ExerciseRecord {
    pub fn new(exercise_name: impl Into<String>, sets: Vec<SetRecord>) -> Self {
        Self {
            exercise_name: exercise_name.into(),
            sets,
            notes: String::new(),
        }
    }

    /// Set the free-text notes for this exercise.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }
}

/// A parsed workout, before name resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutRecord {
    pub routine_name: String,
    /// Usually `YYYY-MM-DD`; free text from the source is kept verbatim.
    pub workout_date: String,
    pub exercises: Vec<ExerciseRecord>,
}

impl WorkoutRecord {
    /// Returns the workout date when it is a valid ISO-8601 calendar date.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.workout_date.trim(), "%Y-%m-%d").ok()
    }

    /// Total number of sets across all exercises.
    pub fn set_count(&self) -> usize {
        self.exercises.iter().map(|e| e.sets.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workout(date: &str) -> WorkoutRecord {
        WorkoutRecord {
            routine_name: "Push Day".to_string(),
            workout_date: date.to_string(),
            exercises: vec![
                ExerciseRecord::new("Bench Press", vec![SetRecord::new(1, 8, 60.0)]),
                ExerciseRecord::new(
                    "Dips",
                    vec![SetRecord::new(1, 12, 0.0), SetRecord::new(2, 10, 0.0)],
                ),
            ],
        }
    }

    #[test]
    fn calendar_date_accepts_iso_dates() {
        let date = workout("2024-01-15").calendar_date();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 15));
    }

    #[test]
    fn calendar_date_rejects_free_text() {
        assert_eq!(workout("last tuesday").calendar_date(), None);
        assert_eq!(workout("2024-13-40").calendar_date(), None);
    }

    #[test]
    fn set_count_sums_exercises() {
        assert_eq!(workout("2024-01-15").set_count(), 3);
    }

    #[test]
    fn notes_default_when_missing_from_json() {
        let json = r#"{"exercise_name":"Plank","sets":[]}"#;
        let record: ExerciseRecord = serde_json::from_str(json).expect("deserialize exercise");
        assert_eq!(record.notes, "");
    }
}
