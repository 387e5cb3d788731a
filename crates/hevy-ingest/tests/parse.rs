//! Integration tests for workout text parsing.

use chrono::NaiveDate;
use hevy_ingest::{ParseError, TextSource, WorkoutParser, parse_workout};
use hevy_model::{ParseOptions, SetRecord};
use proptest::prelude::*;

const FULL_BODY: &str = "\
Workout: Full Body Strength
Date: 2024-01-15

Exercise: Bench Press
Sets: 3
Reps: 8, 8, 8
Weight: 135, 135, 140

Exercise: Squats
Sets: 4
Reps: 10, 10, 10, 8
Weight: 185, 185, 185, 205
";

fn pinned_parser() -> WorkoutParser {
    WorkoutParser::new(
        ParseOptions::new().with_today(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()),
    )
}

struct FailingDecoder;

impl TextSource for FailingDecoder {
    fn read_text(&self) -> hevy_ingest::Result<String> {
        Err(ParseError::decode("corrupt xref table"))
    }
}

#[test]
fn full_body_scenario() {
    let workout = parse_workout(FULL_BODY).expect("parse workout");
    assert_eq!(workout.routine_name, "Full Body Strength");
    assert_eq!(workout.workout_date, "2024-01-15");
    assert_eq!(workout.exercises.len(), 2);

    let bench = &workout.exercises[0];
    assert_eq!(bench.exercise_name, "Bench Press");
    assert_eq!(
        bench.sets,
        vec![
            SetRecord::new(1, 8, 135.0),
            SetRecord::new(2, 8, 135.0),
            SetRecord::new(3, 8, 140.0),
        ]
    );

    let squats = &workout.exercises[1];
    assert_eq!(squats.exercise_name, "Squats");
    assert_eq!(squats.sets.len(), 4);
    assert_eq!(squats.sets[3], SetRecord::new(4, 8, 205.0));
}

#[test]
fn set_array_padding() {
    let text = "Exercise: Bench Press\nSets: 3\nReps: 8,8\nWeight: 135,135,140";
    let workout = parse_workout(text).expect("parse workout");
    let third = workout.exercises[0].sets[2];
    assert_eq!(third.set_index, 3);
    assert_eq!(third.reps, 0);
    assert_eq!(third.weight_kg, 140.0);
}

#[test]
fn missing_metadata_uses_defaults() {
    let workout = pinned_parser()
        .parse("Exercise: Plank\nSets: 1")
        .expect("parse workout");
    assert_eq!(workout.routine_name, "Imported Workout");
    assert_eq!(workout.workout_date, "2024-06-01");
}

#[test]
fn custom_default_routine_name() {
    let parser = WorkoutParser::new(ParseOptions::new().with_default_routine_name("Scanned Log"));
    let workout = parser.parse("Exercise: Plank").expect("parse workout");
    assert_eq!(workout.routine_name, "Scanned Log");
}

#[test]
fn free_text_date_is_preserved() {
    let workout = parse_workout("Workout: A\nDate: Monday after the meet\n").expect("parse workout");
    assert_eq!(workout.workout_date, "Monday after the meet");
    assert_eq!(workout.calendar_date(), None);
}

#[test]
fn text_without_exercises_parses_empty() {
    let workout = parse_workout("Workout: Rest Day\nDate: 2024-01-16").expect("parse workout");
    assert!(workout.exercises.is_empty());
}

#[test]
fn malformed_block_does_not_abort_others() {
    let text = "\
Exercise: Deadlift
Sets: lots
Reps: ???
Exercise: Barbell Row
Sets: 2
Reps: 10, 10
Weight: 60, 60
";
    let workout = parse_workout(text).expect("parse workout");
    assert_eq!(workout.exercises.len(), 2);
    assert!(workout.exercises[0].sets.is_empty());
    assert_eq!(workout.exercises[1].sets.len(), 2);
}

#[test]
fn empty_input_is_rejected() {
    assert!(matches!(parse_workout(""), Err(ParseError::EmptyInput)));
    assert!(matches!(parse_workout(" \n\t"), Err(ParseError::EmptyInput)));
}

#[test]
fn absent_input_is_rejected() {
    let result = WorkoutParser::default().parse_optional(None);
    assert!(matches!(result, Err(ParseError::MissingInput)));
}

#[test]
fn non_utf8_bytes_are_rejected() {
    let result = WorkoutParser::default().parse_bytes(&[0x57, 0xff, 0xfe]);
    assert!(matches!(result, Err(ParseError::NotText(_))));
}

#[test]
fn utf8_bytes_parse() {
    let workout = WorkoutParser::default()
        .parse_bytes(FULL_BODY.as_bytes())
        .expect("parse bytes");
    assert_eq!(workout.exercises.len(), 2);
}

#[test]
fn decoder_failure_surfaces_as_parse_error() {
    let err = WorkoutParser::default()
        .parse_source(&FailingDecoder)
        .expect_err("decoder fails");
    assert!(matches!(err, ParseError::Decode { .. }));
    assert!(err.to_string().contains("corrupt xref table"));
}

#[test]
fn str_source_parses() {
    let workout = WorkoutParser::default()
        .parse_source(FULL_BODY)
        .expect("parse source");
    assert_eq!(workout.routine_name, "Full Body Strength");
}

proptest! {
    #[test]
    fn parsing_is_idempotent(text in "\\PC{0,200}") {
        let parser = pinned_parser();
        let first = parser.parse(&text);
        let second = parser.parse(&text);
        match (first, second) {
            (Ok(a), Ok(b)) => prop_assert_eq!(a, b),
            (Err(_), Err(_)) => {}
            _ => prop_assert!(false, "parse outcome differed between runs"),
        }
    }

    #[test]
    fn set_slots_match_declared_count(
        count in 0u32..20,
        reps in prop::collection::vec(0u32..50, 0..25),
        weights in prop::collection::vec(0u32..300, 0..25),
    ) {
        let reps_line = reps.iter().map(u32::to_string).collect::<Vec<_>>().join(", ");
        let weight_line = weights.iter().map(u32::to_string).collect::<Vec<_>>().join(", ");
        let text = format!(
            "Exercise: Test Lift\nSets: {count}\nReps: {reps_line}\nWeight: {weight_line}\n"
        );
        let workout = parse_workout(&text).expect("parse workout");
        let sets = &workout.exercises[0].sets;
        prop_assert_eq!(sets.len(), count as usize);
        for (idx, set) in sets.iter().enumerate() {
            prop_assert_eq!(set.set_index as usize, idx + 1);
            prop_assert_eq!(set.reps, reps.get(idx).copied().unwrap_or(0));
            prop_assert_eq!(set.weight_kg, f64::from(weights.get(idx).copied().unwrap_or(0)));
        }
    }
}
