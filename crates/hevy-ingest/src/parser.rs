//! Workout-level parsing: metadata lookup and exercise segmentation.

use std::sync::LazyLock;

use hevy_model::{ExerciseRecord, ParseOptions, WorkoutRecord};
use regex::Regex;
use tracing::{debug, info, info_span};

use crate::block::parse_exercise_block;
use crate::error::{ParseError, Result};
use crate::source::TextSource;

static WORKOUT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^[ \t]*workout:(.*)$").expect("valid workout regex")
});
static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?im)^[ \t]*date:(.*)$").expect("valid date regex"));
static EXERCISE_MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^[ \t]*exercise:").expect("valid exercise marker regex")
});

/// Parses decoded workout text into a [`WorkoutRecord`].
#[derive(Debug, Clone, Default)]
pub struct WorkoutParser {
    options: ParseOptions,
}

impl WorkoutParser {
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parse workout text.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::EmptyInput`] when `text` is empty or blank.
    pub fn parse(&self, text: &str) -> Result<WorkoutRecord> {
        if text.trim().is_empty() {
            return Err(ParseError::EmptyInput);
        }
        let span = info_span!("parse_workout", bytes = text.len());
        let _guard = span.enter();

        let routine_name = first_value(&WORKOUT_RE, text).unwrap_or_else(|| {
            debug!(
                default = %self.options.default_routine_name,
                "no Workout line, using default routine name"
            );
            self.options.default_routine_name.clone()
        });
        let workout_date = first_value(&DATE_RE, text).unwrap_or_else(|| {
            let today = self.options.default_date();
            debug!(default = %today, "no Date line, using fallback date");
            today
        });
        let exercises = parse_exercises(text);

        info!(
            routine = %routine_name,
            date = %workout_date,
            exercises = exercises.len(),
            "parsed workout"
        );
        Ok(WorkoutRecord {
            routine_name,
            workout_date,
            exercises,
        })
    }

    /// Parse text that may be missing entirely.
    pub fn parse_optional(&self, text: Option<&str>) -> Result<WorkoutRecord> {
        self.parse(text.ok_or(ParseError::MissingInput)?)
    }

    /// Parse raw bytes, which must be UTF-8 text.
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<WorkoutRecord> {
        self.parse(std::str::from_utf8(bytes)?)
    }

    /// Read text from a decoder once and parse it.
    pub fn parse_source<S: TextSource + ?Sized>(&self, source: &S) -> Result<WorkoutRecord> {
        let text = source.read_text()?;
        self.parse(&text)
    }
}

/// Parse workout text with default options.
pub fn parse_workout(text: &str) -> Result<WorkoutRecord> {
    WorkoutParser::default().parse(text)
}

/// Split text on `Exercise:` markers and parse every non-blank block.
///
/// Anything before the first marker is metadata and is ignored.
pub fn parse_exercises(text: &str) -> Vec<ExerciseRecord> {
    let mut exercises = Vec::new();
    for (position, block) in EXERCISE_MARKER_RE.split(text).skip(1).enumerate() {
        match parse_exercise_block(block) {
            Some(exercise) => exercises.push(exercise),
            None => debug!(block = position, "skipping blank exercise block"),
        }
    }
    exercises
}

/// First line matching `re` with a non-empty remainder, trimmed.
fn first_value(re: &Regex, text: &str) -> Option<String> {
    re.captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .find(|value| !value.is_empty())
        .map(str::to_string)
}
