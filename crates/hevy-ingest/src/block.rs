//! Parsing of a single `Exercise:` block.

use hevy_model::{ExerciseRecord, SetRecord};
use tracing::{debug, warn};

use crate::numeric::{parse_reals, parse_unsigned, parse_unsigneds};

/// Upper bound on the set count read from a `Sets:` line.
pub const MAX_SET_COUNT: u32 = 100;

const SETS_KEY: &str = "sets:";
const REPS_KEY: &str = "reps:";
const WEIGHT_KEY: &str = "weight:";

/// Parse the text following one `Exercise:` marker.
///
/// The first non-blank line is the exercise name. `Sets:`, `Reps:` and
/// `Weight:` lines may appear in any order and may be missing; when a key
/// repeats, the last line wins. Returns `None` when the block is blank.
pub fn parse_exercise_block(block: &str) -> Option<ExerciseRecord> {
    let mut lines = block.trim().lines();
    let name = lines.next()?.trim();
    if name.is_empty() {
        return None;
    }

    let mut set_count: Option<u32> = None;
    let mut reps: Option<Vec<u32>> = None;
    let mut weights: Option<Vec<f64>> = None;

    for line in lines {
        let line = line.trim();
        if let Some(value) = strip_key(line, SETS_KEY) {
            set_count = Some(parse_unsigned(value).unwrap_or(0));
        } else if let Some(value) = strip_key(line, REPS_KEY) {
            reps = Some(parse_unsigneds(value));
        } else if let Some(value) = strip_key(line, WEIGHT_KEY) {
            weights = Some(parse_reals(value));
        }
    }

    let declared = set_count.unwrap_or_else(|| {
        debug!(exercise = name, "no Sets line, emitting zero sets");
        0
    });
    let count = if declared > MAX_SET_COUNT {
        warn!(
            exercise = name,
            declared,
            max = MAX_SET_COUNT,
            "set count exceeds limit, clamping"
        );
        MAX_SET_COUNT
    } else {
        declared
    };

    let reps = reps.unwrap_or_default();
    let weights = weights.unwrap_or_default();
    if reps.len() != count as usize || weights.len() != count as usize {
        debug!(
            exercise = name,
            sets = count,
            reps = reps.len(),
            weights = weights.len(),
            "set arrays differ in length, padding with zeros"
        );
    }

    Some(ExerciseRecord::new(name, build_sets(count, &reps, &weights)))
}

/// Fill `count` set slots from the reps and weight lists.
///
/// Missing entries become 0; entries beyond `count` are ignored.
fn build_sets(count: u32, reps: &[u32], weights: &[f64]) -> Vec<SetRecord> {
    (0..count as usize)
        .map(|idx| {
            SetRecord::new(
                idx as u32 + 1,
                reps.get(idx).copied().unwrap_or(0),
                weights.get(idx).copied().unwrap_or(0.0),
            )
        })
        .collect()
}

/// Returns the remainder of `line` after a case-insensitive `key` prefix.
fn strip_key<'a>(line: &'a str, key: &str) -> Option<&'a str> {
    let prefix = line.get(..key.len())?;
    if prefix.eq_ignore_ascii_case(key) {
        line.get(key.len()..)
    } else {
        None
    }
}
