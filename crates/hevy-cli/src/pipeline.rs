//! Pipeline stages for one import run.
//!
//! The stages are kept as separate functions so each can be tested in
//! isolation; [`run_pipeline`] chains them. Only [`PlainTextFile`] and
//! [`load_lookup_table`] touch the filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use hevy_ingest::{ParseError, TextSource, WorkoutParser};
use hevy_map::{ExerciseMapper, LookupTable};
use hevy_model::{
    MappedWorkout, MappingReport, ParseOptions, UnmappedPolicy, WorkoutRecord,
};
use hevy_output::{Payload, build_payload, check_unmapped};
use tracing::{debug, info_span};

/// An already-decoded workout log on disk.
#[derive(Debug, Clone)]
pub struct PlainTextFile {
    path: PathBuf,
}

impl PlainTextFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TextSource for PlainTextFile {
    fn read_text(&self) -> hevy_ingest::Result<String> {
        let bytes = fs::read(&self.path).map_err(|error| {
            ParseError::decode(format!("{}: {error}", self.path.display()))
        })?;
        let text = std::str::from_utf8(&bytes)?;
        Ok(text.to_string())
    }
}

/// Settings for one pipeline run.
#[derive(Debug, Clone, Default)]
pub struct PipelineConfig {
    pub parse: ParseOptions,
    pub table: LookupTable,
    pub unmapped_policy: UnmappedPolicy,
}

/// Everything one run produces, stage by stage.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub workout: WorkoutRecord,
    pub report: MappingReport,
    pub mapped: MappedWorkout,
    pub payload: Payload,
}

/// Load the lookup table from `path`, or the built-in table when `None`.
pub fn load_lookup_table(path: Option<&Path>) -> Result<LookupTable> {
    let Some(path) = path else {
        return Ok(LookupTable::builtin());
    };
    let json = fs::read_to_string(path)
        .with_context(|| format!("read lookup table {}", path.display()))?;
    let table = LookupTable::from_json(&json)
        .with_context(|| format!("load lookup table {}", path.display()))?;
    debug!(path = %path.display(), entries = table.len(), "loaded lookup table");
    Ok(table)
}

/// Stage 1: text to workout.
pub fn parse_stage<S: TextSource + ?Sized>(
    source: &S,
    options: &ParseOptions,
) -> Result<WorkoutRecord> {
    let span = info_span!("parse");
    let _guard = span.enter();
    WorkoutParser::new(options.clone())
        .parse_source(source)
        .context("parse workout text")
}

/// Stage 2: resolve exercise names.
pub fn map_stage(workout: &WorkoutRecord, table: &LookupTable) -> (MappingReport, MappedWorkout) {
    let span = info_span!("map", exercises = workout.exercises.len());
    let _guard = span.enter();
    let mapper = ExerciseMapper::new(table.clone());
    let report = mapper.map_workout_exercises(&workout.exercises);
    let mapped = MappedWorkout::new(workout, report.exercises().to_vec());
    (report, mapped)
}

/// Stage 3: policy check and payload assembly.
pub fn payload_stage(mapped: &MappedWorkout, policy: UnmappedPolicy) -> Result<Payload> {
    let span = info_span!("payload");
    let _guard = span.enter();
    check_unmapped(mapped, policy).context("validate mapped workout")?;
    Ok(build_payload(mapped))
}

/// Run all stages over one source.
pub fn run_pipeline<S: TextSource + ?Sized>(
    source: &S,
    config: &PipelineConfig,
) -> Result<PipelineOutput> {
    let workout = parse_stage(source, &config.parse)?;
    let (report, mapped) = map_stage(&workout, &config.table);
    let payload = payload_stage(&mapped, config.unmapped_policy)?;
    Ok(PipelineOutput {
        workout,
        report,
        mapped,
        payload,
    })
}
