use std::path::Path;

use anyhow::{Context, Result};
use hevy_model::{ParseOptions, UnmappedPolicy};
use hevy_output::RequestHeaders;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::info;

use hevy_cli::pipeline::{
    PipelineConfig, PlainTextFile, load_lookup_table, map_stage, parse_stage, run_pipeline,
};
use hevy_cli::summary::{lookup_listing, print_mapping_summary};

use crate::cli::{InputArgs, MapArgs, PayloadArgs, RequestArgs};

pub fn run_exercises(table_path: Option<&Path>) -> Result<()> {
    let table = load_lookup_table(table_path)?;
    println!("{}", lookup_listing(&table));
    Ok(())
}

pub fn run_parse(args: &InputArgs) -> Result<()> {
    let source = PlainTextFile::new(&args.input);
    let workout = parse_stage(&source, &parse_options(args))?;
    print_json(&workout)
}

pub fn run_map(args: &MapArgs, table_path: Option<&Path>) -> Result<()> {
    let table = load_lookup_table(table_path)?;
    let source = PlainTextFile::new(&args.input.input);
    let workout = parse_stage(&source, &parse_options(&args.input))?;
    let (report, _) = map_stage(&workout, &table);
    if args.json {
        print_json(&report)
    } else {
        print_mapping_summary(&report);
        Ok(())
    }
}

pub fn run_payload(args: &PayloadArgs, table_path: Option<&Path>) -> Result<()> {
    let output = run_pipeline(
        &PlainTextFile::new(&args.input.input),
        &pipeline_config(args, table_path)?,
    )?;
    print_json(&output.payload)
}

pub fn run_request(args: &RequestArgs, table_path: Option<&Path>) -> Result<()> {
    // Credentials are checked before any pipeline work.
    let headers = RequestHeaders::new(args.api_key.as_deref()).context("prepare request headers")?;
    let output = run_pipeline(
        &PlainTextFile::new(&args.payload.input.input),
        &pipeline_config(&args.payload, table_path)?,
    )?;
    info!(
        exercises = output.payload.exercises.len(),
        "request ready for transport"
    );
    let header_map: Map<String, Value> = headers
        .redacted_pairs()
        .into_iter()
        .map(|(name, value)| (name.to_string(), Value::String(value.to_string())))
        .collect();
    let preview = serde_json::json!({
        "headers": header_map,
        "body": output.payload,
    });
    print_json(&preview)
}

fn parse_options(args: &InputArgs) -> ParseOptions {
    let mut options = ParseOptions::new();
    if let Some(name) = &args.default_name {
        options = options.with_default_routine_name(name.clone());
    }
    if let Some(date) = args.date {
        options = options.with_today(date);
    }
    options
}

fn pipeline_config(args: &PayloadArgs, table_path: Option<&Path>) -> Result<PipelineConfig> {
    Ok(PipelineConfig {
        parse: parse_options(&args.input),
        table: load_lookup_table(table_path)?,
        unmapped_policy: if args.strict {
            UnmappedPolicy::Reject
        } else {
            UnmappedPolicy::Allow
        },
    })
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("serialize output")?;
    println!("{json}");
    Ok(())
}
